mod content;
mod node;
mod selector;

pub use content::Content;
pub use node::Element;
pub use selector::Selector;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs of every element matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &Selector) -> Vec<String> {
    let mut found = Vec::new();
    collect_matching(root, selector, &mut found);
    found
}

/// ID of the first element matching `selector`, in document order.
pub fn query(root: &Element, selector: &Selector) -> Option<String> {
    if selector.matches(root) {
        return Some(root.id.clone());
    }
    root.child_elements()
        .iter()
        .find_map(|child| query(child, selector))
}

/// Like [`query_all`], restricted to the descendants of `scope_id`.
pub fn query_all_within(root: &Element, scope_id: &str, selector: &Selector) -> Vec<String> {
    let Some(scope) = find_element(root, scope_id) else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for child in scope.child_elements() {
        collect_matching(child, selector, &mut found);
    }
    found
}

/// Like [`query`], restricted to the descendants of `scope_id`.
pub fn query_within(root: &Element, scope_id: &str, selector: &Selector) -> Option<String> {
    let scope = find_element(root, scope_id)?;
    scope
        .child_elements()
        .iter()
        .find_map(|child| query(child, selector))
}

fn collect_matching(element: &Element, selector: &Selector, found: &mut Vec<String>) {
    if selector.matches(element) {
        found.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_matching(child, selector, found);
    }
}

/// IDs of the ancestors of `id`, outermost first. `None` if `id` is not in
/// the tree.
pub fn ancestors(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if build_path(root, id, &mut path) {
        path.pop();
        Some(path)
    } else {
        None
    }
}

fn build_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == id {
        return true;
    }
    for child in element.child_elements() {
        if build_path(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

pub fn parent_id(root: &Element, id: &str) -> Option<String> {
    ancestors(root, id)?.pop()
}

/// Nearest element matching `selector`, starting at `id` itself and walking
/// up through its ancestors.
pub fn closest(root: &Element, id: &str, selector: &Selector) -> Option<String> {
    let element = find_element(root, id)?;
    if selector.matches(element) {
        return Some(element.id.clone());
    }
    let path = ancestors(root, id)?;
    path.into_iter().rev().find(|ancestor_id| {
        find_element(root, ancestor_id).is_some_and(|ancestor| selector.matches(ancestor))
    })
}

/// True if `id` is `ancestor_id` or one of its descendants.
pub fn is_within(root: &Element, id: &str, ancestor_id: &str) -> bool {
    find_element(root, ancestor_id).is_some_and(|ancestor| find_element(ancestor, id).is_some())
}

/// Append `child` to the element `parent_id`. Returns false if the parent is
/// missing.
pub fn append_child(root: &mut Element, parent_id: &str, child: Element) -> bool {
    match find_element_mut(root, parent_id) {
        Some(parent) => {
            parent.push_child(child);
            true
        }
        None => false,
    }
}

/// Insert `element` as the next sibling of `sibling_id`. Returns false if the
/// sibling is missing or is the root.
pub fn insert_after(root: &mut Element, sibling_id: &str, element: Element) -> bool {
    let Some(parent_id) = parent_id(root, sibling_id) else {
        return false;
    };
    let Some(parent) = find_element_mut(root, &parent_id) else {
        return false;
    };
    let Content::Children(children) = &mut parent.content else {
        return false;
    };
    match children.iter().position(|c| c.id == sibling_id) {
        Some(index) => {
            children.insert(index + 1, element);
            true
        }
        None => false,
    }
}

/// Detach the element `id` from the tree and return it. The root cannot be
/// removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    let parent_id = parent_id(root, id)?;
    let parent = find_element_mut(root, &parent_id)?;
    let Content::Children(children) = &mut parent.content else {
        return None;
    };
    let index = children.iter().position(|c| c.id == id)?;
    Some(children.remove(index))
}

/// One-based position of `id` among its parent's children (`:nth-child`).
pub fn sibling_position(root: &Element, id: &str) -> Option<usize> {
    let parent_id = parent_id(root, id)?;
    let parent = find_element(root, &parent_id)?;
    parent
        .child_elements()
        .iter()
        .position(|c| c.id == id)
        .map(|index| index + 1)
}
