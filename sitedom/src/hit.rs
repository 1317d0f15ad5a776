use crate::element::Element;
use crate::layout::LayoutResult;

/// Deepest clickable element under the document point `(x, y)`.
///
/// Elements without a layout box (hidden subtrees) are never hit.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: i32, y: i32) -> Option<String> {
    deepest_at(layout, root, x, y, &|element| element.clickable)
}

/// Deepest element of any kind under the document point `(x, y)`.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: i32, y: i32) -> Option<String> {
    deepest_at(layout, root, x, y, &|_| true)
}

/// Target of a pointer click: the deepest clickable element, or the
/// deepest element when nothing clickable is under the point.
pub fn click_target(layout: &LayoutResult, root: &Element, x: i32, y: i32) -> Option<String> {
    hit_test(layout, root, x, y).or_else(|| hit_test_any(layout, root, x, y))
}

fn deepest_at(
    layout: &LayoutResult,
    element: &Element,
    x: i32,
    y: i32,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    // Later siblings paint over earlier ones
    element
        .child_elements()
        .iter()
        .rev()
        .find_map(|child| deepest_at(layout, child, x, y, accept))
        .or_else(|| accept(element).then(|| element.id.clone()))
}
