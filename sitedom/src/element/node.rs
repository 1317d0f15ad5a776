use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::transitions::Transitions;
use crate::types::{Edges, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,

    // Content
    pub content: Content,
    /// Current value of a form control (`input`, `textarea`).
    pub value: Option<String>,

    // Box model
    pub padding: Edges,
    pub margin: Edges,

    // Visual
    pub style: Style,
    pub transitions: Transitions,

    // Interaction
    pub clickable: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            classes: Vec::new(),
            attributes: HashMap::new(),
            content: Content::None,
            value: None,
            padding: Edges::default(),
            margin: Edges::default(),
            style: Style::default(),
            transitions: Transitions::default(),
            clickable: false,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn body() -> Self {
        Self::new("body")
    }

    pub fn section() -> Self {
        Self::new("section")
    }

    /// A paragraph holding plain text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new("p")
        }
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            content: Content::Text(label.into()),
            clickable: true,
            ..Self::new("a")
        }
        .attr("href", href)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            content: Content::Text(label.into()),
            clickable: true,
            ..Self::new("button")
        }
    }

    pub fn img(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new("img").attr("src", src).attr("alt", alt)
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    /// A single-line text field.
    pub fn input(name: impl Into<String>) -> Self {
        Self {
            value: Some(String::new()),
            ..Self::new("input")
        }
        .attr("name", name)
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self {
            value: Some(String::new()),
            ..Self::new("textarea")
        }
        .attr("name", name)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a `data-*` attribute.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    // Form
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    // Box model
    pub fn height(mut self, height: Size) -> Self {
        self.style.height = height;
        self
    }

    pub fn max_height(mut self, max_height: u32) -> Self {
        self.style.max_height = Some(max_height);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn transitions(mut self, transitions: Transitions) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.push_child(child);
        }
        self
    }

    // Class list

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a class. Returns true if the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    // Attributes

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.get_attr(&format!("data-{key}"))
    }

    // Content

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Replace the content with plain text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children
                .iter()
                .map(Element::text_content)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.style.is_hidden()
    }
}
