use super::Rect;
use crate::element::Element;

/// Layout queries a page host must answer.
///
/// Behaviors never compute geometry themselves; they ask the host. A host
/// reports 0 / `None` for elements that are detached or not rendered, which
/// callers treat as "nothing to measure".
pub trait Measure {
    /// Layout box of `id` in document coordinates.
    fn element_rect(&self, root: &Element, id: &str) -> Option<Rect>;

    /// Extent of the content of `id` with its own `height` and `max_height`
    /// ignored (the unconstrained, scroll height).
    fn natural_height(&self, root: &Element, id: &str) -> u32;

    /// Rendered height of `id` with every constraint applied.
    fn rendered_height(&self, root: &Element, id: &str) -> u32 {
        self.element_rect(root, id).map_or(0, |rect| rect.height)
    }

    /// Height of the whole document.
    fn document_height(&self, root: &Element) -> u32 {
        self.rendered_height(root, &root.id)
    }

    /// Called when the viewport width changes.
    fn set_viewport_width(&mut self, _width: u32) {}
}
