use std::collections::HashMap;

use super::{Measure, Rect};
use crate::element::{find_element, Content, Element};
use crate::text::line_count;
use crate::types::Size;

pub type LayoutResult = HashMap<String, Rect>;

/// Text metrics used to turn wrapped text into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Width of one display column.
    pub char_width: u32,
    pub line_height: u32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            char_width: 8,
            line_height: 20,
        }
    }
}

/// Block-flow layout: children stack vertically, widths fill the parent,
/// text wraps by words.
pub fn layout(root: &Element, width: u32, metrics: &LayoutMetrics) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, 0, 0, width, metrics, &mut result);
    result
}

/// Returns the vertical space the element consumes, margins included.
fn layout_element(
    element: &Element,
    x: i32,
    y: i32,
    available: u32,
    metrics: &LayoutMetrics,
    result: &mut LayoutResult,
) -> u32 {
    // Hidden subtrees get no boxes at all
    if element.is_hidden() {
        return 0;
    }

    let margin = &element.margin;
    let x = x + margin.left.max(0);
    let y = y + margin.top.max(0);
    let width = available.saturating_sub(margin.horizontal_total());

    let padding = &element.padding;
    let content_width = width.saturating_sub(padding.horizontal_total());
    let content = layout_content(
        element,
        x + padding.left.max(0),
        y + padding.top.max(0),
        content_width,
        metrics,
        result,
    );

    let height = resolve_height(element, content + padding.vertical_total());
    result.insert(element.id.clone(), Rect::new(x, y, width, height));

    height + margin.vertical_total()
}

fn layout_content(
    element: &Element,
    x: i32,
    y: i32,
    width: u32,
    metrics: &LayoutMetrics,
    result: &mut LayoutResult,
) -> u32 {
    match &element.content {
        Content::None => 0,
        Content::Text(text) => text_height(text, width, metrics),
        Content::Children(children) => {
            let mut offset = 0u32;
            for child in children {
                offset += layout_element(child, x, y + offset as i32, width, metrics, result);
            }
            offset
        }
    }
}

fn text_height(text: &str, width: u32, metrics: &LayoutMetrics) -> u32 {
    let columns = (width / metrics.char_width.max(1)) as usize;
    line_count(text, columns) as u32 * metrics.line_height
}

fn resolve_height(element: &Element, natural: u32) -> u32 {
    let height = match element.style.height {
        Size::Auto => natural,
        Size::Px(px) => px,
    };
    match element.style.max_height {
        Some(max) => height.min(max),
        None => height,
    }
}

/// Reference [`Measure`] host backed by [`layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowLayout {
    pub width: u32,
    pub metrics: LayoutMetrics,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl FlowLayout {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            metrics: LayoutMetrics::default(),
        }
    }

    pub fn metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn layout(&self, root: &Element) -> LayoutResult {
        layout(root, self.width, &self.metrics)
    }
}

impl Measure for FlowLayout {
    fn element_rect(&self, root: &Element, id: &str) -> Option<Rect> {
        self.layout(root).get(id).copied()
    }

    fn natural_height(&self, root: &Element, id: &str) -> u32 {
        let Some(rect) = self.element_rect(root, id) else {
            return 0;
        };
        let Some(element) = find_element(root, id) else {
            return 0;
        };

        // Lay the content out again without the element's own constraints
        let padding = &element.padding;
        let content_width = rect.width.saturating_sub(padding.horizontal_total());
        let mut scratch = LayoutResult::new();
        let content = layout_content(element, 0, 0, content_width, &self.metrics, &mut scratch);
        content + padding.vertical_total()
    }

    fn set_viewport_width(&mut self, width: u32) {
        self.width = width;
    }
}
