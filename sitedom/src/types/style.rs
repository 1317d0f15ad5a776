use super::{Color, Display, Overflow, Size};

/// Inline style of an element. Only the properties the page behaviors
/// read or write are modelled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub height: Size,
    pub max_height: Option<u32>,
    pub overflow: Overflow,
    pub display: Display,
    pub color: Option<Color>,
    pub border_color: Option<Color>,
    pub opacity: Option<f32>,
    pub translate_y: Option<i32>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn max_height(mut self, max_height: u32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn translate_y(mut self, offset: i32) -> Self {
        self.translate_y = Some(offset);
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Display::None
    }
}
