/// Height of a box. `Auto` lets the content decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    #[default]
    Auto,
    Px(u32),
}

impl Size {
    pub fn is_auto(&self) -> bool {
        matches!(self, Size::Auto)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    /// Removed from layout entirely (`display: none`).
    None,
}
