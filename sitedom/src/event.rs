use std::time::Instant;

/// High-level page events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Click on an element. Handlers see the deepest element under the
    /// pointer and are expected to look up the ancestors they care about.
    Click { target: String },
    /// Key press on the document
    Key { key: Key, modifiers: Modifiers },
    /// Form submission, targeted at the form element
    Submit { target: String },
    /// Viewport scrolled by a delta in pixels
    Scroll { delta_y: i32 },
    /// Viewport resized
    Resize { width: u32, height: u32 },
    /// Animation frame
    Frame { now: Instant },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self::Submit {
            target: target.into(),
        }
    }
}
