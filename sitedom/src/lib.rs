pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod text;
pub mod transitions;
pub mod types;
pub mod viewport;

pub use element::{Content, Element, Selector};
pub use event::{Event, Key, Modifiers};
pub use hit::{click_target, hit_test, hit_test_any};
pub use layout::{FlowLayout, LayoutMetrics, LayoutResult, Measure, Rect};
pub use transitions::{Easing, TransitionConfig, Transitions};
pub use types::*;
pub use viewport::Viewport;
