mod color;
mod edges;
mod enums;
mod style;

pub use color::Color;
pub use edges::Edges;
pub use enums::{Display, Overflow, Size};
pub use style::Style;
