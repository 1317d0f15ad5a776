mod flow;
mod measure;
mod rect;

pub use flow::{layout, FlowLayout, LayoutMetrics, LayoutResult};
pub use measure::Measure;
pub use rect::Rect;
