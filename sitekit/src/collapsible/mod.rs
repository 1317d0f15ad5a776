//! Collapsible text blocks with optional sibling height equalization.
//!
//! Blocks taller than a fixed threshold are clipped to it and get a toggle
//! control. In the grouped variant the cards holding the blocks are then
//! given one common height, measured after clipping.

mod config;
mod controller;

pub use config::{CollapsibleConfig, ControlPlacement, GroupConfig};
pub use controller::{CollapsibleBlock, CollapsibleController};
