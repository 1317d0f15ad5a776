//! Page behaviors for a small marketing site, running on a [`sitedom`] page.
//!
//! Every behavior is a [`Behavior`]: it is initialized once when the page
//! signals ready and then reacts synchronously to dispatched events.

pub mod behavior;
pub mod collapsible;
pub mod contact_form;
pub mod error;
pub mod lightbox;
pub mod nav;
pub mod page;
pub mod prelude;
pub mod presets;
pub mod reveal;
pub mod smooth_scroll;
pub mod validation;

pub use behavior::{Behavior, EventResult, PageContext};
pub use error::ConfigError;
pub use page::{DispatchOutcome, Page};
