//! Prelude module for convenient imports.
//!
//! ```ignore
//! use sitekit::prelude::*;
//! ```

// Runtime
pub use crate::behavior::{Behavior, EventResult, PageContext};
pub use crate::error::ConfigError;
pub use crate::page::{DispatchOutcome, Page};
pub use crate::presets::{home_page, property_page};

// Behaviors
pub use crate::collapsible::{
    CollapsibleBlock, CollapsibleConfig, CollapsibleController, ControlPlacement, GroupConfig,
};
pub use crate::contact_form::{ContactForm, ContactFormConfig, FieldSpec};
pub use crate::lightbox::{GalleryImage, Lightbox, LightboxConfig};
pub use crate::nav::{NavConfig, NavMenu};
pub use crate::reveal::{RevealConfig, RevealObserver, RevealStyle, Stagger};
pub use crate::smooth_scroll::{SmoothScroll, SmoothScrollConfig};
pub use crate::validation::{FieldError, ValidationResult, Validator};

// Re-export the page model
pub use sitedom::{Element, Event, Key, Selector};
