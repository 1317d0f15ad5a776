//! The behavior trait and the context handed to behaviors.

use std::any::Any;
use std::time::Instant;

use sitedom::element::{find_element, find_element_mut};
use sitedom::{Element, Event, Measure, Viewport};

// =============================================================================
// EventResult
// =============================================================================

/// What a behavior did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event was not for this behavior.
    Ignored,
    /// The event was handled.
    Handled,
    /// The event was handled and the host's default action must not run
    /// (navigation, form submission).
    PreventDefault,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

// =============================================================================
// PageContext
// =============================================================================

/// Mutable view of the page given to behaviors for one handler invocation.
pub struct PageContext<'a> {
    pub root: &'a mut Element,
    pub viewport: &'a mut Viewport,
    pub measure: &'a dyn Measure,
    pub alerts: &'a mut Vec<String>,
    /// Time the event is being handled at.
    pub now: Instant,
}

impl PageContext<'_> {
    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element(self.root, id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(self.root, id)
    }

    /// Show a blocking acknowledgment to the user.
    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("[page] alert: {}", message);
        self.alerts.push(message);
    }
}

// =============================================================================
// Behavior
// =============================================================================

/// A piece of page interactivity.
///
/// `init` runs once, after the page signals ready; controls a behavior creates
/// there cannot be interacted with before it returns. `handle` sees every
/// dispatched event, in registration order. `after_layout` runs after `init`
/// and after every dispatch, for behaviors that watch geometry.
pub trait Behavior {
    fn name(&self) -> &'static str;

    fn init(&mut self, cx: &mut PageContext<'_>);

    fn handle(&mut self, event: &Event, cx: &mut PageContext<'_>) -> EventResult;

    fn after_layout(&mut self, _cx: &mut PageContext<'_>) {}

    /// Get as Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}
