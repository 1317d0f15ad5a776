//! A page: element tree, host layout, viewport and the behaviors wired to it.

use std::time::Instant;

use sitedom::element::{find_element, find_element_mut};
use sitedom::{click_target, Element, Event, FlowLayout, Key, Measure, Viewport};

use crate::behavior::{Behavior, EventResult, PageContext};

// =============================================================================
// DispatchOutcome
// =============================================================================

/// Result of dispatching one event to every behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Names of the behaviors that handled the event, in dispatch order.
    pub handled_by: Vec<&'static str>,
    /// True if any behavior prevented the default action.
    pub default_prevented: bool,
}

impl DispatchOutcome {
    pub fn is_handled(&self) -> bool {
        !self.handled_by.is_empty()
    }

    fn record(&mut self, name: &'static str, result: EventResult) {
        if result.is_handled() {
            self.handled_by.push(name);
        }
        if result == EventResult::PreventDefault {
            self.default_prevented = true;
        }
    }
}

// =============================================================================
// Page
// =============================================================================

/// A loaded page.
///
/// Behaviors are registered first, then [`Page::ready`] initializes them
/// (the page's ready signal). Events dispatched before that are dropped.
pub struct Page<M: Measure = FlowLayout> {
    root: Element,
    viewport: Viewport,
    measure: M,
    behaviors: Vec<Box<dyn Behavior>>,
    alerts: Vec<String>,
    ready: bool,
}

impl Page<FlowLayout> {
    /// Create a page laid out by [`FlowLayout`] in a 1024x768 viewport.
    pub fn new(root: Element) -> Self {
        Self::with_measure(root, FlowLayout::new(1024))
    }

    /// Element a click at the viewport coordinates `(x, y)` lands on: the
    /// deepest clickable element there, else the deepest element.
    pub fn target_at(&self, x: i32, y: i32) -> Option<String> {
        let layout = self.measure.layout(&self.root);
        click_target(&layout, &self.root, x, y + self.viewport.scroll_y())
    }

    /// Click whatever lies under the viewport coordinates `(x, y)`.
    /// Returns None if the point is outside the document.
    pub fn click_at(&mut self, x: i32, y: i32) -> Option<DispatchOutcome> {
        let target = self.target_at(x, y)?;
        Some(self.click(target))
    }
}

impl<M: Measure> Page<M> {
    /// Create a page whose geometry comes from `measure`.
    pub fn with_measure(root: Element, mut measure: M) -> Self {
        let viewport = Viewport::new(1024, 768);
        measure.set_viewport_width(viewport.width);
        Self {
            root,
            viewport,
            measure,
            behaviors: Vec::new(),
            alerts: Vec::new(),
            ready: false,
        }
    }

    pub fn viewport_size(mut self, width: u32, height: u32) -> Self {
        self.viewport.resize(width, height);
        self.measure.set_viewport_width(width);
        self
    }

    /// Register a behavior.
    pub fn behavior(mut self, behavior: impl Behavior + 'static) -> Self {
        self.behaviors.push(Box::new(behavior));
        self
    }

    pub fn add_behavior(&mut self, behavior: Box<dyn Behavior>) {
        self.behaviors.push(behavior);
    }

    /// Signal that the page is loaded: initialize every behavior once.
    pub fn ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        log::info!("[page] ready, {} behaviors", self.behaviors.len());

        let mut cx = PageContext {
            root: &mut self.root,
            viewport: &mut self.viewport,
            measure: &self.measure,
            alerts: &mut self.alerts,
            now: Instant::now(),
        };
        for behavior in &mut self.behaviors {
            log::debug!("[page] init {}", behavior.name());
            behavior.init(&mut cx);
        }
        for behavior in &mut self.behaviors {
            behavior.after_layout(&mut cx);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Dispatch an event through every behavior.
    pub fn dispatch(&mut self, event: Event) -> DispatchOutcome {
        if !self.ready {
            log::trace!("[page] dropping {:?} before ready", event);
            return DispatchOutcome::default();
        }
        log::trace!("[page] dispatch {:?}", event);

        // Host actions that happen regardless of listeners
        let now = match &event {
            Event::Frame { now } => {
                self.viewport.tick(*now);
                *now
            }
            Event::Scroll { delta_y } => {
                let height = self.measure.document_height(&self.root);
                self.viewport.scroll_by(*delta_y, height);
                Instant::now()
            }
            Event::Resize { width, height } => {
                self.viewport.resize(*width, *height);
                self.measure.set_viewport_width(*width);
                Instant::now()
            }
            _ => Instant::now(),
        };

        let mut outcome = DispatchOutcome::default();
        let mut cx = PageContext {
            root: &mut self.root,
            viewport: &mut self.viewport,
            measure: &self.measure,
            alerts: &mut self.alerts,
            now,
        };
        for behavior in &mut self.behaviors {
            let result = behavior.handle(&event, &mut cx);
            outcome.record(behavior.name(), result);
        }
        for behavior in &mut self.behaviors {
            behavior.after_layout(&mut cx);
        }
        outcome
    }

    pub fn click(&mut self, target: impl Into<String>) -> DispatchOutcome {
        self.dispatch(Event::click(target))
    }

    pub fn key(&mut self, key: Key) -> DispatchOutcome {
        self.dispatch(Event::key(key))
    }

    pub fn submit(&mut self, form_id: impl Into<String>) -> DispatchOutcome {
        self.dispatch(Event::submit(form_id))
    }

    pub fn scroll_by(&mut self, delta_y: i32) -> DispatchOutcome {
        self.dispatch(Event::Scroll { delta_y })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> DispatchOutcome {
        self.dispatch(Event::Resize { width, height })
    }

    /// Advance animations to `now`.
    pub fn tick(&mut self, now: Instant) -> DispatchOutcome {
        self.dispatch(Event::Frame { now })
    }

    /// Type into a form control. Returns false if `id` is missing or is not a
    /// form control.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match find_element_mut(&mut self.root, id) {
            Some(element) if element.value.is_some() => {
                element.value = Some(value.into());
                true
            }
            _ => false,
        }
    }

    // Accessors

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Alerts shown so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Find a registered behavior by concrete type.
    pub fn behavior_ref<T: Behavior + 'static>(&self) -> Option<&T> {
        self.behaviors
            .iter()
            .find_map(|behavior| behavior.as_any().downcast_ref::<T>())
    }
}
