//! Smooth scrolling for in-page fragment links.

use std::any::Any;
use std::time::Duration;

use log::debug;
use sitedom::element::closest;
use sitedom::{Easing, Event, Selector};

use crate::behavior::{Behavior, EventResult, PageContext};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScrollConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            easing: Easing::EaseInOut,
        }
    }
}

impl SmoothScrollConfig {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Replaces the jump to `#fragment` links with an animated scroll that puts
/// the target's top edge at the top of the viewport.
#[derive(Debug, Default)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SmoothScrollConfig {
        &self.config
    }

    /// Start scrolling to the element `fragment`.
    /// Returns false if no such element is laid out.
    pub fn scroll_to(&self, cx: &mut PageContext<'_>, fragment: &str) -> bool {
        let Some(rect) = cx.measure.element_rect(cx.root, fragment) else {
            debug!("[smooth_scroll] no element #{}", fragment);
            return false;
        };
        let document_height = cx.measure.document_height(cx.root);
        cx.viewport.scroll_to_smooth(
            rect.y,
            document_height,
            cx.now,
            self.config.duration,
            self.config.easing,
        );
        true
    }
}

impl Behavior for SmoothScroll {
    fn name(&self) -> &'static str {
        "smooth_scroll"
    }

    fn init(&mut self, _cx: &mut PageContext<'_>) {}

    fn handle(&mut self, event: &Event, cx: &mut PageContext<'_>) -> EventResult {
        let Event::Click { target } = event else {
            return EventResult::Ignored;
        };
        let anchor = Selector::tag("a").and(Selector::attr_prefix("href", "#"));
        let Some(link_id) = closest(cx.root, target, &anchor) else {
            return EventResult::Ignored;
        };
        let fragment = cx
            .element(&link_id)
            .and_then(|link| link.get_attr("href"))
            .and_then(|href| href.strip_prefix('#'))
            .map(str::to_string)
            .unwrap_or_default();

        if !fragment.is_empty() {
            self.scroll_to(cx, &fragment);
        }
        EventResult::PreventDefault
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
