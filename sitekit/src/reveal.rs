//! Scroll-triggered reveal: elements fade in the first time they scroll into
//! view.

use std::any::Any;
use std::collections::HashSet;
use std::time::Duration;

use log::debug;
use sitedom::element::{query_all, sibling_position};
use sitedom::{Easing, Edges, Event, Rect, Selector, Transitions};

use crate::behavior::{Behavior, EventResult, PageContext};
use crate::error::{ConfigError, require_class};

/// Style applied before an element is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// Downward offset of a hidden element, in pixels.
    pub offset_y: i32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self {
            offset_y: 30,
            duration: Duration::from_millis(600),
            easing: Easing::EaseInOut,
        }
    }
}

/// Delay the reveal of the first few elements with `class` by their
/// position among their siblings.
#[derive(Debug, Clone, PartialEq)]
pub struct Stagger {
    pub class: String,
    /// Delay per sibling position.
    pub step: Duration,
    /// Positions past this one get no delay.
    pub max_position: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    /// Elements to observe.
    pub selector: Selector,
    /// Fraction of an element that must be visible, `0.0..=1.0`.
    pub threshold: f32,
    /// Grows (or, negative, shrinks) the viewport before intersecting.
    pub root_margin: Edges,
    /// Class added on reveal.
    pub revealed_class: String,
    /// Pre-style observed elements as hidden (None = leave them alone).
    pub hidden_style: Option<RevealStyle>,
    pub stagger: Option<Stagger>,
}

impl RevealConfig {
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            threshold: 0.1,
            root_margin: Edges::default(),
            revealed_class: "animate-in".to_string(),
            hidden_style: None,
            stagger: None,
        }
    }

    /// Home page sections, triggered 100px before the viewport bottom.
    pub fn home_page() -> Self {
        Self::new(Selector::any_class([
            "section-header",
            "service-card",
            "reference-card",
            "certificate-item",
            "about-preview-content",
            "content-section",
            "properties-placeholder",
            "cta-content",
            "property-card",
            "animate-on-scroll",
        ]))
        .root_margin(Edges::bottom(-100))
    }

    /// Property detail page: pre-hidden items triggered 50px before the
    /// viewport bottom, the first six gallery items staggered.
    pub fn property_page() -> Self {
        Self::new(Selector::any_class(["gallery-item", "detail-item", "content-section"]))
            .root_margin(Edges::bottom(-50))
            .hidden_style(RevealStyle::default())
            .stagger(Stagger {
                class: "gallery-item".to_string(),
                step: Duration::from_millis(100),
                max_position: 6,
            })
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn root_margin(mut self, margin: Edges) -> Self {
        self.root_margin = margin;
        self
    }

    pub fn revealed_class(mut self, class: impl Into<String>) -> Self {
        self.revealed_class = class.into();
        self
    }

    pub fn hidden_style(mut self, style: RevealStyle) -> Self {
        self.hidden_style = Some(style);
        self
    }

    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidRevealThreshold(self.threshold));
        }
        require_class(&self.revealed_class, "revealed")
    }
}

/// Fraction of `target` inside `root`. An empty target counts as fully
/// visible when its origin lies inside `root`.
pub fn intersection_ratio(target: Rect, root: Rect) -> f32 {
    if target.is_empty() {
        let inside = target.x >= root.x
            && target.x <= root.right()
            && target.y >= root.y
            && target.y <= root.bottom();
        return if inside { 1.0 } else { 0.0 };
    }
    match target.intersection(&root) {
        Some(overlap) => overlap.area() as f32 / target.area() as f32,
        None => 0.0,
    }
}

/// Watches elements and reveals each one once, the first time enough of it
/// is inside the (margin-adjusted) viewport.
#[derive(Debug)]
pub struct RevealObserver {
    config: RevealConfig,
    /// Still waiting to be revealed, in document order.
    observed: Vec<String>,
    revealed: HashSet<String>,
}

impl RevealObserver {
    pub fn new(config: RevealConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            observed: Vec::new(),
            revealed: HashSet::new(),
        })
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Elements not revealed yet.
    pub fn observed(&self) -> &[String] {
        &self.observed
    }

    fn reveal(&mut self, cx: &mut PageContext<'_>, id: &str) {
        let class = self.config.revealed_class.as_str();
        if let Some(element) = cx.element_mut(id) {
            element.add_class(class);
            element.style.opacity = Some(1.0);
            element.style.translate_y = Some(0);
        }
        debug!("[reveal] {}", id);
        self.revealed.insert(id.to_string());
    }
}

impl Behavior for RevealObserver {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn init(&mut self, cx: &mut PageContext<'_>) {
        self.observed = query_all(cx.root, &self.config.selector);
        debug!("[reveal] observing {} elements", self.observed.len());

        let Some(style) = self.config.hidden_style else {
            return;
        };
        for id in &self.observed {
            let delay = self.config.stagger.as_ref().and_then(|stagger| {
                let element = cx.element(id)?;
                if !element.has_class(&stagger.class) {
                    return None;
                }
                let position = sibling_position(cx.root, id)?;
                (position <= stagger.max_position).then_some(stagger.step * position as u32)
            });

            if let Some(element) = cx.element_mut(id) {
                element.style.opacity = Some(0.0);
                element.style.translate_y = Some(style.offset_y);
                let mut transitions = Transitions::new()
                    .opacity(style.duration, style.easing)
                    .transform(style.duration, style.easing);
                if let Some(delay) = delay {
                    transitions = transitions.delay(delay);
                }
                element.transitions = transitions;
            }
        }
    }

    fn handle(&mut self, _event: &Event, _cx: &mut PageContext<'_>) -> EventResult {
        EventResult::Ignored
    }

    fn after_layout(&mut self, cx: &mut PageContext<'_>) {
        if self.observed.is_empty() {
            return;
        }
        let root = cx.viewport.visible_rect().expand(self.config.root_margin);
        let threshold = self.config.threshold;

        let mut due = Vec::new();
        self.observed.retain(|id| {
            let Some(rect) = cx.measure.element_rect(cx.root, id) else {
                return true;
            };
            let ratio = intersection_ratio(rect, root);
            if ratio > 0.0 && ratio >= threshold {
                due.push(id.clone());
                false
            } else {
                true
            }
        });

        for id in due {
            self.reveal(cx, &id);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_ratio() {
        let root = Rect::new(0, 0, 100, 100);
        assert_eq!(intersection_ratio(Rect::new(0, 50, 100, 100), root), 0.5);
        assert_eq!(intersection_ratio(Rect::new(0, 100, 100, 100), root), 0.0);
        assert_eq!(intersection_ratio(Rect::new(10, 10, 0, 0), root), 1.0);
    }
}
