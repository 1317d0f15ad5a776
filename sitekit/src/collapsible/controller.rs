use std::any::Any;

use log::debug;
use sitedom::element::{
    ancestors, append_child, closest, find_element_mut, is_within, query_all, query_within,
};
use sitedom::{Display, Element, Event, Overflow, Selector, Size};

use super::config::{CollapsibleConfig, ControlPlacement};
use crate::behavior::{Behavior, EventResult, PageContext};
use crate::error::ConfigError;

/// State of one managed block that needed collapsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsibleBlock {
    pub id: String,
    /// Unconstrained content height, measured once at initialization.
    pub natural_height: u32,
    pub collapsed: bool,
    pub control_id: String,
    /// Enclosing card, in the grouped variant.
    pub card_id: Option<String>,
    /// Card height to restore when collapsing again.
    pub target_height: Option<u32>,
}

/// Collapses tall blocks and toggles them on demand.
///
/// Blocks at or below the threshold, or with nothing measurable, are left
/// alone and only blocks that were collapsed at initialization are tracked.
#[derive(Debug)]
pub struct CollapsibleController {
    config: CollapsibleConfig,
    blocks: Vec<CollapsibleBlock>,
    group_height: Option<u32>,
    initialized: bool,
}

impl CollapsibleController {
    pub fn new(config: CollapsibleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            blocks: Vec::new(),
            group_height: None,
            initialized: false,
        })
    }

    pub fn config(&self) -> &CollapsibleConfig {
        &self.config
    }

    /// Blocks that exceeded the threshold, in document order.
    pub fn blocks(&self) -> &[CollapsibleBlock] {
        &self.blocks
    }

    pub fn block(&self, id: &str) -> Option<&CollapsibleBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// None if `id` is not a managed block.
    pub fn is_collapsed(&self, id: &str) -> Option<bool> {
        self.block(id).map(|b| b.collapsed)
    }

    /// Common card height after equalization (grouped variant only).
    pub fn group_height(&self) -> Option<u32> {
        self.group_height
    }

    /// Measure every block, collapse the tall ones and equalize the group.
    /// Runs once; later calls do nothing.
    pub fn initialize(&mut self, cx: &mut PageContext<'_>) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let threshold = self.config.threshold;
        let block_ids = query_all(cx.root, &Selector::class(self.config.block_class.as_str()));

        // Measure everything before the first block is collapsed
        let measured: Vec<(String, u32)> = block_ids
            .into_iter()
            .map(|id| {
                let height = cx.measure.natural_height(cx.root, &id);
                (id, height)
            })
            .collect();

        for (id, natural_height) in measured {
            if natural_height <= threshold {
                debug!(
                    "[collapsible] {} fits ({}px <= {}px)",
                    id, natural_height, threshold
                );
                self.hide_unused_control(cx, &id);
                continue;
            }

            let Some(control_id) = self.attach_control(cx, &id) else {
                debug!("[collapsible] {} has no place for a toggle, skipping", id);
                continue;
            };

            let card_id = self.config.group.as_ref().and_then(|group| {
                closest(cx.root, &id, &Selector::class(group.card_class.as_str()))
            });

            if let Some(element) = cx.element_mut(&id) {
                element.set_attr("data-original-height", natural_height.to_string());
                element.style.overflow = Overflow::Hidden;
            }

            let block = CollapsibleBlock {
                id,
                natural_height,
                collapsed: true,
                control_id,
                card_id,
                target_height: None,
            };
            debug!(
                "[collapsible] collapsing {} ({}px > {}px)",
                block.id, natural_height, threshold
            );
            self.apply(cx, &block);
            self.blocks.push(block);
        }

        if self.config.group.is_some() {
            self.equalize_group(cx);
        }
    }

    /// Flip a block between collapsed and expanded.
    /// Returns false if `block_id` is not a managed block.
    pub fn on_toggle(&mut self, cx: &mut PageContext<'_>, block_id: &str) -> bool {
        match self.is_collapsed(block_id) {
            Some(collapsed) => self.set_collapsed(cx, block_id, !collapsed),
            None => false,
        }
    }

    /// Put a block into the requested state.
    /// Returns true if anything changed.
    pub fn set_collapsed(
        &mut self,
        cx: &mut PageContext<'_>,
        block_id: &str,
        collapsed: bool,
    ) -> bool {
        let Some(index) = self.blocks.iter().position(|b| b.id == block_id) else {
            return false;
        };
        if self.blocks[index].collapsed == collapsed {
            return false;
        }

        self.blocks[index].collapsed = collapsed;
        let block = self.blocks[index].clone();
        debug!(
            "[collapsible] {} -> {}",
            block.id,
            if collapsed { "collapsed" } else { "expanded" }
        );
        self.apply(cx, &block);
        true
    }

    /// Write a block's state into the page.
    fn apply(&self, cx: &mut PageContext<'_>, block: &CollapsibleBlock) {
        let config = &self.config;

        if let Some(element) = cx.element_mut(&block.id) {
            if block.collapsed {
                element.add_class(&config.collapsed_class);
                element.style.max_height = Some(config.threshold);
            } else {
                element.remove_class(&config.collapsed_class);
                element.style.max_height = Some(block.natural_height);
            }
        }

        if let Some(control) = cx.element_mut(&block.control_id) {
            let label = if block.collapsed {
                &config.expand_label
            } else {
                &config.collapse_label
            };
            control.set_text(label.as_str());
        }

        let card = match &block.card_id {
            Some(card_id) => cx.element_mut(card_id),
            None => None,
        };
        if let Some(card) = card {
            card.style.height = match (block.collapsed, block.target_height) {
                (true, Some(height)) => Size::Px(height),
                _ => Size::Auto,
            };
        }
    }

    /// Give every card the height of the tallest one, measured with the
    /// blocks already collapsed.
    fn equalize_group(&mut self, cx: &mut PageContext<'_>) {
        let Some(group) = &self.config.group else {
            return;
        };
        let cards = query_all(cx.root, &Selector::class(group.card_class.as_str()));
        if cards.is_empty() {
            return;
        }

        for card_id in &cards {
            if let Some(card) = cx.element_mut(card_id) {
                card.style.height = Size::Auto;
            }
        }

        let max_height = cards
            .iter()
            .map(|card_id| cx.measure.rendered_height(cx.root, card_id))
            .max()
            .unwrap_or(0);

        for card_id in &cards {
            if let Some(card) = cx.element_mut(card_id) {
                card.style.height = Size::Px(max_height);
                card.set_attr("data-initial-height", max_height.to_string());
            }
        }

        debug!(
            "[collapsible] equalized {} cards at {}px",
            cards.len(),
            max_height
        );
        self.group_height = Some(max_height);
        for block in &mut self.blocks {
            if block.card_id.is_some() {
                block.target_height = Some(max_height);
            }
        }
    }

    /// Find or create the toggle control for a tall block.
    fn attach_control(&self, cx: &mut PageContext<'_>, block_id: &str) -> Option<String> {
        match &self.config.control {
            ControlPlacement::Create {
                container_class,
                control_class,
            } => {
                let container =
                    closest(cx.root, block_id, &Selector::class(container_class.as_str()))?;

                let mut button = Element::button(self.config.expand_label.as_str())
                    .class(control_class.as_str());
                if let Some(aria_label) = &self.config.aria_label {
                    button.set_attr("aria-label", aria_label.as_str());
                }
                let control_id = button.id.clone();

                append_child(cx.root, &container, button).then_some(control_id)
            }
            ControlPlacement::Existing { control_class } => {
                let control_id = find_existing_control(cx.root, block_id, control_class)?;
                if self.blocks.iter().any(|b| b.control_id == control_id) {
                    debug!(
                        "[collapsible] {} is already wired to another block",
                        control_id
                    );
                    return None;
                }
                let control = find_element_mut(cx.root, &control_id)?;
                control.clickable = true;
                Some(control_id)
            }
        }
    }

    /// An existing control stays out of sight for blocks that fit.
    fn hide_unused_control(&self, cx: &mut PageContext<'_>, block_id: &str) {
        let ControlPlacement::Existing { control_class } = &self.config.control else {
            return;
        };
        let Some(control_id) = find_existing_control(cx.root, block_id, control_class) else {
            return;
        };
        if let Some(control) = cx.element_mut(&control_id) {
            control.style.display = Display::None;
        }
    }

    fn block_for_control(&self, root: &Element, target: &str) -> Option<String> {
        self.blocks
            .iter()
            .find(|b| is_within(root, target, &b.control_id))
            .map(|b| b.id.clone())
    }
}

/// Nearest element with `control_class`, searching the block's ancestors
/// from the inside out.
fn find_existing_control(root: &Element, block_id: &str, control_class: &str) -> Option<String> {
    let selector = Selector::class(control_class);
    let path = ancestors(root, block_id)?;
    path.iter()
        .rev()
        .find_map(|ancestor| query_within(root, ancestor, &selector))
}

impl Behavior for CollapsibleController {
    fn name(&self) -> &'static str {
        "collapsible"
    }

    fn init(&mut self, cx: &mut PageContext<'_>) {
        self.initialize(cx);
    }

    fn handle(&mut self, event: &Event, cx: &mut PageContext<'_>) -> EventResult {
        let Event::Click { target } = event else {
            return EventResult::Ignored;
        };
        let Some(block_id) = self.block_for_control(cx.root, target) else {
            return EventResult::Ignored;
        };
        self.on_toggle(cx, &block_id);
        EventResult::Handled
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
