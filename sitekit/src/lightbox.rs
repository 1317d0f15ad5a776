//! Full-screen gallery lightbox.

use std::any::Any;

use log::debug;
use sitedom::element::{closest, find_element, is_within, query, query_all, query_within};
use sitedom::{Event, Key, Overflow, Selector};

use crate::behavior::{Behavior, EventResult, PageContext};
use crate::error::{ConfigError, require_class};

/// One gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// Move `step` places from `index` in a list of `len`, wrapping at both ends.
/// An empty list always yields 0.
pub fn wrap_index(index: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + step).rem_euclid(len as isize) as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxConfig {
    pub item_class: String,
    pub overlay_id: String,
    pub image_id: String,
    pub close_class: String,
    pub prev_class: String,
    pub next_class: String,
    /// Class set on the overlay while it is open.
    pub active_class: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            item_class: "gallery-item".to_string(),
            overlay_id: "lightbox".to_string(),
            image_id: "lightbox-image".to_string(),
            close_class: "lightbox-close".to_string(),
            prev_class: "lightbox-prev".to_string(),
            next_class: "lightbox-next".to_string(),
            active_class: "active".to_string(),
        }
    }
}

impl LightboxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_class(&self.item_class, "gallery item")?;
        require_class(&self.overlay_id, "overlay")?;
        require_class(&self.image_id, "image")?;
        require_class(&self.close_class, "close")?;
        require_class(&self.prev_class, "prev")?;
        require_class(&self.next_class, "next")?;
        require_class(&self.active_class, "active")
    }
}

/// Shows gallery images in an overlay with previous/next navigation.
///
/// Inert unless the page has gallery items, the overlay and the overlay
/// image. Navigation wraps around the image list.
#[derive(Debug)]
pub struct Lightbox {
    config: LightboxConfig,
    /// Gallery item ids, parallel to `images`.
    items: Vec<String>,
    images: Vec<GalleryImage>,
    index: usize,
    open: bool,
    wired: bool,
    close_id: Option<String>,
    prev_id: Option<String>,
    next_id: Option<String>,
}

impl Lightbox {
    pub fn new(config: LightboxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            items: Vec::new(),
            images: Vec::new(),
            index: 0,
            open: false,
            wired: false,
            close_id: None,
            prev_id: None,
            next_id: None,
        })
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// Index of the image shown (or last shown).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the overlay on image `index`. Ignored when out of range.
    pub fn open(&mut self, cx: &mut PageContext<'_>, index: usize) {
        if !self.wired || index >= self.images.len() {
            return;
        }
        self.index = index;
        self.open = true;
        debug!("[lightbox] open at {}", index);

        if let Some(overlay) = cx.element_mut(&self.config.overlay_id) {
            overlay.add_class(&self.config.active_class);
        }
        cx.root.style.overflow = Overflow::Hidden;
        self.show_current(cx);
    }

    pub fn close(&mut self, cx: &mut PageContext<'_>) {
        if !self.open {
            return;
        }
        self.open = false;
        debug!("[lightbox] closed");

        if let Some(overlay) = cx.element_mut(&self.config.overlay_id) {
            overlay.remove_class(&self.config.active_class);
        }
        cx.root.style.overflow = Overflow::Visible;
    }

    /// Move by `step` images, wrapping around.
    pub fn step(&mut self, cx: &mut PageContext<'_>, step: isize) {
        if self.images.is_empty() {
            return;
        }
        self.index = wrap_index(self.index, step, self.images.len());
        self.show_current(cx);
    }

    fn show_current(&self, cx: &mut PageContext<'_>) {
        let Some(image) = self.images.get(self.index) else {
            return;
        };
        if let Some(element) = cx.element_mut(&self.config.image_id) {
            element.set_attr("src", image.src.as_str());
            element.set_attr("alt", image.alt.as_str());
        }
    }

    fn control_hit(&self, cx: &PageContext<'_>, control: &Option<String>, target: &str) -> bool {
        control
            .as_deref()
            .is_some_and(|id| is_within(cx.root, target, id))
    }
}

impl Behavior for Lightbox {
    fn name(&self) -> &'static str {
        "lightbox"
    }

    fn init(&mut self, cx: &mut PageContext<'_>) {
        let config = &self.config;
        let item_ids = query_all(cx.root, &Selector::class(config.item_class.as_str()));
        let has_overlay = find_element(cx.root, &config.overlay_id).is_some();
        let has_image = find_element(cx.root, &config.image_id).is_some();
        if item_ids.is_empty() || !has_overlay || !has_image {
            debug!(
                "[lightbox] gallery incomplete (items: {}, overlay: {}, image: {}), skipping",
                item_ids.len(),
                has_overlay,
                has_image
            );
            return;
        }

        let img = Selector::tag("img");
        for item_id in item_ids {
            let image = query_within(cx.root, &item_id, &img)
                .and_then(|img_id| find_element(cx.root, &img_id))
                .map(|img| GalleryImage {
                    src: img.get_attr("src").unwrap_or_default().to_string(),
                    alt: img.get_attr("alt").unwrap_or_default().to_string(),
                });
            match image {
                Some(image) => {
                    self.items.push(item_id);
                    self.images.push(image);
                }
                None => debug!("[lightbox] {} has no image, skipping", item_id),
            }
        }

        self.close_id = query(cx.root, &Selector::class(self.config.close_class.as_str()));
        self.prev_id = query(cx.root, &Selector::class(self.config.prev_class.as_str()));
        self.next_id = query(cx.root, &Selector::class(self.config.next_class.as_str()));
        let controls = [&self.close_id, &self.prev_id, &self.next_id];
        for id in self.items.iter().chain(controls.into_iter().flatten()) {
            if let Some(element) = cx.element_mut(id) {
                element.clickable = true;
            }
        }
        self.wired = !self.images.is_empty();
    }

    fn handle(&mut self, event: &Event, cx: &mut PageContext<'_>) -> EventResult {
        if !self.wired {
            return EventResult::Ignored;
        }
        match event {
            Event::Click { target } => {
                if self.control_hit(cx, &self.prev_id, target) {
                    self.step(cx, -1);
                    return EventResult::Handled;
                }
                if self.control_hit(cx, &self.next_id, target) {
                    self.step(cx, 1);
                    return EventResult::Handled;
                }
                let on_overlay = *target == self.config.overlay_id;
                if on_overlay || self.control_hit(cx, &self.close_id, target) {
                    self.close(cx);
                    return EventResult::Handled;
                }

                let item_selector = Selector::class(self.config.item_class.as_str());
                let item = closest(cx.root, target, &item_selector);
                let index = item.and_then(|item| self.items.iter().position(|id| *id == item));
                match index {
                    Some(index) => {
                        self.open(cx, index);
                        EventResult::Handled
                    }
                    None => EventResult::Ignored,
                }
            }
            Event::Key { key, .. } if self.open => match key {
                Key::Escape => {
                    self.close(cx);
                    EventResult::Handled
                }
                Key::Left => {
                    self.step(cx, -1);
                    EventResult::Handled
                }
                Key::Right => {
                    self.step(cx, 1);
                    EventResult::Handled
                }
                _ => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
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
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(1, -4, 3), 0);
        assert_eq!(wrap_index(0, 5, 0), 0);
    }
}
