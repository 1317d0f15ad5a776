use std::time::{Duration, Instant};

use crate::layout::Rect;
use crate::transitions::{Easing, TransitionConfig};

/// An in-flight smooth scroll.
#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: i32,
    to: i32,
    start: Instant,
    config: TransitionConfig,
}

/// The visible window onto the document.
#[derive(Debug, Clone)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    scroll_y: i32,
    animation: Option<ScrollAnimation>,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0,
            animation: None,
        }
    }

    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    /// Visible region in document coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(0, self.scroll_y, self.width, self.height)
    }

    /// Largest valid scroll offset for a document of the given height.
    pub fn max_scroll(&self, document_height: u32) -> i32 {
        document_height.saturating_sub(self.height) as i32
    }

    /// Jump to an offset, clamped to the document. Cancels any animation.
    pub fn set_scroll_y(&mut self, y: i32, document_height: u32) {
        self.animation = None;
        self.scroll_y = y.clamp(0, self.max_scroll(document_height));
    }

    /// Scroll by a delta amount.
    /// Returns true if the scroll offset changed.
    pub fn scroll_by(&mut self, delta_y: i32, document_height: u32) -> bool {
        let previous = self.scroll_y;
        self.set_scroll_y(previous.saturating_add(delta_y), document_height);
        self.scroll_y != previous
    }

    /// Start animating towards `target` (clamped to the document).
    pub fn scroll_to_smooth(
        &mut self,
        target: i32,
        document_height: u32,
        now: Instant,
        duration: Duration,
        easing: Easing,
    ) {
        let to = target.clamp(0, self.max_scroll(document_height));
        if to == self.scroll_y {
            self.animation = None;
            return;
        }
        log::debug!("[viewport] smooth scroll {} -> {}", self.scroll_y, to);
        self.animation = Some(ScrollAnimation {
            from: self.scroll_y,
            to,
            start: now,
            config: TransitionConfig::new(duration, easing),
        });
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Target of the running animation, if any.
    pub fn scroll_target(&self) -> Option<i32> {
        self.animation.map(|a| a.to)
    }

    /// Advance the animation to `now`.
    /// Returns true if the scroll offset changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };

        let elapsed = now.saturating_duration_since(animation.start);
        let progress = animation.config.progress(elapsed);
        let distance = (animation.to - animation.from) as f32;
        let previous = self.scroll_y;
        self.scroll_y = animation.from + (distance * progress).round() as i32;

        if elapsed >= animation.config.duration {
            self.scroll_y = animation.to;
            self.animation = None;
        }

        self.scroll_y != previous
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_by_clamps_to_document() {
        let mut viewport = Viewport::new(800, 600);
        assert!(viewport.scroll_by(1000, 1000));
        assert_eq!(viewport.scroll_y(), 400);
        assert!(!viewport.scroll_by(50, 1000));
        assert!(viewport.scroll_by(-1000, 1000));
        assert_eq!(viewport.scroll_y(), 0);
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut viewport = Viewport::new(800, 600);
        let start = Instant::now();
        viewport.scroll_to_smooth(500, 2000, start, Duration::from_millis(400), Easing::EaseInOut);
        assert!(viewport.is_animating());

        viewport.tick(start + Duration::from_millis(200));
        let midway = viewport.scroll_y();
        assert!(midway > 0 && midway < 500, "midway was {midway}");

        viewport.tick(start + Duration::from_millis(400));
        assert_eq!(viewport.scroll_y(), 500);
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_smooth_scroll_to_current_position_is_noop() {
        let mut viewport = Viewport::new(800, 600);
        viewport.scroll_to_smooth(0, 2000, Instant::now(), Duration::from_millis(400), Easing::Linear);
        assert!(!viewport.is_animating());
    }
}
