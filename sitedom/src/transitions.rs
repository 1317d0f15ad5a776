use std::time::Duration;

/// Configuration for a single property transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
    /// Time before the transition starts.
    pub delay: Duration,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Eased progress (0.0 to 1.0) after `elapsed` time, including the delay.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (active.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.easing.apply(t)
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Transitions configuration for an element.
/// Similar to Style, this is a builder for configuring property transitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transitions {
    pub opacity: Option<TransitionConfig>,
    pub transform: Option<TransitionConfig>,
    pub max_height: Option<TransitionConfig>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, duration: Duration, easing: Easing) -> Self {
        self.opacity = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn transform(mut self, duration: Duration, easing: Easing) -> Self {
        self.transform = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn max_height(mut self, duration: Duration, easing: Easing) -> Self {
        self.max_height = Some(TransitionConfig::new(duration, easing));
        self
    }

    /// Delay every configured transition.
    pub fn delay(mut self, delay: Duration) -> Self {
        for config in [&mut self.opacity, &mut self.transform, &mut self.max_height]
            .into_iter()
            .flatten()
        {
            config.delay = delay;
        }
        self
    }

    /// Returns true if any transition is configured.
    pub fn has_any(&self) -> bool {
        self.opacity.is_some() || self.transform.is_some() || self.max_height.is_some()
    }
}
