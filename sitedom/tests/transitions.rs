use std::time::Duration;

use sitedom::{Easing, TransitionConfig, Transitions};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert!((Easing::EaseIn.apply(0.25) - 0.0625).abs() < 0.0001);
}

#[test]
fn test_easing_ease_out() {
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
}

#[test]
fn test_easing_ease_in_out() {
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_boundaries_and_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);

        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

// =============================================================================
// TransitionConfig Tests
// =============================================================================

#[test]
fn test_transition_config_progress() {
    let config = TransitionConfig::new(Duration::from_millis(600), Easing::Linear);

    assert_eq!(config.progress(Duration::ZERO), 0.0);
    assert!((config.progress(Duration::from_millis(300)) - 0.5).abs() < 0.001);
    assert_eq!(config.progress(Duration::from_millis(900)), 1.0);
}

#[test]
fn test_transition_config_delay() {
    let config = TransitionConfig::new(Duration::from_millis(600), Easing::Linear)
        .with_delay(Duration::from_millis(200));

    assert_eq!(config.progress(Duration::from_millis(100)), 0.0);
    assert!((config.progress(Duration::from_millis(500)) - 0.5).abs() < 0.001);
}

#[test]
fn test_transition_zero_duration_completes_immediately() {
    let config = TransitionConfig::new(Duration::ZERO, Easing::EaseOut);
    assert_eq!(config.progress(Duration::ZERO), 1.0);
}

// =============================================================================
// Transitions Builder Tests
// =============================================================================

#[test]
fn test_transitions_default_empty() {
    let t = Transitions::new();
    assert!(!t.has_any());
}

#[test]
fn test_transitions_delay_applies_to_configured_properties() {
    let t = Transitions::new()
        .opacity(Duration::from_millis(600), Easing::EaseOut)
        .transform(Duration::from_millis(600), Easing::EaseOut)
        .delay(Duration::from_millis(300));

    assert!(t.has_any());
    assert_eq!(t.opacity.unwrap().delay, Duration::from_millis(300));
    assert_eq!(t.transform.unwrap().delay, Duration::from_millis(300));
    assert!(t.max_height.is_none());
}
