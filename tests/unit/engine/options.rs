use super::*;
use crate::animation::ease::Ease;

#[test]
fn defaults_apply_when_unset() {
    let timing = DrawOptions::from("#logo").timing().unwrap();
    assert_eq!(timing.duration_ms, DEFAULT_DURATION_MS);
    assert!(matches!(timing.easing, Easing::Preset(Ease::InOutCubic)));
    assert_eq!(timing.direction, Direction::Forward);
}

#[test]
fn zero_duration_is_not_unset() {
    let timing = DrawOptions::new("#logo").duration(0.0).timing().unwrap();
    assert_eq!(timing.duration_ms, 0.0);
}

#[test]
fn invalid_durations_are_rejected() {
    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        let err = DrawOptions::new("#logo").duration(bad).timing().unwrap_err();
        assert!(matches!(err, WalkwayError::Configuration(_)));
    }
}

#[test]
fn selector_is_mandatory() {
    assert!(DrawOptions::default().require_selector().is_err());
    assert!(DrawOptions::new("  ").require_selector().is_err());
    assert_eq!(DrawOptions::new("#a").require_selector().unwrap(), "#a");
}

#[test]
fn builder_sets_reverse_and_easing() {
    let timing = DrawOptions::new("#a")
        .easing_named("easeOutQuad")
        .reverse(true)
        .timing()
        .unwrap();
    assert!(matches!(timing.easing, Easing::Preset(Ease::OutQuad)));
    assert_eq!(timing.direction, Direction::Reverse);
}

#[test]
fn deserializes_with_defaults() {
    let opts: DrawOptions =
        serde_json::from_str(r##"{ "selector": "#a", "easing": "linear" }"##).unwrap();
    assert_eq!(opts.selector.as_deref(), Some("#a"));
    assert_eq!(opts.duration, None);
    assert!(!opts.reverse);
    assert!(matches!(opts.easing, Some(Easing::Preset(Ease::Linear))));
}
