use super::*;
use ugvk_engine::SwipeDirection;

#[test]
fn test_swipe_toggles_mode() {
    let mut engine = InputController::new();
    let result = swipe(&mut engine, 200.0, 120.0);
    assert!(result.consumed);
    assert_eq!(
        result.actions,
        vec![
            EngineAction::Swiped {
                field: field_id(),
                direction: SwipeDirection::Left,
            },
            EngineAction::ModeChanged {
                field: field_id(),
                mode: FieldMode::PassThrough,
            },
        ]
    );

    let result = swipe(&mut engine, 100.0, 200.0);
    assert!(result.actions.contains(&EngineAction::Swiped {
        field: field_id(),
        direction: SwipeDirection::Right,
    }));
    assert_eq!(engine.mode(&field_id()), Some(FieldMode::NativeScript));
}

#[test]
fn test_swipe_threshold_boundary() {
    let mut engine = InputController::new();
    let result = swipe(&mut engine, 100.0, 150.0);
    assert!(result.consumed);
    assert_eq!(engine.mode(&field_id()), Some(FieldMode::PassThrough));

    let result = swipe(&mut engine, 100.0, 149.0);
    assert!(!result.consumed);
    assert!(result.actions.is_empty());
    assert_eq!(engine.mode(&field_id()), Some(FieldMode::PassThrough));
}

#[test]
fn test_tracking_moves_suppress_scrolling() {
    let mut engine = InputController::new();
    let start = engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Start, 0.0, 0.0));
    assert!(!start.consumed);
    let moved = engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Move, 10.0, 0.0));
    assert!(moved.consumed);
}

#[test]
fn test_vertical_scroll_is_not_a_swipe() {
    let mut engine = InputController::new();
    engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Start, 0.0, 0.0));
    engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Move, 30.0, 10.0));
    let cancelled = engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Move, 60.0, 40.0));
    assert!(!cancelled.consumed);
    // later samples of the abandoned gesture scroll normally
    let after = engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Move, 90.0, 40.0));
    assert!(!after.consumed);
    let end = engine.process_touch(&TouchEvent::end(FIELD));
    assert!(end.actions.is_empty());
    assert_eq!(engine.mode(&field_id()), Some(FieldMode::NativeScript));
}

#[test]
fn test_pinch_is_not_a_swipe() {
    let mut engine = InputController::new();
    engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Start, 0.0, 0.0));
    let two_fingers = TouchEvent::new(
        FIELD,
        TouchPhase::Move,
        vec![
            ugvk_engine::TouchPoint::new(60.0, 0.0),
            ugvk_engine::TouchPoint::new(0.0, 80.0),
        ],
    );
    assert!(!engine.process_touch(&two_fingers).consumed);
    assert!(engine.process_touch(&TouchEvent::end(FIELD)).actions.is_empty());
}

#[test]
fn test_touch_cancel_abandons_gesture() {
    let mut engine = InputController::new();
    engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Start, 0.0, 0.0));
    engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Move, 80.0, 0.0));
    engine.process_touch(&TouchEvent::new(FIELD, TouchPhase::Cancel, Vec::new()));
    assert!(engine.process_touch(&TouchEvent::end(FIELD)).actions.is_empty());
    assert_eq!(engine.mode(&field_id()), Some(FieldMode::NativeScript));
}

#[test]
fn test_gestures_are_per_field() {
    let mut engine = InputController::new();
    engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Start, 0.0, 0.0));
    engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Move, 80.0, 0.0));
    // another field never saw the start
    let other = engine.process_touch(&TouchEvent::end("other"));
    assert!(other.actions.is_empty());
    let result = engine.process_touch(&TouchEvent::end(FIELD));
    assert!(result.consumed);
}

#[test]
fn test_configured_thresholds() {
    let mut settings = crate::config::Settings::default();
    settings.gesture.distance_threshold = 100.0;
    settings.fields.attach_all = true;
    let config = EngineConfig::from_settings(&settings).unwrap();
    let mut engine = InputController::with_config(config);

    assert!(swipe(&mut engine, 0.0, 99.0).actions.is_empty());
    assert!(swipe(&mut engine, 0.0, 100.0).consumed);
    assert_eq!(engine.mode(&field_id()), Some(FieldMode::PassThrough));
}

#[test]
fn test_invalid_thresholds_rejected() {
    let mut settings = crate::config::Settings::default();
    settings.gesture.vertical_tolerance = 60.0;
    assert!(matches!(
        EngineConfig::from_settings(&settings),
        Err(ugvk_engine::ConfigError::InvalidThresholds { .. })
    ));
}
