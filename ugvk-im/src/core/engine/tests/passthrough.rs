use super::*;

fn passthrough_engine() -> InputController {
    let mut engine = InputController::new();
    engine.attach(&field_id());
    engine.toggle_keyboard_mode(&field_id());
    assert_eq!(engine.mode(&field_id()), Some(FieldMode::PassThrough));
    engine
}

#[test]
fn test_passthrough_never_consumes_key_press() {
    let mut engine = passthrough_engine();
    let buffer = TextField::new();
    for key in ['a', 'f', 'K', 'Z', '/', '(', ';', '1', ' '] {
        let result = engine.process_key(&press(key), &buffer);
        assert!(!result.consumed, "'{key}' intercepted in pass-through mode");
        assert!(result.actions.is_empty());
    }
}

#[test]
fn test_passthrough_still_accepts_commands() {
    let mut engine = passthrough_engine();
    let buffer = TextField::new();
    let result = engine.process_key(&down_ctrl('k'), &buffer);
    assert!(result.consumed);
    assert_eq!(engine.mode(&field_id()), Some(FieldMode::NativeScript));

    let mut buffer = TextField::new();
    type_key(&mut engine, &mut buffer, &press('b'));
    assert_eq!(buffer.text(), "ب");
}

#[test]
fn test_other_fields_unaffected() {
    let mut engine = passthrough_engine();
    let buffer = TextField::new();
    let other = KeyEvent::press("other", 'b');
    assert!(engine.process_key(&other, &buffer).consumed);
    assert_eq!(engine.mode(&FieldId::from("other")), Some(FieldMode::NativeScript));
}
