use super::*;

const VOWEL_KEYS: [char; 8] = ['f', 'g', 'e', 'h', 'o', 'u', 'K', 'v'];

#[test]
fn test_every_vowel_at_start_gets_carrier() {
    for key in VOWEL_KEYS {
        let mut engine = InputController::new();
        let mut buffer = TextField::new();
        type_key(&mut engine, &mut buffer, &press(key));
        let mut chars = buffer.text().chars();
        assert_eq!(chars.next(), Some(ugvk_engine::CARRIER), "'{key}'");
        assert!(chars.next().is_some_and(ugvk_engine::is_vowel));
        assert_eq!(buffer.cursor(), 2);
    }
}

#[test]
fn test_no_carrier_after_consonant() {
    for key in VOWEL_KEYS {
        let mut engine = InputController::new();
        let mut buffer = TextField::with_text("ت");
        type_key(&mut engine, &mut buffer, &press(key));
        assert_eq!(buffer.len(), 2, "'{key}' should not get a carrier");
    }
}

#[test]
fn test_carrier_after_vowel() {
    let mut engine = InputController::new();
    let mut buffer = TextField::new();
    // s-f-e-t: ساېت is wrong, سائېت is right
    type_str(&mut engine, &mut buffer, "sfet");
    assert_eq!(buffer.text(), "سائېت");
}

#[test]
fn test_carrier_after_latin_text() {
    let mut engine = InputController::new();
    let mut buffer = TextField::with_text("abc");
    type_key(&mut engine, &mut buffer, &press('u'));
    assert_eq!(buffer.text(), "abcئۇ");
}

#[test]
fn test_carrier_after_space_and_punctuation() {
    let mut engine = InputController::new();
    let mut buffer = TextField::with_text("بار ");
    type_key(&mut engine, &mut buffer, &press('o'));
    assert_eq!(buffer.text(), "بار ئو");

    let mut buffer = TextField::with_text("بار،");
    type_key(&mut engine, &mut buffer, &press('o'));
    assert_eq!(buffer.text(), "بار،ئو");
}

#[test]
fn test_vowel_at_start_of_non_empty_buffer() {
    let mut engine = InputController::new();
    let mut buffer = TextField::with_text("ب").with_selection(0, 0);
    type_key(&mut engine, &mut buffer, &press('f'));
    assert_eq!(buffer.text(), "ئاب");
    assert_eq!(buffer.cursor(), 2);
}

#[test]
fn test_earlier_text_is_never_rewritten() {
    let mut engine = InputController::new();
    // A vowel typed without its carrier (pasted text) stays as it is
    let mut buffer = TextField::with_text("ا");
    type_key(&mut engine, &mut buffer, &press('b'));
    assert_eq!(buffer.text(), "اب");
}

#[test]
fn test_explicit_carrier_key() {
    let mut engine = InputController::new();
    let mut buffer = TextField::new();
    // typing '/' then 'f' gives exactly one carrier
    type_str(&mut engine, &mut buffer, "/f");
    assert_eq!(buffer.text(), "ئا");
}
