//! Tests for the input controller

use super::*;
use crate::core::field::{Splice, WritingDirection};
use crate::core::keycode::{KeyCode, KeyModifiers};
use crate::core::touch::{TouchEvent, TouchPhase};

mod carrier;
mod gesture;
mod passthrough;

const FIELD: &str = "comment";

fn field_id() -> FieldId {
    FieldId::from(FIELD)
}

fn press(ch: char) -> KeyEvent {
    KeyEvent::press(FIELD, ch)
}

fn press_ctrl(ch: char) -> KeyEvent {
    KeyEvent::press(FIELD, ch).with_modifiers(KeyModifiers::new().with_control(true))
}

fn down_ctrl(ch: char) -> KeyEvent {
    KeyEvent::down(FIELD, ch).with_modifiers(KeyModifiers::new().with_control(true))
}

fn down_meta(ch: char) -> KeyEvent {
    KeyEvent::down(FIELD, ch).with_modifiers(KeyModifiers::new().with_meta(true))
}

/// Feed a key-press to the controller and apply the resulting splice to
/// `buffer`. Returns the engine result.
fn type_key(engine: &mut InputController, buffer: &mut TextField, key: &KeyEvent) -> EngineResult {
    let result = engine.process_key(key, buffer);
    if let Some(splice) = result.splice() {
        buffer.apply(splice);
    }
    result
}

/// Type every character of `keys` as a plain key-press into `buffer`
fn type_str(engine: &mut InputController, buffer: &mut TextField, keys: &str) {
    for ch in keys.chars() {
        type_key(engine, buffer, &press(ch));
    }
}

fn swipe(engine: &mut InputController, from_x: f64, to_x: f64) -> EngineResult {
    engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Start, from_x, 100.0));
    let mid_x = (from_x + to_x) / 2.0;
    engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Move, mid_x, 100.0));
    engine.process_touch(&TouchEvent::single(FIELD, TouchPhase::Move, to_x, 100.0));
    engine.process_touch(&TouchEvent::end(FIELD))
}
