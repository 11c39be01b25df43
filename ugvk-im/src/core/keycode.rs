//! Key code definitions and key event handling

use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::FieldId;

/// Character code carried by a key event (`which`/`keyCode` on the web)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const BACKSPACE: KeyCode = KeyCode(0x08);
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const RETURN: KeyCode = KeyCode(0x0d);
    pub const ESCAPE: KeyCode = KeyCode(0x1b);
    pub const SPACE: KeyCode = KeyCode(0x20);

    pub fn from_char(ch: char) -> Self {
        Self(ch as u32)
    }

    /// Check if this code is a printable character (not a control code)
    pub fn is_printable(&self) -> bool {
        self.to_char().is_some_and(|ch| !ch.is_control())
    }

    /// Try to convert this code to a character
    pub fn to_char(&self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Check if this code is a Latin letter (A-Z, either case)
    pub fn is_alphabetic(&self) -> bool {
        self.to_char().is_some_and(|ch| ch.is_ascii_alphabetic())
    }

    /// Uppercased letter used to look up Ctrl/Cmd commands
    pub fn command_letter(&self) -> Option<char> {
        self.to_char()
            .filter(|ch| ch.is_ascii_alphabetic())
            .map(|ch| ch.to_ascii_uppercase())
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(ch) if self.is_printable() => write!(f, "{}", ch),
            _ => write!(f, "KeyCode(0x{:04x})", self.0),
        }
    }
}

/// Key modifier flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift_key: bool,
    pub control_key: bool,
    pub alt_key: bool,
    /// Command key on macOS
    pub meta_key: bool,
}

/// Modifier bitmask constants used when a host reports modifiers as flags.
impl KeyModifiers {
    pub const SHIFT_MASK: u32 = 1;
    pub const CONTROL_MASK: u32 = 2;
    pub const ALT_MASK: u32 = 4;
    pub const META_MASK: u32 = 8;

    /// Decode a modifier bitmask into a `KeyModifiers` struct.
    pub fn from_modifier_state(state: u32) -> Self {
        Self {
            shift_key: (state & Self::SHIFT_MASK) != 0,
            control_key: (state & Self::CONTROL_MASK) != 0,
            alt_key: (state & Self::ALT_MASK) != 0,
            meta_key: (state & Self::META_MASK) != 0,
        }
    }
}

impl KeyModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift_key = shift;
        self
    }

    pub fn with_control(mut self, control: bool) -> Self {
        self.control_key = control;
        self
    }

    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta_key = meta;
        self
    }

    /// Ctrl on PC, Cmd on Mac
    pub fn is_command(&self) -> bool {
        self.control_key || self.meta_key
    }

    pub fn is_empty(&self) -> bool {
        !self.shift_key && !self.control_key && !self.alt_key && !self.meta_key
    }
}

/// Which key event this is.
///
/// Key-down is only used to detect commands; characters are inserted on
/// key-press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPhase {
    Down,
    #[default]
    Press,
}

/// A key event aimed at a text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Target field (None if the host could not tell)
    pub field: Option<FieldId>,
    /// Character code (None if the host could not tell)
    pub code: Option<KeyCode>,
    /// Modifier key state
    pub modifiers: KeyModifiers,
    pub phase: KeyPhase,
}

impl KeyEvent {
    pub fn new(
        field: impl Into<FieldId>,
        code: KeyCode,
        modifiers: KeyModifiers,
        phase: KeyPhase,
    ) -> Self {
        Self {
            field: Some(field.into()),
            code: Some(code),
            modifiers,
            phase,
        }
    }

    /// Key-press of a character without modifiers
    pub fn press(field: impl Into<FieldId>, ch: char) -> Self {
        Self::new(
            field,
            KeyCode::from_char(ch),
            KeyModifiers::default(),
            KeyPhase::Press,
        )
    }

    /// Key-down of a character without modifiers
    pub fn down(field: impl Into<FieldId>, ch: char) -> Self {
        Self::new(
            field,
            KeyCode::from_char(ch),
            KeyModifiers::default(),
            KeyPhase::Down,
        )
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Character typed by this event, if it is a plain printable key-press
    pub fn typed_char(&self) -> Option<char> {
        if self.phase != KeyPhase::Press || self.modifiers.is_command() {
            return None;
        }
        self.code
            .filter(KeyCode::is_printable)
            .and_then(|code| code.to_char())
    }
}
