//! Text fields as seen by the engine: identity, buffer, selection and direction.
//!
//! Offsets are in characters, not bytes. Every letter of the target script is
//! a single UTF-16 unit, so these match the caret offsets web hosts report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a text field (its `name` attribute on the web)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&FieldId> for FieldId {
    fn from(id: &FieldId) -> Self {
        id.clone()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Presentation direction of a field. Does not affect transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingDirection {
    #[default]
    Rtl,
    Ltr,
}

impl WritingDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Rtl => Self::Ltr,
            Self::Ltr => Self::Rtl,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }
}

/// Replace the characters in `start..end` with `text` and put the caret at `cursor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub cursor: usize,
}

/// Snapshot of a field's buffer, caret and direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    selection_start: usize,
    selection_end: usize,
    direction: WritingDirection,
}

/// Byte offset of the `char_pos`-th character, clamped to the end.
fn byte_offset(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field holding `text` with the caret at its end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            selection_start: len,
            selection_end: len,
            direction: WritingDirection::default(),
        }
    }

    pub fn with_selection(mut self, start: usize, end: usize) -> Self {
        self.set_selection(start, end);
        self
    }

    pub fn with_direction(mut self, direction: WritingDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Selection as an ordered range clamped to the buffer
    pub fn selection(&self) -> (usize, usize) {
        let len = self.len();
        let start = self.selection_start.min(len);
        let end = self.selection_end.min(len);
        (start.min(end), start.max(end))
    }

    /// Caret position (selection start)
    pub fn cursor(&self) -> usize {
        self.selection().0
    }

    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.selection_start = start;
        self.selection_end = end;
    }

    pub fn direction(&self) -> WritingDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: WritingDirection) {
        self.direction = direction;
    }

    /// Splice that replaces the current selection with `text`
    pub fn splice_selection(&self, text: impl Into<String>) -> Splice {
        let text = text.into();
        let (start, end) = self.selection();
        let cursor = start + text.chars().count();
        Splice {
            start,
            end,
            text,
            cursor,
        }
    }

    /// Apply a splice to the buffer and move the caret.
    pub fn apply(&mut self, splice: &Splice) {
        let len = self.len();
        let start = splice.start.min(len);
        let end = splice.end.clamp(start, len);
        let byte_start = byte_offset(&self.text, start);
        let byte_end = byte_offset(&self.text, end);
        self.text.replace_range(byte_start..byte_end, &splice.text);
        self.set_selection(splice.cursor, splice.cursor);
    }

    /// Insert text at the selection the way an unmodified field would
    pub fn insert(&mut self, text: &str) {
        let splice = self.splice_selection(text);
        self.apply(&splice);
    }
}
