//! Carrier-letter insertion
//!
//! A Uyghur vowel that opens a syllable is written with a hamza carrier (ئ)
//! in front of it. While typing, that means: a vowel typed at the start of
//! the buffer, after a non-Arabic character, or right after another vowel
//! gets the carrier prepended. Only the single character before the cursor
//! is inspected.

use crate::script::{CARRIER, is_target_letter, is_vowel};

/// Decides the literal text inserted for a mapped character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionPolicy {
    carrier: char,
}

impl InsertionPolicy {
    pub fn new() -> Self {
        Self { carrier: CARRIER }
    }

    pub fn carrier(&self) -> char {
        self.carrier
    }

    /// Text to insert for `ch` at character offset `cursor` of `text`.
    ///
    /// An offset past the end of `text` behaves as if nothing precedes it.
    pub fn replacement(&self, ch: char, text: &str, cursor: usize) -> String {
        if !is_vowel(ch) || !self.needs_carrier(text, cursor) {
            return ch.to_string();
        }
        let mut out = String::with_capacity(self.carrier.len_utf8() + ch.len_utf8());
        out.push(self.carrier);
        out.push(ch);
        out
    }

    fn needs_carrier(&self, text: &str, cursor: usize) -> bool {
        let Some(prev) = cursor.checked_sub(1).and_then(|i| text.chars().nth(i)) else {
            return true;
        };
        !is_target_letter(prev) || is_vowel(prev)
    }
}

impl Default for InsertionPolicy {
    fn default() -> Self {
        Self::new()
    }
}
