//! ugvk-engine: the transformation core of the Uyghur input method.
//!
//! Pure building blocks with no knowledge of fields or hosts: character
//! classification, the key map, the carrier-letter insertion rule, swipe
//! recognition and field eligibility.

pub mod error;
pub mod gesture;
pub mod insertion;
pub mod keymap;
pub mod membership;
pub mod script;

pub use error::ConfigError;
pub use gesture::{GestureOutcome, GestureRecognizer, GestureThresholds, SwipeDirection, TouchPoint};
pub use insertion::InsertionPolicy;
pub use keymap::KeyMap;
pub use membership::FieldMembership;
pub use script::{CARRIER, LetterClass, classify, is_target_letter, is_vowel};
