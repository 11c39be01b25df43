//! Input controller - routes key and touch events for tracked fields
//!
//! The controller owns every field's keyboard mode and swipe recognizer. For
//! each event it decides whether the event is a command, a character to
//! rewrite, a swipe sample or something to leave alone, and reports the
//! outcome as an [`EngineResult`] for the host to apply.

mod input;
mod mode;
mod touch;
mod types;

pub use types::*;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use tracing::{debug, trace};
use ugvk_engine::GestureRecognizer;

use super::field::{FieldId, TextField};
use super::keycode::{KeyEvent, KeyPhase};
use super::mode::{FieldMode, ModeStateStore};

/// The main input controller
pub struct InputController {
    /// Engine configuration (immutable after construction)
    config: EngineConfig,
    /// Keyboard mode of every tracked field
    modes: ModeStateStore,
    /// Swipe recognizer of every tracked field
    gestures: HashMap<FieldId, GestureRecognizer>,
}

impl InputController {
    /// Create a controller that instruments every field
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            modes: ModeStateStore::new(),
            gestures: HashMap::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn modes(&self) -> &ModeStateStore {
        &self.modes
    }

    /// Current mode of a tracked field
    pub fn mode(&self, field: &FieldId) -> Option<FieldMode> {
        self.modes.mode(field)
    }

    pub fn is_eligible(&self, field: &FieldId) -> bool {
        self.config.membership.is_eligible(field.as_str())
    }

    /// Start tracking a field if it is eligible. Returns whether it is tracked.
    pub fn attach(&mut self, field: &FieldId) -> bool {
        if !self.is_eligible(field) {
            return false;
        }
        if !self.modes.is_tracked(field) {
            debug!("tracking field '{}'", field);
            self.modes.track(field);
            self.gestures
                .insert(field.clone(), GestureRecognizer::new(self.config.gesture));
        }
        true
    }

    /// Stop tracking a field, dropping its mode and any running gesture
    pub fn detach(&mut self, field: &FieldId) -> Option<FieldMode> {
        self.gestures.remove(field);
        self.modes.untrack(field)
    }

    /// Forget every tracked field
    pub fn reset(&mut self) {
        self.modes.clear();
        self.gestures.clear();
    }

    /// Process a key event for `field`, whose current buffer is `buffer`
    pub fn process_key(&mut self, key: &KeyEvent, buffer: &TextField) -> EngineResult {
        let (Some(field), Some(code)) = (key.field.as_ref(), key.code) else {
            debug!("ignoring malformed key event: {:?}", key);
            return EngineResult::not_consumed();
        };
        if !self.attach(field) {
            trace!("field '{}' is not instrumented", field);
            return EngineResult::not_consumed();
        }

        trace!(
            "key {:?} '{}' on '{}' in mode {:?}",
            key.phase,
            code,
            field,
            self.modes.mode(field)
        );

        match key.phase {
            KeyPhase::Down => self.process_key_down(field, key, buffer),
            KeyPhase::Press => self.process_key_press(field, key, buffer),
        }
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}
