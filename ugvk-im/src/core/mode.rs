//! Per-field keyboard mode
//!
//! Every tracked field is either in native-script mode (keys are rewritten
//! into Uyghur letters) or in pass-through mode (keys behave natively).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::field::FieldId;

/// Keyboard mode of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMode {
    /// Keys are transformed (initial mode)
    #[default]
    NativeScript,
    /// Keys are not intercepted
    PassThrough,
}

impl FieldMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::NativeScript => Self::PassThrough,
            Self::PassThrough => Self::NativeScript,
        }
    }

    /// Short indicator for status displays
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::NativeScript => "ئۇ",
            Self::PassThrough => "En",
        }
    }
}

/// Modes of all tracked fields
#[derive(Debug, Clone, Default)]
pub struct ModeStateStore {
    modes: HashMap<FieldId, FieldMode>,
}

impl ModeStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a field in native-script mode. Tracking an already
    /// tracked field keeps its current mode.
    pub fn track(&mut self, field: &FieldId) -> FieldMode {
        *self.modes.entry(field.clone()).or_default()
    }

    /// Stop tracking a field, returning its last mode
    pub fn untrack(&mut self, field: &FieldId) -> Option<FieldMode> {
        self.modes.remove(field)
    }

    pub fn is_tracked(&self, field: &FieldId) -> bool {
        self.modes.contains_key(field)
    }

    pub fn mode(&self, field: &FieldId) -> Option<FieldMode> {
        self.modes.get(field).copied()
    }

    /// Flip a tracked field's mode and return the new one
    pub fn toggle(&mut self, field: &FieldId) -> Option<FieldMode> {
        let mode = self.modes.get_mut(field)?;
        *mode = mode.toggled();
        Some(*mode)
    }

    /// Force a tracked field into `mode`
    pub fn set(&mut self, field: &FieldId, mode: FieldMode) -> bool {
        match self.modes.get_mut(field) {
            Some(current) => {
                *current = mode;
                true
            }
            None => false,
        }
    }

    /// Tracked fields, sorted by name
    pub fn tracked_fields(&self) -> Vec<&FieldId> {
        let mut fields: Vec<&FieldId> = self.modes.keys().collect();
        fields.sort();
        fields
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn clear(&mut self) {
        self.modes.clear();
    }
}
