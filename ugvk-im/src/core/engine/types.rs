//! Type definitions for the input controller

use ugvk_engine::{
    ConfigError, FieldMembership, GestureThresholds, InsertionPolicy, KeyMap, SwipeDirection,
};

use crate::config::Settings;

use super::super::command::CommandDispatcher;
use super::super::field::{FieldId, Splice, WritingDirection};
use super::super::mode::FieldMode;

/// Action to be performed by the host
#[derive(Debug, Clone, PartialEq)]
pub enum EngineAction {
    /// Replace part of the field's buffer and move the caret
    Splice { field: FieldId, splice: Splice },
    /// The field's keyboard mode changed
    ModeChanged { field: FieldId, mode: FieldMode },
    /// The field's presentation direction should change
    DirectionChanged {
        field: FieldId,
        direction: WritingDirection,
    },
    /// A swipe was recognized on the field
    Swiped {
        field: FieldId,
        direction: SwipeDirection,
    },
}

/// Result of processing an event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineResult {
    /// Whether the host must suppress default handling and propagation
    pub consumed: bool,
    /// Actions to perform
    pub actions: Vec<EngineAction>,
}

impl EngineResult {
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            actions: Vec::new(),
        }
    }

    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: EngineAction) -> Self {
        self.actions.push(action);
        self
    }

    /// The buffer splice carried by this result, if any
    pub fn splice(&self) -> Option<&Splice> {
        self.actions.iter().find_map(|action| match action {
            EngineAction::Splice { splice, .. } => Some(splice),
            _ => None,
        })
    }
}

/// Immutable engine configuration, built once at startup
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub keymap: KeyMap,
    pub insertion: InsertionPolicy,
    pub gesture: GestureThresholds,
    pub membership: FieldMembership,
    pub commands: CommandDispatcher,
}

impl EngineConfig {
    /// Build and validate the configuration described by `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        Ok(Self {
            keymap: KeyMap::uyghur(),
            insertion: InsertionPolicy::new(),
            gesture: GestureThresholds::new(
                settings.gesture.distance_threshold,
                settings.gesture.vertical_tolerance,
            )?,
            membership: FieldMembership::from_lists(
                &settings.fields.allow,
                &settings.fields.deny,
                settings.fields.attach_all,
            ),
            commands: CommandDispatcher::from_settings(&settings.commands)?,
        })
    }

    pub fn with_membership(mut self, membership: FieldMembership) -> Self {
        self.membership = membership;
        self
    }
}

/// Instruments every field with the standard layout and thresholds
impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            keymap: KeyMap::uyghur(),
            insertion: InsertionPolicy::new(),
            gesture: GestureThresholds::default(),
            membership: FieldMembership::all(),
            commands: CommandDispatcher::default(),
        }
    }
}
