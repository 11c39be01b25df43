//! Touch events

use serde::{Deserialize, Serialize};
use ugvk_engine::TouchPoint;

use super::field::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A touch event aimed at a text field, with every touch point currently down
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    /// Target field (None if the host could not tell)
    pub field: Option<FieldId>,
    pub phase: TouchPhase,
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    pub fn new(field: impl Into<FieldId>, phase: TouchPhase, touches: Vec<TouchPoint>) -> Self {
        Self {
            field: Some(field.into()),
            phase,
            touches,
        }
    }

    /// Single-finger event at `(x, y)`
    pub fn single(field: impl Into<FieldId>, phase: TouchPhase, x: f64, y: f64) -> Self {
        Self::new(field, phase, vec![TouchPoint::new(x, y)])
    }

    /// Touch end (no touch points remain)
    pub fn end(field: impl Into<FieldId>) -> Self {
        Self::new(field, TouchPhase::End, Vec::new())
    }
}
