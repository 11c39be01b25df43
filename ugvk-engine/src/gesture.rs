//! Horizontal swipe recognition
//!
//! A swipe is a single-finger horizontal drag. The recognizer is a small state
//! machine fed with touch samples for one field:
//!
//! - `Idle` → `Tracking` on a single-touch start
//! - `Tracking` stays `Tracking` on each move that keeps the finger within the
//!   vertical tolerance and moving in one horizontal direction
//! - `Tracking` → `Idle` on end (emitting a swipe if the drag was long enough),
//!   on cancel, on a second finger, on vertical drift, or on reversal

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ConfigError, Result};

/// One active touch point, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Direction of a recognized swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    fn of(dx: f64) -> Self {
        if dx > 0.0 { Self::Right } else { Self::Left }
    }

    /// Whether a horizontal delta points against this direction
    fn is_reversed_by(self, dx: f64) -> bool {
        match self {
            Self::Right => dx < 0.0,
            Self::Left => dx > 0.0,
        }
    }
}

/// Distances that decide whether a drag counts as a swipe.
///
/// Always satisfies `0 <= vertical_tolerance < distance`, including when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct GestureThresholds {
    /// Minimum horizontal travel for a swipe
    distance: f64,
    /// Maximum vertical drift before the gesture is abandoned; also the
    /// horizontal travel after which the direction is locked
    vertical_tolerance: f64,
}

/// Unchecked wire form of [`GestureThresholds`]
#[derive(Deserialize)]
struct RawThresholds {
    distance: f64,
    vertical_tolerance: f64,
}

impl TryFrom<RawThresholds> for GestureThresholds {
    type Error = ConfigError;

    fn try_from(raw: RawThresholds) -> Result<Self> {
        Self::new(raw.distance, raw.vertical_tolerance)
    }
}

impl GestureThresholds {
    pub const DEFAULT_DISTANCE: f64 = 50.0;
    pub const DEFAULT_VERTICAL_TOLERANCE: f64 = 15.0;

    /// Create thresholds, requiring `0 <= vertical_tolerance < distance`.
    pub fn new(distance: f64, vertical_tolerance: f64) -> Result<Self> {
        if !(vertical_tolerance >= 0.0 && vertical_tolerance < distance) {
            return Err(ConfigError::InvalidThresholds {
                distance,
                tolerance: vertical_tolerance,
            });
        }
        Ok(Self {
            distance,
            vertical_tolerance,
        })
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn vertical_tolerance(&self) -> f64 {
        self.vertical_tolerance
    }
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            distance: Self::DEFAULT_DISTANCE,
            vertical_tolerance: Self::DEFAULT_VERTICAL_TOLERANCE,
        }
    }
}

/// What a single touch sample did to the recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Sample arrived outside a session and was not used
    Ignored,
    /// A new session started
    Started,
    /// Session still running; the host should suppress scrolling/selection
    Tracking,
    /// Session abandoned, nothing emitted
    Cancelled,
    /// Session ended with a swipe
    Swipe(SwipeDirection),
}

impl GestureOutcome {
    /// Whether the host's default handling of the sample should be suppressed
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::Tracking | Self::Swipe(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Session {
    start: TouchPoint,
    dx: f64,
    locked: Option<SwipeDirection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum GestureState {
    #[default]
    Idle,
    Tracking(Session),
}

/// Swipe recognizer for one field. Reset in place between sessions.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    thresholds: GestureThresholds,
    state: GestureState,
}

impl GestureRecognizer {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            state: GestureState::Idle,
        }
    }

    pub fn thresholds(&self) -> GestureThresholds {
        self.thresholds
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, GestureState::Tracking(_))
    }

    /// Horizontal travel of the running session
    pub fn delta(&self) -> Option<f64> {
        match self.state {
            GestureState::Tracking(session) => Some(session.dx),
            GestureState::Idle => None,
        }
    }

    /// Drop any running session
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Touch start with the currently active touch points
    pub fn touch_start(&mut self, touches: &[TouchPoint]) -> GestureOutcome {
        match touches {
            [start] => {
                self.state = GestureState::Tracking(Session {
                    start: *start,
                    dx: 0.0,
                    locked: None,
                });
                GestureOutcome::Started
            }
            _ => self.cancel("multi-touch start"),
        }
    }

    /// Touch move with the currently active touch points
    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> GestureOutcome {
        let GestureState::Tracking(session) = &mut self.state else {
            return GestureOutcome::Ignored;
        };
        let [point] = touches else {
            return self.cancel("multi-touch move");
        };

        let dx = point.x - session.start.x;
        let dy = point.y - session.start.y;

        if dy.abs() > self.thresholds.vertical_tolerance {
            return self.cancel("vertical drift");
        }
        if session.locked.is_some_and(|dir| dir.is_reversed_by(dx)) {
            return self.cancel("direction reversed");
        }

        session.dx = dx;
        if session.locked.is_none() && dx.abs() > self.thresholds.vertical_tolerance {
            session.locked = Some(SwipeDirection::of(dx));
        }
        GestureOutcome::Tracking
    }

    /// Touch end: resolves the session
    pub fn touch_end(&mut self) -> GestureOutcome {
        let GestureState::Tracking(session) = std::mem::take(&mut self.state) else {
            return GestureOutcome::Ignored;
        };
        if session.dx.abs() >= self.thresholds.distance {
            let direction = SwipeDirection::of(session.dx);
            trace!("swipe resolved: {:?} dx={}", direction, session.dx);
            GestureOutcome::Swipe(direction)
        } else {
            trace!("swipe too short: dx={}", session.dx);
            GestureOutcome::Cancelled
        }
    }

    /// Touch cancelled by the host
    pub fn touch_cancel(&mut self) -> GestureOutcome {
        if self.is_tracking() {
            self.cancel("host cancel")
        } else {
            GestureOutcome::Ignored
        }
    }

    fn cancel(&mut self, reason: &str) -> GestureOutcome {
        trace!("gesture cancelled: {}", reason);
        self.reset();
        GestureOutcome::Cancelled
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureThresholds::default())
    }
}
