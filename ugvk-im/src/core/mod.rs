//! Core input-method functionality
//!
//! Field and event types, per-field modes, command bindings and the input
//! controller that ties them together.

pub mod command;
pub mod engine;
pub mod field;
pub mod keycode;
pub mod mode;
pub mod touch;
