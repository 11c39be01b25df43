//! ugvk-im: an in-place Uyghur input method
//!
//! This crate rewrites keystrokes aimed at text fields into Uyghur Arabic
//! script. It uses ugvk-engine for the key map, the carrier-letter rule and
//! swipe recognition, and adds per-field modes, Ctrl/Cmd commands and the
//! event routing a host plugs into.

pub mod config;
pub mod core;
pub mod source;

use std::sync::Once;

pub use core::engine::{EngineAction, EngineConfig, EngineResult, InputController};
pub use core::field::{FieldId, Splice, TextField, WritingDirection};
pub use core::keycode::{KeyCode, KeyEvent, KeyModifiers, KeyPhase};
pub use core::mode::FieldMode;
pub use core::touch::{TouchEvent, TouchPhase};
pub use source::{FieldSet, InputEvent, InputEventSource, ScriptedSource, Session};

static INIT_LOGGING: Once = Once::new();

/// Install the global tracing subscriber (stderr, `RUST_LOG` or `default_filter`).
/// Only the first call has any effect.
pub fn init_logging(default_filter: &str) {
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}
