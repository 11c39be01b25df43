//! Error types for engine configuration

/// Errors raised while building an engine configuration.
///
/// Event handling itself never fails; these only surface when settings are
/// turned into thresholds and command bindings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("vertical tolerance ({tolerance}) must be non-negative and below the swipe distance ({distance})")]
    InvalidThresholds { distance: f64, tolerance: f64 },

    #[error("command key must be a single ASCII letter, got '{0}'")]
    InvalidCommandKey(String),

    #[error("key '{0}' is bound to more than one command")]
    DuplicateBinding(char),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
