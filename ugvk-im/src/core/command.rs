//! Ctrl/Cmd command bindings

use std::collections::HashMap;

use ugvk_engine::ConfigError;

use super::keycode::KeyEvent;
use crate::config::settings::CommandSettings;

/// Commands reachable from a Ctrl/Cmd key combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Flip the field between native-script and pass-through mode
    SwitchKeyboardMode,
    /// Flip the field's presentation direction
    SwitchWritingDirection,
}

/// Maps Ctrl/Cmd + letter to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDispatcher {
    bindings: HashMap<char, Command>,
}

/// Parse a binding such as "K" or "y" into its uppercase letter
fn parse_binding(key: &str) -> Result<char, ConfigError> {
    let mut chars = key.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => Ok(ch.to_ascii_uppercase()),
        _ => Err(ConfigError::InvalidCommandKey(key.to_string())),
    }
}

impl CommandDispatcher {
    /// Build bindings from settings, rejecting bad or clashing keys
    pub fn from_settings(settings: &CommandSettings) -> Result<Self, ConfigError> {
        let mut bindings = HashMap::new();
        for (key, command) in [
            (&settings.switch_keyboard_mode, Command::SwitchKeyboardMode),
            (&settings.switch_writing_direction, Command::SwitchWritingDirection),
        ] {
            let letter = parse_binding(key)?;
            if bindings.insert(letter, command).is_some() {
                return Err(ConfigError::DuplicateBinding(letter));
            }
        }
        Ok(Self { bindings })
    }

    /// Command triggered by a key event, if any.
    ///
    /// Requires Ctrl or Cmd; the letter is compared case-insensitively.
    pub fn resolve(&self, key: &KeyEvent) -> Option<Command> {
        if !key.modifiers.is_command() {
            return None;
        }
        let letter = key.code?.command_letter()?;
        self.bindings.get(&letter).copied()
    }

    /// Letter bound to a command
    pub fn binding(&self, command: Command) -> Option<char> {
        self.bindings
            .iter()
            .find(|(_, bound)| **bound == command)
            .map(|(letter, _)| *letter)
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        let bindings = HashMap::from([
            ('K', Command::SwitchKeyboardMode),
            ('Y', Command::SwitchWritingDirection),
        ]);
        Self { bindings }
    }
}
