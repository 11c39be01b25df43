//! Keystroke handling (key-down commands, key-press rewriting)

use super::*;

impl InputController {
    /// Key-down only detects Ctrl/Cmd commands
    pub(super) fn process_key_down(
        &mut self,
        field: &FieldId,
        key: &KeyEvent,
        buffer: &TextField,
    ) -> EngineResult {
        match self.config.commands.resolve(key) {
            Some(command) => self.execute(command, field, buffer),
            None => EngineResult::not_consumed(),
        }
    }

    /// Key-press rewrites characters while the field is in native-script mode
    pub(super) fn process_key_press(
        &mut self,
        field: &FieldId,
        key: &KeyEvent,
        buffer: &TextField,
    ) -> EngineResult {
        if key.modifiers.is_command() || self.modes.mode(field) != Some(FieldMode::NativeScript) {
            return EngineResult::not_consumed();
        }
        let Some(code) = key.code else {
            return EngineResult::not_consumed();
        };

        if let Some(mapped) = code.to_char().and_then(|ch| self.config.keymap.get(ch)) {
            let text = self
                .config
                .insertion
                .replacement(mapped, buffer.text(), buffer.cursor());
            trace!("'{}' -> \"{}\"", code, text);
            let splice = buffer.splice_selection(text);
            return EngineResult::consumed().with_action(EngineAction::Splice {
                field: field.clone(),
                splice,
            });
        }

        // Unmapped Latin letters are swallowed so no Latin text leaks into native mode
        if code.is_alphabetic() {
            trace!("swallowing unmapped letter '{}'", code);
            return EngineResult::consumed();
        }

        EngineResult::not_consumed()
    }
}
