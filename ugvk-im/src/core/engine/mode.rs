//! Mode and direction switching

use tracing::info;

use super::*;
use crate::core::command::Command;

impl InputController {
    /// Run a command on `field`
    pub(super) fn execute(
        &mut self,
        command: Command,
        field: &FieldId,
        buffer: &TextField,
    ) -> EngineResult {
        debug!("command {:?} on '{}'", command, field);
        match command {
            Command::SwitchKeyboardMode => self.toggle_keyboard_mode(field),
            Command::SwitchWritingDirection => Self::toggle_writing_direction(field, buffer),
        }
    }

    /// Flip a tracked field between native-script and pass-through mode
    pub fn toggle_keyboard_mode(&mut self, field: &FieldId) -> EngineResult {
        let Some(mode) = self.modes.toggle(field) else {
            return EngineResult::not_consumed();
        };
        info!("field '{}' switched to {:?}", field, mode);
        EngineResult::consumed().with_action(EngineAction::ModeChanged {
            field: field.clone(),
            mode,
        })
    }

    /// Ask the host to flip the field's presentation direction
    fn toggle_writing_direction(field: &FieldId, buffer: &TextField) -> EngineResult {
        let direction = buffer.direction().toggled();
        debug!("field '{}' direction -> {}", field, direction.as_str());
        EngineResult::consumed().with_action(EngineAction::DirectionChanged {
            field: field.clone(),
            direction,
        })
    }
}
