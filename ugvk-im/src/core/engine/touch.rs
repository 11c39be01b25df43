//! Touch handling: swipes toggle the keyboard mode

use ugvk_engine::GestureOutcome;

use super::*;
use crate::core::touch::{TouchEvent, TouchPhase};

impl InputController {
    /// Process a touch event
    pub fn process_touch(&mut self, touch: &TouchEvent) -> EngineResult {
        let Some(field) = touch.field.as_ref() else {
            debug!("ignoring touch event without a field");
            return EngineResult::not_consumed();
        };
        if !self.attach(field) {
            return EngineResult::not_consumed();
        }
        let Some(recognizer) = self.gestures.get_mut(field) else {
            return EngineResult::not_consumed();
        };

        let outcome = match touch.phase {
            TouchPhase::Start => recognizer.touch_start(&touch.touches),
            TouchPhase::Move => recognizer.touch_move(&touch.touches),
            TouchPhase::End => recognizer.touch_end(),
            TouchPhase::Cancel => recognizer.touch_cancel(),
        };

        match outcome {
            GestureOutcome::Swipe(direction) => {
                debug!("swipe {:?} on '{}'", direction, field);
                let toggled = self.toggle_keyboard_mode(field);
                let mut result = EngineResult::consumed().with_action(EngineAction::Swiped {
                    field: field.clone(),
                    direction,
                });
                result.actions.extend(toggled.actions);
                result
            }
            outcome if outcome.suppresses_default() => EngineResult::consumed(),
            _ => EngineResult::not_consumed(),
        }
    }
}
