//! Host side: event sources and an in-memory set of fields
//!
//! A host adapter turns its native key/touch callbacks into [`InputEvent`]s
//! and exposes them through [`InputEventSource`]. [`Session`] drives an
//! [`InputController`] from any source against a [`FieldSet`], applying the
//! resulting splices and direction changes, and performing the default action
//! (inserting the typed character) for key-presses the engine did not consume.

use std::collections::{BTreeMap, VecDeque};

use tracing::trace;

use crate::core::engine::{EngineAction, EngineResult, InputController};
use crate::core::field::{FieldId, TextField};
use crate::core::keycode::KeyEvent;
use crate::core::touch::TouchEvent;

/// A classified event from the host
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    Touch(TouchEvent),
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

impl From<TouchEvent> for InputEvent {
    fn from(event: TouchEvent) -> Self {
        Self::Touch(event)
    }
}

/// Anything that yields host events in delivery order
pub trait InputEventSource {
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// A fixed, pre-recorded sequence of events
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    events: VecDeque<InputEvent>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: impl Into<InputEvent>) {
        self.events.push_back(event.into());
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<InputEvent>> for ScriptedSource {
    fn from(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

impl InputEventSource for ScriptedSource {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

/// Text fields of a host document, keyed by name
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: BTreeMap<FieldId, TextField>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<FieldId>, field: TextField) {
        self.fields.insert(id.into(), field);
    }

    pub fn get(&self, id: &FieldId) -> Option<&TextField> {
        self.fields.get(id)
    }

    /// Field by name, created empty on first use
    pub fn entry(&mut self, id: &FieldId) -> &mut TextField {
        self.fields.entry(id.clone()).or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &TextField)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Apply the buffer and direction changes of an engine result
    pub fn apply(&mut self, result: &EngineResult) {
        for action in &result.actions {
            match action {
                EngineAction::Splice { field, splice } => self.entry(field).apply(splice),
                EngineAction::DirectionChanged { field, direction } => {
                    self.entry(field).set_direction(*direction)
                }
                EngineAction::ModeChanged { .. } | EngineAction::Swiped { .. } => {}
            }
        }
    }

    /// What an unmodified field does with a key-press: insert the typed character
    fn apply_default(&mut self, key: &KeyEvent) {
        if let (Some(field), Some(ch)) = (key.field.as_ref(), key.typed_char()) {
            let mut buf = [0u8; 4];
            self.entry(field).insert(ch.encode_utf8(&mut buf));
        }
    }
}

/// A controller bound to a set of fields
pub struct Session {
    controller: InputController,
    fields: FieldSet,
}

impl Session {
    pub fn new(controller: InputController) -> Self {
        Self::with_fields(controller, FieldSet::new())
    }

    pub fn with_fields(controller: InputController, fields: FieldSet) -> Self {
        Self { controller, fields }
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut InputController {
        &mut self.controller
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldSet {
        &mut self.fields
    }

    /// Handle one event and apply its outcome to the fields
    pub fn dispatch(&mut self, event: &InputEvent) -> EngineResult {
        let result = match event {
            InputEvent::Key(key) => {
                let result = match key.field.as_ref() {
                    Some(id) => {
                        let buffer = self.fields.entry(id);
                        self.controller.process_key(key, buffer)
                    }
                    None => self.controller.process_key(key, &TextField::new()),
                };
                if !result.consumed {
                    self.fields.apply_default(key);
                }
                result
            }
            InputEvent::Touch(touch) => self.controller.process_touch(touch),
        };
        trace!("event result: {:?}", result);
        self.fields.apply(&result);
        result
    }

    /// Drain a source, returning how many events were handled
    pub fn run(&mut self, source: &mut dyn InputEventSource) -> usize {
        let mut count = 0;
        while let Some(event) = source.next_event() {
            self.dispatch(&event);
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::EngineConfig;
    use crate::core::keycode::KeyModifiers;
    use crate::core::mode::FieldMode;
    use crate::core::touch::TouchPhase;
    use ugvk_engine::FieldMembership;

    fn type_events(field: &str, keys: &str) -> Vec<InputEvent> {
        keys.chars()
            .flat_map(|ch| {
                [
                    InputEvent::Key(KeyEvent::down(field, ch)),
                    InputEvent::Key(KeyEvent::press(field, ch)),
                ]
            })
            .collect()
    }

    #[test]
    fn test_session_types_words() {
        let mut session = Session::new(InputController::new());
        let mut source = ScriptedSource::from(type_events("comment", "fnf bf"));
        assert_eq!(session.run(&mut source), 12);
        let field = session.fields().get(&FieldId::from("comment")).unwrap();
        assert_eq!(field.text(), "ئانا با");
        assert_eq!(field.cursor(), 7);
    }

    #[test]
    fn test_passthrough_matches_plain_field() {
        let mut session = Session::new(InputController::new());
        let ctrl_k =
            KeyEvent::down("name", 'k').with_modifiers(KeyModifiers::new().with_control(true));
        session.dispatch(&ctrl_k.into());
        let mut source = ScriptedSource::from(type_events("name", "Hello, world!"));
        session.run(&mut source);
        let field = session.fields().get(&FieldId::from("name")).unwrap();
        assert_eq!(field.text(), "Hello, world!");
    }

    #[test]
    fn test_ineligible_field_is_plain() {
        let config = EngineConfig::default()
            .with_membership(FieldMembership::from_lists("field1:field2", "", false));
        let mut session = Session::new(InputController::with_config(config));
        let mut source = ScriptedSource::new();
        let events = type_events("field1", "b")
            .into_iter()
            .chain(type_events("field3", "b"));
        for event in events {
            source.push(event);
        }
        session.run(&mut source);
        assert_eq!(session.fields().get(&FieldId::from("field1")).unwrap().text(), "ب");
        assert_eq!(session.fields().get(&FieldId::from("field3")).unwrap().text(), "b");
    }

    #[test]
    fn test_swipe_and_direction_applied() {
        let mut session = Session::new(InputController::new());
        let id = FieldId::from("memo");
        session.dispatch(&TouchEvent::single("memo", TouchPhase::Start, 100.0, 20.0).into());
        session.dispatch(&TouchEvent::single("memo", TouchPhase::Move, 40.0, 22.0).into());
        let result = session.dispatch(&TouchEvent::end("memo").into());
        assert!(result.consumed);
        assert_eq!(session.controller().mode(&id), Some(FieldMode::PassThrough));

        let ctrl_y =
            KeyEvent::down("memo", 'y').with_modifiers(KeyModifiers::new().with_control(true));
        session.dispatch(&ctrl_y.into());
        assert_eq!(
            session.fields().get(&id).unwrap().direction(),
            crate::core::field::WritingDirection::Ltr
        );
    }

    #[test]
    fn test_malformed_event_leaves_fields_alone() {
        let mut session = Session::new(InputController::new());
        let mut key = KeyEvent::press("memo", 'b');
        key.field = None;
        let result = session.dispatch(&key.into());
        assert!(!result.consumed);
        assert!(session.fields().is_empty());
    }
}
