/*
 * Event Fold
 *
 * IDLE --BEGIN--> OPEN --field tokens--> OPEN --BEGIN--> (render) OPEN
 *                                             --END---> (render) IDLE
 *
 * State is owned by one method's pass and never shared. END (or a BEGIN)
 * with no open record renders nothing.
 */

use tracing::debug;

use super::render::render_record;
use crate::features::event_automaton::domain::{
    EventDescription, EventKind, EventRecord, Token, TokenKey,
};

#[derive(Debug, Default)]
pub struct AutomatonState {
    current: Option<EventRecord>,
    closed: Vec<EventDescription>,
}

impl AutomatonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Descriptions closed so far, in closing order
    pub fn closed(&self) -> &[EventDescription] {
        &self.closed
    }

    pub fn apply(&mut self, token: &Token) {
        match &token.key {
            TokenKey::Begin => {
                self.close();
                self.current = Some(EventRecord::new());
            }
            TokenKey::End => self.close(),
            TokenKey::EventType => {
                if let Some(record) = self.current.as_mut() {
                    record.event_type = token
                        .values
                        .first()
                        .and_then(|label| EventKind::from_label(label));
                }
            }
            TokenKey::Setter(kind) => match self.current.as_mut() {
                Some(record) => {
                    if !record.apply_setter(kind, &token.values) {
                        debug!("Ignoring unrecognized setter {}", kind.method_name());
                    }
                }
                None => debug!("Ignoring {} outside an event record", token),
            },
        }
    }

    /// Close any record still open and return every description
    pub fn finish(mut self) -> Vec<EventDescription> {
        self.close();
        self.closed
    }

    fn close(&mut self) {
        if let Some(record) = self.current.take() {
            let text = render_record(&record);
            self.closed.push(EventDescription { record, text });
        }
    }
}

/// Fold a complete token stream
pub fn fold_tokens(tokens: &[Token]) -> Vec<EventDescription> {
    let mut state = AutomatonState::new();
    for token in tokens {
        state.apply(token);
    }
    state.finish()
}
