//! Runtime for handling call-flow webhooks
//!
//! Runs the pure transition for each request and carries out the session
//! effects it returns.

mod sweeper;

pub use sweeper::spawn_session_sweeper;

use crate::records::RecordStore;
use crate::session::SessionStore;
use crate::state_machine::{transition, Effect, Event, FlowContext, MenuState, TransitionResult};
use std::sync::Arc;

/// Shared handler for every call
pub struct CallRuntime {
    sessions: Arc<SessionStore>,
    records: Arc<dyn RecordStore>,
    gather_timeout_secs: u32,
}

impl CallRuntime {
    pub fn new(
        sessions: Arc<SessionStore>,
        records: Arc<dyn RecordStore>,
        gather_timeout_secs: u32,
    ) -> Self {
        Self {
            sessions,
            records,
            gather_timeout_secs,
        }
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    /// Advance the call from `state` and apply the resulting session updates
    pub fn handle(&self, call_sid: &str, state: MenuState, event: Event) -> TransitionResult {
        let digits_len = match &event {
            Event::Digits { digits } => Some(digits.len()),
            Event::CallStarted { .. } => None,
        };

        let context =
            FlowContext::new(self.records.as_ref()).with_gather_timeout(self.gather_timeout_secs);
        let result = transition(state, &context, event);

        for effect in &result.effects {
            self.apply_effect(call_sid, effect);
        }

        tracing::info!(
            call_sid,
            from = %state,
            to = %result.new_state,
            digits_len,
            terminal = result.new_state.is_terminal(),
            "Call flow transition"
        );

        result
    }

    fn apply_effect(&self, call_sid: &str, effect: &Effect) {
        match effect {
            Effect::StartSession { caller } => {
                self.sessions.create_session(call_sid, caller.clone());
            }
            Effect::EndSession => self.sessions.end_session(call_sid),
            Effect::SetFlow(_) | Effect::RecordMenuInput { .. } | Effect::RecordQuery { .. } => {
                if let Some(patch) = effect.as_patch() {
                    self.sessions.update_session(call_sid, patch);
                }
            }
        }
    }
}
