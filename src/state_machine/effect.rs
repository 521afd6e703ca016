//! Effects produced by state transitions

use crate::session::{CallFlow, SessionPatch};

/// Session updates to be applied after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace any session for this call with a fresh one
    StartSession { caller: Option<String> },

    /// Remember which sub-flow the caller chose
    SetFlow(CallFlow),

    /// Remember the menu and digits last seen
    RecordMenuInput { menu: String, digits: String },

    /// Remember the PNR or train number just looked up
    RecordQuery { key: String },

    /// Mark the call as finished
    EndSession,
}

impl Effect {
    pub fn record_menu_input(menu: &str, digits: &str) -> Self {
        Effect::RecordMenuInput {
            menu: menu.to_string(),
            digits: digits.to_string(),
        }
    }

    pub fn record_query(key: &str) -> Self {
        Effect::RecordQuery {
            key: key.to_string(),
        }
    }

    /// The field update this effect makes, if it is a plain patch
    pub fn as_patch(&self) -> Option<SessionPatch> {
        match self {
            Effect::SetFlow(flow) => Some(SessionPatch::flow(*flow)),
            Effect::RecordMenuInput { menu, digits } => {
                Some(SessionPatch::menu_input(menu.clone(), digits.clone()))
            }
            Effect::RecordQuery { key } => Some(SessionPatch::query_key(key.clone())),
            Effect::StartSession { .. } | Effect::EndSession => None,
        }
    }
}
