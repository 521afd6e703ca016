//! Per-call session state
//!
//! Sessions are keyed by the provider's call identifier and expire after a
//! period of inactivity. Expired entries are purged lazily on access.

mod clock;
mod store;

pub use clock::{Clock, SystemClock};
pub use store::SessionStore;

#[cfg(test)]
pub use clock::ManualClock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sub-flow the caller has entered from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallFlow {
    Pnr,
    Train,
}

impl fmt::Display for CallFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallFlow::Pnr => write!(f, "pnr"),
            CallFlow::Train => write!(f, "train"),
        }
    }
}

/// Conversational state for one call leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    call_sid: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub caller: Option<String>,
    pub flow: Option<CallFlow>,
    pub last_menu: Option<String>,
    pub last_digits: Option<String>,
    /// Last PNR or train number looked up
    pub last_query_key: Option<String>,
    pub ended: bool,
}

impl Session {
    pub fn new(call_sid: impl Into<String>, caller: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            call_sid: call_sid.into(),
            created_at: now,
            updated_at: now,
            caller,
            flow: None,
            last_menu: None,
            last_digits: None,
            last_query_key: None,
            ended: false,
        }
    }

    #[cfg(test)]
    pub fn call_sid(&self) -> &str {
        &self.call_sid
    }

    /// Overlay every field set in `patch`
    fn apply(&mut self, patch: SessionPatch) {
        if let Some(flow) = patch.flow {
            self.flow = Some(flow);
        }
        if let Some(menu) = patch.last_menu {
            self.last_menu = Some(menu);
        }
        if let Some(digits) = patch.last_digits {
            self.last_digits = Some(digits);
        }
        if let Some(key) = patch.last_query_key {
            self.last_query_key = Some(key);
        }
    }

    /// Move `updated_at` forward, never backward
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }
}

/// Partial update for a session; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPatch {
    pub flow: Option<CallFlow>,
    pub last_menu: Option<String>,
    pub last_digits: Option<String>,
    pub last_query_key: Option<String>,
}

impl SessionPatch {
    pub fn flow(flow: CallFlow) -> Self {
        Self {
            flow: Some(flow),
            ..Self::default()
        }
    }

    pub fn menu_input(menu: impl Into<String>, digits: impl Into<String>) -> Self {
        Self {
            last_menu: Some(menu.into()),
            last_digits: Some(digits.into()),
            ..Self::default()
        }
    }

    pub fn query_key(key: impl Into<String>) -> Self {
        Self {
            last_query_key: Some(key.into()),
            ..Self::default()
        }
    }
}
