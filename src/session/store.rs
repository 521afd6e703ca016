//! In-memory session store with TTL expiry

use super::{Clock, Session, SessionPatch, SystemClock};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Thread-safe map of live call sessions
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    ttl: chrono::Duration,
    clock: Arc<dyn Clock>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
            clock,
        }
    }

    /// Start a fresh session, replacing any previous one for this call
    pub fn create_session(&self, call_sid: &str, caller: Option<String>) -> Session {
        let now = self.clock.now();
        let mut sessions = self.lock();
        let session = Self::insert_fresh(&mut sessions, call_sid, caller, now);
        let purged = self.purge_locked(&mut sessions, now);
        if purged > 0 {
            tracing::debug!(purged, "Purged expired sessions");
        }
        session
    }

    /// Look up a live session; expired entries are removed and reported absent
    pub fn get_session(&self, call_sid: &str) -> Option<Session> {
        let now = self.clock.now();
        let mut sessions = self.lock();
        self.live_entry(&mut sessions, call_sid, now).cloned()
    }

    /// Merge `patch` into the session, creating it first if needed
    pub fn update_session(&self, call_sid: &str, patch: SessionPatch) -> Session {
        let now = self.clock.now();
        let mut sessions = self.lock();
        if self.live_entry(&mut sessions, call_sid, now).is_none() {
            tracing::debug!(call_sid, "Update for unknown call, creating session");
            self.purge_locked(&mut sessions, now);
        }

        let session = sessions
            .entry(call_sid.to_string())
            .or_insert_with(|| Session::new(call_sid, None, now));
        session.apply(patch);
        session.touch(now);
        session.clone()
    }

    /// Mark a live session as ended; unknown or expired calls are ignored
    pub fn end_session(&self, call_sid: &str) {
        let now = self.clock.now();
        let mut sessions = self.lock();
        if let Some(session) = self.live_entry(&mut sessions, call_sid, now) {
            session.ended = true;
            session.touch(now);
        }
    }

    /// Number of sessions that have not ended, after purging expired ones
    pub fn active_session_count(&self) -> usize {
        let now = self.clock.now();
        let mut sessions = self.lock();
        self.purge_locked(&mut sessions, now);
        sessions.values().filter(|s| !s.ended).count()
    }

    /// Remove every expired session, returning how many were dropped
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut sessions = self.lock();
        self.purge_locked(&mut sessions, now)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(session.updated_at) > self.ttl
    }

    fn live_entry<'a>(
        &self,
        sessions: &'a mut HashMap<String, Session>,
        call_sid: &str,
        now: DateTime<Utc>,
    ) -> Option<&'a mut Session> {
        let expired = self.is_expired(sessions.get(call_sid)?, now);
        if expired {
            sessions.remove(call_sid);
            tracing::debug!(call_sid, "Session expired");
            return None;
        }
        sessions.get_mut(call_sid)
    }

    fn insert_fresh(
        sessions: &mut HashMap<String, Session>,
        call_sid: &str,
        caller: Option<String>,
        now: DateTime<Utc>,
    ) -> Session {
        let session = Session::new(call_sid, caller, now);
        sessions.insert(call_sid.to_string(), session.clone());
        session
    }

    fn purge_locked(&self, sessions: &mut HashMap<String, Session>, now: DateTime<Utc>) -> usize {
        let before = sessions.len();
        sessions.retain(|_, session| !self.is_expired(session, now));
        before - sessions.len()
    }
}
