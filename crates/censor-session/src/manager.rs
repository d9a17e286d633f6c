//! SessionManager: concurrent per-session access via DashMap.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use censor_core::{CensorError, CensorResult, Entity};
use censor_text::CensorEngine;

use crate::state::SessionState;
use crate::ticket::RequestTicket;

/// A stored session with activity timestamps.
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl SessionEntry {
    fn new(state: SessionState) -> Self {
        let now = Utc::now();
        Self {
            state,
            created_at: now,
            last_activity: now,
        }
    }

    fn replace(&mut self, state: SessionState) {
        self.state = state;
        self.last_activity = Utc::now();
    }
}

/// Thread-safe session manager for hosts serving many callers. Each
/// session still has a single logical owner; the map only guards against
/// concurrent access to different sessions and to the same entry.
pub struct SessionManager {
    sessions: Arc<DashMap<String, SessionEntry>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Create a session with a fresh UUID and return the ID.
    pub fn create_session(&self, text: impl Into<String>) -> String {
        let session_id = uuid::Uuid::new_v4().to_string();
        self.create_session_with_id(session_id.clone(), text);
        session_id
    }

    /// Create (or replace) a session under a caller-chosen ID.
    pub fn create_session_with_id(&self, session_id: String, text: impl Into<String>) {
        self.sessions
            .insert(session_id, SessionEntry::new(SessionState::new(text)));
    }

    /// Snapshot of a session's state.
    pub fn get_state(&self, session_id: &str) -> Option<SessionState> {
        self.sessions.get(session_id).map(|r| r.state.clone())
    }

    /// Apply a transition. Returns false if the session is not found.
    pub fn update(&self, session_id: &str, f: impl FnOnce(&SessionState) -> SessionState) -> bool {
        if let Some(mut entry) = self.sessions.get_mut(session_id) {
            let next = f(&entry.state);
            entry.replace(next);
            true
        } else {
            false
        }
    }

    /// Start a detection run and hand back its ticket.
    pub fn begin_detection(&self, session_id: &str) -> Option<RequestTicket> {
        let mut entry = self.sessions.get_mut(session_id)?;
        let (next, ticket) = entry.state.on_detect_start();
        entry.replace(next);
        Some(ticket)
    }

    /// Apply a detector outcome for `ticket`. Outcomes for superseded
    /// tickets are discarded with `StaleResponse`.
    pub fn complete_detection(
        &self,
        session_id: &str,
        ticket: RequestTicket,
        outcome: CensorResult<Vec<Entity>>,
        engine: &CensorEngine,
    ) -> CensorResult<()> {
        let mut entry = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| CensorError::SessionNotFound {
                id: session_id.to_string(),
            })?;

        if !entry.state.is_current(ticket) {
            return Err(CensorError::StaleResponse {
                sequence: ticket.sequence(),
                latest: entry.state.latest_request(),
            });
        }

        let next = match outcome {
            Ok(entities) => entry.state.on_detect_success(ticket, &entities, engine)?,
            Err(e) => entry.state.on_detect_failure(ticket, &e),
        };
        entry.replace(next);
        Ok(())
    }

    pub fn remove_session(&self, session_id: &str) -> Option<SessionState> {
        self.sessions.remove(session_id).map(|(_, v)| v.state)
    }

    /// Number of active sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    /// Drop sessions idle for longer than `max_idle`. Returns how many were removed.
    pub fn cleanup_stale_sessions(&self, max_idle: Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut removed = 0;
        self.sessions.retain(|_, entry| {
            let keep = entry.last_activity >= cutoff;
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
