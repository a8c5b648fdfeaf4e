//! The mission store: one explicitly constructed service object owning
//! the catalog and the live session map.
//!
//! Handlers share it by reference (`Arc` at the transport layer); there
//! is no ambient global state. The session map is guarded by a single
//! mutex held across each whole read-modify-write, so concurrent
//! double-submission against one session cannot lose updates. The
//! catalog is read-only after construction and needs no lock.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::catalog::MissionCatalog;
use crate::content;
use crate::core::evaluate;
use crate::core::types::{CommandOutcome, HintOutcome, SessionStart, SessionStatus};
use crate::error::StoreError;
use crate::mission::MissionSummary;
use crate::session::MissionSession;

pub struct MissionStore {
    catalog: MissionCatalog,
    sessions: Mutex<HashMap<String, MissionSession>>,
}

impl MissionStore {
    pub fn new(catalog: MissionCatalog) -> Self {
        Self {
            catalog,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Store preloaded with the built-in training missions.
    pub fn with_builtin_missions() -> Self {
        Self::new(content::builtin_catalog())
    }

    /// Mission summaries in registration order.
    pub fn list_missions(&self) -> Vec<MissionSummary> {
        self.catalog.list()
    }

    /// Allocate a session against a registered mission.
    pub fn start_session(&self, mission_id: &str) -> Result<SessionStart, StoreError> {
        let mission = self.catalog.get(mission_id)?;
        let session = MissionSession::new(mission);
        info!(
            session_id = %session.session_id,
            mission_id,
            time_limit_seconds = session.time_limit_seconds,
            "session started"
        );

        let start = SessionStart {
            session_id: session.session_id.clone(),
            mission: mission.summary(),
            intro: mission.intro.clone(),
            first_prompt: mission
                .steps
                .first()
                .map(|step| step.prompt.clone())
                .unwrap_or_default(),
            step_index: session.step_index,
            total_steps: mission.total_steps(),
            time_limit_seconds: session.time_limit_seconds,
            started_at: session.started_at,
        };

        self.sessions
            .lock()
            .insert(session.session_id.clone(), session);
        Ok(start)
    }

    /// Judge one submission against the session's current step.
    pub fn evaluate_command(
        &self,
        session_id: &str,
        command: &str,
    ) -> Result<CommandOutcome, StoreError> {
        let mut sessions = self.sessions.lock();
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_string()))?;
        // Sessions only ever reference registered missions, and missions
        // are never removed, so this lookup cannot fail in practice.
        let mission = self.catalog.get(&session.mission_id)?;

        let outcome = evaluate::evaluate_command(mission, session, command, Utc::now());
        debug!(
            session_id,
            accepted = outcome.accepted,
            step_index = outcome.step_index,
            mistakes = outcome.mistakes,
            "command evaluated"
        );
        Ok(outcome)
    }

    /// Hint for the session's current step; progress is untouched.
    pub fn request_hint(&self, session_id: &str) -> Result<HintOutcome, StoreError> {
        let mut sessions = self.sessions.lock();
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_string()))?;
        let mission = self.catalog.get(&session.mission_id)?;
        Ok(evaluate::dispense_hint(mission, session))
    }

    /// Point-in-time progress snapshot, with remaining time computed
    /// fresh from the wall clock.
    pub fn session_status(&self, session_id: &str) -> Result<SessionStatus, StoreError> {
        let sessions = self.sessions.lock();
        let session = sessions
            .get(session_id)
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_string()))?;
        let mission = self.catalog.get(&session.mission_id)?;

        Ok(SessionStatus {
            session_id: session.session_id.clone(),
            mission_id: mission.id.clone(),
            step_index: session.step_index,
            total_steps: mission.total_steps(),
            mistakes: session.mistakes,
            time_remaining_seconds: session.time_remaining(Utc::now()),
            completed: session.step_index >= mission.total_steps(),
        })
    }

    /// Move a session's start time into the past, to exercise expiry
    /// without sleeping.
    #[cfg(any(test, feature = "test-support"))]
    pub fn rewind_started_at(&self, session_id: &str, seconds: i64) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock();
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_string()))?;
        session.started_at -= chrono::Duration::seconds(seconds);
        Ok(())
    }

    /// Clone of the raw session state, for assertions on fields the
    /// public payloads do not carry (history, hint marker).
    #[cfg(any(test, feature = "test-support"))]
    pub fn session_snapshot(&self, session_id: &str) -> Result<MissionSession, StoreError> {
        self.sessions
            .lock()
            .get(session_id)
            .cloned()
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_string()))
    }

    /// Number of live sessions.
    #[cfg(any(test, feature = "test-support"))]
    pub fn session_count(&self) -> usize {
        self.sessions.lock().len()
    }
}
