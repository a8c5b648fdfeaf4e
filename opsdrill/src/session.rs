//! Mutable per-attempt session state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::budget;
use crate::mission::Mission;

/// One learner's in-progress or completed attempt at a mission.
///
/// Created by the store, mutated exclusively by the command evaluator
/// (progress, mistakes, score, history) and the hint dispenser (hint
/// marker). There is no deletion path; sessions live until process
/// shutdown.
#[derive(Debug, Clone)]
pub struct MissionSession {
    /// 128-bit random identifier; collisions are cryptographically
    /// negligible.
    pub session_id: String,
    /// Lookup relation to the catalog, never an owning reference.
    pub mission_id: String,
    /// 0-based, monotonically non-decreasing, bounded by the step count.
    pub step_index: usize,
    pub mistakes: u32,
    /// Sum of the scores of steps completed so far.
    pub total_score: u32,
    pub started_at: DateTime<Utc>,
    /// Copied from the mission at creation; a session's budget is fixed
    /// even if the mission definition later changes.
    pub time_limit_seconds: u64,
    /// Raw submissions, in order.
    pub history: Vec<String>,
    /// Step for which a hint was last requested.
    pub last_hint_index: Option<usize>,
}

impl MissionSession {
    /// Allocate a fresh session for `mission`, starting now.
    pub fn new(mission: &Mission) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            mission_id: mission.id.clone(),
            step_index: 0,
            mistakes: 0,
            total_score: 0,
            started_at: Utc::now(),
            time_limit_seconds: mission.duration_seconds,
            history: Vec::new(),
            last_hint_index: None,
        }
    }

    pub fn time_remaining(&self, now: DateTime<Utc>) -> u64 {
        budget::remaining_seconds(self.started_at, self.time_limit_seconds, now)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        budget::is_expired(self.started_at, self.time_limit_seconds, now)
    }
}
