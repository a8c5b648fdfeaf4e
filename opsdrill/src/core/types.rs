//! Shared contract types for the mission engine.
//!
//! These are the stable payloads the engine hands to its transport
//! adapter. Gameplay "failures" (wrong command, expired budget, already
//! complete) are ordinary values here with `accepted = false`; only
//! unknown identifiers are errors (see [`crate::error`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mission::MissionSummary;

/// Structured result of submitting one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub accepted: bool,
    /// Simulated terminal lines to render for this submission.
    pub terminal_output: Vec<String>,
    pub feedback: String,
    pub step_index: usize,
    pub total_steps: usize,
    pub mission_complete: bool,
    /// Prompt for the next step, or the completed step's fallback prompt
    /// when the mission just finished. Absent on rejected commands.
    pub next_prompt: Option<String>,
    pub mistakes: u32,
    pub score_awarded: u32,
    pub total_score: u32,
    pub time_remaining_seconds: u64,
}

/// Result of requesting a hint.
///
/// `remaining_hints` counts the steps left after the current one, not a
/// hint budget — hints are unlimited and free. The historical wire name
/// is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintOutcome {
    pub step_index: usize,
    pub hint: String,
    pub remaining_hints: usize,
}

/// Payload returned when a session is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStart {
    pub session_id: String,
    pub mission: MissionSummary,
    pub intro: String,
    pub first_prompt: String,
    pub step_index: usize,
    pub total_steps: usize,
    pub time_limit_seconds: u64,
    pub started_at: DateTime<Utc>,
}

/// Point-in-time snapshot of a session's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub session_id: String,
    pub mission_id: String,
    pub step_index: usize,
    pub total_steps: usize,
    pub mistakes: u32,
    pub time_remaining_seconds: u64,
    pub completed: bool,
}
