//! Immutable mission definitions.
//!
//! Missions are authored once at process start and registered with the
//! catalog. Nothing mutates them afterwards; sessions refer to them by id.

use serde::{Deserialize, Serialize};

/// One objective within a mission.
///
/// `expected_commands` holds lowercase command prefixes; a submission
/// matches when its normalized form starts with any of them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MissionStep {
    pub id: String,
    /// Learner-facing prompt shown while this step is active.
    pub prompt: String,
    pub expected_commands: Vec<String>,
    /// Simulated terminal output shown when the step is solved.
    pub success_output: Vec<String>,
    /// Prompt shown after success when no next step exists.
    pub next_prompt: Option<String>,
    pub hint: String,
    pub score: u32,
}

/// A fixed, ordered training scenario. Step order is the only valid
/// progression path.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mission {
    pub id: String,
    pub title: String,
    pub difficulty: String,
    pub duration_seconds: u64,
    pub scenario: String,
    pub objectives: Vec<String>,
    pub recommended_commands: Vec<String>,
    /// Introductory narrative shown when a session starts.
    pub intro: String,
    pub steps: Vec<MissionStep>,
}

/// Catalog-level projection of a mission. Step detail is deliberately
/// excluded; it is discoverable only by playing a session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MissionSummary {
    pub id: String,
    pub title: String,
    pub difficulty: String,
    pub duration_seconds: u64,
    pub scenario: String,
    pub objectives: Vec<String>,
    pub recommended_commands: Vec<String>,
}

impl Mission {
    pub fn summary(&self) -> MissionSummary {
        MissionSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            difficulty: self.difficulty.clone(),
            duration_seconds: self.duration_seconds,
            scenario: self.scenario.clone(),
            objectives: self.objectives.clone(),
            recommended_commands: self.recommended_commands.clone(),
        }
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }
}
