//! Test-only helpers for constructing missions and sessions.

use chrono::{Duration, Utc};

use crate::mission::{Mission, MissionStep};
use crate::session::MissionSession;

/// Create a deterministic step with one accepted prefix.
pub fn step(id: &str, prefix: &str, score: u32) -> MissionStep {
    MissionStep {
        id: id.to_string(),
        prompt: format!("prompt for {id}"),
        expected_commands: vec![prefix.to_string()],
        success_output: vec![format!("{id} ok")],
        next_prompt: None,
        hint: format!("hint for {id}"),
        score,
    }
}

/// Create a deterministic mission with a 300 second budget.
pub fn mission(id: &str, steps: Vec<MissionStep>) -> Mission {
    Mission {
        id: id.to_string(),
        title: format!("{id} title"),
        difficulty: "Beginner".to_string(),
        duration_seconds: 300,
        scenario: format!("{id} scenario"),
        objectives: Vec::new(),
        recommended_commands: Vec::new(),
        intro: format!("{id} intro"),
        steps,
    }
}

/// Three-step mission with escalating scores and a closing prompt on the
/// final step.
pub fn three_step_mission() -> Mission {
    let mut last = step("three", "step-three", 200);
    last.next_prompt = Some("closing prompt".to_string());
    mission(
        "drill",
        vec![
            step("one", "step-one", 100),
            step("two", "step-two", 150),
            last,
        ],
    )
}

/// A session started just now.
pub fn fresh(mission: &Mission) -> MissionSession {
    MissionSession::new(mission)
}

/// A session whose time budget already ran out.
pub fn expired(mission: &Mission) -> MissionSession {
    let mut session = MissionSession::new(mission);
    session.started_at = Utc::now() - Duration::seconds(mission.duration_seconds as i64 + 60);
    session
}
