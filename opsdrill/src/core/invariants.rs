//! Semantic invariants over authored mission content.
//!
//! Checked at authoring time (CLI `validate`) and by catalog tests:
//! - `duration_seconds >= 30`
//! - non-empty step list
//! - no duplicate step ids
//! - every step has at least one accepted prefix
//! - accepted prefixes are non-empty, trimmed, and lowercase (the
//!   matcher lowercases submissions, so uppercase prefixes could never
//!   match)

use std::collections::HashSet;

use crate::mission::Mission;

/// Minimum allotted duration for any mission, in seconds.
pub const MIN_DURATION_SECONDS: u64 = 30;

/// Check semantic invariants for one mission.
///
/// Returns a list of stable error messages (empty on success).
pub fn validate_mission(mission: &Mission) -> Vec<String> {
    let mut errors = Vec::new();

    if mission.duration_seconds < MIN_DURATION_SECONDS {
        errors.push(format!(
            "{}: duration_seconds {} is below the minimum {}",
            mission.id, mission.duration_seconds, MIN_DURATION_SECONDS
        ));
    }

    if mission.steps.is_empty() {
        errors.push(format!("{}: mission has no steps", mission.id));
    }

    let mut seen = HashSet::new();
    for step in &mission.steps {
        let path = format!("{}/{}", mission.id, step.id);

        if !seen.insert(step.id.clone()) {
            errors.push(format!("duplicate step id '{}' in {}", step.id, mission.id));
        }

        if step.expected_commands.is_empty() {
            errors.push(format!("{}: step has no accepted command prefixes", path));
        }

        for expected in &step.expected_commands {
            if expected.trim().is_empty() {
                errors.push(format!("{}: empty accepted command prefix", path));
            } else if expected.trim() != expected || expected.to_lowercase() != *expected {
                errors.push(format!(
                    "{}: accepted prefix '{}' must be trimmed lowercase",
                    path, expected
                ));
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{mission, step};

    /// A well-formed mission passes cleanly.
    #[test]
    fn valid_mission_has_no_errors() {
        let mission = mission("demo", vec![step("one", "pwd", 25), step("two", "ls", 50)]);
        assert!(validate_mission(&mission).is_empty());
    }

    /// Durations under the 30-second floor are rejected.
    #[test]
    fn rejects_short_duration() {
        let mut m = mission("demo", vec![step("one", "pwd", 25)]);
        m.duration_seconds = 29;
        let errors = validate_mission(&m);
        assert!(errors.iter().any(|err| err.contains("below the minimum")));
    }

    /// A mission needs at least one step.
    #[test]
    fn rejects_empty_step_list() {
        let m = mission("demo", vec![]);
        let errors = validate_mission(&m);
        assert_eq!(errors, vec!["demo: mission has no steps".to_string()]);
    }

    /// Duplicate step ids are reported once per duplicate.
    #[test]
    fn rejects_duplicate_step_ids() {
        let m = mission("demo", vec![step("one", "pwd", 25), step("one", "ls", 50)]);
        let errors = validate_mission(&m);
        assert!(errors.iter().any(|err| err.contains("duplicate step id")));
    }

    /// Steps must declare at least one accepted prefix.
    #[test]
    fn rejects_step_without_prefixes() {
        let mut m = mission("demo", vec![step("one", "pwd", 25)]);
        m.steps[0].expected_commands.clear();
        let errors = validate_mission(&m);
        assert!(
            errors
                .iter()
                .any(|err| err.contains("no accepted command prefixes"))
        );
    }

    /// Uppercase or padded prefixes can never match a normalized
    /// submission, so they fail validation.
    #[test]
    fn rejects_non_normalized_prefixes() {
        let mut m = mission("demo", vec![step("one", "pwd", 25)]);
        m.steps[0].expected_commands = vec!["PWD".to_string(), " ls".to_string()];
        let errors = validate_mission(&m);
        assert_eq!(errors.len(), 2);
        assert!(
            errors
                .iter()
                .all(|err| err.contains("must be trimmed lowercase"))
        );
    }
}
