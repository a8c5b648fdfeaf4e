//! The step-advancement state machine and hint dispensing.
//!
//! States are `{index = 0 .. index = N}` where N is the step count, with
//! `index = N` absorbing (mission complete). Transitions move strictly
//! one step forward and only on an accepted command. There is no
//! fail-out state: mistakes accumulate without limit and never block
//! further attempts at the same step.

use chrono::{DateTime, Utc};

use crate::core::matcher;
use crate::core::types::{CommandOutcome, HintOutcome};
use crate::mission::Mission;
use crate::session::MissionSession;

const COMPLETE_OUTPUT: &str = "Mission already completed";
const COMPLETE_FEEDBACK: &str = "No more tasks left. Great work!";
const EXPIRED_OUTPUT: &str = "Session expired";
const EXPIRED_FEEDBACK: &str = "Time is up! Restart the mission to try again.";
const ACCEPTED_FEEDBACK: &str = "Great job!";
const REJECTED_OUTPUT: &str = "command not recognized";
const REJECTED_FEEDBACK: &str =
    "That didn't solve it. Check the mission objectives and try another command.";
const COMPLETE_HINT: &str = "Mission complete! No hints needed.";

/// Judge one submission against the session's current step.
///
/// Precedence is fixed: completion, then time budget, then matching. The
/// completion check comes first so a finished session never reports as
/// expired.
pub fn evaluate_command(
    mission: &Mission,
    session: &mut MissionSession,
    raw_command: &str,
    now: DateTime<Utc>,
) -> CommandOutcome {
    let total_steps = mission.total_steps();

    if session.step_index >= total_steps {
        return CommandOutcome {
            accepted: false,
            terminal_output: vec![COMPLETE_OUTPUT.to_string()],
            feedback: COMPLETE_FEEDBACK.to_string(),
            step_index: session.step_index,
            total_steps,
            mission_complete: true,
            next_prompt: None,
            mistakes: session.mistakes,
            score_awarded: 0,
            total_score: session.total_score,
            time_remaining_seconds: session.time_remaining(now),
        };
    }

    if session.is_expired(now) {
        session.mistakes += 1;
        return CommandOutcome {
            accepted: false,
            terminal_output: vec![EXPIRED_OUTPUT.to_string()],
            feedback: EXPIRED_FEEDBACK.to_string(),
            step_index: session.step_index,
            total_steps,
            mission_complete: false,
            next_prompt: None,
            mistakes: session.mistakes,
            score_awarded: 0,
            total_score: session.total_score,
            time_remaining_seconds: 0,
        };
    }

    let current_step = &mission.steps[session.step_index];
    let normalized = matcher::normalize(raw_command);
    // History receives the raw command on this path only; submissions
    // against a completed or expired session are never logged. Known
    // quirk, kept as-is.
    session.history.push(raw_command.to_string());

    if matcher::matches_step(&normalized, current_step) {
        session.total_score += current_step.score;
        session.step_index += 1;
        let next_prompt = match mission.steps.get(session.step_index) {
            Some(next) => Some(next.prompt.clone()),
            None => current_step.next_prompt.clone(),
        };
        return CommandOutcome {
            accepted: true,
            terminal_output: current_step.success_output.clone(),
            feedback: ACCEPTED_FEEDBACK.to_string(),
            step_index: session.step_index,
            total_steps,
            mission_complete: session.step_index >= total_steps,
            next_prompt,
            mistakes: session.mistakes,
            score_awarded: current_step.score,
            total_score: session.total_score,
            time_remaining_seconds: session.time_remaining(now),
        };
    }

    session.mistakes += 1;
    CommandOutcome {
        accepted: false,
        terminal_output: vec![REJECTED_OUTPUT.to_string()],
        feedback: REJECTED_FEEDBACK.to_string(),
        step_index: session.step_index,
        total_steps,
        mission_complete: false,
        next_prompt: None,
        mistakes: session.mistakes,
        score_awarded: 0,
        total_score: session.total_score,
        time_remaining_seconds: session.time_remaining(now),
    }
}

/// Return the hint for the session's current step without touching
/// progress, score, or mistakes.
///
/// Hints are unlimited and idempotent; the session only records which
/// step was last hinted. `remaining_hints` counts the steps left after
/// the current one, not a hint budget.
pub fn dispense_hint(mission: &Mission, session: &mut MissionSession) -> HintOutcome {
    let total_steps = mission.total_steps();

    if session.step_index >= total_steps {
        return HintOutcome {
            step_index: session.step_index,
            hint: COMPLETE_HINT.to_string(),
            remaining_hints: 0,
        };
    }

    session.last_hint_index = Some(session.step_index);
    HintOutcome {
        step_index: session.step_index,
        hint: mission.steps[session.step_index].hint.clone(),
        remaining_hints: total_steps - session.step_index - 1,
    }
}
