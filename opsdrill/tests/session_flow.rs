//! End-to-end session lifecycle tests against the public store API,
//! using the built-in mission content.

use opsdrill::error::StoreError;
use opsdrill::store::MissionStore;

#[test]
fn sandbox_check_walkthrough() {
    let store = MissionStore::with_builtin_missions();
    let start = store.start_session("sandbox-check").expect("start");

    assert_eq!(start.mission.id, "sandbox-check");
    assert_eq!(start.total_steps, 2);
    assert_eq!(start.time_limit_seconds, 300);
    assert_eq!(
        start.first_prompt,
        "Confirm where you're located in the filesystem."
    );

    let first = store
        .evaluate_command(&start.session_id, "pwd")
        .expect("evaluate");
    assert!(first.accepted);
    assert_eq!(first.step_index, 1);
    assert_eq!(first.score_awarded, 25);
    assert_eq!(first.total_score, 25);
    assert!(!first.mission_complete);

    let second = store
        .evaluate_command(&start.session_id, "ls -la")
        .expect("evaluate");
    assert!(second.accepted);
    assert_eq!(second.step_index, 2);
    assert_eq!(second.score_awarded, 50);
    assert_eq!(second.total_score, 75);
    assert!(second.mission_complete);
    assert_eq!(
        second.next_prompt.as_deref(),
        Some("Sandbox checks out. You're ready for the real missions!")
    );

    let status = store.session_status(&start.session_id).expect("status");
    assert!(status.completed);
    assert_eq!(status.mistakes, 0);
}

#[test]
fn completed_session_stays_terminal() {
    let store = MissionStore::with_builtin_missions();
    let start = store.start_session("sandbox-check").expect("start");
    store
        .evaluate_command(&start.session_id, "pwd")
        .expect("evaluate");
    store
        .evaluate_command(&start.session_id, "ls")
        .expect("evaluate");

    // Any further submission is rejected without touching state, and the
    // raw command is not logged either.
    for command in ["pwd", "ls", "reboot"] {
        let outcome = store
            .evaluate_command(&start.session_id, command)
            .expect("evaluate");
        assert!(!outcome.accepted);
        assert!(outcome.mission_complete);
        assert_eq!(outcome.score_awarded, 0);
        assert_eq!(outcome.total_score, 75);
        assert_eq!(outcome.mistakes, 0);
    }

    let session = store
        .session_snapshot(&start.session_id)
        .expect("snapshot");
    assert_eq!(session.history, vec!["pwd".to_string(), "ls".to_string()]);
}

#[test]
fn wrong_command_counts_mistake() {
    let store = MissionStore::with_builtin_missions();
    let start = store.start_session("missing-route").expect("start");

    let outcome = store
        .evaluate_command(&start.session_id, "foo")
        .expect("evaluate");

    assert!(!outcome.accepted);
    assert_eq!(outcome.mistakes, 1);
    assert_eq!(outcome.step_index, 0);
    assert_eq!(outcome.terminal_output, vec!["command not recognized"]);
}

#[test]
fn matching_is_case_insensitive_prefix() {
    let store = MissionStore::with_builtin_missions();
    let start = store.start_session("missing-route").expect("start");

    let outcome = store
        .evaluate_command(&start.session_id, "IP ADDR -color")
        .expect("evaluate");

    assert!(outcome.accepted);
    assert_eq!(outcome.score_awarded, 100);

    // The raw spelling, not the normalized form, lands in history.
    let session = store
        .session_snapshot(&start.session_id)
        .expect("snapshot");
    assert_eq!(session.history, vec!["IP ADDR -color".to_string()]);
}

#[test]
fn hint_reports_remaining_steps() {
    let store = MissionStore::with_builtin_missions();
    let start = store.start_session("missing-route").expect("start");

    let hint = store.request_hint(&start.session_id).expect("hint");
    assert_eq!(hint.step_index, 0);
    assert_eq!(hint.hint, "Use ip route add to define the default route.");
    assert_eq!(hint.remaining_hints, 2);

    // Hinting is free: no score, no mistakes, no progress.
    let status = store.session_status(&start.session_id).expect("status");
    assert_eq!(status.step_index, 0);
    assert_eq!(status.mistakes, 0);

    let session = store
        .session_snapshot(&start.session_id)
        .expect("snapshot");
    assert_eq!(session.last_hint_index, Some(0));
}

#[test]
fn expired_session_rejects_everything() {
    let store = MissionStore::with_builtin_missions();
    let start = store.start_session("sandbox-check").expect("start");
    store
        .rewind_started_at(&start.session_id, 301)
        .expect("rewind");

    // Even the correct command is rejected once the budget is spent, and
    // every attempt costs a mistake.
    for (attempt, command) in ["pwd", "ls", "help"].iter().enumerate() {
        let outcome = store
            .evaluate_command(&start.session_id, command)
            .expect("evaluate");
        assert!(!outcome.accepted);
        assert!(!outcome.mission_complete);
        assert_eq!(outcome.time_remaining_seconds, 0);
        assert_eq!(outcome.mistakes as usize, attempt + 1);
        assert_eq!(outcome.step_index, 0);
    }

    let status = store.session_status(&start.session_id).expect("status");
    assert_eq!(status.time_remaining_seconds, 0);
    assert!(!status.completed);

    // Expired submissions never reach the history log.
    let session = store
        .session_snapshot(&start.session_id)
        .expect("snapshot");
    assert!(session.history.is_empty());
}

#[test]
fn unknown_ids_are_not_found() {
    let store = MissionStore::with_builtin_missions();

    assert_eq!(
        store.start_session("no-such-mission").expect_err("error"),
        StoreError::MissionNotFound("no-such-mission".to_string())
    );
    assert_eq!(store.session_count(), 0);

    assert_eq!(
        store.evaluate_command("no-such-session", "pwd").expect_err("error"),
        StoreError::SessionNotFound("no-such-session".to_string())
    );
}

#[test]
fn sessions_progress_independently() {
    let store = MissionStore::with_builtin_missions();
    let a = store.start_session("sandbox-check").expect("start");
    let b = store.start_session("sandbox-check").expect("start");

    store.evaluate_command(&a.session_id, "pwd").expect("evaluate");

    let status_a = store.session_status(&a.session_id).expect("status");
    let status_b = store.session_status(&b.session_id).expect("status");
    assert_eq!(status_a.step_index, 1);
    assert_eq!(status_b.step_index, 0);
}
