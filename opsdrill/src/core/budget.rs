//! Shared time budget helpers for session expiry.

use chrono::{DateTime, Duration, Utc};

/// Seconds left on a session's time budget at `now`, clamped at zero.
///
/// Callers pass `now` explicitly so the computation stays deterministic;
/// it is recomputed on every query and never cached, since a session can
/// expire purely through wall-clock passage.
pub fn remaining_seconds(
    started_at: DateTime<Utc>,
    time_limit_seconds: u64,
    now: DateTime<Utc>,
) -> u64 {
    let deadline = started_at + Duration::seconds(time_limit_seconds as i64);
    (deadline - now).num_seconds().max(0) as u64
}

/// True once the budget has run out. Expiry is detected lazily by this
/// comparison; no timer drives it.
pub fn is_expired(started_at: DateTime<Utc>, time_limit_seconds: u64, now: DateTime<Utc>) -> bool {
    remaining_seconds(started_at, time_limit_seconds, now) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs_after_start: i64, started_at: DateTime<Utc>) -> DateTime<Utc> {
        started_at + Duration::seconds(secs_after_start)
    }

    /// A fresh session has its whole budget left.
    #[test]
    fn full_budget_at_start() {
        let start = Utc::now();
        assert_eq!(remaining_seconds(start, 300, start), 300);
        assert!(!is_expired(start, 300, start));
    }

    /// Remaining time counts down with elapsed wall-clock time.
    #[test]
    fn counts_down_with_elapsed_time() {
        let start = Utc::now();
        assert_eq!(remaining_seconds(start, 300, at(120, start)), 180);
    }

    /// The budget is exhausted exactly at the deadline.
    #[test]
    fn expires_at_deadline() {
        let start = Utc::now();
        assert_eq!(remaining_seconds(start, 300, at(300, start)), 0);
        assert!(is_expired(start, 300, at(300, start)));
    }

    /// Past the deadline the value clamps at zero, never negative.
    #[test]
    fn clamps_at_zero_past_deadline() {
        let start = Utc::now();
        assert_eq!(remaining_seconds(start, 300, at(10_000, start)), 0);
    }

    /// Sub-second elapsed time truncates to whole remaining seconds.
    #[test]
    fn truncates_partial_seconds() {
        let start = Utc::now();
        let now = start + Duration::milliseconds(500);
        assert_eq!(remaining_seconds(start, 300, now), 299);
    }
}
