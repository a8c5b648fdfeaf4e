//! Command normalization and matching policy.
//!
//! Matching is deliberately loose: case-insensitive and prefix-based, so
//! `"IP ADDR -color"` matches the accepted prefix `"ip addr"` and an
//! over-typed `"ifconfigg"` still matches `"ifconfig"`.

use crate::mission::MissionStep;

/// Normalize a raw submission: trim surrounding whitespace, lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True if the normalized command starts with any of the step's accepted
/// prefixes. Prefixes are stored lowercase (enforced by
/// [`crate::core::invariants`]), so a plain `starts_with` suffices.
pub fn matches_step(normalized: &str, step: &MissionStep) -> bool {
    step.expected_commands
        .iter()
        .any(|expected| normalized.starts_with(expected.as_str()))
}
