//! Deterministic, pure logic for the mission engine.
//!
//! Core modules must be free of I/O side effects. They operate on
//! in-memory data structures, take the current wall-clock time as an
//! argument where it matters, and return deterministic outputs suitable
//! for tests.

pub mod budget;
pub mod evaluate;
pub mod invariants;
pub mod matcher;
pub mod types;
