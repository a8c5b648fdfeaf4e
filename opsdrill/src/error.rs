//! Domain error taxonomy.
//!
//! `NotFound` on either identifier is the only domain error; every other
//! "failure" (wrong command, expired budget, already complete) is a
//! successful outcome value with `accepted = false`. The transport
//! adapter maps both variants to a 404.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("mission '{0}' not found")]
    MissionNotFound(String),
    #[error("session '{0}' not found")]
    SessionNotFound(String),
}
