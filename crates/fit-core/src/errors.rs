//! Cross-cutting error types for Fitcheck.
//!
//! The scoring engine itself is total and has no error type. These errors are
//! raised when a snapshot is explicitly validated by callers.
//! Collaborator errors (`StoreError`, `AdvisoryError`, `ConfigError`) live in
//! their own crates and converge in `fit-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Snapshot failed integrity checks.
    #[error("Validation error: {0}")]
    Validation(String),
}
