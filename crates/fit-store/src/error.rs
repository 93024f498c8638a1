//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// User id cannot be used as a storage key.
    #[error("invalid user id '{0}': use 1-128 characters from [A-Za-z0-9_-]")]
    InvalidUserId(String),

    /// Filesystem failure while reading or writing a snapshot.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored document is not a valid snapshot.
    #[error("stored snapshot for '{user_id}' is corrupt: {source}")]
    Corrupt {
        user_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot could not be serialized.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}
