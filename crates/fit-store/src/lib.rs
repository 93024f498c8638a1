//! # fit-store
//!
//! Persistence boundary for Fitcheck snapshots.
//!
//! - [`SnapshotStore`]: load/save of one snapshot per user id
//! - [`FileSnapshotStore`]: one JSON document per user in a data directory
//! - [`MemorySnapshotStore`]: in-process map for tests and embedding
//! - [`CacheStore`] / [`MemoryCache`]: key → (value, stored-at, ttl) cache
//!   injected into collaborators that memoize remote answers

mod cache;
mod error;
mod file;
mod memory;

pub use cache::{CacheEntry, CacheStore, MemoryCache};
pub use error::StoreError;
pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;

use std::future::Future;

use fit_core::entities::Snapshot;

/// Load/save of application snapshots keyed by user id.
pub trait SnapshotStore: Send + Sync {
    /// Load the snapshot for `user_id`, or `None` if nothing was saved yet.
    fn load(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<Snapshot>, StoreError>> + Send;

    /// Replace the stored snapshot for `user_id`.
    fn save(
        &self,
        user_id: &str,
        snapshot: &Snapshot,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// User ids become file names, so they are restricted to
/// `[A-Za-z0-9_-]{1,128}`.
///
/// # Errors
///
/// Returns [`StoreError::InvalidUserId`] for anything else.
pub fn validate_user_id(user_id: &str) -> Result<(), StoreError> {
    let valid = !user_id.is_empty()
        && user_id.len() <= 128
        && user_id
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidUserId(user_id.to_string()))
    }
}
