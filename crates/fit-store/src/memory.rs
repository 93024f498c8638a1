//! In-process backend.

use std::collections::HashMap;

use fit_core::entities::Snapshot;
use tokio::sync::RwLock;

use crate::{SnapshotStore, StoreError, validate_user_id};

#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshots: RwLock<HashMap<String, Snapshot>>,
}

impl MemorySnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self, user_id: &str) -> Result<Option<Snapshot>, StoreError> {
        validate_user_id(user_id)?;
        Ok(self.snapshots.read().await.get(user_id).cloned())
    }

    async fn save(&self, user_id: &str, snapshot: &Snapshot) -> Result<(), StoreError> {
        validate_user_id(user_id)?;
        self.snapshots
            .write()
            .await
            .insert(user_id.to_string(), snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn users_are_isolated() {
        let store = MemorySnapshotStore::new();
        let mut snapshot = Snapshot::default();
        snapshot.inrichting.vision = "Regionaal marktleider".to_string();

        store.save("a", &snapshot).await.unwrap();

        assert_eq!(store.load("a").await.unwrap(), Some(snapshot));
        assert!(store.load("b").await.unwrap().is_none());
    }
}
