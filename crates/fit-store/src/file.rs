//! JSON file backend: `<root>/<user_id>.json`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fit_core::entities::Snapshot;

use crate::{SnapshotStore, StoreError, validate_user_id};

/// Stores each user's snapshot as a pretty-printed JSON document.
///
/// Writes go to a sibling `.tmp` file first and are renamed into place, so a
/// crash mid-write never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    root: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, user_id: &str) -> Result<PathBuf, StoreError> {
        validate_user_id(user_id)?;
        Ok(self.root.join(format!("{user_id}.json")))
    }
}

impl SnapshotStore for FileSnapshotStore {
    async fn load(&self, user_id: &str) -> Result<Option<Snapshot>, StoreError> {
        let path = self.path_for(user_id)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(user_id, path = %path.display(), "no stored snapshot");
                return Ok(None);
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let snapshot = serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            user_id: user_id.to_string(),
            source,
        })?;
        Ok(Some(snapshot))
    }

    async fn save(&self, user_id: &str, snapshot: &Snapshot) -> Result<(), StoreError> {
        let path = self.path_for(user_id)?;
        let body = serde_json::to_vec_pretty(snapshot)?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StoreError::Io {
                path: self.root.clone(),
                source,
            })?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &body)
            .await
            .map_err(|source| StoreError::Io {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        tracing::info!(user_id, path = %path.display(), bytes = body.len(), "snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fit_core::entities::StrategicGoal;
    use fit_core::enums::ValueDimension;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot.inrichting.mission = "Iedereen aan het werk".to_string();
        snapshot.goals.push(StrategicGoal {
            id: "g1".to_string(),
            dimension: ValueDimension::Social,
            description: "Meer plaatsingen".to_string(),
            horizon: "2027".to_string(),
            kpi_id: Some("kpi-plaatsingen".to_string()),
            priority: 1,
        });
        snapshot
    }

    #[tokio::test]
    async fn missing_user_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path());
        assert!(store.load("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_returns_same_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("nested"));

        store.save("org-1", &sample()).await.unwrap();
        let loaded = store.load("org-1").await.unwrap();

        assert_eq!(loaded, Some(sample()));
        assert!(dir.path().join("nested/org-1.json").exists());
        assert!(!dir.path().join("nested/org-1.json.tmp").exists());
    }

    #[tokio::test]
    async fn corrupt_document_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("org-1.json"), b"{not json").unwrap();
        let store = FileSnapshotStore::new(dir.path());

        let error = store.load("org-1").await.unwrap_err();
        assert!(matches!(error, StoreError::Corrupt { user_id, .. } if user_id == "org-1"));
    }

    #[tokio::test]
    async fn path_traversal_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path());
        let error = store.save("../escape", &sample()).await.unwrap_err();
        assert!(matches!(error, StoreError::InvalidUserId(_)));
    }
}
