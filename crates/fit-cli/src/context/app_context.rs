use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use fit_advisory::DefaultAdvisory;
use fit_config::FitConfig;
use fit_core::entities::Snapshot;
use fit_store::{CacheStore, FileSnapshotStore, MemoryCache, SnapshotStore, validate_user_id};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: FitConfig,
    pub store: FileSnapshotStore,
    pub cache: Arc<MemoryCache>,
    pub user_id: String,
    snapshot_file: Option<PathBuf>,
}

impl AppContext {
    /// Resolve the user and data directory from flags and configuration.
    pub fn init(config: FitConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let user_id = flags
            .user
            .clone()
            .unwrap_or_else(|| config.store.default_user.clone());
        validate_user_id(&user_id).context("invalid --user")?;

        let store = FileSnapshotStore::new(config.store.resolved_data_dir());
        tracing::debug!(user_id = %user_id, data_dir = %store.root().display(), "context initialized");

        Ok(Self {
            config,
            store,
            cache: Arc::new(MemoryCache::new()),
            user_id,
            snapshot_file: flags.snapshot.as_ref().map(PathBuf::from),
        })
    }

    /// The snapshot to score: the `--snapshot` file when given, otherwise the
    /// stored snapshot of the active user.
    pub async fn load_snapshot(&self) -> anyhow::Result<Snapshot> {
        if let Some(path) = &self.snapshot_file {
            return read_snapshot_file(path).await;
        }

        self.store
            .load(&self.user_id)
            .await
            .with_context(|| format!("failed to load snapshot for user '{}'", self.user_id))?
            .with_context(|| {
                format!(
                    "no snapshot stored for user '{}'. Run 'fitc snapshot import <file>' first.",
                    self.user_id
                )
            })
    }

    /// Advisory stack over this context's in-process cache.
    pub fn advisory(&self) -> anyhow::Result<DefaultAdvisory> {
        let advisory = self.config.require_advisory().context(
            "--advisory needs FITCHECK_ADVISORY__ENDPOINT and FITCHECK_ADVISORY__API_KEY",
        )?;
        let cache: Arc<dyn CacheStore> = self.cache.clone();
        fit_advisory::build(advisory, cache).context("failed to build advisory client")
    }
}

/// Parse a snapshot JSON document from disk.
pub async fn read_snapshot_file(path: &std::path::Path) -> anyhow::Result<Snapshot> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read snapshot file {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not a valid snapshot document", path.display()))
}
