//! Memoization of advisory answers in an injected [`CacheStore`].
//!
//! Entries are keyed by user id and a fingerprint of the snapshot, so any
//! change to the snapshot is a miss.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use fit_core::entities::{Alert, Snapshot};
use fit_store::CacheStore;

use crate::AdvisoryService;
use crate::error::AdvisoryError;

/// Decorator serving repeated requests for the same snapshot from cache.
pub struct Cached<S> {
    inner: S,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl<S> Cached<S> {
    /// A zero `ttl` disables caching.
    pub fn new(inner: S, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { inner, cache, ttl }
    }

    pub const fn inner(&self) -> &S {
        &self.inner
    }
}

/// Cache key for a user's snapshot, or `None` if the snapshot cannot be
/// serialized.
#[must_use]
pub fn cache_key(user_id: &str, snapshot: &Snapshot) -> Option<String> {
    let encoded = serde_json::to_string(snapshot).ok()?;
    let mut hasher = DefaultHasher::new();
    encoded.hash(&mut hasher);
    Some(format!("advisory:{user_id}:{:016x}", hasher.finish()))
}

impl<S: AdvisoryService> AdvisoryService for Cached<S> {
    async fn advisory_alerts(
        &self,
        user_id: &str,
        snapshot: &Snapshot,
    ) -> Result<Vec<Alert>, AdvisoryError> {
        let key = if self.ttl.is_zero() {
            None
        } else {
            cache_key(user_id, snapshot)
        };

        if let Some(key) = &key
            && let Some(value) = self.cache.get(key, Utc::now())
        {
            match serde_json::from_value::<Vec<Alert>>(value) {
                Ok(alerts) => {
                    tracing::debug!(user_id, "advisory cache hit");
                    return Ok(alerts);
                }
                Err(error) => {
                    tracing::warn!(user_id, %error, "discarding unreadable advisory cache entry");
                    self.cache.remove(key);
                }
            }
        }

        let alerts = self.inner.advisory_alerts(user_id, snapshot).await?;

        if let Some(key) = &key {
            let value = serde_json::to_value(&alerts)
                .map_err(|error| AdvisoryError::Parse(error.to_string()))?;
            let now = Utc::now();
            let purged = self.cache.purge_expired(now);
            if purged > 0 {
                tracing::debug!(purged, "dropped stale advisory cache entries");
            }
            self.cache.put(key, value, self.ttl, now);
            tracing::debug!(user_id, count = alerts.len(), "advisory answer cached");
        }
        Ok(alerts)
    }
}
