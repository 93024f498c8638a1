//! Explicit TTL cache injected into collaborators.
//!
//! Expiry is always evaluated against a caller-supplied `now`, which keeps the
//! cache deterministic under test.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// A cached value with the moment it was stored and how long it stays valid.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub value: serde_json::Value,
    pub stored_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl CacheEntry {
    /// Moment after which the entry is stale. `None` when the TTL is too large
    /// to represent, which means the entry never expires.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let ttl = TimeDelta::from_std(self.ttl).ok()?;
        self.stored_at.checked_add_signed(ttl)
    }

    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_none_or(|expires_at| now < expires_at)
    }
}

/// Key/value cache with per-entry TTL.
pub trait CacheStore: Send + Sync {
    /// Fresh value for `key`. Stale entries are evicted and reported as a miss.
    fn get(&self, key: &str, now: DateTime<Utc>) -> Option<serde_json::Value>;

    fn put(&self, key: &str, value: serde_json::Value, ttl: Duration, now: DateTime<Utc>);

    fn remove(&self, key: &str);

    /// Drop every entry that is stale at `now`; returns how many were dropped.
    fn purge_expired(&self, now: DateTime<Utc>) -> usize;
}

/// Mutex-guarded `HashMap` cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str, now: DateTime<Utc>) -> Option<serde_json::Value> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.is_fresh(now) => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                tracing::debug!(key, "cache entry expired");
                None
            }
            None => None,
        }
    }

    fn put(&self, key: &str, value: serde_json::Value, ttl: Duration, now: DateTime<Utc>) {
        self.lock().insert(
            key.to_string(),
            CacheEntry {
                value,
                stored_at: now,
                ttl,
            },
        );
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }

    fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_fresh(now));
        before - entries.len()
    }
}
