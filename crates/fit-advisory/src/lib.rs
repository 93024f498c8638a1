//! # fit-advisory
//!
//! Boundary to the external advisory service that produces supplementary,
//! non-deterministic alerts in the same shape as the rule engine.
//!
//! - [`AdvisoryService`]: the single capability ("give me alerts for this snapshot")
//! - [`HttpAdvisoryClient`]: `reqwest` implementation against a configured endpoint
//! - [`Resilient`]: timeout + exponential-backoff retry decorator
//! - [`Cached`]: TTL memoization through an injected [`fit_store::CacheStore`]

mod cached;
mod client;
mod error;
mod http;
mod retry;

#[cfg(test)]
mod testing;

pub use cached::{Cached, cache_key};
pub use client::HttpAdvisoryClient;
pub use error::AdvisoryError;
pub use retry::{Resilient, RetryPolicy};

use std::future::Future;
use std::sync::Arc;

use fit_config::AdvisoryConfig;
use fit_core::entities::{Alert, Snapshot};
use fit_store::CacheStore;

/// Source of advisory alerts for a snapshot.
pub trait AdvisoryService: Send + Sync {
    fn advisory_alerts(
        &self,
        user_id: &str,
        snapshot: &Snapshot,
    ) -> impl Future<Output = Result<Vec<Alert>, AdvisoryError>> + Send;
}

/// The production stack: HTTP client, wrapped in retry, wrapped in cache.
pub type DefaultAdvisory = Cached<Resilient<HttpAdvisoryClient>>;

/// Assemble [`DefaultAdvisory`] from configuration and an injected cache.
///
/// # Errors
///
/// Returns [`AdvisoryError::NotConfigured`] when endpoint or key is missing.
pub fn build(
    config: &AdvisoryConfig,
    cache: Arc<dyn CacheStore>,
) -> Result<DefaultAdvisory, AdvisoryError> {
    let client = HttpAdvisoryClient::from_config(config)?;
    let resilient = Resilient::new(client, RetryPolicy::from_config(config));
    Ok(Cached::new(resilient, cache, config.cache_ttl()))
}
