//! Retry with exponential backoff and a per-attempt timeout.
//!
//! [`Resilient`] wraps any [`AdvisoryService`]. Each attempt is bounded by
//! `tokio::time::timeout`; transient failures (see
//! [`AdvisoryError::is_retryable`]) are retried until `max_attempts` is used
//! up, after which the last error is returned.

use std::time::Duration;

use fit_config::AdvisoryConfig;
use fit_core::entities::{Alert, Snapshot};

use crate::AdvisoryService;
use crate::error::AdvisoryError;

/// Configuration for retry behavior on transient advisory errors.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
    /// Hard limit for a single attempt.
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&AdvisoryConfig::default())
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn from_config(config: &AdvisoryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: config.base_delay(),
            max_delay: config.max_delay(),
            timeout: config.timeout(),
        }
    }

    /// Delay before retrying after failed attempt number `attempt` (1-based).
    ///
    /// Rate limits wait for the server's `Retry-After`; everything else
    /// doubles from `base_delay`. Both are capped at `max_delay`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32, error: &AdvisoryError) -> Duration {
        let delay = match error {
            AdvisoryError::RateLimited { retry_after_secs } => {
                Duration::from_secs(*retry_after_secs)
            }
            _ => {
                let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
                self.base_delay.saturating_mul(factor)
            }
        };
        delay.min(self.max_delay)
    }
}

/// Decorator adding timeout and retry to an advisory service.
#[derive(Debug, Clone)]
pub struct Resilient<S> {
    inner: S,
    policy: RetryPolicy,
}

impl<S> Resilient<S> {
    pub const fn new(inner: S, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

impl<S: AdvisoryService> AdvisoryService for Resilient<S> {
    async fn advisory_alerts(
        &self,
        user_id: &str,
        snapshot: &Snapshot,
    ) -> Result<Vec<Alert>, AdvisoryError> {
        let mut attempt = 1;
        loop {
            let result = tokio::time::timeout(
                self.policy.timeout,
                self.inner.advisory_alerts(user_id, snapshot),
            )
            .await
            .unwrap_or(Err(AdvisoryError::Timeout {
                after: self.policy.timeout,
            }));

            match result {
                Ok(alerts) => return Ok(alerts),
                Err(error) if error.is_retryable() && attempt < self.policy.max_attempts => {
                    let delay = self.policy.delay_for(attempt, &error);
                    tracing::warn!(
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        %error,
                        "advisory call failed; retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}
