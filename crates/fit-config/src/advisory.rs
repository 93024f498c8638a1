//! Advisory service configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_base_delay_ms() -> u64 {
    500
}

const fn default_max_delay_ms() -> u64 {
    8_000
}

const fn default_cache_ttl_secs() -> u64 {
    3_600
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdvisoryConfig {
    /// Endpoint that accepts a snapshot and answers with advisory alerts.
    #[serde(default)]
    pub endpoint: String,

    /// Bearer token for the endpoint.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier forwarded to the service. Empty means service default.
    #[serde(default)]
    pub model: String,

    /// Hard timeout for a single request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of attempts (including the initial one).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Initial backoff delay, in milliseconds.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Backoff ceiling, in milliseconds.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// How long advisory answers stay cached, in seconds. `0` disables caching.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            model: String::new(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl AdvisoryConfig {
    /// Check if the endpoint and key needed to call the service are present.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.api_key.is_empty()
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub const fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub const fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Reject values the retry layer cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero attempt count, a zero
    /// timeout, or a base delay above the ceiling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::invalid("advisory.max_attempts", "must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("advisory.timeout_secs", "must be at least 1"));
        }
        if self.base_delay_ms > self.max_delay_ms {
            return Err(ConfigError::invalid(
                "advisory.base_delay_ms",
                format!("exceeds max_delay_ms ({})", self.max_delay_ms),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = AdvisoryConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.cache_ttl(), Duration::from_secs(3_600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn configured_when_endpoint_and_key_set() {
        let config = AdvisoryConfig {
            endpoint: "https://advisor.example.com/v1/alerts".into(),
            api_key: "key-123".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn zero_attempts_is_invalid() {
        let config = AdvisoryConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "advisory.max_attempts"
        ));
    }

    #[test]
    fn base_delay_above_ceiling_is_invalid() {
        let config = AdvisoryConfig {
            base_delay_ms: 10_000,
            max_delay_ms: 1_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
