//! Errors raised while assembling a [`crate::FitConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `FITCHECK_*` variable did not fit the config shape.
    #[error("failed to load fitcheck configuration: {0}")]
    Figment(#[from] figment::Error),

    /// An optional integration was requested but its section is incomplete.
    #[error("section '{section}' is not configured")]
    NotConfigured { section: String },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
