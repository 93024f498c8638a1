//! # fit-config
//!
//! Layered configuration loading for Fitcheck using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FITCHECK_*` prefix, `__` as separator)
//! 2. Project-level `.fitcheck/config.toml`
//! 3. User-level `~/.config/fitcheck/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FITCHECK_ADVISORY__API_KEY` -> `advisory.api_key`,
//! `FITCHECK_STORE__DATA_DIR` -> `store.data_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use fit_config::FitConfig;
//!
//! let config = FitConfig::load_with_dotenv().expect("config");
//! if config.advisory.is_configured() {
//!     println!("Advisory endpoint: {}", config.advisory.endpoint);
//! }
//! ```

mod advisory;
mod error;
mod general;
mod store;

pub use advisory::AdvisoryConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FitConfig {
    #[serde(default)]
    pub advisory: AdvisoryConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FitConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] when the advisory section is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.advisory.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".fitcheck/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("FITCHECK_").split("__"))
    }

    /// Fail with [`ConfigError::NotConfigured`] unless the advisory service
    /// can be called.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint or API key is missing.
    pub fn require_advisory(&self) -> Result<&AdvisoryConfig, ConfigError> {
        if self.advisory.is_configured() {
            Ok(&self.advisory)
        } else {
            Err(ConfigError::NotConfigured {
                section: "advisory".to_string(),
            })
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fitcheck").join("config.toml"))
    }
}
