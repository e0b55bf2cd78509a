//! # shinsa-config
//!
//! Layered configuration loading for shinsa using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SHINSA_*` prefix, `__` as separator)
//! 2. Project-level `.shinsa/config.toml`
//! 3. User-level `<config_dir>/shinsa/config.toml`
//! 4. Built-in defaults
//!
//! `SHINSA_STORAGE__DIR` maps to `storage.dir`, `SHINSA_PRESETS__SOURCE` to
//! `presets.source`, and so on.
//!
//! ```no_run
//! use shinsa_config::ShinsaConfig;
//!
//! let config = ShinsaConfig::load_with_dotenv().expect("config");
//! println!("reviews live in {}", config.storage.dir.display());
//! ```

mod error;
mod general;
mod presets;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use presets::PresetsConfig;
pub use storage::StorageConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShinsaConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub presets: PresetsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ShinsaConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory (if present), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path().filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".shinsa/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SHINSA_").split("__"))
    }

    /// Reject values that would load but cannot work.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.presets.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "presets.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.storage.dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.dir".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("shinsa").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ShinsaConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.presets.is_configured());
        assert_eq!(config.general.export_dir, PathBuf::from("."));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = ShinsaConfig::default();
        config.presets.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "presets.timeout_secs")
        );
    }
}
