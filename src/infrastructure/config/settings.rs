//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Every section is optional; a missing config file yields the
//! defaults.
//!
//! # Example
//!
//! ```no_run
//! use gamedex::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::api::ApiConfig;
use super::logging::LoggingConfig;
use super::storage::StorageConfig;
use crate::domain::AssetTable;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Static image URLs keyed by catalog id.
    #[serde(default)]
    pub assets: BTreeMap<String, String>,
}

impl Config {
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Like [`load`](Self::load), but a missing file means defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.logging.validate()?;
        for (id, url) in &self.assets {
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "assets",
                    reason: format!("empty URL for '{id}'"),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn init_logging(&self, verbose: u8) {
        self.logging.init(verbose);
    }

    #[must_use]
    pub fn asset_table(&self) -> AssetTable {
        self.assets.clone().into_iter().collect()
    }
}
