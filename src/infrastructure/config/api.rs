//! Remote catalog API settings.

use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, Result};

/// Default catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://zelda.fanapis.com/api";

/// Catalog API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; `/games` and `/games/{id}` are appended.
    pub base_url: String,
    /// Per-request timeout in seconds. Unset means requests may wait forever.
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub(super) fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "api.base_url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs",
                reason: "must be greater than 0 when set".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}
