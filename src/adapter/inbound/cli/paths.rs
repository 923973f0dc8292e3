//! Path utilities for gamedex.
//!
//! All data lives under `~/.gamedex/`:
//! - `~/.gamedex/config.toml` - configuration
//! - `~/.gamedex/storage.json` - favorites and session flag

use std::path::PathBuf;

use crate::infrastructure::config::settings::Config;

/// Returns the gamedex home directory (`~/.gamedex/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gamedex")
}

/// Returns the default config file path (`~/.gamedex/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default storage file path (`~/.gamedex/storage.json`).
pub fn default_storage() -> PathBuf {
    home_dir().join("storage.json")
}

/// Storage path from config, falling back to the default location.
pub fn storage_path(config: &Config) -> PathBuf {
    config.storage.path.clone().unwrap_or_else(default_storage)
}
