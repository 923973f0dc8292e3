//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use super::{output, paths};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::hint(&format!("Edit {} then run: gamedex login", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path, config: &Config) {
    output::section("Effective Configuration");
    output::field(
        "File",
        if path.exists() {
            path.display().to_string()
        } else {
            format!("{} (not found, using defaults)", path.display())
        },
    );

    output::section("API");
    output::field("Base URL", &config.api.base_url);
    output::field(
        "Timeout",
        config
            .api
            .timeout_secs
            .map_or_else(|| "none".to_string(), |secs| format!("{secs}s")),
    );

    output::section("Storage");
    output::field("Path", paths::storage_path(config).display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Assets");
    output::field("Images", config.assets.len());
}
