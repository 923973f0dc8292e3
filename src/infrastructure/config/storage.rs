//! Local storage settings.

use std::path::PathBuf;

use serde::Deserialize;

/// Where favorites and the session flag are persisted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage file. Defaults to `~/.gamedex/storage.json` when unset.
    pub path: Option<PathBuf>,
}
