//! JSON-file backed key/value storage.
//!
//! All keys live in one JSON object on disk. Every write rewrites the whole
//! file via write-to-temp-then-rename, so a crash leaves either the old or
//! the new contents.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::port::KeyValueStorage;

type Entries = BTreeMap<String, String>;

/// Key/value storage persisted to a single JSON file.
pub struct FileStorage {
    path: PathBuf,
    /// Serializes whole-file rewrites between keys.
    lock: Mutex<()>,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self, key: &str) -> Result<Entries> {
        match fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Entries::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| Error::storage_read(key, e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(Error::storage_read(key, e)),
        }
    }

    async fn persist(&self, key: &str, entries: &Entries) -> Result<()> {
        let json = serde_json::to_string_pretty(entries).map_err(|e| Error::storage_write(key, e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Error::storage_write(key, e))?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let written = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?;
            fs::rename(&temp_path, &self.path).await
        }
        .await;

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path).await;
            return Err(Error::storage_write(key, e));
        }

        debug!(path = %self.path.display(), key, "Storage file written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load(key).await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load(key).await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(key, &entries).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load(key).await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist(key, &entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get_item("favorites").await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_a_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = FileStorage::new(&path);
        storage.set_item("isLoggedIn", "true").await.unwrap();
        storage.set_item("favorites", "[]").await.unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.get_item("isLoggedIn").await.unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(reopened.get_item("favorites").await.unwrap().as_deref(), Some("[]"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn remove_leaves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        storage.set_item("a", "1").await.unwrap();
        storage.set_item("b", "2").await.unwrap();

        storage.remove_item("a").await.unwrap();
        storage.remove_item("never-set").await.unwrap();

        assert_eq!(storage.get_item("a").await.unwrap(), None);
        assert_eq!(storage.get_item("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::new(&path);
        let err = storage.get_item("favorites").await.unwrap_err();
        assert!(matches!(err, Error::StorageRead { .. }));

        // A failed read must not be followed by a clobbering write.
        assert!(storage.set_item("favorites", "[]").await.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
    }
}
