//! Cloneable handle to the favorites owner task.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use super::owner::{Command, Owner};
use crate::domain::{AddOutcome, FavoriteRecord, FavoritesCollection, GameId, RemoveOutcome};
use crate::error::{Error, Result};
use crate::port::KeyValueStorage;

/// Pending commands before callers wait on the queue.
const QUEUE_CAPACITY: usize = 64;

/// Handle to the persisted favorites collection.
///
/// Clone it into every component that needs favorites; all clones talk to
/// the same owner task. Operations run one at a time in submission order.
#[derive(Clone, Debug)]
pub struct FavoritesStore {
    tx: mpsc::Sender<Command>,
}

impl FavoritesStore {
    /// Spawn the owner task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn spawn(storage: Arc<dyn KeyValueStorage>) -> Self {
        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        tokio::spawn(Owner::new(storage).run(rx));
        Self { tx }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<Result<T>>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(command(reply_tx))
            .await
            .map_err(|_| Error::StoreClosed)?;
        reply_rx.await.map_err(|_| Error::StoreClosed)?
    }

    /// Read the full collection. Nothing persisted yet reads as empty.
    pub async fn get_all(&self) -> Result<FavoritesCollection> {
        self.request(Command::GetAll).await
    }

    /// [`get_all`](Self::get_all), logging failures and degrading to empty.
    pub async fn get_all_or_empty(&self) -> FavoritesCollection {
        match self.get_all().await {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!(error = %e, "Failed to read favorites, showing none");
                FavoritesCollection::new()
            }
        }
    }

    /// Whether `id` is a member, computed from the same read as `get_all`.
    pub async fn contains(&self, id: &GameId) -> Result<bool> {
        let id = id.clone();
        self.request(|reply| Command::Contains(id, reply)).await
    }

    /// Append `record` unless a record with its id already exists.
    pub async fn add(&self, record: FavoriteRecord) -> Result<AddOutcome> {
        self.request(|reply| Command::Add(record, reply)).await
    }

    /// Drop every record with `id`. An absent id is not an error.
    pub async fn remove(&self, id: &GameId) -> Result<RemoveOutcome> {
        let id = id.clone();
        self.request(|reply| Command::Remove(id, reply)).await
    }

    /// Reset to empty by deleting the backing key.
    pub async fn clear(&self) -> Result<()> {
        self.request(Command::Clear).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::favorites::FAVORITES_KEY;
    use crate::testkit::domain::record;
    use crate::testkit::storage::memory_store as store;

    #[tokio::test]
    async fn empty_storage_reads_as_empty() {
        let (_, store) = store();
        assert!(store.get_all().await.unwrap().is_empty());
        assert!(!store.contains(&GameId::new("game-1")).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_add_does_not_write() {
        let (storage, store) = store();
        assert_eq!(store.add(record("game-1")).await.unwrap(), AddOutcome::Added);
        assert_eq!(
            store.add(record("game-1")).await.unwrap(),
            AddOutcome::AlreadyPresent
        );
        assert_eq!(storage.writes(), 1);
    }

    #[tokio::test]
    async fn persists_json_array_under_favorites_key() {
        let (storage, store) = store();
        store.add(record("game-1")).await.unwrap();
        let raw = storage.raw(FAVORITES_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], "game-1");
    }

    #[tokio::test]
    async fn corrupt_value_fails_reads_and_blocks_writes() {
        let (storage, store) = store();
        storage.seed(FAVORITES_KEY, "not json");

        assert!(matches!(store.get_all().await, Err(Error::StorageRead { .. })));
        assert!(store.get_all_or_empty().await.is_empty());
        assert!(store.add(record("game-1")).await.is_err());
        assert_eq!(storage.raw(FAVORITES_KEY).as_deref(), Some("not json"));
    }

    #[tokio::test]
    async fn failed_write_reports_error_and_keeps_old_state() {
        let (storage, store) = store();
        store.add(record("game-1")).await.unwrap();

        storage.fail_writes(true);
        assert!(matches!(
            store.add(record("game-2")).await,
            Err(Error::StorageWrite { .. })
        ));
        assert!(store.clear().await.is_err());

        storage.fail_writes(false);
        assert_eq!(store.get_all().await.unwrap().ids(), vec![GameId::new("game-1")]);
    }
}
