//! Owner task that serializes every favorites operation.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use super::FAVORITES_KEY;
use crate::domain::{AddOutcome, FavoriteRecord, FavoritesCollection, GameId, RemoveOutcome};
use crate::error::{Error, Result};
use crate::port::KeyValueStorage;

type Reply<T> = oneshot::Sender<Result<T>>;

/// Requests accepted by the owner task.
pub(super) enum Command {
    GetAll(Reply<FavoritesCollection>),
    Contains(GameId, Reply<bool>),
    Add(FavoriteRecord, Reply<AddOutcome>),
    Remove(GameId, Reply<RemoveOutcome>),
    Clear(Reply<()>),
}

pub(super) struct Owner {
    storage: Arc<dyn KeyValueStorage>,
}

impl Owner {
    pub(super) fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Drain commands until every handle is dropped.
    pub(super) async fn run(self, mut rx: mpsc::Receiver<Command>) {
        while let Some(command) = rx.recv().await {
            self.handle(command).await;
        }
        debug!("Favorites owner stopped");
    }

    async fn handle(&self, command: Command) {
        // A dropped receiver just means the caller stopped waiting.
        match command {
            Command::GetAll(reply) => {
                let _ = reply.send(self.load().await);
            }
            Command::Contains(id, reply) => {
                let _ = reply.send(self.load().await.map(|all| all.contains(&id)));
            }
            Command::Add(record, reply) => {
                let _ = reply.send(self.add(record).await);
            }
            Command::Remove(id, reply) => {
                let _ = reply.send(self.remove(&id).await);
            }
            Command::Clear(reply) => {
                let _ = reply.send(self.clear().await);
            }
        }
    }

    async fn load(&self) -> Result<FavoritesCollection> {
        match self.storage.get_item(FAVORITES_KEY).await? {
            None => Ok(FavoritesCollection::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| Error::StorageRead {
                key: FAVORITES_KEY.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn save(&self, favorites: &FavoritesCollection) -> Result<()> {
        let raw = serde_json::to_string(favorites)?;
        self.storage.set_item(FAVORITES_KEY, &raw).await
    }

    async fn add(&self, record: FavoriteRecord) -> Result<AddOutcome> {
        let mut favorites = self.load().await?;
        let id = record.id.clone();
        if !favorites.insert(record) {
            debug!(id = %id, "Favorite already present");
            return Ok(AddOutcome::AlreadyPresent);
        }
        self.save(&favorites).await?;
        info!(id = %id, total = favorites.len(), "Favorite added");
        Ok(AddOutcome::Added)
    }

    async fn remove(&self, id: &GameId) -> Result<RemoveOutcome> {
        let mut favorites = self.load().await?;
        let removed = favorites.remove(id);
        self.save(&favorites).await?;
        if removed {
            info!(id = %id, total = favorites.len(), "Favorite removed");
            Ok(RemoveOutcome::Removed)
        } else {
            debug!(id = %id, "Favorite not present");
            Ok(RemoveOutcome::NotPresent)
        }
    }

    async fn clear(&self) -> Result<()> {
        self.storage.remove_item(FAVORITES_KEY).await?;
        info!("Favorites cleared");
        Ok(())
    }
}
