//! Remote catalog port.

use async_trait::async_trait;

use crate::domain::{Game, GameId};
use crate::error::Result;

/// Read-only access to the remote game catalog.
///
/// Implementations perform a single attempt per call: no retries, and no
/// timeout unless one was explicitly configured.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the full item collection.
    async fn list_games(&self) -> Result<Vec<Game>>;

    /// Fetch one item. Unknown ids fail with [`Error::NotFound`](crate::error::Error::NotFound).
    async fn get_game(&self, id: &GameId) -> Result<Game>;
}
