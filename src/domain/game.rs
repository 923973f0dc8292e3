//! Catalog items and the point-in-time snapshots kept as favorites.

use serde::{Deserialize, Serialize};

use super::id::GameId;

/// A catalog item as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub description: String,
    pub developer: String,
    pub publisher: String,
    pub released_date: String,
    /// Catalog-supplied image reference. Display goes through
    /// [`AssetTable`](crate::domain::asset::AssetTable) instead.
    pub image: String,
}

impl Game {
    /// Case-insensitive substring match on the display name.
    ///
    /// An empty term matches every game.
    #[must_use]
    pub fn name_matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Snapshot of a catalog item taken when it was favorited.
///
/// Display strings are copied verbatim and never re-fetched. The serialized
/// field names match the catalog wire format so persisted favorites stay
/// readable by older clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: GameId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub released_date: String,
    #[serde(default)]
    pub image: String,
}

impl From<Game> for FavoriteRecord {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            name: game.name,
            description: game.description,
            developer: game.developer,
            publisher: game.publisher,
            released_date: game.released_date,
            image: game.image,
        }
    }
}

impl From<&Game> for FavoriteRecord {
    fn from(game: &Game) -> Self {
        Self::from(game.clone())
    }
}
