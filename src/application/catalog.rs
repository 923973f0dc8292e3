//! Catalog browsing with silent degradation.
//!
//! Fetch failures are logged here and surface to presentation as "no
//! data": an empty list or `None`. Nothing is retried; the user re-runs
//! the command.

use std::sync::Arc;

use tracing::warn;

use crate::domain::{Game, GameId};
use crate::error::Error;
use crate::port::CatalogClient;

/// Presentation-facing wrapper around a [`CatalogClient`].
#[derive(Clone)]
pub struct CatalogService {
    client: Arc<dyn CatalogClient>,
}

impl CatalogService {
    #[must_use]
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self { client }
    }

    /// All games, or an empty list if the fetch failed.
    pub async fn games(&self) -> Vec<Game> {
        match self.client.list_games().await {
            Ok(games) => games,
            Err(e) => {
                warn!(error = %e, "Failed to fetch games");
                Vec::new()
            }
        }
    }

    /// Games whose name contains `term`, ignoring case.
    pub async fn search(&self, term: &str) -> Vec<Game> {
        filter_by_name(self.games().await, term)
    }

    /// One game, or `None` if it is unknown or the fetch failed.
    pub async fn game(&self, id: &GameId) -> Option<Game> {
        match self.client.get_game(id).await {
            Ok(game) => Some(game),
            Err(Error::NotFound { id }) => {
                warn!(id = %id, "Game not found");
                None
            }
            Err(e) => {
                warn!(error = %e, id = %id, "Failed to fetch game");
                None
            }
        }
    }
}

/// Keep games whose name contains `term` (case-insensitive), preserving order.
#[must_use]
pub fn filter_by_name(games: Vec<Game>, term: &str) -> Vec<Game> {
    games.into_iter().filter(|g| g.name_matches(term)).collect()
}
