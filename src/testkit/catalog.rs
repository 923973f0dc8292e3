//! Scripted catalog client.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{Game, GameId};
use crate::error::{Error, Result};
use crate::port::CatalogClient;

/// A [`CatalogClient`] serving a fixed list, or failing every call.
#[derive(Debug, Default)]
pub struct StubCatalog {
    games: Vec<Game>,
    failing: bool,
    calls: AtomicUsize,
}

impl StubCatalog {
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            games,
            ..Self::default()
        }
    }

    /// Every call fails with [`Error::NetworkFetch`].
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Number of requests served so far, failures included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(Error::NetworkFetch("stub catalog offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogClient for StubCatalog {
    async fn list_games(&self) -> Result<Vec<Game>> {
        self.begin()?;
        Ok(self.games.clone())
    }

    async fn get_game(&self, id: &GameId) -> Result<Game> {
        self.begin()?;
        self.games
            .iter()
            .find(|g| &g.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound { id: id.to_string() })
    }
}
