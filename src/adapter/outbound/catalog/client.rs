//! Catalog REST API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, info, warn};
use url::Url;

use super::dto::{GameResponse, GamesResponse};
use crate::domain::{Game, GameId};
use crate::error::{Error, Result};
use crate::infrastructure::config::api::ApiConfig;
use crate::port::CatalogClient;

/// HTTP client for the read-only catalog API.
///
/// One request per call, never retried.
pub struct HttpCatalogClient {
    http: HttpClient,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Create a client with reqwest defaults (no request timeout).
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(),
            base_url: parse_base(base_url)?,
        })
    }

    /// Create a client honoring the optional timeout in `config`.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        });

        Ok(Self {
            http,
            base_url: parse_base(&config.base_url)?,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::NetworkFetch(format!("cannot extend base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn parse_base(base_url: &str) -> Result<Url> {
    Url::parse(base_url).map_err(|e| Error::NetworkFetch(format!("invalid base URL '{base_url}': {e}")))
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn list_games(&self) -> Result<Vec<Game>> {
        let url = self.endpoint(&["games"])?;
        info!(url = %url, "Fetching games");

        let response: GamesResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.success {
            return Err(Error::NetworkFetch("catalog reported failure".into()));
        }

        debug!(count = response.data.len(), reported = response.count, "Fetched games");
        Ok(response.data.into_iter().map(Game::from).collect())
    }

    async fn get_game(&self, id: &GameId) -> Result<Game> {
        let url = self.endpoint(&["games", id.as_str()])?;
        info!(url = %url, "Fetching game");

        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound { id: id.to_string() });
        }

        let response: GameResponse = response.error_for_status()?.json().await?;
        match response.data {
            Some(dto) if response.success => Ok(Game::from(dto)),
            _ => Err(Error::NotFound { id: id.to_string() }),
        }
    }
}
