//! Composition root: builds the components every screen shares.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::catalog::HttpCatalogClient;
use crate::adapter::outbound::storage::FileStorage;
use crate::application::{CatalogService, FavoritesStore, SessionGate};
use crate::domain::AssetTable;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{CatalogClient, KeyValueStorage};

/// Shared components passed explicitly to each command handler.
///
/// There is exactly one [`FavoritesStore`] per context; handlers clone the
/// handle rather than opening storage themselves.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: CatalogService,
    pub favorites: FavoritesStore,
    pub session: SessionGate,
    pub assets: AssetTable,
}

impl AppContext {
    /// Wire production adapters from `config`.
    ///
    /// Must be called inside a tokio runtime (the favorites owner task is
    /// spawned here).
    pub fn build(config: &Config, storage_path: PathBuf) -> Result<Self> {
        debug!(
            api = %config.api.base_url,
            storage = %storage_path.display(),
            "Wiring application context"
        );
        let client = Arc::new(HttpCatalogClient::from_config(&config.api)?);
        let storage = Arc::new(FileStorage::new(storage_path));
        Ok(Self::from_parts(client, storage, config.asset_table()))
    }

    /// Wire arbitrary adapters, e.g. in-memory fakes in tests.
    pub fn from_parts(
        client: Arc<dyn CatalogClient>,
        storage: Arc<dyn KeyValueStorage>,
        assets: AssetTable,
    ) -> Self {
        Self {
            catalog: CatalogService::new(client),
            favorites: FavoritesStore::spawn(storage.clone()),
            session: SessionGate::new(storage),
            assets,
        }
    }
}
