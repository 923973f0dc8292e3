//! Store wiring over in-memory storage.

use std::sync::Arc;

use crate::adapter::outbound::storage::MemoryStorage;
use crate::application::favorites::FavoritesStore;

/// Spawn a [`FavoritesStore`] over fresh [`MemoryStorage`], returning both.
///
/// Must be called inside a tokio runtime.
pub fn memory_store() -> (Arc<MemoryStorage>, FavoritesStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = FavoritesStore::spawn(storage.clone());
    (storage, store)
}
