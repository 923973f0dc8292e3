//! Device-local key/value persistence port.

use async_trait::async_trait;

use crate::error::Result;

/// String-keyed, string-valued persistent storage.
///
/// There is no compare-and-swap or transaction primitive: callers that need
/// read-modify-write consistency must serialize access themselves.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read a value. Absence is `Ok(None)`, not an error.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting an absent key succeeds.
    async fn remove_item(&self, key: &str) -> Result<()>;
}
