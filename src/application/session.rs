//! Session gate: credential check plus a persisted login flag.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::Credentials;
use crate::error::Result;
use crate::port::KeyValueStorage;

/// Storage key holding the login flag.
pub const SESSION_KEY: &str = "isLoggedIn";

const LOGGED_IN: &str = "true";

/// Gate consulted by navigation before catalog and favorites screens.
#[derive(Clone)]
pub struct SessionGate {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionGate {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Validate `credentials` and persist the flag on success.
    ///
    /// Returns `Ok(false)` for rejected credentials; the flag is untouched.
    pub async fn login(&self, credentials: &Credentials) -> Result<bool> {
        if !credentials.is_valid() {
            warn!(username = %credentials.username, "Login failed");
            return Ok(false);
        }
        self.storage.set_item(SESSION_KEY, LOGGED_IN).await?;
        info!(username = %credentials.username, "Login successful");
        Ok(true)
    }

    pub async fn logout(&self) -> Result<()> {
        self.storage.remove_item(SESSION_KEY).await?;
        info!("Logout successful");
        Ok(())
    }

    /// Whether the flag is set. Unreadable storage counts as logged out.
    pub async fn is_logged_in(&self) -> bool {
        match self.storage.get_item(SESSION_KEY).await {
            Ok(flag) => flag.as_deref() == Some(LOGGED_IN),
            Err(e) => {
                warn!(error = %e, "Failed to read session flag");
                false
            }
        }
    }
}
