//! Static id-to-image lookup used by presentation.

use std::collections::HashMap;

use super::id::GameId;

/// Maps catalog ids to display image URLs.
#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    urls: HashMap<GameId, String>,
}

impl AssetTable {
    #[must_use]
    pub fn new(urls: HashMap<GameId, String>) -> Self {
        Self { urls }
    }

    /// Image URL for `id`, or the empty string when none is known.
    #[must_use]
    pub fn resolve(&self, id: &GameId) -> &str {
        self.urls.get(id).map(String::as_str).unwrap_or("")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl FromIterator<(String, String)> for AssetTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            urls: iter
                .into_iter()
                .map(|(id, url)| (GameId::new(id), url))
                .collect(),
        }
    }
}
