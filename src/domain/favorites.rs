//! Ordered favorites collection with unique ids.

use serde::{Deserialize, Serialize};

use super::game::FavoriteRecord;
use super::id::GameId;

/// Insertion-ordered favorites, at most one record per [`GameId`].
///
/// Every constructor and mutator preserves uniqueness. Decoding keeps the
/// first occurrence of a repeated id, so stored data written by racing
/// writers still yields a valid collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FavoriteRecord>", into = "Vec<FavoriteRecord>")]
pub struct FavoritesCollection {
    records: Vec<FavoriteRecord>,
}

impl FavoritesCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, dropping later records that repeat an id.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = FavoriteRecord>) -> Self {
        let mut collection = Self::new();
        for record in records {
            collection.insert(record);
        }
        collection
    }

    #[must_use]
    pub fn contains(&self, id: &GameId) -> bool {
        self.records.iter().any(|r| &r.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &GameId) -> Option<&FavoriteRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Append `record` unless its id is already present.
    ///
    /// Returns `true` when the record was appended.
    pub fn insert(&mut self, record: FavoriteRecord) -> bool {
        if self.contains(&record.id) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Drop every record with `id`. Returns `true` when something was removed.
    pub fn remove(&mut self, id: &GameId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        self.records.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FavoriteRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<GameId> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<FavoriteRecord> {
        self.records
    }
}

impl From<Vec<FavoriteRecord>> for FavoritesCollection {
    fn from(records: Vec<FavoriteRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<FavoritesCollection> for Vec<FavoriteRecord> {
    fn from(collection: FavoritesCollection) -> Self {
        collection.records
    }
}

impl<'a> IntoIterator for &'a FavoritesCollection {
    type Item = &'a FavoriteRecord;
    type IntoIter = std::slice::Iter<'a, FavoriteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
