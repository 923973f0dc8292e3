//! Favorites membership view for a displayed item.
//!
//! Membership is always recomputed from [`FavoritesStore::contains`]; the
//! view never infers it from the mutation it just issued.

use tracing::warn;

use crate::application::favorites::FavoritesStore;
use crate::domain::{FavoriteRecord, Feedback, GameId, MembershipState};
use crate::error::Result;

/// Current membership of `id`. A store failure is logged and reads as
/// [`MembershipState::Unknown`].
pub async fn membership(store: &FavoritesStore, id: &GameId) -> MembershipState {
    match store.contains(id).await {
        Ok(contains) => MembershipState::from_contains(contains),
        Err(e) => {
            warn!(error = %e, id = %id, "Failed to query favorite status");
            MembershipState::Unknown
        }
    }
}

/// Membership state and last feedback for one displayed item.
///
/// Transitions:
/// - `Unknown → Favorited | NotFavorited` on [`refresh`](Self::refresh)
/// - `NotFavorited → Favorited` on a successful [`add`](Self::add)
/// - `Favorited → NotFavorited` on a successful [`remove`](Self::remove)
/// - `add` while favorited and `remove` while not favorited only change
///   the feedback.
#[derive(Debug, Clone)]
pub struct DetailView {
    store: FavoritesStore,
    id: GameId,
    state: MembershipState,
    feedback: Option<Feedback>,
}

impl DetailView {
    /// A view in the `Unknown` state. Call [`refresh`](Self::refresh) on display.
    #[must_use]
    pub fn new(store: FavoritesStore, id: GameId) -> Self {
        Self {
            store,
            id,
            state: MembershipState::Unknown,
            feedback: None,
        }
    }

    /// Create and immediately query.
    pub async fn open(store: FavoritesStore, id: GameId) -> Self {
        let mut view = Self::new(store, id);
        view.refresh().await;
        view
    }

    #[must_use]
    pub fn id(&self) -> &GameId {
        &self.id
    }

    #[must_use]
    pub fn state(&self) -> MembershipState {
        self.state
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub async fn refresh(&mut self) -> MembershipState {
        self.state = membership(&self.store, &self.id).await;
        self.state
    }

    /// Add `record` (which must carry this view's id) and re-query.
    ///
    /// On storage failure the feedback is left unchanged and the error is
    /// returned after re-querying.
    pub async fn add(&mut self, record: FavoriteRecord) -> Result<Feedback> {
        debug_assert_eq!(record.id, self.id);
        let result = self.store.add(record).await;
        self.settle(result.map(Feedback::from)).await
    }

    /// Remove this view's id and re-query.
    pub async fn remove(&mut self) -> Result<Feedback> {
        let result = self.store.remove(&self.id).await;
        self.settle(result.map(Feedback::from)).await
    }

    async fn settle(&mut self, result: Result<Feedback>) -> Result<Feedback> {
        if let Ok(feedback) = &result {
            self.feedback = Some(*feedback);
        }
        self.refresh().await;
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapter::outbound::storage::MemoryStorage;
    use crate::testkit::domain::record;

    #[tokio::test]
    async fn starts_unknown_until_refreshed() {
        let store = FavoritesStore::spawn(Arc::new(MemoryStorage::new()));
        let mut view = DetailView::new(store, GameId::new("game-1"));
        assert_eq!(view.state(), MembershipState::Unknown);
        assert_eq!(view.refresh().await, MembershipState::NotFavorited);
        assert_eq!(view.feedback(), None);
    }

    #[tokio::test]
    async fn read_failure_reads_as_unknown() {
        let storage = Arc::new(MemoryStorage::new());
        storage.fail_reads(true);
        let store = FavoritesStore::spawn(storage);
        assert_eq!(
            membership(&store, &GameId::new("game-1")).await,
            MembershipState::Unknown
        );
    }

    #[tokio::test]
    async fn failed_add_keeps_previous_feedback() {
        let storage = Arc::new(MemoryStorage::new());
        let store = FavoritesStore::spawn(storage.clone());
        let mut view = DetailView::open(store, GameId::new("game-1")).await;

        assert_eq!(view.remove().await.unwrap(), Feedback::NotPresent);

        storage.fail_writes(true);
        assert!(view.add(record("game-1")).await.is_err());
        assert_eq!(view.feedback(), Some(Feedback::NotPresent));
        assert_eq!(view.state(), MembershipState::NotFavorited);
    }
}
