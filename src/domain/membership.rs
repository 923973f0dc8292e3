//! Favorites membership states and mutation feedback.

use std::fmt;

use serde::Serialize;

/// Point-in-time membership of a displayed item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipState {
    /// Not queried yet, or the last query failed.
    #[default]
    Unknown,
    Favorited,
    NotFavorited,
}

impl MembershipState {
    #[must_use]
    pub fn from_contains(contains: bool) -> Self {
        if contains {
            Self::Favorited
        } else {
            Self::NotFavorited
        }
    }

    #[must_use]
    pub fn is_favorited(self) -> bool {
        self == Self::Favorited
    }
}

impl fmt::Display for MembershipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unknown => "unknown",
            Self::Favorited => "favorited",
            Self::NotFavorited => "not favorited",
        };
        f.write_str(label)
    }
}

/// Result of [`FavoritesStore::add`](crate::application::favorites::FavoritesStore::add).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Result of [`FavoritesStore::remove`](crate::application::favorites::FavoritesStore::remove).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotPresent,
}

/// Human-readable outcome of the last mutation, for transient display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Added,
    AlreadyPresent,
    Removed,
    NotPresent,
}

impl Feedback {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::AlreadyPresent => "already present",
            Self::Removed => "removed",
            Self::NotPresent => "not present",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<AddOutcome> for Feedback {
    fn from(outcome: AddOutcome) -> Self {
        match outcome {
            AddOutcome::Added => Self::Added,
            AddOutcome::AlreadyPresent => Self::AlreadyPresent,
        }
    }
}

impl From<RemoveOutcome> for Feedback {
    fn from(outcome: RemoveOutcome) -> Self {
        match outcome {
            RemoveOutcome::Removed => Self::Removed,
            RemoveOutcome::NotPresent => Self::NotPresent,
        }
    }
}
