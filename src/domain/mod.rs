//! Catalog and favorites domain types.
//!
//! Nothing here performs I/O; storage and network live behind the
//! [`port`](crate::port) traits.

pub mod asset;
pub mod favorites;
pub mod game;
pub mod id;
pub mod membership;
pub mod session;

pub use asset::AssetTable;
pub use favorites::FavoritesCollection;
pub use game::{FavoriteRecord, Game};
pub use id::GameId;
pub use membership::{AddOutcome, Feedback, MembershipState, RemoveOutcome};
pub use session::Credentials;
