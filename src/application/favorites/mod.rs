//! Favorites Store: the single owner of the persisted favorites collection.
//!
//! # Architecture
//!
//! [`FavoritesStore`] is a cloneable handle. Each call becomes a
//! [`Command`](owner::Command) on a bounded `mpsc` queue drained by one owner
//! task, which holds the storage and processes commands strictly in arrival
//! order. A read-modify-write cycle therefore never interleaves with another
//! Store operation, and two racing `add`s of the same id yield one record.
//!
//! The backing storage has no transactions; uniqueness rests entirely on
//! all access going through this queue, so nothing else may touch
//! [`FAVORITES_KEY`].

mod owner;
mod store;

pub use store::FavoritesStore;

/// Storage key holding the JSON-encoded favorites array.
pub const FAVORITES_KEY: &str = "favorites";
