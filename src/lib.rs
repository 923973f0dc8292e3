//! Gamedex - browse a remote game catalog and keep local favorites.
//!
//! # Architecture
//!
//! - **[`domain`]** - Games, favorite records, the unique-id favorites
//!   collection, membership states
//! - **[`port`]** - Traits for the catalog API and key/value storage
//! - **[`application`]** - The Favorites Store (a single-owner task that
//!   serializes every operation), the membership view, catalog browsing
//!   with silent degradation, and the session gate
//! - **[`adapter`]** - HTTP catalog client, file and memory storage, CLI
//! - **[`infrastructure`]** - Configuration, logging, wiring
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use gamedex::adapter::outbound::storage::FileStorage;
//! use gamedex::application::FavoritesStore;
//! use gamedex::domain::GameId;
//!
//! # async fn demo() -> gamedex::error::Result<()> {
//! let store = FavoritesStore::spawn(Arc::new(FileStorage::new("storage.json")));
//! let favorited = store.contains(&GameId::new("game-1")).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
