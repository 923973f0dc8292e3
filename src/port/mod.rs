//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where adapters plug in external systems:
//!
//! ```text
//!                 ┌─────────────────────────┐
//!                 │       Application       │
//!                 │  FavoritesStore, views  │
//!                 └────────────┬────────────┘
//!                ┌─────────────┴─────────────┐
//!                ▼                           ▼
//!         ┌─────────────┐             ┌─────────────┐
//!         │   Catalog   │             │  Key/value  │
//!         │   Adapter   │             │   Storage   │
//!         └─────────────┘             └─────────────┘
//! ```
//!
//! Tests substitute in-memory implementations for both.

pub mod outbound;

pub use outbound::catalog::CatalogClient;
pub use outbound::storage::KeyValueStorage;
