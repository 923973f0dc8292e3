//! Application services (use cases).
//!
//! These services coordinate the domain with the storage and catalog
//! adapters. Every component receives its collaborators explicitly; there
//! is no ambient global state.

pub mod catalog;
pub mod favorites;
pub mod membership;
pub mod session;

pub use catalog::CatalogService;
pub use favorites::FavoritesStore;
pub use membership::{membership, DetailView};
pub use session::SessionGate;
