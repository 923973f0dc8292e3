//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for games and favorite records.
//! - [`catalog`] - [`StubCatalog`](catalog::StubCatalog), a scripted
//!   [`CatalogClient`](crate::port::CatalogClient).
//! - [`storage`] - Store wiring over in-memory storage.

pub mod catalog;
pub mod domain;
pub mod storage;
