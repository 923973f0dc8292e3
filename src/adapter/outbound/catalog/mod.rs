//! HTTP adapter for the remote game catalog.
//!
//! Endpoints:
//! - `GET {base}/games` → `{ success, count, data: [Item] }`
//! - `GET {base}/games/{id}` → `{ success, count, data: Item }`

pub mod client;
pub mod dto;

pub use client::HttpCatalogClient;
