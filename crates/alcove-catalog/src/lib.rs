//! # alcove-catalog - Asset Data Source & Query Service
//!
//! Holds the in-memory asset collection and answers page queries over it
//! with simulated network latency.
//!
//! Depends on [`alcove_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Data Source
//! - [`AssetCatalog`] - Read-only asset collection; seeded generation or fixtures
//! - [`DEFAULT_CATALOG_SIZE`] - Size of the default generated catalog
//!
//! ### Query Service
//! - [`execute_query()`] - Pure filter + paginate step
//! - [`AssetService`] - Async query contract (Send variant)
//! - [`CatalogService`] - Catalog-backed implementation with latency simulation
//! - [`DEFAULT_LATENCY`] - Simulated round-trip applied by [`CatalogService`]

pub mod catalog;
mod generate;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use catalog::{AssetCatalog, DEFAULT_CATALOG_SIZE};
pub use service::{
    execute_query, AssetService, CatalogService, LocalAssetService, DEFAULT_LATENCY,
};
