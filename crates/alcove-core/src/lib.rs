//! # alcove-core - Core Domain Types
//!
//! Foundation crate for Alcove. Provides the asset data model, the query
//! request/response contract, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`asset`)
//! - [`Asset`] - One catalog item: common fields plus a variant payload
//! - [`AssetDetails`] - Discriminated union over asset kind (kpi/layout/storyboard)
//! - [`AssetKind`] - Closed set of kind tags
//! - [`ChartKind`] - Chart renderings available for a KPI
//!
//! ### Query Contract (`query`)
//! - [`QueryRequest`] - Page number, page size, search term, kind filter
//! - [`AssetPage`] - One page of results plus `has_more` and `total`
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with recoverable classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use alcove_core::prelude::*;
//! ```

pub mod asset;
pub mod error;
pub mod logging;
pub mod query;

/// Prelude for common imports used throughout all Alcove crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use asset::{
    Asset, AssetDetails, AssetId, AssetKind, ChartKind, KpiDetails, LayoutDetails,
    StoryboardDetails, StoryboardElements,
};
pub use error::{Error, Result, ResultExt};
pub use query::{AssetPage, QueryRequest};
