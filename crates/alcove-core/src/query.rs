//! Query request/response contract between the controller and the data source

use serde::{Deserialize, Serialize};

use crate::asset::{Asset, AssetKind};
use crate::error::{Error, Result};

/// Parameters for a single catalog page request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    /// Free-text search; empty means unfiltered
    #[serde(default)]
    pub search_term: String,
    /// Restrict results to one kind; `None` matches every kind
    #[serde(default)]
    pub kind_filter: Option<AssetKind>,
}

impl QueryRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            search_term: String::new(),
            kind_filter: None,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_kind(mut self, kind: AssetKind) -> Self {
        self.kind_filter = Some(kind);
        self
    }

    /// Reject out-of-range paging arguments before any filtering work
    pub fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(Error::invalid_argument("page must be >= 1"));
        }
        if self.page_size < 1 {
            return Err(Error::invalid_argument("page_size must be >= 1"));
        }
        Ok(())
    }
}

/// One page of results plus pagination metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetPage {
    pub data: Vec<Asset>,
    /// More pages exist beyond this window
    pub has_more: bool,
    /// Count of all assets matching the criteria, not just this page
    pub total: usize,
}
