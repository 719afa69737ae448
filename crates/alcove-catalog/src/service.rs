//! Query execution over the catalog: filter, paginate, simulated latency

use std::sync::Arc;
use std::time::Duration;

use alcove_core::prelude::*;
use alcove_core::{Asset, AssetPage, QueryRequest};

use crate::catalog::AssetCatalog;

/// Simulated backend round-trip applied to every query
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Filter and slice one page out of an asset collection.
///
/// Search policy: a non-empty `search_term` keeps assets whose title or
/// description contains the term, case-insensitively. The kind tag is
/// deliberately not matched — filtering by kind goes through `kind_filter`.
pub fn execute_query(assets: &[Asset], request: &QueryRequest) -> Result<AssetPage> {
    request.validate()?;

    let needle = request.search_term.to_lowercase();
    let filtered: Vec<&Asset> = assets
        .iter()
        .filter(|asset| needle.is_empty() || matches_search(asset, &needle))
        .filter(|asset| {
            request
                .kind_filter
                .map_or(true, |kind| asset.kind() == kind)
        })
        .collect();

    let total = filtered.len();
    let start = (request.page as usize - 1) * request.page_size as usize;
    let end = start + request.page_size as usize;

    let data = if start >= total {
        Vec::new()
    } else {
        filtered[start..end.min(total)]
            .iter()
            .map(|asset| (*asset).clone())
            .collect()
    };

    Ok(AssetPage {
        data,
        has_more: end < total,
        total,
    })
}

fn matches_search(asset: &Asset, needle_lower: &str) -> bool {
    asset.title.to_lowercase().contains(needle_lower)
        || asset.description.to_lowercase().contains(needle_lower)
}

/// Read-side contract between the browse controller and the data source
#[trait_variant::make(AssetService: Send)]
pub trait LocalAssetService {
    /// Fetch one page of assets matching the request
    async fn query(&self, request: QueryRequest) -> Result<AssetPage>;
}

/// In-memory service backed by an [`AssetCatalog`].
///
/// Every query suspends for a fixed latency before resolving, modeling a
/// backend round-trip so the controller's loading state and debounce
/// behavior are exercised the same way they would be against a real server.
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: Arc<AssetCatalog>,
    latency: Duration,
}

impl CatalogService {
    pub fn new(catalog: AssetCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency (zero in tests)
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl AssetService for CatalogService {
    async fn query(&self, request: QueryRequest) -> Result<AssetPage> {
        debug!(
            page = request.page,
            page_size = request.page_size,
            search = %request.search_term,
            kind = ?request.kind_filter,
            "executing catalog query"
        );
        tokio::time::sleep(self.latency).await;
        execute_query(self.catalog.assets(), &request)
    }
}
