//! End-to-end browse flow against an in-memory catalog
//!
//! Drives the engine through real (paused-clock) debounce timers and
//! latency-simulating queries, the same path the binary takes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alcove_app::{BrowsePhase, Engine, Message};
use alcove_catalog::test_utils::{catalog_of_counts, fixture_assets};
use alcove_catalog::{execute_query, AssetCatalog, AssetService, CatalogService};
use alcove_core::prelude::*;
use alcove_core::{Asset, AssetKind, AssetPage, QueryRequest};

/// Catalog-backed service that records every request it sees
#[derive(Clone)]
struct RecordingService {
    assets: Arc<Vec<Asset>>,
    latency: Duration,
    calls: Arc<AtomicUsize>,
    last_term: Arc<Mutex<String>>,
}

impl RecordingService {
    fn new(assets: Vec<Asset>, latency: Duration) -> Self {
        Self {
            assets: Arc::new(assets),
            latency,
            calls: Arc::new(AtomicUsize::new(0)),
            last_term: Arc::new(Mutex::new(String::new())),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_term(&self) -> String {
        self.last_term.lock().expect("lock poisoned").clone()
    }
}

impl AssetService for RecordingService {
    async fn query(&self, request: QueryRequest) -> Result<AssetPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_term.lock().expect("lock poisoned") = request.search_term.clone();
        tokio::time::sleep(self.latency).await;
        execute_query(&self.assets, &request)
    }
}

/// A service that always fails, for the failure path
struct FailingService;

impl AssetService for FailingService {
    async fn query(&self, _request: QueryRequest) -> Result<AssetPage> {
        Err(Error::query("backend unavailable"))
    }
}

#[tokio::test(start_paused = true)]
async fn test_full_walk_accumulates_every_page() {
    let catalog = AssetCatalog::from_assets(fixture_assets(25)).unwrap();
    let service = CatalogService::new(catalog);
    let mut engine = Engine::new(service);

    engine.process_message(Message::Refresh);
    engine.settle().await.unwrap();

    assert_eq!(engine.state().phase, BrowsePhase::Loaded);
    assert_eq!(engine.state().items.len(), 10);
    assert_eq!(engine.state().total, 25);
    assert!(engine.state().has_more);

    while engine.state().has_more {
        engine.process_message(Message::LoadMore);
        engine.settle().await.unwrap();
    }

    let ids: Vec<_> = engine.state().items.iter().map(|a| a.id).collect();
    let expected: Vec<u64> = (1..=25).collect();
    assert_eq!(ids, expected);

    // Nothing left to load: LoadMore is a no-op and settle returns at once
    engine.process_message(Message::LoadMore);
    engine.settle().await.unwrap();
    assert_eq!(engine.state().items.len(), 25);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_keystrokes_issue_exactly_one_request() {
    let service = RecordingService::new(fixture_assets(30), Duration::from_millis(800));
    let counter = service.clone();
    let mut engine = Engine::new(service);

    engine.process_message(Message::SearchChanged("a".to_string()));
    engine.process_message(Message::SearchChanged("ab".to_string()));
    engine.process_message(Message::SearchChanged("abc".to_string()));
    engine.settle().await.unwrap();

    assert_eq!(counter.call_count(), 1);
    assert_eq!(counter.last_term(), "abc");
}

#[tokio::test(start_paused = true)]
async fn test_kind_filter_scenario_via_engine() {
    let catalog = catalog_of_counts(15, 10, 0);
    let service = CatalogService::new(catalog);
    let mut engine = Engine::new(service);

    engine.process_message(Message::FilterChanged(Some(AssetKind::Kpi)));
    engine.settle().await.unwrap();

    assert_eq!(engine.state().items.len(), 10);
    assert_eq!(engine.state().total, 15);
    assert!(engine.state().has_more);

    engine.process_message(Message::LoadMore);
    engine.settle().await.unwrap();

    assert_eq!(engine.state().items.len(), 15);
    assert!(!engine.state().has_more);
    for asset in &engine.state().items {
        assert_eq!(asset.kind(), AssetKind::Kpi);
    }
}

#[tokio::test(start_paused = true)]
async fn test_failure_surfaces_error_and_clears_loading() {
    let mut engine = Engine::new(FailingService);

    engine.process_message(Message::Refresh);
    engine.settle().await.unwrap();

    assert!(!engine.state().is_loading());
    assert!(engine.state().items.is_empty());
    assert_eq!(
        engine.state().last_error.as_deref(),
        Some("Query failed: backend unavailable")
    );
}

#[tokio::test(start_paused = true)]
async fn test_filter_change_mid_flight_discards_stale_page() {
    // Slow queries: a filter change lands while page 1 of the previous
    // criteria is still in flight. The stale response must be discarded.
    let service = RecordingService::new(fixture_assets(30), Duration::from_millis(800));
    let mut engine = Engine::new(service);

    engine.process_message(Message::Refresh);
    // Supersede the in-flight query before it resolves
    engine.process_message(Message::FilterChanged(Some(AssetKind::Layout)));
    engine.settle().await.unwrap();

    for asset in &engine.state().items {
        assert_eq!(asset.kind(), AssetKind::Layout);
    }
    assert_eq!(engine.state().total, 10);
}
