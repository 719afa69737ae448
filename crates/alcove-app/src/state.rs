//! Browse session state (Model in TEA pattern)

use alcove_core::{Asset, AssetKind};

/// Default results per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// How many recent search terms the session remembers
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Lifecycle phase of the browse session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowsePhase {
    /// No query has resolved for the current criteria yet
    #[default]
    Idle,

    /// A query is in flight
    Loading,

    /// At least one page has resolved for the current criteria
    Loaded,
}

/// UI-facing state for the catalog browse session.
///
/// Mutated only by [`crate::handler::update`] in response to messages;
/// lives for the duration of the session and is never persisted.
#[derive(Debug, Clone)]
pub struct BrowseState {
    /// Current free-text search input
    pub search_term: String,

    /// Current kind filter tab; `None` is the unfiltered "featured" view
    pub kind_filter: Option<AssetKind>,

    /// 1-based page of the most recent request
    pub current_page: u32,

    pub page_size: u32,

    /// Accumulated results. Append-only within a search session: page 1
    /// replaces, later pages extend.
    pub items: Vec<Asset>,

    pub phase: BrowsePhase,

    /// More pages exist beyond what has been accumulated
    pub has_more: bool,

    /// Total matches reported by the last response
    pub total: usize,

    /// Monotonic request generation. Every criteria change bumps it;
    /// responses carrying an older generation are discarded.
    pub generation: u64,

    /// Most recent query failure, cleared when a later query succeeds
    pub last_error: Option<String>,

    /// Most-recent-first deduplicated search history, capped at
    /// [`MAX_RECENT_SEARCHES`]
    pub recent_searches: Vec<String>,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            search_term: String::new(),
            kind_filter: None,
            current_page: 1,
            page_size,
            items: Vec::new(),
            phase: BrowsePhase::Idle,
            has_more: false,
            total: 0,
            generation: 0,
            last_error: None,
            recent_searches: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == BrowsePhase::Loading
    }

    /// Whether `generation` still identifies the newest criteria
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Discard accumulated results and advance the generation.
    /// Called on every criteria change before a new query is scheduled.
    pub(crate) fn reset_results(&mut self) -> u64 {
        self.items.clear();
        self.current_page = 1;
        self.has_more = false;
        self.total = 0;
        self.phase = BrowsePhase::Idle;
        self.generation += 1;
        self.generation
    }

    /// Record a search term that actually fired, most recent first
    pub(crate) fn record_recent_search(&mut self, term: &str) {
        if term.is_empty() {
            return;
        }
        self.recent_searches.retain(|existing| existing != term);
        self.recent_searches.insert(0, term.to_string());
        self.recent_searches.truncate(MAX_RECENT_SEARCHES);
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = BrowseState::new();
        assert_eq!(state.phase, BrowsePhase::Idle);
        assert!(state.items.is_empty());
        assert!(!state.has_more);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_reset_results_bumps_generation_and_clears() {
        let mut state = BrowseState::new();
        state.current_page = 3;
        state.has_more = true;
        state.total = 42;
        state.phase = BrowsePhase::Loaded;

        let generation = state.reset_results();

        assert_eq!(generation, 1);
        assert!(state.is_current(generation));
        assert!(!state.is_current(0));
        assert_eq!(state.current_page, 1);
        assert!(!state.has_more);
        assert_eq!(state.total, 0);
        assert_eq!(state.phase, BrowsePhase::Idle);
    }

    #[test]
    fn test_recent_searches_dedupe_and_cap() {
        let mut state = BrowseState::new();
        for term in ["a", "b", "c", "d", "e", "f"] {
            state.record_recent_search(term);
        }
        assert_eq!(state.recent_searches, vec!["f", "e", "d", "c", "b"]);

        state.record_recent_search("d");
        assert_eq!(state.recent_searches, vec!["d", "f", "e", "c", "b"]);

        state.record_recent_search("");
        assert_eq!(state.recent_searches.len(), 5);
    }
}
