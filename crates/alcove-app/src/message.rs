//! Message types for the browse controller (TEA pattern)

use alcove_core::{AssetKind, AssetPage};

/// All messages processed by the browse update loop
#[derive(Debug, Clone)]
pub enum Message {
    /// Search input changed (raw keystroke value, pre-debounce)
    SearchChanged(String),

    /// Kind filter tab changed; `None` selects the unfiltered view
    FilterChanged(Option<AssetKind>),

    /// Clear-search affordance activated
    ClearSearch,

    /// Re-run page 1 for the current criteria without debouncing.
    /// Serves the initial load and the manual retry affordance.
    Refresh,

    /// The debounce window elapsed for the given generation
    DebounceElapsed { generation: u64 },

    /// Load-more affordance reached (infinite scroll)
    LoadMore,

    /// A query resolved
    QueryLoaded {
        generation: u64,
        page: u32,
        result: AssetPage,
    },

    /// A query failed
    QueryFailed {
        generation: u64,
        page: u32,
        reason: String,
    },
}
