//! Handler module - TEA update function for the browse session
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch

pub(crate) mod update;


use alcove_core::QueryRequest;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// (Re)start the debounce timer for the given generation.
    /// The event loop cancels any previously scheduled timer first, so only
    /// the newest input within the window produces a `DebounceElapsed`.
    ScheduleDebounce { generation: u64 },

    /// Issue a query against the asset service. Completion comes back as
    /// `QueryLoaded` or `QueryFailed` tagged with the same generation.
    RunQuery {
        generation: u64,
        request: QueryRequest,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
