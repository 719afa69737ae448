//! # alcove-app - Browse State Machine & Orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! catalog browse session: the state model, the message/update cycle, the
//! engine that owns the message channel and debounce timer, and the
//! settings layer.
//!
//! Control flow: input -> [`Message`] -> [`handler::update`] ->
//! [`handler::UpdateAction`] -> background task -> completion [`Message`].
//! Every criteria change bumps a request generation; responses carrying a
//! stale generation are discarded, so a late page for superseded criteria
//! can never overwrite newer results.

pub mod config;
pub mod engine;
pub mod handler;
pub mod message;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use engine::{Engine, DEFAULT_DEBOUNCE};
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{BrowsePhase, BrowseState, DEFAULT_PAGE_SIZE, MAX_RECENT_SEARCHES};
