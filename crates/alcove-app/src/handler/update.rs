//! Main update function - handles state transitions (TEA pattern)

use alcove_core::QueryRequest;
use tracing::{debug, warn};

use crate::message::Message;
use crate::state::{BrowsePhase, BrowseState};

use super::{UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut BrowseState, message: Message) -> UpdateResult {
    match message {
        Message::SearchChanged(term) => {
            if term == state.search_term {
                return UpdateResult::none();
            }
            state.search_term = term;
            let generation = state.reset_results();
            UpdateResult::action(UpdateAction::ScheduleDebounce { generation })
        }

        Message::FilterChanged(kind) => {
            if kind == state.kind_filter {
                return UpdateResult::none();
            }
            state.kind_filter = kind;
            let generation = state.reset_results();
            UpdateResult::action(UpdateAction::ScheduleDebounce { generation })
        }

        Message::ClearSearch => {
            if state.search_term.is_empty() {
                return UpdateResult::none();
            }
            UpdateResult::message(Message::SearchChanged(String::new()))
        }

        Message::Refresh => {
            let generation = state.reset_results();
            state.phase = BrowsePhase::Loading;
            UpdateResult::action(UpdateAction::RunQuery {
                generation,
                request: page_request(state, 1),
            })
        }

        Message::DebounceElapsed { generation } => {
            if !state.is_current(generation) {
                // A newer keystroke superseded this timer before it fired
                debug!(generation, current = state.generation, "dropping stale debounce");
                return UpdateResult::none();
            }
            let term = state.search_term.clone();
            state.record_recent_search(&term);
            state.current_page = 1;
            state.phase = BrowsePhase::Loading;
            UpdateResult::action(UpdateAction::RunQuery {
                generation,
                request: page_request(state, 1),
            })
        }

        Message::LoadMore => {
            if state.is_loading() || !state.has_more {
                return UpdateResult::none();
            }
            state.current_page += 1;
            state.phase = BrowsePhase::Loading;
            UpdateResult::action(UpdateAction::RunQuery {
                generation: state.generation,
                request: page_request(state, state.current_page),
            })
        }

        Message::QueryLoaded {
            generation,
            page,
            result,
        } => {
            if !state.is_current(generation) {
                debug!(
                    generation,
                    current = state.generation,
                    page,
                    "dropping response for superseded criteria"
                );
                return UpdateResult::none();
            }
            state.phase = BrowsePhase::Loaded;
            state.has_more = result.has_more;
            state.total = result.total;
            state.last_error = None;
            if page <= 1 {
                state.items = result.data;
            } else {
                state.items.extend(result.data);
            }
            UpdateResult::none()
        }

        Message::QueryFailed {
            generation,
            page,
            reason,
        } => {
            if !state.is_current(generation) {
                return UpdateResult::none();
            }
            warn!(page, %reason, "query failed");
            // No rollback: accumulated items and current_page stay as they
            // are; the failure is surfaced only through last_error.
            state.phase = if state.items.is_empty() {
                BrowsePhase::Idle
            } else {
                BrowsePhase::Loaded
            };
            state.last_error = Some(reason);
            UpdateResult::none()
        }
    }
}

fn page_request(state: &BrowseState, page: u32) -> QueryRequest {
    QueryRequest {
        page,
        page_size: state.page_size,
        search_term: state.search_term.clone(),
        kind_filter: state.kind_filter,
    }
}
