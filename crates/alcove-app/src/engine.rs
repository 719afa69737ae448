//! Engine - shared orchestration for the browse session
//!
//! Owns the message channel, the debounce timer handle, and the service
//! handle. All state mutation happens in [`Engine::process_message`] on the
//! caller's task; spawned background work (debounce timer, queries) reports
//! back through the channel as messages.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use alcove_catalog::AssetService;
use alcove_core::prelude::*;
use alcove_core::QueryRequest;

use crate::config::Settings;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::BrowseState;

/// Default quiet period before a search-term change issues a query
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Message channel capacity
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for the browse session.
///
/// Single-threaded cooperative model: the owner feeds messages in (directly
/// via [`Engine::process_message`] or by draining the channel through
/// [`Engine::settle`]); background tasks only ever communicate by sending
/// messages back.
pub struct Engine<S> {
    /// TEA application state (the Model)
    state: BrowseState,

    /// Query service shared with spawned query tasks
    service: Arc<S>,

    /// Sender half of the message channel. Cloned into background tasks.
    msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel
    msg_rx: mpsc::Receiver<Message>,

    /// Debounce quiet period
    debounce: Duration,

    /// Handle for the scheduled debounce timer. Cancelled on every
    /// re-trigger and on drop, so a stale timer never fires after the
    /// input has changed again.
    debounce_timer: Option<JoinHandle<()>>,

    /// Outstanding background sends: scheduled timer plus in-flight queries
    pending: usize,
}

impl<S> Engine<S>
where
    S: AssetService + Send + Sync + 'static,
{
    pub fn new(service: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            state: BrowseState::new(),
            service: Arc::new(service),
            msg_tx,
            msg_rx,
            debounce: DEFAULT_DEBOUNCE,
            debounce_timer: None,
            pending: 0,
        }
    }

    /// Build an engine configured from loaded settings
    pub fn with_settings(service: S, settings: &Settings) -> Self {
        let mut engine = Self::new(service);
        engine.state = BrowseState::with_page_size(settings.browse.page_size);
        engine.debounce = Duration::from_millis(settings.browse.debounce_ms);
        engine
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Clone of the channel sender, for external input sources
    pub fn sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Process a single message through the TEA update cycle, dispatching
    /// any resulting actions and follow-up messages.
    pub fn process_message(&mut self, message: Message) {
        let mut next = Some(message);
        while let Some(msg) = next {
            self.note_completion(&msg);
            let result = handler::update(&mut self.state, msg);
            if let Some(action) = result.action {
                self.dispatch(action);
            }
            next = result.message;
        }
    }

    /// Drain messages until every scheduled timer and in-flight query has
    /// resolved. Returns immediately when nothing is outstanding.
    pub async fn settle(&mut self) -> Result<()> {
        while self.pending > 0 {
            let msg = self.msg_rx.recv().await.ok_or(Error::ChannelClosed)?;
            self.process_message(msg);
        }
        Ok(())
    }

    /// Cancel the scheduled debounce timer (teardown path)
    pub fn cancel_debounce(&mut self) {
        if let Some(timer) = self.debounce_timer.take() {
            if !timer.is_finished() {
                timer.abort();
                self.pending = self.pending.saturating_sub(1);
            }
        }
    }

    fn dispatch(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::ScheduleDebounce { generation } => self.schedule_debounce(generation),
            UpdateAction::RunQuery {
                generation,
                request,
            } => self.run_query(generation, request),
        }
    }

    /// One background message is accounted for per timer/query task; a
    /// completed timer that was aborted after sending still delivers its
    /// message, which the generation check in update() discards.
    fn note_completion(&mut self, message: &Message) {
        if matches!(
            message,
            Message::DebounceElapsed { .. }
                | Message::QueryLoaded { .. }
                | Message::QueryFailed { .. }
        ) {
            self.pending = self.pending.saturating_sub(1);
        }
    }

    fn schedule_debounce(&mut self, generation: u64) {
        self.cancel_debounce();

        let tx = self.msg_tx.clone();
        let delay = self.debounce;
        debug!(generation, ?delay, "scheduling debounce timer");
        self.pending += 1;
        self.debounce_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Message::DebounceElapsed { generation }).await;
        }));
    }

    fn run_query(&mut self, generation: u64, request: QueryRequest) {
        let service = Arc::clone(&self.service);
        let tx = self.msg_tx.clone();
        let page = request.page;
        self.pending += 1;
        tokio::spawn(async move {
            let message = match service.query(request).await {
                Ok(result) => Message::QueryLoaded {
                    generation,
                    page,
                    result,
                },
                Err(e) => Message::QueryFailed {
                    generation,
                    page,
                    reason: e.to_string(),
                },
            };
            let _ = tx.send(message).await;
        });
    }
}

impl<S> Drop for Engine<S> {
    fn drop(&mut self) {
        if let Some(timer) = self.debounce_timer.take() {
            timer.abort();
        }
    }
}
