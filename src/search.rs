//! Search-as-you-type: input debouncing, request sequencing and turning the
//! search endpoint's reply into what the suggestion panel shows.

use crate::api::{Backend, HttpReply, SearchResponse, Suggestion};
use crate::config::{MAX_SUGGESTIONS, MIN_QUERY_LEN, SEARCH_PATH};
use crate::error::ApiError;
use crate::utils::encode_component;
use std::cell::Cell;
use std::rc::Rc;

/// What the input handler should do after a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceAction {
    /// Query too short: hide the panel and forget any pending lookup.
    Clear,
    /// Arm a timer; when it fires, hand `ticket` back to [`Debouncer::fire`].
    Schedule { ticket: u64, query: String },
}

/// Ticket-based debounce state. The caller owns the timer; every input
/// invalidates earlier tickets so only the last one can produce a query.
#[derive(Debug, Default)]
pub struct Debouncer {
    latest: u64,
    pending: Option<String>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_input(&mut self, raw: &str) -> DebounceAction {
        self.latest += 1;
        let query = raw.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            self.pending = None;
            return DebounceAction::Clear;
        }
        self.pending = Some(query.to_string());
        DebounceAction::Schedule {
            ticket: self.latest,
            query: query.to_string(),
        }
    }

    /// Timer callback. Yields the query only for the most recent ticket, and
    /// at most once.
    pub fn fire(&mut self, ticket: u64) -> Option<String> {
        if ticket != self.latest {
            return None;
        }
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.latest += 1;
        self.pending = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// Hands out increasing request ids; a completion is applied only while its
/// id is still the newest one. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Rc<Cell<u64>>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestId {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestId(next)
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest.get() == id.0
    }

    /// Make every outstanding request stale.
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SuggestionPanel {
    #[default]
    Hidden,
    Visible(Vec<Suggestion>),
}

impl SuggestionPanel {
    pub fn is_visible(&self) -> bool {
        matches!(self, SuggestionPanel::Visible(_))
    }
}

pub fn search_path(query: &str) -> String {
    format!("{}?q={}", SEARCH_PATH, encode_component(query))
}

/// Interpret the search endpoint's reply. Any failure hides the panel.
pub fn panel_from_reply(reply: Result<HttpReply, ApiError>) -> SuggestionPanel {
    let parsed = reply.and_then(|r| r.success_json::<SearchResponse>());
    match parsed {
        Ok(SearchResponse {
            success: true,
            mut properties,
        }) if !properties.is_empty() => {
            properties.truncate(MAX_SUGGESTIONS);
            SuggestionPanel::Visible(properties)
        }
        Ok(_) => SuggestionPanel::Hidden,
        Err(e) => {
            log::warn!("search suggestions unavailable: {}", e);
            SuggestionPanel::Hidden
        }
    }
}

pub async fn fetch_suggestions<B: Backend>(backend: &B, query: &str) -> SuggestionPanel {
    panel_from_reply(backend.get(&search_path(query)).await)
}

/// Suggestion lookups with stale-response protection.
pub struct SuggestionFetcher<B> {
    backend: B,
    sequencer: RequestSequencer,
}

impl<B: Backend> SuggestionFetcher<B> {
    pub fn new(backend: B) -> Self {
        Self::with_sequencer(backend, RequestSequencer::new())
    }

    pub fn with_sequencer(backend: B, sequencer: RequestSequencer) -> Self {
        SuggestionFetcher { backend, sequencer }
    }

    /// Resolves to `None` when a newer lookup (or a [`cancel`](Self::cancel))
    /// happened while this one was in flight; the caller must then leave the
    /// panel alone.
    pub async fn lookup(&self, query: &str) -> Option<SuggestionPanel> {
        let id = self.sequencer.issue();
        let panel = fetch_suggestions(&self.backend, query).await;
        if self.sequencer.is_current(id) {
            Some(panel)
        } else {
            log::debug!("dropping stale suggestions for {:?}", query);
            None
        }
    }

    pub fn cancel(&self) {
        self.sequencer.invalidate();
    }
}
