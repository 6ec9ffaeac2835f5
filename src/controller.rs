//! The search-result controller.
//!
//! [`SearchController`] owns one session's [`SearchState`] and is the only
//! thing that mutates it. Every operation that changes `results` writes the
//! new list to the injected [`PersistenceStore`] first and only adopts it once
//! the write succeeded, so a controller rebuilt from the same store always
//! sees the same list.
//!
//! A search is two steps, [`SearchController::begin_search`] and
//! [`SearchController::complete_search`], tied together by a
//! [`SearchTicket`]. Only the most recently issued ticket may complete; the
//! outcome of a superseded one is dropped. [`SearchController::submit_search`]
//! runs both steps against the fetcher in one call.

use crate::error::{Error, Result};
use crate::fetch::SearchFetcher;
use crate::prompt::ConfirmationPrompt;
use crate::store::{PersistenceStore, RESULTS_KEY};
use crate::types::{Repository, SearchResponse};
use crate::validator::{self, ValidTerm};
use std::collections::HashSet;

pub const NO_RESULTS_MESSAGE: &str = "No repositories found. Please try something else.";
pub const TRANSPORT_MESSAGE: &str = "Search request failed. Please try again.";
pub const STORAGE_MESSAGE: &str = "Could not save the results. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Error,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidTerm,
    NoResults,
    Transport,
    /// The result set could not be written to the store.
    Storage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchError {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SearchState {
    pub term: String,
    pub results: Vec<Repository>,
    pub status: Status,
    /// Set iff `status` is [`Status::Error`].
    pub error: Option<SearchError>,
    pub selected: Option<Repository>,
    pub detail_visible: bool,
}

impl SearchState {
    fn with_results(results: Vec<Repository>) -> Self {
        Self {
            term: String::new(),
            results,
            status: Status::Idle,
            error: None,
            selected: None,
            detail_visible: false,
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.detail_visible = false;
    }
}

/// Handle for one in-flight search.
#[derive(Debug)]
pub struct SearchTicket {
    generation: u64,
    term: ValidTerm,
}

impl SearchTicket {
    pub fn term(&self) -> &str {
        self.term.as_str()
    }
}

pub struct SearchController<F, S, C> {
    fetcher: F,
    store: S,
    prompt: C,
    state: SearchState,
    generation: u64,
}

impl<F, S, C> SearchController<F, S, C>
where
    F: SearchFetcher,
    S: PersistenceStore,
    C: ConfirmationPrompt,
{
    /// Start a session from whatever result set `store` holds.
    pub fn new(fetcher: F, mut store: S, prompt: C) -> Self {
        let results = load_results(&mut store);
        tracing::debug!("Session started with {} stored results", results.len());
        Self {
            fetcher,
            store,
            prompt,
            state: SearchState::with_results(results),
            generation: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn term(&self) -> &str {
        &self.state.term
    }

    pub fn results(&self) -> &[Repository] {
        &self.state.results
    }

    pub fn result_count(&self) -> usize {
        self.state.results.len()
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.state.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error.as_ref().map(|e| e.message.as_str())
    }

    pub fn selected(&self) -> Option<&Repository> {
        self.state.selected.as_ref()
    }

    pub fn detail_visible(&self) -> bool {
        self.state.detail_visible
    }

    pub fn find(&self, id: u64) -> Option<&Repository> {
        self.state.results.iter().find(|r| r.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn set_term(&mut self, text: impl Into<String>) {
        self.state.term = text.into();
    }

    /// Validate the current term and, if it passes, fetch and rank results.
    pub fn submit_search(&mut self) -> Result<()> {
        if let Some(ticket) = self.begin_search()? {
            let outcome = self.fetcher.search(ticket.term());
            self.complete_search(ticket, outcome)?;
        }
        Ok(())
    }

    /// First half of a search. Returns `None` when the term was rejected, in
    /// which case the controller is already in its error state. If the store
    /// write fails the state is left untouched and no ticket is issued.
    pub fn begin_search(&mut self) -> Result<Option<SearchTicket>> {
        let term = match validator::validate(&self.state.term) {
            Ok(term) => term,
            Err(e) => {
                tracing::debug!("Rejected search term {:?}: {}", self.state.term, e);
                self.commit(Vec::new())?;
                self.generation += 1;
                let message = format!("Invalid search term {}.", self.state.term);
                self.fail(ErrorKind::InvalidTerm, message);
                return Ok(None);
            }
        };

        self.commit(Vec::new())?;
        self.generation += 1;
        self.state.error = None;
        self.state.status = Status::Loading;
        self.state.clear_selection();

        tracing::debug!("Search #{} started for {:?}", self.generation, term.as_str());
        Ok(Some(SearchTicket {
            generation: self.generation,
            term,
        }))
    }

    /// Second half of a search. Returns `false` when `ticket` was superseded
    /// and its outcome was dropped without touching state or store.
    ///
    /// A failed store write ends the search in [`ErrorKind::Storage`] with
    /// the empty list written when the search began.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<SearchResponse>,
    ) -> Result<bool> {
        if ticket.generation != self.generation || self.state.status != Status::Loading {
            tracing::debug!(
                "Dropping stale response for search #{} (current #{})",
                ticket.generation,
                self.generation
            );
            return Ok(false);
        }

        let (next, failure) = match outcome {
            Err(e) => {
                tracing::error!("Search for {:?} failed: {}", ticket.term(), e);
                (Vec::new(), Some((ErrorKind::Transport, TRANSPORT_MESSAGE)))
            }
            Ok(resp) if resp.items.is_empty() => {
                tracing::info!("No repositories matched {:?}", ticket.term());
                (Vec::new(), Some((ErrorKind::NoResults, NO_RESULTS_MESSAGE)))
            }
            Ok(resp) => (rank(resp.items), None),
        };

        if let Err(e) = self.commit(next) {
            self.fail(ErrorKind::Storage, STORAGE_MESSAGE.to_string());
            return Err(e);
        }

        match failure {
            Some((kind, message)) => self.fail(kind, message.to_string()),
            None => {
                self.state.status = Status::Ready;
                tracing::info!(
                    "{} repositories matched {:?}",
                    self.state.results.len(),
                    ticket.term()
                );
            }
        }
        Ok(true)
    }

    /// Open the detail view for `repo`, which must be in the current results.
    pub fn select_repository(&mut self, repo: &Repository) -> Result<()> {
        let found = self
            .find(repo.id)
            .cloned()
            .ok_or(Error::NotInResults(repo.id))?;
        self.state.selected = Some(found);
        self.state.detail_visible = true;
        Ok(())
    }

    /// Hide the detail view. The selection is kept.
    pub fn close_detail(&mut self) {
        self.state.detail_visible = false;
    }

    /// Show the detail view again for the kept selection, if any.
    pub fn reopen_detail(&mut self) -> bool {
        self.state.detail_visible = self.state.selected.is_some();
        self.state.detail_visible
    }

    /// Remove `repo` from the results once the user confirms. Returns whether
    /// an entry was removed.
    pub fn delete_repository(&mut self, repo: &Repository) -> Result<bool> {
        let message = format!("Do you want to remove {} from the list?", repo.name);
        if !self.prompt.confirm(&message) {
            tracing::debug!("Removal of {} declined", repo.id);
            return Ok(false);
        }

        let next: Vec<Repository> = self
            .state
            .results
            .iter()
            .filter(|r| r.id != repo.id)
            .cloned()
            .collect();
        if next.len() == self.state.results.len() {
            return Ok(false);
        }

        self.commit(next)?;
        if self.state.selected.as_ref().map(|s| s.id) == Some(repo.id) {
            self.state.clear_selection();
        }
        Ok(true)
    }

    pub fn clear_results(&mut self) -> Result<()> {
        self.commit(Vec::new())?;
        self.generation += 1;
        self.state = SearchState::with_results(Vec::new());
        Ok(())
    }

    /// Enter the error state. `results` is left to the caller's commit.
    fn fail(&mut self, kind: ErrorKind, message: String) {
        self.state.status = Status::Error;
        self.state.error = Some(SearchError { kind, message });
        self.state.clear_selection();
    }

    /// Write `next` to the store, then make it the current results. On a
    /// failed write nothing changes.
    fn commit(&mut self, next: Vec<Repository>) -> Result<()> {
        write_results(&mut self.store, &next).map_err(|e| {
            tracing::error!("Failed to store results: {}", e);
            e
        })?;
        self.state.results = next;
        Ok(())
    }
}

/// Drop repeated ids (first one wins) and order by watchers, most first.
/// The sort is stable so ties keep upstream order.
pub fn rank(items: Vec<Repository>) -> Vec<Repository> {
    let mut ranked = dedupe(items);
    ranked.sort_by(|a, b| b.watchers_count.cmp(&a.watchers_count));
    ranked
}

fn dedupe(items: Vec<Repository>) -> Vec<Repository> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|r| seen.insert(r.id)).collect()
}

fn write_results<S: PersistenceStore>(store: &mut S, results: &[Repository]) -> Result<()> {
    let json = serde_json::to_string(results)?;
    store.set(RESULTS_KEY, &json)
}

/// Read the stored results. Malformed data or repeated ids are cleaned up and
/// the cleaned list is written back, so memory and store agree from the start.
fn load_results<S: PersistenceStore>(store: &mut S) -> Vec<Repository> {
    let raw = match store.get(RESULTS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("Can't read stored results: {}", e);
            return Vec::new();
        }
    };

    let results = match serde_json::from_str::<Vec<Repository>>(&raw) {
        Ok(stored) => {
            let count = stored.len();
            let results = dedupe(stored);
            if results.len() == count {
                return results;
            }
            tracing::warn!("Dropping {} repeated stored results", count - results.len());
            results
        }
        Err(e) => {
            tracing::warn!("Discarding unreadable stored results: {}", e);
            Vec::new()
        }
    };

    if let Err(e) = write_results(store, &results) {
        tracing::warn!("Can't rewrite stored results: {}", e);
    }
    results
}
