use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use super::{Debouncer, Direction, SuggestState};
use crate::api::ApiError;
use crate::config::SuggestConfig;
use crate::worker::{LookupReply, ServiceHandle, ServiceRequest};

/// Reply channel owned by one controller
struct LookupChannel {
    tx: Sender<LookupReply>,
    rx: Receiver<LookupReply>,
}

/// Debounced autocomplete driven by the UI loop
///
/// The loop calls [`set_query`](Self::set_query) on every edit, sleeps
/// until [`next_deadline`](Self::next_deadline), then calls
/// [`tick`](Self::tick) and [`poll_responses`](Self::poll_responses).
///
/// Every dispatched lookup gets a new sequence number. A reply is applied
/// only if it belongs to the most recently issued lookup and nothing newer
/// has been applied, so replies arriving out of order never overwrite
/// fresher candidates.
pub struct SuggestController {
    state: SuggestState,
    debouncer: Debouncer,
    min_query_len: usize,
    issued_seq: u64,
    applied_seq: u64,
    in_flight: Option<CancellationToken>,
    service: Option<ServiceHandle>,
    channel: Option<LookupChannel>,
}

impl SuggestController {
    pub fn new(config: &SuggestConfig) -> Self {
        let (tx, rx) = channel();
        Self {
            state: SuggestState::new(),
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            min_query_len: config.min_query_len,
            issued_seq: 0,
            applied_seq: 0,
            in_flight: None,
            service: None,
            channel: Some(LookupChannel { tx, rx }),
        }
    }

    /// Connect the lookup service
    pub fn attach(&mut self, service: ServiceHandle) {
        self.service = Some(service);
    }

    pub fn state(&self) -> &SuggestState {
        &self.state
    }

    /// Whether a dispatched lookup has not been answered or invalidated yet
    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.channel.is_none()
    }

    /// Update the query and restart the debounce window
    ///
    /// Queries shorter than the minimum clear the dropdown immediately and
    /// cancel both the pending debounce and any in-flight lookup.
    pub fn set_query(&mut self, text: &str, now: Instant) {
        if self.is_torn_down() {
            return;
        }

        if self.state.set_query(text, self.min_query_len) {
            self.debouncer.schedule(now);
        } else {
            self.debouncer.cancel();
            self.invalidate_in_flight();
        }
    }

    /// When the pending debounce fires, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.is_torn_down() {
            return None;
        }
        self.debouncer.deadline()
    }

    /// Dispatch the deferred lookup once its quiet period is over
    ///
    /// The lookup uses the query text current at fire time. Returns true
    /// when a request was sent.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_torn_down() || !self.debouncer.take_ready(now) {
            return false;
        }
        if self.state.query().chars().count() < self.min_query_len {
            return false;
        }
        self.dispatch_lookup()
    }

    fn dispatch_lookup(&mut self) -> bool {
        let (Some(service), Some(channel)) = (&self.service, &self.channel) else {
            log::debug!("No lookup service attached; skipping {:?}", self.state.query());
            return false;
        };

        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }

        let request_id = self.issued_seq + 1;
        let cancel = CancellationToken::new();
        let sent = service.send(ServiceRequest::Suggest {
            query: self.state.query().to_string(),
            request_id,
            cancel: cancel.clone(),
            reply: channel.tx.clone(),
        });

        if !sent {
            log::warn!("Lookup service is gone; dropping lookup for {:?}", self.state.query());
            return false;
        }

        log::debug!("Issued lookup {} for {:?}", request_id, self.state.query());
        self.issued_seq = request_id;
        self.in_flight = Some(cancel);
        true
    }

    /// Drain and apply lookup replies; returns true if state changed
    pub fn poll_responses(&mut self) -> bool {
        let replies: Vec<LookupReply> = match &self.channel {
            Some(channel) => channel.rx.try_iter().collect(),
            None => return false,
        };

        let mut changed = false;
        for reply in replies {
            changed |= self.apply_response(reply);
        }
        changed
    }

    /// Apply one reply if it is the latest; returns true if state changed
    ///
    /// Failed lookups leave candidates and visibility as they were.
    pub fn apply_response(&mut self, reply: LookupReply) -> bool {
        if self.is_torn_down() {
            return false;
        }

        if reply.request_id != self.issued_seq || reply.request_id <= self.applied_seq {
            log::debug!(
                "Discarding stale lookup {} (latest issued {}, applied {})",
                reply.request_id,
                self.issued_seq,
                self.applied_seq
            );
            return false;
        }

        self.applied_seq = reply.request_id;
        self.in_flight = None;

        match reply.result {
            Ok(suggestions) => {
                log::debug!(
                    "Applied lookup {} with {} suggestions",
                    reply.request_id,
                    suggestions.len()
                );
                self.state.resolve(suggestions);
                true
            }
            Err(ApiError::Cancelled) => false,
            Err(e) => {
                log::warn!("Lookup {} failed: {}", reply.request_id, e);
                false
            }
        }
    }

    pub fn move_selection(&mut self, direction: Direction) {
        self.state.move_selection(direction);
    }

    /// Commit the selected or implicit first candidate
    ///
    /// Returns the committed symbol, which the caller turns into a search.
    pub fn commit(&mut self) -> Option<String> {
        let committed = self.state.commit()?;
        self.after_commit();
        Some(committed.symbol)
    }

    /// Commit the candidate at `index` (a clicked row)
    pub fn commit_index(&mut self, index: usize) -> Option<String> {
        let committed = self.state.commit_index(index)?;
        self.after_commit();
        Some(committed.symbol)
    }

    /// Search for a symbol chosen outside the dropdown
    ///
    /// Resets the controller exactly like a commit.
    pub fn select_symbol(&mut self, symbol: &str) -> String {
        self.state.reset();
        self.after_commit();
        symbol.to_string()
    }

    fn after_commit(&mut self) {
        self.debouncer.cancel();
        self.invalidate_in_flight();
    }

    pub fn dismiss(&mut self) {
        self.state.dismiss();
    }

    pub fn reveal(&mut self) {
        if !self.is_torn_down() {
            self.state.reveal();
        }
    }

    /// Cancel the in-flight lookup and make sure its reply is ignored
    fn invalidate_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            log::debug!("Cancelling lookup {}", self.issued_seq);
            token.cancel();
        }
        self.applied_seq = self.issued_seq;
    }

    /// Stop all pending work; later calls are no-ops
    pub fn teardown(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.debouncer.cancel();
        self.invalidate_in_flight();
        self.channel = None;
        self.service = None;
        log::debug!("Suggestion controller torn down");
    }
}

impl Drop for SuggestController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
