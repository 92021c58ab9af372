use std::sync::mpsc::{Receiver, Sender, channel};

use tokio_util::sync::CancellationToken;

use crate::api::{ApiError, PipelineResponse};
use crate::worker::{AnalysisReply, ServiceHandle, ServiceRequest};

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// What the analysis panel is showing
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisStatus {
    Idle,
    Loading { symbol: String },
    Complete(Box<PipelineResponse>),
    Failed(String),
}

/// Latest-wins pipeline requests for committed symbols
pub struct AnalysisState {
    status: AnalysisStatus,
    issued_seq: u64,
    in_flight: Option<CancellationToken>,
    service: Option<ServiceHandle>,
    reply_tx: Sender<AnalysisReply>,
    reply_rx: Receiver<AnalysisReply>,
    spinner_frame: usize,
    torn_down: bool,
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisState {
    pub fn new() -> Self {
        let (reply_tx, reply_rx) = channel();
        Self {
            status: AnalysisStatus::Idle,
            issued_seq: 0,
            in_flight: None,
            service: None,
            reply_tx,
            reply_rx,
            spinner_frame: 0,
            torn_down: false,
        }
    }

    pub fn attach(&mut self, service: ServiceHandle) {
        self.service = Some(service);
    }

    pub fn status(&self) -> &AnalysisStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, AnalysisStatus::Loading { .. })
    }

    /// Start analyzing `symbol`, superseding any running analysis
    ///
    /// Returns true if the request reached the worker.
    pub fn request(&mut self, symbol: &str) -> bool {
        if self.torn_down {
            return false;
        }

        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }
        self.issued_seq += 1;
        self.spinner_frame = 0;

        let Some(service) = &self.service else {
            self.status = failure("analysis service unavailable");
            return false;
        };

        let cancel = CancellationToken::new();
        let sent = service.send(ServiceRequest::Analyze {
            symbol: symbol.to_string(),
            request_id: self.issued_seq,
            cancel: cancel.clone(),
            reply: self.reply_tx.clone(),
        });

        if !sent {
            log::warn!("Analysis service is gone; cannot analyze {}", symbol);
            self.status = failure("analysis service unavailable");
            return false;
        }

        log::debug!("Issued analysis {} for {}", self.issued_seq, symbol);
        self.in_flight = Some(cancel);
        self.status = AnalysisStatus::Loading {
            symbol: symbol.to_string(),
        };
        true
    }

    /// Drain replies; returns true if the status changed
    pub fn poll(&mut self) -> bool {
        let replies: Vec<AnalysisReply> = self.reply_rx.try_iter().collect();
        let mut changed = false;
        for reply in replies {
            changed |= self.apply_reply(reply);
        }
        changed
    }

    /// Apply a reply if it answers the latest request
    pub fn apply_reply(&mut self, reply: AnalysisReply) -> bool {
        if self.torn_down || reply.request_id != self.issued_seq || !self.is_loading() {
            log::debug!("Discarding stale analysis {}", reply.request_id);
            return false;
        }

        self.in_flight = None;
        match reply.result {
            Ok(response) => {
                self.status = AnalysisStatus::Complete(Box::new(response));
                true
            }
            Err(ApiError::Cancelled) => false,
            Err(e) => {
                log::warn!("Analysis {} failed: {}", reply.request_id, e);
                self.status = failure(&e.to_string());
                true
            }
        }
    }

    /// Advance the loading spinner; returns true while it is animating
    pub fn tick_spinner(&mut self) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        true
    }

    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }

    pub fn teardown(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        self.service = None;
        self.torn_down = true;
    }
}

fn failure(reason: &str) -> AnalysisStatus {
    AnalysisStatus::Failed(format!("Failed to analyze sentiment: {}", reason))
}

#[cfg(test)]
#[path = "analysis_state_tests.rs"]
mod analysis_state_tests;
