//! Service Worker Thread
//!
//! Runs remote service calls on a background thread so the UI loop never
//! blocks. Requests arrive over a channel, each one is spawned as its own
//! task on a current-thread tokio runtime, and the result is sent back on
//! the reply channel carried by the request.
//!
//! Because every request runs concurrently, replies can arrive in any
//! order. Consumers tag requests with a `request_id` and discard replies
//! that are no longer the latest.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use crate::api::{ApiError, ApiFuture, PipelineResponse, RecentSearch, SentimentApi, Suggestion};

/// A finished service call
#[derive(Debug)]
pub struct Reply<T> {
    /// ID the consumer attached to the request
    pub request_id: u64,
    pub result: Result<T, ApiError>,
}

pub type LookupReply = Reply<Vec<Suggestion>>;
pub type RecentReply = Reply<Vec<RecentSearch>>;
pub type AnalysisReply = Reply<PipelineResponse>;

/// Request messages sent to the worker thread
///
/// Every request carries its own reply channel so independent consumers
/// never see each other's replies, and a cancellation token the consumer
/// fires when the request is superseded or torn down.
#[derive(Debug)]
pub enum ServiceRequest {
    Suggest {
        query: String,
        request_id: u64,
        cancel: CancellationToken,
        reply: Sender<LookupReply>,
    },
    Recent {
        request_id: u64,
        cancel: CancellationToken,
        reply: Sender<RecentReply>,
    },
    Analyze {
        symbol: String,
        request_id: u64,
        cancel: CancellationToken,
        reply: Sender<AnalysisReply>,
    },
}

/// Sending half of the worker's request channel
///
/// Cheap to clone. The worker shuts down once every handle is dropped.
#[derive(Debug, Clone)]
pub struct ServiceHandle {
    request_tx: UnboundedSender<ServiceRequest>,
}

impl ServiceHandle {
    pub fn new(request_tx: UnboundedSender<ServiceRequest>) -> Self {
        Self { request_tx }
    }

    /// Queue a request; returns false if the worker is gone
    pub fn send(&self, request: ServiceRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }
}

/// Spawn the service worker thread
pub fn spawn_worker(api: Arc<dyn SentimentApi>) -> ServiceHandle {
    let (request_tx, request_rx) = unbounded_channel();

    std::thread::spawn(move || {
        worker_loop(api, request_rx);
    });

    ServiceHandle::new(request_tx)
}

/// Main worker loop - processes requests until the channel is closed
///
/// Dropping the runtime on exit aborts any call still outstanding.
fn worker_loop(api: Arc<dyn SentimentApi>, mut request_rx: UnboundedReceiver<ServiceRequest>) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::warn!("Service worker could not start a runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        while let Some(request) = request_rx.recv().await {
            tokio::spawn(handle_request(Arc::clone(&api), request));
        }
    });

    log::debug!("Service worker shutting down");
}

async fn handle_request(api: Arc<dyn SentimentApi>, request: ServiceRequest) {
    match request {
        ServiceRequest::Suggest {
            query,
            request_id,
            cancel,
            reply,
        } => {
            let result = run_cancellable(&cancel, api.suggest(&query)).await;
            log::debug!("Lookup {} for {:?} finished: ok={}", request_id, query, result.is_ok());
            let _ = reply.send(Reply { request_id, result });
        }
        ServiceRequest::Recent {
            request_id,
            cancel,
            reply,
        } => {
            let result = run_cancellable(&cancel, api.recent()).await;
            let _ = reply.send(Reply { request_id, result });
        }
        ServiceRequest::Analyze {
            symbol,
            request_id,
            cancel,
            reply,
        } => {
            let result = run_cancellable(&cancel, api.analyze(&symbol)).await;
            log::debug!("Analysis {} for {} finished: ok={}", request_id, symbol, result.is_ok());
            let _ = reply.send(Reply { request_id, result });
        }
    }
}

/// Race a service call against its cancellation token
///
/// Cancellation is checked first, so a pre-cancelled request never starts.
async fn run_cancellable<T>(cancel: &CancellationToken, call: ApiFuture<T>) -> Result<T, ApiError> {
    if cancel.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ApiError::Cancelled),
        result = call => result,
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
