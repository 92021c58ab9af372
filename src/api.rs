//! Remote sentiment services
//!
//! Defines the SentimentApi trait the worker drives, ApiError types, and the
//! wire types exchanged with the lookup, recent-searches and pipeline
//! endpoints.

use futures::future::BoxFuture;
use thiserror::Error;

mod client;
mod types;

pub use client::HttpApi;
pub use types::{
    Article, Company, PipelineResponse, RecentSearch, SentimentSummary, Suggestion, format_age,
};

/// Errors that can occur while talking to the remote services
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connect, timeout, truncated body)
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request was superseded or torn down before it finished
    #[error("Request cancelled")]
    Cancelled,
}

/// Boxed future returned by every service call
pub type ApiFuture<T> = BoxFuture<'static, Result<T, ApiError>>;

/// The three remote collaborators of the dashboard
///
/// Futures are `'static` so the worker can spawn them independently of the
/// borrowed arguments.
pub trait SentimentApi: Send + Sync {
    /// Autocomplete candidates for a partial symbol, in service order
    fn suggest(&self, query: &str) -> ApiFuture<Vec<Suggestion>>;

    /// Most recent searches across all users
    fn recent(&self) -> ApiFuture<Vec<RecentSearch>>;

    /// Run the news sentiment pipeline for a symbol
    fn analyze(&self, symbol: &str) -> ApiFuture<PipelineResponse>;
}
