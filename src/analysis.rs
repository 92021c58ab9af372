//! Sentiment analysis panel
//!
//! Sends committed symbols to the pipeline service and keeps the latest
//! result for rendering.

pub mod analysis_render;
mod analysis_state;
mod sentiment;

pub use analysis_state::{AnalysisState, AnalysisStatus};
pub use sentiment::SentimentLabel;
