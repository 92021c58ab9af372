//! Terminal dashboard for AI market-news sentiment on NSE stocks
//!
//! The search box suggests symbols as you type (debounced, latest reply
//! wins), a soft glow follows the pointer, and committed symbols are sent
//! to the sentiment pipeline whose result fills the analysis panel.

pub mod analysis;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod highlight;
pub mod recent;
pub mod suggest;
pub mod theme;
pub mod widgets;
pub mod worker;

#[cfg(test)]
mod test_utils;

pub use app::App;
pub use error::StockNewsError;
