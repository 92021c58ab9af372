//! Dashboard composition
//!
//! Owns the search box, the suggestion controller, the pointer highlight,
//! the recent-searches strip and the analysis panel, and routes terminal
//! events between them.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::{App, LayoutRegions};
