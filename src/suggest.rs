//! Symbol autocomplete
//!
//! [`SuggestState`] is the pure state machine, [`Debouncer`] the cancelable
//! deadline, and [`SuggestController`] ties both to the service worker with
//! latest-wins handling of lookup replies.

mod controller;
mod debouncer;
mod matcher;
pub mod suggest_events;
pub mod suggest_render;
mod suggest_state;

pub use controller::SuggestController;
pub use debouncer::Debouncer;
pub use matcher::SymbolMatcher;
pub use suggest_events::{SuggestAction, handle_suggest_key};
pub use suggest_state::{Direction, SuggestState};
