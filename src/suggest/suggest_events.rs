use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::{Direction, SuggestController};

/// Outcome of offering a key to the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestAction {
    /// Key consumed by the dropdown
    Handled,
    /// A candidate was committed; carries its symbol
    Commit(String),
    /// Dropdown hidden or key not relevant; the search box handles it
    NotHandled,
}

/// Handle navigation keys while the dropdown is open
pub fn handle_suggest_key(controller: &mut SuggestController, key: KeyEvent) -> SuggestAction {
    if !controller.state().is_visible() {
        return SuggestAction::NotHandled;
    }

    match key.code {
        KeyCode::Down => {
            controller.move_selection(Direction::Down);
            SuggestAction::Handled
        }
        KeyCode::Up => {
            controller.move_selection(Direction::Up);
            SuggestAction::Handled
        }
        KeyCode::Enter => match controller.commit() {
            Some(symbol) => SuggestAction::Commit(symbol),
            None => SuggestAction::Handled,
        },
        KeyCode::Esc => {
            controller.dismiss();
            SuggestAction::Handled
        }
        _ => SuggestAction::NotHandled,
    }
}

#[cfg(test)]
#[path = "suggest_events_tests.rs"]
mod suggest_events_tests;
