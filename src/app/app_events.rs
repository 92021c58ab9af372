use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::app_state::App;
use crate::suggest::suggest_render::suggestion_index_at;
use crate::suggest::{SuggestAction, handle_suggest_key};

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Only presses; releases and repeats would double-type
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(text, now),
            Event::FocusLost => self.highlight.focus_lost(),
            Event::Resize(width, height) => {
                self.highlight.set_container(Rect::new(0, 0, width, height));
            }
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match handle_suggest_key(&mut self.suggest, key) {
            SuggestAction::Commit(symbol) => self.start_analysis(symbol),
            SuggestAction::Handled => {}
            SuggestAction::NotHandled => self.handle_search_box_key(key, now),
        }
    }

    /// Keys that reach the search box while the dropdown is closed
    fn handle_search_box_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            // Searches start only from a committed candidate
            KeyCode::Enter => {}
            // Single-line box; these would only move between lines or indent
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {}
            _ => {
                if self.search_input.input(key) {
                    self.sync_query(now);
                }
            }
        }
    }

    fn handle_paste_event(&mut self, text: String, now: Instant) {
        // Newlines would split the query over several lines
        let text = text.replace(['\r', '\n'], " ");
        if text.is_empty() {
            return;
        }
        self.search_input.insert_str(text);
        self.sync_query(now);
    }

    fn sync_query(&mut self, now: Instant) {
        let query = self.query().to_string();
        self.suggest.set_query(&query, now);
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        self.highlight.route_mouse(&mouse);

        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            self.handle_click(Position::new(mouse.column, mouse.row));
        }
    }

    fn handle_click(&mut self, position: Position) {
        if let Some(dropdown) = self.open_dropdown_at(position) {
            let committed = suggestion_index_at(self.suggest.state(), dropdown, position)
                .and_then(|index| self.suggest.commit_index(index));
            if let Some(symbol) = committed {
                self.start_analysis(symbol);
            }
            return;
        }

        if let Some(symbol) = self.recent_chip_at(position) {
            let symbol = self.suggest.select_symbol(&symbol);
            self.start_analysis(symbol);
            return;
        }

        if self.layout_regions.input.contains(position) {
            self.suggest.reveal();
        } else {
            self.suggest.dismiss();
        }
    }

    fn open_dropdown_at(&self, position: Position) -> Option<Rect> {
        self.layout_regions
            .dropdown
            .filter(|area| self.suggest.state().is_visible() && area.contains(position))
    }

    fn recent_chip_at(&self, position: Position) -> Option<String> {
        self.layout_regions
            .recent_chips
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .and_then(|(_, idx)| self.recent.searches().get(*idx))
            .map(|search| search.symbol.clone())
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
