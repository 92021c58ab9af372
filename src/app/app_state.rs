use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders},
};
use tui_textarea::TextArea;

use crate::analysis::AnalysisState;
use crate::config::Config;
use crate::highlight::PointerLoop;
use crate::recent::RecentState;
use crate::suggest::{SuggestController, SymbolMatcher};
use crate::theme;
use crate::worker::ServiceHandle;

/// How often the loading spinner advances
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Where components were drawn on the last frame, for mouse hit-testing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutRegions {
    pub input: Rect,
    pub dropdown: Option<Rect>,
    pub recent_chips: Vec<(Rect, usize)>,
    pub panel: Rect,
}

pub struct App {
    pub search_input: TextArea<'static>,
    pub suggest: SuggestController,
    pub matcher: SymbolMatcher,
    pub highlight: PointerLoop,
    pub recent: RecentState,
    pub analysis: AnalysisState,
    pub config: Config,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    pub(super) spinner_due: Option<Instant>,
}

impl App {
    /// Build the dashboard and start its background work
    ///
    /// With no service attached, lookups are skipped and analyses fail
    /// with a visible message.
    pub fn new(config: Config, service: Option<ServiceHandle>, now: Instant, viewport: Rect) -> Self {
        let mut suggest = SuggestController::new(&config.suggest);
        let mut analysis = AnalysisState::new();
        let mut recent = RecentState::new();

        if let Some(service) = service {
            recent.request(&service);
            suggest.attach(service.clone());
            analysis.attach(service);
        }

        let mut highlight = PointerLoop::new(Duration::from_millis(config.highlight.frame_ms.max(1)));
        highlight.start(
            viewport,
            config.highlight.easing(),
            config.highlight.enabled,
            now,
        );

        Self {
            search_input: new_search_input(),
            suggest,
            matcher: SymbolMatcher::new(),
            highlight,
            recent,
            analysis,
            config,
            layout_regions: LayoutRegions::default(),
            should_quit: false,
            spinner_due: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text currently in the search box
    pub fn query(&self) -> &str {
        self.search_input
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Earliest moment `on_tick` has scheduled work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.suggest.next_deadline(),
            self.highlight.next_deadline(),
            self.spinner_due,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Fire due timers and apply service replies
    ///
    /// Returns true if anything on screen changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.suggest.tick(now);

        let mut changed = self.suggest.poll_responses();
        changed |= self.recent.poll();
        changed |= self.analysis.poll();
        changed |= self.highlight.tick(now);
        changed |= self.tick_spinner(now);
        changed
    }

    fn tick_spinner(&mut self, now: Instant) -> bool {
        if !self.analysis.is_loading() {
            self.spinner_due = None;
            return false;
        }
        match self.spinner_due {
            Some(due) if now >= due => {
                self.spinner_due = Some(now + SPINNER_INTERVAL);
                self.analysis.tick_spinner()
            }
            Some(_) => false,
            None => {
                self.spinner_due = Some(now + SPINNER_INTERVAL);
                false
            }
        }
    }

    /// Start an analysis for a symbol committed by any route
    pub(super) fn start_analysis(&mut self, symbol: String) {
        self.clear_search_input();
        self.spinner_due = None;
        self.analysis.request(&symbol);
    }

    pub(super) fn clear_search_input(&mut self) {
        self.search_input.select_all();
        self.search_input.cut();
    }

    /// Cancel all outstanding work and release the pointer subscription
    ///
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        self.suggest.teardown();
        self.highlight.stop();
        self.recent.teardown();
        self.analysis.teardown();
        self.spinner_due = None;
    }
}

fn new_search_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Search stock ")
            .title_style(Style::default().fg(theme::search::TITLE))
            .border_style(Style::default().fg(theme::search::BORDER_FOCUSED)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Symbol or company name");
    textarea.set_placeholder_style(Style::default().fg(theme::search::HINT));

    textarea
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
