use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::theme;

const TITLE: &str = "StockNews";
const SUBTITLE: &str = "AI-powered market sentiment for NSE stocks";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Background first so the glow sits beneath every widget
        crate::highlight::highlight_render::render_glow(
            &self.highlight,
            &self.config.highlight,
            frame,
            area,
        );

        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
        ])
        .horizontal_margin(1)
        .split(area);
        let (header_area, input_area, recent_area, panel_area) =
            (layout[0], layout[1], layout[2], layout[3]);

        render_header(frame, header_area);
        frame.render_widget(&self.search_input, input_area);

        let now = Utc::now();
        crate::recent::render_strip(&self.recent, frame, recent_area, now);
        crate::analysis::analysis_render::render_panel(&self.analysis, frame, panel_area);

        // Dropdown last so it overlays the panel
        let dropdown = crate::suggest::suggest_render::render_dropdown(
            self.suggest.state(),
            &self.matcher,
            frame,
            input_area,
        );

        self.layout_regions.input = input_area;
        self.layout_regions.dropdown = dropdown;
        self.layout_regions.recent_chips = if self.recent.is_visible() {
            self.recent.chip_regions(recent_area, now)
        } else {
            Vec::new()
        };
        self.layout_regions.panel = panel_area;
    }
}

fn render_header(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default()
                .fg(theme::suggest::SYMBOL)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", SUBTITLE),
            Style::default().fg(theme::search::TITLE),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
