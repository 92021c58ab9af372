use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::{SuggestState, SymbolMatcher};
use crate::analysis::SentimentLabel;
use crate::api::Suggestion;
use crate::theme;
use crate::widgets::popup;

pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

const SELECTED_PREFIX: &str = " ┃ ";
const NORMAL_PREFIX: &str = "   ";

/// First candidate shown so the selection stays inside a window of `rows`
pub fn scroll_offset(selected: Option<usize>, total: usize, rows: usize) -> usize {
    let window = total.min(rows);
    match selected {
        Some(i) if i >= window => i + 1 - window,
        _ => 0,
    }
}

/// Render the dropdown under the search box
///
/// Returns the popup area for mouse hit-testing, or `None` when hidden.
pub fn render_dropdown(
    state: &SuggestState,
    matcher: &SymbolMatcher,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    if !state.is_visible() || state.suggestions().is_empty() {
        return None;
    }

    let total = state.suggestions().len();
    let height = total.min(MAX_VISIBLE_SUGGESTIONS) as u16 + 2; // +2 for borders
    let popup_area = popup::popup_below_anchor(input_area, frame.area(), input_area.width, height);
    if popup_area.height < 3 || popup_area.width < 10 {
        return None;
    }

    popup::clear_area(frame, popup_area);

    // A short terminal can clip the popup below the requested height
    let visible = total.min(row_capacity(popup_area));
    let inner_width = popup_area.width.saturating_sub(2) as usize;
    let offset = scroll_offset(state.selected(), total, visible);

    let items: Vec<ListItem> = state
        .suggestions()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, suggestion)| {
            let is_selected = state.selected() == Some(idx);
            ListItem::new(suggestion_line(
                suggestion,
                state.query(),
                matcher,
                is_selected,
                inner_width,
            ))
        })
        .collect();

    let title = if total > visible {
        format!(" Suggestions ({}/{}) ", visible, total)
    } else {
        " Suggestions ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(theme::suggest::BORDER))
        .style(Style::default().bg(theme::suggest::BACKGROUND));

    frame.render_widget(List::new(items).block(block), popup_area);

    Some(popup_area)
}

fn suggestion_line(
    suggestion: &Suggestion,
    query: &str,
    matcher: &SymbolMatcher,
    is_selected: bool,
    width: usize,
) -> Line<'static> {
    let bg = if is_selected {
        theme::suggest::ITEM_SELECTED_BG
    } else {
        theme::suggest::BACKGROUND
    };
    let base = Style::default().bg(bg);
    let symbol_style = if is_selected {
        base.fg(theme::suggest::SYMBOL)
            .add_modifier(theme::suggest::ITEM_SELECTED_MODIFIER)
    } else {
        base.fg(theme::suggest::SYMBOL)
    };

    let mut spans = Vec::new();
    if is_selected {
        spans.push(Span::styled(
            SELECTED_PREFIX,
            base.fg(theme::suggest::ITEM_SELECTED_BAR),
        ));
    } else {
        spans.push(Span::styled(NORMAL_PREFIX, base));
    }

    let matched = matcher.match_indices(&suggestion.symbol, query);
    for (i, ch) in suggestion.symbol.chars().enumerate() {
        let style = if matched.contains(&i) {
            symbol_style
                .fg(theme::suggest::SYMBOL_MATCH)
                .add_modifier(Modifier::BOLD)
        } else {
            symbol_style
        };
        spans.push(Span::styled(ch.to_string(), style));
    }

    let hint = SentimentLabel::classify_hint(&suggestion.company_name);
    let badge = format!(" {} ", hint.label());
    let used = NORMAL_PREFIX.width() + suggestion.symbol.width() + badge.width();

    // Company name takes what is left after two spaces of gap on each side
    let company_room = width.saturating_sub(used + 4);
    let company = popup::truncate_to_width(&suggestion.company_name, company_room);
    if !company.is_empty() {
        spans.push(Span::styled("  ", base));
        spans.push(Span::styled(
            company.clone(),
            base.fg(theme::suggest::COMPANY),
        ));
    }

    let filled = used + if company.is_empty() { 0 } else { 2 + company.width() };
    let padding = width.saturating_sub(filled);
    if padding > 0 {
        spans.push(Span::styled(" ".repeat(padding), base));
    }
    spans.push(Span::styled(
        badge,
        base.fg(hint.color()).add_modifier(Modifier::BOLD),
    ));

    Line::from(spans)
}

/// Candidate rows that fit inside the popup borders
fn row_capacity(popup_area: Rect) -> usize {
    popup_area.height.saturating_sub(2) as usize
}

/// Index of the candidate rendered at `position`, if any
pub fn suggestion_index_at(state: &SuggestState, popup_area: Rect, position: Position) -> Option<usize> {
    let inner = popup::inset_rect(popup_area, 1, 1);
    if !inner.contains(position) {
        return None;
    }

    let total = state.suggestions().len();
    let offset = scroll_offset(state.selected(), total, total.min(row_capacity(popup_area)));
    let index = offset + (position.y - inner.y) as usize;
    (index < state.suggestions().len()).then_some(index)
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
