//! Recent searches strip
//!
//! Fetched once when the dashboard mounts and shown as clickable chips.
//! Loading, failed and empty states all hide the strip.

use std::sync::mpsc::{Receiver, Sender, channel};

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio_util::sync::CancellationToken;
use unicode_width::UnicodeWidthStr;

use crate::api::{RecentSearch, format_age};
use crate::theme;
use crate::widgets::popup;
use crate::worker::{RecentReply, ServiceHandle, ServiceRequest};

const LABEL: &str = "Recent: ";
const CHIP_GAP: u16 = 2;
const MAX_COMPANY_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq)]
enum RecentStatus {
    NotRequested,
    Loading,
    Loaded(Vec<RecentSearch>),
    Failed,
}

pub struct RecentState {
    status: RecentStatus,
    in_flight: Option<CancellationToken>,
    reply_tx: Sender<RecentReply>,
    reply_rx: Receiver<RecentReply>,
    torn_down: bool,
}

impl Default for RecentState {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentState {
    pub fn new() -> Self {
        let (reply_tx, reply_rx) = channel();
        Self {
            status: RecentStatus::NotRequested,
            in_flight: None,
            reply_tx,
            reply_rx,
            torn_down: false,
        }
    }

    /// Ask the service for recent searches; only the first call does anything
    pub fn request(&mut self, service: &ServiceHandle) -> bool {
        if self.torn_down || self.status != RecentStatus::NotRequested {
            return false;
        }

        let cancel = CancellationToken::new();
        let sent = service.send(ServiceRequest::Recent {
            request_id: 1,
            cancel: cancel.clone(),
            reply: self.reply_tx.clone(),
        });

        if sent {
            self.status = RecentStatus::Loading;
            self.in_flight = Some(cancel);
        } else {
            log::warn!("Recent searches service is gone");
            self.status = RecentStatus::Failed;
        }
        sent
    }

    /// Drain the reply; returns true if the strip changed
    pub fn poll(&mut self) -> bool {
        if self.torn_down || self.status != RecentStatus::Loading {
            return false;
        }
        let Ok(reply) = self.reply_rx.try_recv() else {
            return false;
        };

        self.in_flight = None;
        self.status = match reply.result {
            Ok(searches) => {
                log::debug!("Loaded {} recent searches", searches.len());
                RecentStatus::Loaded(searches)
            }
            Err(e) => {
                log::warn!("Failed to fetch recent searches: {}", e);
                RecentStatus::Failed
            }
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        self.status == RecentStatus::Loading
    }

    pub fn is_visible(&self) -> bool {
        !self.searches().is_empty()
    }

    pub fn searches(&self) -> &[RecentSearch] {
        match &self.status {
            RecentStatus::Loaded(searches) => searches,
            _ => &[],
        }
    }

    pub fn teardown(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        self.torn_down = true;
    }

    /// Screen regions of the chips that fit in `area`, with their indices
    pub fn chip_regions(&self, area: Rect, now: DateTime<Utc>) -> Vec<(Rect, usize)> {
        let mut regions = Vec::new();
        if area.height == 0 {
            return regions;
        }

        let mut x = area.x.saturating_add(LABEL.width() as u16);
        let right = area.x.saturating_add(area.width);
        for (idx, search) in self.searches().iter().enumerate() {
            let width = chip_text(search, now).width() as u16;
            if x.saturating_add(width) > right {
                break;
            }
            regions.push((Rect::new(x, area.y, width, 1), idx));
            x = x.saturating_add(width + CHIP_GAP);
        }
        regions
    }

    /// Symbol of the chip at `position`
    pub fn chip_at(&self, area: Rect, position: Position, now: DateTime<Utc>) -> Option<&str> {
        self.chip_regions(area, now)
            .into_iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, idx)| self.searches()[idx].symbol.as_str())
    }
}

fn chip_text(search: &RecentSearch, now: DateTime<Utc>) -> String {
    let company = popup::truncate_to_width(&search.company_name, MAX_COMPANY_WIDTH);
    match search.age(now) {
        Some(age) => format!(" {} - {} · {} ", search.symbol, company, format_age(age)),
        None => format!(" {} - {} ", search.symbol, company),
    }
}

/// Render the strip; nothing is drawn while it is hidden
pub fn render_strip(state: &RecentState, frame: &mut Frame, area: Rect, now: DateTime<Utc>) {
    if !state.is_visible() || area.height == 0 {
        return;
    }

    let chip_style = Style::default().bg(theme::recent::CHIP_BG);
    let mut spans = vec![Span::styled(LABEL, Style::default().fg(theme::recent::LABEL))];

    let regions = state.chip_regions(area, now);
    for (n, (_, idx)) in regions.iter().enumerate() {
        if n > 0 {
            spans.push(Span::raw(" ".repeat(CHIP_GAP as usize)));
        }
        let search = &state.searches()[*idx];
        let company = popup::truncate_to_width(&search.company_name, MAX_COMPANY_WIDTH);
        spans.push(Span::styled(
            format!(" {}", search.symbol),
            chip_style
                .fg(theme::recent::CHIP_SYMBOL)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" - {}", company),
            chip_style.fg(theme::analysis::LABEL),
        ));
        let age = search
            .age(now)
            .map(|age| format!(" · {}", format_age(age)))
            .unwrap_or_default();
        spans.push(Span::styled(
            format!("{} ", age),
            chip_style.fg(theme::recent::CHIP_AGE),
        ));
    }

    let row = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

#[cfg(test)]
#[path = "recent_tests.rs"]
mod recent_tests;
