use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{AnalysisState, AnalysisStatus, SentimentLabel};
use crate::api::PipelineResponse;
use crate::theme;
use crate::widgets::popup;

const SCORE_BAR_WIDTH: usize = 20;
/// Scores are reported on a -10..=10 scale
const SCORE_SCALE: f64 = 10.0;

pub const IDLE_HINT: &str = "Type a stock symbol (e.g. RELIANCE, TCS) and press Enter";

pub fn render_panel(state: &AnalysisState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Sentiment Analysis ")
        .border_style(Style::default().fg(theme::analysis::BORDER));

    let inner_width = area.width.saturating_sub(4) as usize;
    let lines = match state.status() {
        AnalysisStatus::Idle => vec![
            Line::from(""),
            Line::from(Span::styled(
                IDLE_HINT,
                Style::default().fg(theme::search::HINT),
            )),
        ],
        AnalysisStatus::Loading { symbol } => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("{} ", state.spinner_char()),
                    Style::default().fg(theme::analysis::SPINNER),
                ),
                Span::styled(
                    format!("Analyzing market sentiment for {}...", symbol),
                    Style::default().fg(theme::analysis::VALUE),
                ),
            ]),
        ],
        AnalysisStatus::Failed(message) => vec![
            Line::from(""),
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(theme::analysis::ERROR),
            )),
        ],
        AnalysisStatus::Complete(response) => result_lines(response, inner_width),
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn result_lines(response: &PipelineResponse, width: usize) -> Vec<Line<'static>> {
    let summary = &response.sentiment_summary;
    let sentiment = SentimentLabel::from_label(&summary.sentiment_label);
    let label_style = Style::default().fg(theme::analysis::LABEL);
    let value_style = Style::default().fg(theme::analysis::VALUE);

    let mut lines = vec![
        Line::from(Span::styled(
            response.company.name.clone(),
            Style::default()
                .fg(theme::analysis::TITLE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Sentiment  ", label_style),
            Span::styled(
                sentiment.label(),
                Style::default()
                    .fg(sentiment.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Score  ", label_style),
            Span::styled(format_score(summary.overall_score), value_style),
            Span::raw("  "),
            Span::styled(score_bar(summary.overall_score), Style::default().fg(sentiment.color())),
        ]),
        Line::from(vec![
            Span::styled("Bullish ", label_style),
            Span::styled(
                summary.bullish.to_string(),
                Style::default().fg(theme::sentiment::BULLISH),
            ),
            Span::styled("   Neutral ", label_style),
            Span::styled(
                summary.neutral.to_string(),
                Style::default().fg(theme::sentiment::NEUTRAL),
            ),
            Span::styled("   Bearish ", label_style),
            Span::styled(
                summary.bearish.to_string(),
                Style::default().fg(theme::sentiment::BEARISH),
            ),
            Span::styled("   Confidence ", label_style),
            Span::styled(format_confidence(summary.confidence), value_style),
            Span::styled("   Articles ", label_style),
            Span::styled(response.article_count.to_string(), value_style),
        ]),
        Line::from(""),
    ];

    if response.articles.is_empty() {
        lines.push(Line::from(Span::styled("No recent articles", label_style)));
        return lines;
    }

    lines.push(Line::from(Span::styled(
        "Recent Articles",
        value_style.add_modifier(Modifier::BOLD),
    )));

    for article in &response.articles {
        let badge = SentimentLabel::from_label(&article.sentiment);
        let badge_text = format!(" [{}]", badge.label());
        let title_room = width.saturating_sub(badge_text.len() + 2);

        lines.push(Line::from(vec![
            Span::styled("• ", label_style),
            Span::styled(popup::truncate_to_width(&article.title, title_room), value_style),
            Span::styled(badge_text, Style::default().fg(badge.color())),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {} · {}", article.source, article.published_date()),
            Style::default().fg(theme::analysis::ARTICLE_SOURCE),
        )));
    }

    lines
}

/// Signed score with one decimal, e.g. `+3.4`
pub fn format_score(score: f64) -> String {
    if score > 0.0 {
        format!("+{:.1}", score)
    } else {
        format!("{:.1}", score)
    }
}

/// Confidence fraction as a percentage, e.g. `87.3%`
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Horizontal bar whose filled share is the score magnitude
pub fn score_bar(score: f64) -> String {
    let ratio = (score.abs() / SCORE_SCALE).clamp(0.0, 1.0);
    let filled = (ratio * SCORE_BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(SCORE_BAR_WIDTH - filled)
    )
}

#[cfg(test)]
#[path = "analysis_render_tests.rs"]
mod analysis_render_tests;
