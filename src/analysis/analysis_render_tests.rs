//! Tests for analysis/analysis_render

use tokio::sync::mpsc::unbounded_channel;

use super::*;
use crate::test_utils::test_helpers::{buffer_text, render_buffer, sample_pipeline};
use crate::worker::{Reply, ServiceHandle, ServiceRequest};

const PANEL: Rect = Rect {
    x: 0,
    y: 0,
    width: 90,
    height: 16,
};

fn render(state: &AnalysisState) -> String {
    let buffer = render_buffer(PANEL.width, PANEL.height, |frame| {
        render_panel(state, frame, PANEL)
    });
    buffer_text(&buffer)
}

fn completed(symbol: &str) -> AnalysisState {
    let (tx, mut rx) = unbounded_channel();
    let mut state = AnalysisState::new();
    state.attach(ServiceHandle::new(tx));
    state.request(symbol);

    let Ok(ServiceRequest::Analyze {
        request_id, reply, ..
    }) = rx.try_recv()
    else {
        panic!("Expected analysis request");
    };
    reply
        .send(Reply {
            request_id,
            result: Ok(sample_pipeline(symbol)),
        })
        .unwrap();
    state.poll();
    state
}

#[test]
fn test_idle_shows_hint() {
    let text = render(&AnalysisState::new());
    assert!(text.contains("Sentiment Analysis"));
    assert!(text.contains(IDLE_HINT));
}

#[test]
fn test_loading_shows_symbol() {
    let (tx, _rx) = unbounded_channel();
    let mut state = AnalysisState::new();
    state.attach(ServiceHandle::new(tx));
    state.request("TCS");

    let text = render(&state);
    assert!(text.contains("Analyzing market sentiment for TCS..."));
}

#[test]
fn test_failure_shows_message() {
    let mut state = AnalysisState::new();
    state.request("TCS");

    let text = render(&state);
    assert!(text.contains("Failed to analyze sentiment"));
}

#[test]
fn test_complete_shows_summary_and_articles() {
    let text = render(&completed("TCS"));

    assert!(text.contains("TCS Industries"));
    assert!(text.contains("Bullish"));
    assert!(text.contains("+3.4"));
    assert!(text.contains("87.3%"));
    assert!(text.contains("TCS hits record high"));
    assert!(text.contains("Mint · Jan 5, 2025"));
    assert!(text.contains("[Neutral]"));
}

#[test]
fn test_format_score() {
    assert_eq!(format_score(3.44), "+3.4");
    assert_eq!(format_score(-2.0), "-2.0");
    assert_eq!(format_score(0.0), "0.0");
}

#[test]
fn test_format_confidence() {
    assert_eq!(format_confidence(0.873), "87.3%");
    assert_eq!(format_confidence(1.0), "100.0%");
}

#[test]
fn test_score_bar() {
    assert_eq!(score_bar(0.0).chars().filter(|&c| c == '█').count(), 0);
    assert_eq!(score_bar(5.0).chars().filter(|&c| c == '█').count(), 10);
    assert_eq!(score_bar(-10.0).chars().filter(|&c| c == '█').count(), 20);
    assert_eq!(score_bar(42.0).chars().count(), 20);
}
