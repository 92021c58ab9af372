//! Tests for highlight/highlight_render

use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

use super::*;
use crate::highlight::Easing;
use crate::test_utils::test_helpers::render_buffer;

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 60,
    height: 30,
};

fn pointer_at(column: u16, row: u16, settle: bool) -> PointerLoop {
    let now = Instant::now();
    let mut pointer = PointerLoop::new(Duration::from_millis(16));
    let easing = if settle {
        Easing::new(1.0).unwrap()
    } else {
        Easing::DEFAULT
    };
    pointer.start(AREA, easing, true, now);
    pointer.route_mouse(&MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    });
    if settle {
        pointer.tick(now + Duration::from_millis(16));
    }
    pointer
}

#[test]
fn test_glow_alpha_falloff() {
    assert_eq!(glow_alpha(0.0, 0.0, 10.0), PEAK_ALPHA);
    assert!(glow_alpha(0.0, 5.0, 10.0) < PEAK_ALPHA);
    assert_eq!(glow_alpha(0.0, 10.0, 10.0), 0.0);
    assert_eq!(glow_alpha(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn test_glow_alpha_wider_horizontally() {
    // Ten columns are as far as five rows
    assert_eq!(glow_alpha(10.0, 0.0, 12.0), glow_alpha(0.0, 5.0, 12.0));
}

#[test]
fn test_blend() {
    assert_eq!(blend((0, 0, 0), (200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
    assert_eq!(blend((0, 0, 0), (200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
    assert_eq!(blend((0, 0, 0), (200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
}

#[test]
fn test_glow_colors() {
    assert_eq!(glow_rgb(HighlightColor::Blue), (59, 130, 246));
    assert_eq!(glow_rgb(HighlightColor::Red), (239, 68, 68));
    assert_eq!(glow_rgb(HighlightColor::White), (255, 255, 255));
    assert_eq!(glow_rgb(HighlightColor::Black), (0, 0, 0));
}

#[test]
fn test_hidden_pointer_paints_plain_background() {
    let mut pointer = pointer_at(30, 15, true);
    pointer.stop();

    let buffer = render_buffer(AREA.width, AREA.height, |frame| {
        render_glow(&pointer, &HighlightConfig::default(), frame, AREA)
    });

    assert_eq!(buffer[(30, 15)].bg, theme::BACKGROUND);
    assert_eq!(buffer[(0, 0)].bg, theme::BACKGROUND);
}

#[test]
fn test_glow_centred_on_current_position() {
    let pointer = pointer_at(30, 15, true);
    let config = HighlightConfig::default();

    let buffer = render_buffer(AREA.width, AREA.height, |frame| {
        render_glow(&pointer, &config, frame, AREA)
    });

    let centre = buffer[(30, 15)].bg;
    assert_ne!(centre, theme::BACKGROUND);
    assert_eq!(centre, blend((2, 6, 23), (59, 130, 246), PEAK_ALPHA));
    // Outside the radius nothing changes
    assert_eq!(buffer[(30, 29)].bg, theme::BACKGROUND);
    assert_eq!(buffer[(0, 15)].bg, theme::BACKGROUND);
}

#[test]
fn test_glow_follows_interpolated_not_raw_position() {
    // One frame at 0.15 moves only part of the way towards (50, 25)
    let now = Instant::now();
    let mut pointer = pointer_at(50, 25, false);
    pointer.tick(now + Duration::from_secs(1));
    let current = pointer.current();
    assert!(current.x < 50.0);

    let config = HighlightConfig {
        radius: 3,
        ..HighlightConfig::default()
    };
    let buffer = render_buffer(AREA.width, AREA.height, |frame| {
        render_glow(&pointer, &config, frame, AREA)
    });

    assert_eq!(buffer[(50, 25)].bg, theme::BACKGROUND);
}

#[test]
fn test_glow_clipped_at_edges() {
    let pointer = pointer_at(0, 0, true);
    let config = HighlightConfig {
        color: HighlightColor::Red,
        ..HighlightConfig::default()
    };

    let buffer = render_buffer(AREA.width, AREA.height, |frame| {
        render_glow(&pointer, &config, frame, AREA)
    });

    assert_ne!(buffer[(0, 0)].bg, theme::BACKGROUND);
}
