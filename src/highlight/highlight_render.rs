use ratatui::{Frame, layout::Rect, style::Color};

use super::PointerLoop;
use crate::config::{HighlightColor, HighlightConfig};
use crate::theme;

/// Opacity of the glow at its centre
const PEAK_ALPHA: f32 = 0.35;
/// Cells are roughly twice as tall as wide
const CELL_ASPECT: f32 = 0.5;

pub fn glow_rgb(color: HighlightColor) -> (u8, u8, u8) {
    match color {
        HighlightColor::Blue => (59, 130, 246),
        HighlightColor::Red => (239, 68, 68),
        HighlightColor::White => (255, 255, 255),
        HighlightColor::Black => (0, 0, 0),
    }
}

/// Glow strength at an offset from the centre, in `0..=PEAK_ALPHA`
pub fn glow_alpha(dx: f32, dy: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    let distance = (dx * CELL_ASPECT).hypot(dy);
    if distance >= radius {
        return 0.0;
    }
    let falloff = 1.0 - distance / radius;
    PEAK_ALPHA * falloff * falloff
}

pub fn blend(base: (u8, u8, u8), over: (u8, u8, u8), alpha: f32) -> Color {
    let mix = |b: u8, o: u8| -> u8 {
        let value = f32::from(b) + (f32::from(o) - f32::from(b)) * alpha;
        value.round().clamp(0.0, 255.0) as u8
    };
    Color::Rgb(mix(base.0, over.0), mix(base.1, over.1), mix(base.2, over.2))
}

/// Paint the page background, with the glow at the pointer if visible
///
/// Drawn before everything else so widgets without their own background
/// show the glow through.
pub fn render_glow(pointer: &PointerLoop, config: &HighlightConfig, frame: &mut Frame, area: Rect) {
    let base = match theme::BACKGROUND {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    };
    let buffer = frame.buffer_mut();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buffer[(x, y)].set_bg(theme::BACKGROUND);
        }
    }

    if !pointer.is_visible() {
        return;
    }

    let centre = pointer.current();
    let radius = f32::from(config.radius);
    let glow = glow_rgb(config.color);

    // Horizontal reach is wider because columns count half
    let reach_x = (radius / CELL_ASPECT).ceil() as i32;
    let reach_y = radius.ceil() as i32;
    let cx = centre.x.round() as i32;
    let cy = centre.y.round() as i32;

    for y in (cy - reach_y).max(i32::from(area.top()))..(cy + reach_y + 1).min(i32::from(area.bottom())) {
        for x in (cx - reach_x).max(i32::from(area.left()))..(cx + reach_x + 1).min(i32::from(area.right())) {
            let alpha = glow_alpha(x as f32 - centre.x, y as f32 - centre.y, radius);
            if alpha > 0.0 {
                buffer[(x as u16, y as u16)].set_bg(blend(base, glow, alpha));
            }
        }
    }
}

#[cfg(test)]
#[path = "highlight_render_tests.rs"]
mod highlight_render_tests;
