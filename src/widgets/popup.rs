use ratatui::{Frame, layout::Rect, widgets::Clear};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Place a popup directly below `anchor`, clipped to `frame_area`
pub fn popup_below_anchor(anchor: Rect, frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let frame_bottom = frame_area.y.saturating_add(frame_area.height);
    let frame_right = frame_area.x.saturating_add(frame_area.width);

    Rect {
        x: anchor.x,
        y: popup_y.min(frame_bottom),
        width: width.min(frame_right.saturating_sub(anchor.x)),
        height: height.min(frame_bottom.saturating_sub(popup_y)),
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

/// Cut `text` to at most `max_width` display columns, ending with `…` if cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if used + w > max_width - 1 {
            break;
        }
        result.push(ch);
        used += w;
    }
    result.push('…');
    result
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
