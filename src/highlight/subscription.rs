use ratatui::crossterm::event::MouseEvent;
use ratatui::layout::{Position, Rect};

use super::Vec2;

/// Pointer notifications for one container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a viewport position (not container-relative)
    Move(Vec2),
    Enter,
    Leave,
}

/// Scoped subscription to the move, enter and leave events of a container
///
/// The terminal reports raw mouse positions for the whole screen, so the
/// subscription hit-tests them against the container and synthesizes
/// enter and leave on boundary crossings. Dropping it releases all three
/// listeners at once.
#[derive(Debug)]
pub struct PointerSubscription {
    container: Rect,
    inside: bool,
}

impl PointerSubscription {
    pub fn acquire(container: Rect) -> Self {
        log::debug!("Pointer listeners attached to {:?}", container);
        Self {
            container,
            inside: false,
        }
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Follow a resized container without losing the inside/outside state
    ///
    /// Returns `Leave` if the pointer is no longer inside the new bounds.
    pub fn set_container(&mut self, container: Rect, last: Option<Position>) -> Option<PointerEvent> {
        self.container = container;
        let still_inside = last.is_some_and(|p| container.contains(p));
        if self.inside && !still_inside {
            self.inside = false;
            return Some(PointerEvent::Leave);
        }
        None
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Translate a raw mouse event into container events
    ///
    /// Entering yields `Enter` before the `Move`; positions outside the
    /// container yield at most a single `Leave`.
    pub fn translate(&mut self, event: &MouseEvent) -> Vec<PointerEvent> {
        let position = Position::new(event.column, event.row);
        let mut events = Vec::new();

        if self.container.contains(position) {
            if !self.inside {
                self.inside = true;
                events.push(PointerEvent::Enter);
            }
            events.push(PointerEvent::Move(Vec2::new(
                f32::from(event.column),
                f32::from(event.row),
            )));
        } else if self.inside {
            self.inside = false;
            events.push(PointerEvent::Leave);
        }

        events
    }

    /// The terminal lost focus; the pointer is gone as far as we can tell
    pub fn focus_lost(&mut self) -> Option<PointerEvent> {
        if self.inside {
            self.inside = false;
            Some(PointerEvent::Leave)
        } else {
            None
        }
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        log::debug!("Pointer listeners released from {:?}", self.container);
    }
}
