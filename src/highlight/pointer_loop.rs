use std::time::{Duration, Instant};

use ratatui::crossterm::event::MouseEvent;
use ratatui::layout::{Position, Rect};

use super::{Easing, PointerEvent, PointerSubscription, Vec2, step};

/// Lifecycle of the animation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// Frame-bound damped tracking of the pointer
///
/// Pointer events only record the latest target; the position moves once
/// per frame in [`tick`](Self::tick), so the animation cost does not grow
/// with the mouse event rate. Visibility is independent of the lifecycle
/// and only meaningful while running.
#[derive(Debug)]
pub struct PointerLoop {
    subscription: Option<PointerSubscription>,
    easing: Easing,
    frame_interval: Duration,
    next_frame: Option<Instant>,
    current: Vec2,
    target: Vec2,
    last_position: Option<Position>,
    visible: bool,
}

impl PointerLoop {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            subscription: None,
            easing: Easing::DEFAULT,
            frame_interval: frame_interval.max(Duration::from_millis(1)),
            next_frame: None,
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            last_position: None,
            visible: false,
        }
    }

    /// Attach to `container` and schedule the first frame
    ///
    /// With `enabled == false` nothing is attached or scheduled. Starting
    /// while running restarts with the new container and easing.
    pub fn start(&mut self, container: Rect, easing: Easing, enabled: bool, now: Instant) {
        self.stop();
        if !enabled {
            log::debug!("Pointer highlight disabled");
            return;
        }

        self.easing = easing;
        self.subscription = Some(PointerSubscription::acquire(container));
        self.next_frame = Some(now + self.frame_interval);
    }

    /// Detach listeners and cancel the scheduled frame; safe to repeat
    pub fn stop(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("Pointer loop stopped");
        }
        self.next_frame = None;
        self.visible = false;
    }

    pub fn state(&self) -> LoopState {
        if self.subscription.is_some() {
            LoopState::Running
        } else {
            LoopState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// When the next frame is due, if running
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_frame
    }

    /// Feed a raw terminal mouse event through the subscription
    pub fn route_mouse(&mut self, event: &MouseEvent) {
        let Some(subscription) = self.subscription.as_mut() else {
            return;
        };
        self.last_position = Some(Position::new(event.column, event.row));
        for pointer_event in subscription.translate(event) {
            self.handle_pointer(pointer_event);
        }
    }

    /// The terminal lost focus
    pub fn focus_lost(&mut self) {
        if let Some(event) = self.subscription.as_mut().and_then(|s| s.focus_lost()) {
            self.handle_pointer(event);
        }
    }

    /// Follow a resized container
    pub fn set_container(&mut self, container: Rect) {
        let last = self.last_position;
        if let Some(event) = self
            .subscription
            .as_mut()
            .and_then(|s| s.set_container(container, last))
        {
            self.handle_pointer(event);
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if !self.is_running() {
            return;
        }
        match event {
            PointerEvent::Move(position) => self.target = position,
            PointerEvent::Enter => self.visible = true,
            PointerEvent::Leave => self.visible = false,
        }
    }

    /// Run a frame if one is due
    ///
    /// Returns true when the position was written. A loop that fell behind
    /// runs one frame and reschedules from `now` rather than catching up.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_frame else {
            return false;
        };
        if now < due {
            return false;
        }

        let next_due = due + self.frame_interval;
        self.next_frame = Some(if next_due > now {
            next_due
        } else {
            now + self.frame_interval
        });

        match step(self.current, self.target, self.easing) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }
}

impl Drop for PointerLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "pointer_loop_tests.rs"]
mod pointer_loop_tests;
