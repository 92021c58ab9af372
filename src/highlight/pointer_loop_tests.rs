//! Tests for highlight/pointer_loop

use ratatui::crossterm::event::{KeyModifiers, MouseEventKind};

use super::*;
use crate::highlight::DEADBAND;

const FRAME: Duration = Duration::from_millis(16);
const CONTAINER: Rect = Rect {
    x: 0,
    y: 0,
    width: 200,
    height: 200,
};

fn moved(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

fn running(now: Instant) -> PointerLoop {
    let mut pointer = PointerLoop::new(FRAME);
    pointer.start(CONTAINER, Easing::DEFAULT, true, now);
    pointer
}

/// Tick exactly at each frame deadline, `frames` times
fn run_frames(pointer: &mut PointerLoop, frames: usize) -> usize {
    let mut written = 0;
    for _ in 0..frames {
        let Some(due) = pointer.next_deadline() else {
            break;
        };
        if pointer.tick(due) {
            written += 1;
        }
    }
    written
}

#[test]
fn test_new_loop_is_idle() {
    let pointer = PointerLoop::new(FRAME);
    assert_eq!(pointer.state(), LoopState::Idle);
    assert!(!pointer.is_visible());
    assert_eq!(pointer.next_deadline(), None);
}

#[test]
fn test_start_schedules_first_frame() {
    let now = Instant::now();
    let pointer = running(now);

    assert_eq!(pointer.state(), LoopState::Running);
    assert_eq!(pointer.next_deadline(), Some(now + FRAME));
}

#[test]
fn test_disabled_start_is_noop() {
    let now = Instant::now();
    let mut pointer = PointerLoop::new(FRAME);
    pointer.start(CONTAINER, Easing::DEFAULT, false, now);

    assert_eq!(pointer.state(), LoopState::Idle);
    assert_eq!(pointer.next_deadline(), None);

    pointer.route_mouse(&moved(50, 50));
    assert!(!pointer.is_visible());
    assert_eq!(pointer.target(), Vec2::ZERO);
    assert!(!pointer.tick(now + FRAME * 10));
}

#[test]
fn test_enter_move_leave() {
    let mut pointer = running(Instant::now());

    pointer.route_mouse(&moved(40, 20));
    assert!(pointer.is_visible());
    assert_eq!(pointer.target(), Vec2::new(40.0, 20.0));

    pointer.route_mouse(&moved(250, 250));
    assert!(!pointer.is_visible());
    // Target keeps the last position seen inside the container
    assert_eq!(pointer.target(), Vec2::new(40.0, 20.0));
}

#[test]
fn test_converges_within_bounded_frames() {
    let mut pointer = running(Instant::now());
    pointer.route_mouse(&moved(100, 100));

    let mut previous = (pointer.target() - pointer.current()).length();
    let mut ticks = 0;
    while ticks < 60 {
        let due = pointer.next_deadline().unwrap();
        if !pointer.tick(due) {
            break;
        }
        let current = pointer.current();
        let distance = (pointer.target() - current).length();
        assert!(distance < previous);
        assert!(current.x <= 100.0 && current.y <= 100.0);
        previous = distance;
        ticks += 1;
    }

    assert!(ticks < 60, "should settle inside the deadband");
    assert!((pointer.target() - pointer.current()).within(DEADBAND));

    // Converged: further frames keep running but write nothing
    assert_eq!(run_frames(&mut pointer, 5), 0);
    assert!(pointer.next_deadline().is_some());
}

#[test]
fn test_only_last_move_before_tick_matters() {
    let mut pointer = running(Instant::now());
    let mut single = running(Instant::now());

    for x in [10, 80, 150, 30, 60] {
        pointer.route_mouse(&moved(x, 40));
    }
    single.route_mouse(&moved(60, 40));

    run_frames(&mut pointer, 1);
    run_frames(&mut single, 1);

    assert_eq!(pointer.current(), single.current());
}

#[test]
fn test_tick_before_deadline_does_nothing() {
    let now = Instant::now();
    let mut pointer = running(now);
    pointer.route_mouse(&moved(100, 100));

    assert!(!pointer.tick(now + Duration::from_millis(5)));
    assert_eq!(pointer.current(), Vec2::ZERO);
}

#[test]
fn test_late_tick_does_not_burst() {
    let now = Instant::now();
    let mut pointer = running(now);
    pointer.route_mouse(&moved(100, 100));

    let late = now + FRAME * 10;
    assert!(pointer.tick(late));
    assert_eq!(pointer.next_deadline(), Some(late + FRAME));
    assert!(!pointer.tick(late));
}

#[test]
fn test_steady_ticks_keep_cadence() {
    let now = Instant::now();
    let mut pointer = running(now);

    pointer.tick(now + FRAME + Duration::from_millis(2));
    assert_eq!(pointer.next_deadline(), Some(now + FRAME * 2));
}

#[test]
fn test_stop_cancels_frames_and_hides() {
    let now = Instant::now();
    let mut pointer = running(now);
    pointer.route_mouse(&moved(100, 100));

    pointer.stop();

    assert_eq!(pointer.state(), LoopState::Idle);
    assert!(!pointer.is_visible());
    assert_eq!(pointer.next_deadline(), None);
    assert!(!pointer.tick(now + FRAME * 100));

    // Listeners are detached
    pointer.route_mouse(&moved(5, 5));
    assert!(!pointer.is_visible());
    assert_eq!(pointer.target(), Vec2::new(100.0, 100.0));
}

#[test]
fn test_stop_twice_and_without_start() {
    let mut idle = PointerLoop::new(FRAME);
    idle.stop();
    idle.stop();
    assert_eq!(idle.state(), LoopState::Idle);
    assert_eq!(idle.next_deadline(), None);

    let mut pointer = running(Instant::now());
    pointer.stop();
    pointer.stop();
    assert_eq!(pointer.state(), LoopState::Idle);
    assert_eq!(pointer.next_deadline(), None);
}

#[test]
fn test_restart_uses_new_easing() {
    let now = Instant::now();
    let mut pointer = running(now);
    pointer.start(CONTAINER, Easing::new(1.0).unwrap(), true, now);
    pointer.route_mouse(&moved(100, 100));

    assert!(pointer.tick(now + FRAME));
    assert_eq!(pointer.current(), Vec2::new(100.0, 100.0));
}

#[test]
fn test_start_disabled_while_running_stops() {
    let now = Instant::now();
    let mut pointer = running(now);

    pointer.start(CONTAINER, Easing::DEFAULT, false, now);

    assert_eq!(pointer.state(), LoopState::Idle);
    assert_eq!(pointer.next_deadline(), None);
}

#[test]
fn test_focus_lost_hides() {
    let mut pointer = running(Instant::now());
    pointer.route_mouse(&moved(10, 10));

    pointer.focus_lost();
    assert!(!pointer.is_visible());
    assert_eq!(pointer.state(), LoopState::Running);
}

#[test]
fn test_resize_leaves_when_pointer_outside() {
    let mut pointer = running(Instant::now());
    pointer.route_mouse(&moved(150, 150));

    pointer.set_container(Rect::new(0, 0, 100, 100));
    assert!(!pointer.is_visible());

    pointer.route_mouse(&moved(50, 50));
    assert!(pointer.is_visible());
}
