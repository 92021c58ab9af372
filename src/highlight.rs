//! Pointer highlight
//!
//! A soft glow that trails the mouse pointer. [`PointerLoop`] owns the
//! interpolated position and the frame schedule; [`PointerSubscription`]
//! turns raw terminal mouse events into move/enter/leave for one container.

pub mod highlight_render;
mod motion;
mod pointer_loop;
mod subscription;

pub use motion::{DEADBAND, Easing, Vec2, step};
pub use pointer_loop::{LoopState, PointerLoop};
pub use subscription::{PointerEvent, PointerSubscription};
