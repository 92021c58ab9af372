use std::ops::{Add, Mul, Sub};

use crate::error::StockNewsError;

/// Per-axis distance under which a frame skips the position write
pub const DEADBAND: f32 = 0.1;

/// A point or offset in terminal cell space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Both components within `epsilon` of zero
    pub fn within(self, epsilon: f32) -> bool {
        self.x.abs() <= epsilon && self.y.abs() <= epsilon
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Share of the remaining distance covered each frame, in `(0, 1]`
///
/// Smaller is smoother and slower; `1.0` snaps straight to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing(f32);

impl Easing {
    pub const DEFAULT: Easing = Easing(0.15);

    pub fn new(factor: f32) -> Result<Self, StockNewsError> {
        if factor > 0.0 && factor <= 1.0 {
            Ok(Easing(factor))
        } else {
            Err(StockNewsError::InvalidEasing(factor))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::DEFAULT
    }
}

/// One frame of damped tracking
///
/// Returns the next position, or `None` when `current` is already inside
/// the deadband around `target`. Each axis is clamped at the target so
/// rounding can never carry it past.
pub fn step(current: Vec2, target: Vec2, easing: Easing) -> Option<Vec2> {
    let delta = target - current;
    if delta.within(DEADBAND) {
        return None;
    }

    let next = current + delta * easing.get();
    Some(Vec2::new(
        approach(current.x, next.x, target.x),
        approach(current.y, next.y, target.y),
    ))
}

fn approach(current: f32, next: f32, target: f32) -> f32 {
    if (current <= target && next > target) || (current >= target && next < target) {
        target
    } else {
        next
    }
}
