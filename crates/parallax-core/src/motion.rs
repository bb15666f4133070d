use crate::config::Config;
use glam::{BVec2, Vec2};

/// Shaped motion and smoothed velocity carried between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub motion: Vec2,
    pub velocity: Vec2,
}

impl MotionState {
    /// Advance one frame: shape the input into motion, then ease velocity
    /// toward it.
    pub fn step(
        &mut self,
        input: Vec2,
        delta: Vec2,
        portrait: bool,
        size: Vec2,
        config: &Config,
    ) -> Vec2 {
        let raw = select_axes(input, delta, portrait, config.calibrate);
        self.motion = config.limit.apply(scale(raw, size, config.scalar));
        self.velocity = smooth(self.velocity, self.motion, config.friction);
        self.velocity
    }
}

/// Choose calibrated delta or absolute input per axis.
///
/// In portrait the physical tilt axes are swapped relative to the screen, so
/// x is fed from the y reading and vice versa.
#[inline]
pub fn select_axes(input: Vec2, delta: Vec2, portrait: bool, calibrate: BVec2) -> Vec2 {
    let (input, delta) = if portrait {
        (swap(input), swap(delta))
    } else {
        (input, delta)
    };
    Vec2::select(calibrate, delta, input)
}

#[inline]
fn swap(v: Vec2) -> Vec2 {
    Vec2::new(v.y, v.x)
}

/// Scale normalized motion to pixels: `scalar` is a percentage of the
/// element's size on that axis.
#[inline]
pub fn scale(motion: Vec2, size: Vec2, scalar: Vec2) -> Vec2 {
    motion * size * (scalar / 100.0)
}

/// First-order exponential smoothing. `friction` of 1 snaps to `target`.
#[inline]
pub fn smooth(velocity: Vec2, target: Vec2, friction: Vec2) -> Vec2 {
    velocity + (target - velocity) * friction
}
