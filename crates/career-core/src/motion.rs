use crate::constants::{AXIS_PULSE_AMOUNT, PERSON_SPIN_PER_FRAME};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Per-object ambient motion, fixed when the object is placed.
///
/// The frame step only reads these values; the offset at time `t` is
/// `amplitude * sin(speed * t + phase)` per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionParams {
    pub amplitude: Vec3,
    pub speed: Vec3,
    pub phase: Vec3,
}

impl MotionParams {
    pub const fn still() -> Self {
        Self {
            amplitude: Vec3::ZERO,
            speed: Vec3::ZERO,
            phase: Vec3::ZERO,
        }
    }

    /// Gentle floating drift with randomized amplitude, speed and phase per axis.
    pub fn drift(rng: &mut impl Rng) -> Self {
        let mut axis = |lo: f32, hi: f32| {
            Vec3::new(
                rng.gen_range(lo..hi),
                rng.gen_range(lo..hi),
                rng.gen_range(lo..hi),
            )
        };
        let amplitude = axis(0.05, 0.25);
        let speed = axis(0.2, 0.8);
        let phase = axis(0.0, TAU);
        Self {
            amplitude,
            speed,
            phase,
        }
    }

    #[inline]
    pub fn offset(&self, t: f32) -> Vec3 {
        let arg = self.speed * t + self.phase;
        self.amplitude * Vec3::new(arg.x.sin(), arg.y.sin(), arg.z.sin())
    }
}

/// Y-scale of axis `index` at time `t` (seconds).
#[inline]
pub fn axis_pulse(t: f32, index: usize) -> f32 {
    1.0 + (t + index as f32).sin() * AXIS_PULSE_AMOUNT
}

/// Model spin rate in radians per second.
#[inline]
pub fn spin_rate_per_sec() -> f32 {
    PERSON_SPIN_PER_FRAME * 60.0
}
