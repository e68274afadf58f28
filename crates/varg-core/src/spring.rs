//! Damped spring smoothing for the raw scroll signal.
//!
//! Semi-implicit Euler integration of `x'' = k(target - x) - c·x'`. The
//! scroll container reports jumpy progress samples; the spring turns them
//! into the damped motion the sequencer and parallax layers consume. Once
//! within `rest_delta` of the target with negligible velocity the spring
//! snaps to the target and reports itself settled, so hosts can skip
//! redundant redraws.

use crate::constants::{SCROLL_DAMPING, SCROLL_REST_DELTA, SCROLL_STIFFNESS};

// Integration cap: a background tab can hand us a multi-second dt, which
// would make the explicit step blow up. Large deltas are sliced into
// sub-steps no longer than this.
const MAX_STEP_SEC: f32 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub rest_delta: f32,
    value: f32,
    velocity: f32,
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32, rest_delta: f32, initial: f32) -> Self {
        Self {
            stiffness,
            damping,
            rest_delta,
            value: initial,
            velocity: 0.0,
        }
    }

    /// The scroll-progress spring used for the hero sequence.
    pub fn scroll() -> Self {
        Self::new(SCROLL_STIFFNESS, SCROLL_DAMPING, SCROLL_REST_DELTA, 0.0)
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Jump to `value` immediately, killing any in-flight motion.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
    }

    pub fn settled(&self, target: f32) -> bool {
        (self.value - target).abs() <= self.rest_delta && self.velocity.abs() <= self.rest_delta
    }

    /// Advance the spring toward `target` by `dt_sec` and return the new
    /// value. Non-finite or negative deltas are ignored.
    pub fn step(&mut self, target: f32, dt_sec: f32) -> f32 {
        if !dt_sec.is_finite() || dt_sec <= 0.0 || !target.is_finite() {
            return self.value;
        }
        let mut remaining = dt_sec;
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_SEC);
            remaining -= dt;
            let accel = self.stiffness * (target - self.value) - self.damping * self.velocity;
            self.velocity += accel * dt;
            self.value += self.velocity * dt;
        }
        if self.settled(target) {
            self.snap_to(target);
        }
        self.value
    }
}
