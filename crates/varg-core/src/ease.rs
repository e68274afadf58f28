//! Cubic easing curves and small interpolation helpers.
//!
//! Both cubics map \[0, 1\] onto \[0, 1\], are monotonic, and satisfy
//! f(0) = 0, f(1) = 1. Inputs are clamped so floating point drift at range
//! boundaries cannot push results outside the unit interval.

/// Decelerating curve: fast start, gentle landing.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Accelerating curve: gentle start, fast exit.
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Normalized position of `v` within `[a, b]`, clamped to \[0, 1\].
/// Degenerate ranges (b <= a) resolve to 1.0 so a zero-width fade window
/// reads as "already finished" rather than dividing by zero.
#[inline]
pub fn unlerp(a: f32, b: f32, v: f32) -> f32 {
    if b <= a {
        return 1.0;
    }
    ((v - a) / (b - a)).clamp(0.0, 1.0)
}
