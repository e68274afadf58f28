//! Deterministic math for the hero decorations: side wave bars, the center
//! spectrum, drifting frequency dots, floating particles, audio rings and
//! the parallax layers.
//!
//! Everything here is a pure function of (configuration, elapsed time,
//! scroll progress). Per-element jitter comes from a seeded RNG so a reload
//! with the same seed reproduces the exact same motion, which also makes
//! this testable on the host.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;
use crate::ease::ease_out_cubic;
use crate::track::sample_keys;

#[inline]
fn element_rng(seed: u64, index: usize) -> StdRng {
    // Derive per-element RNGs from the base seed so elements stay independent.
    let mix = seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(mix)
}

// ---------------- wave bars ----------------

#[derive(Clone, Copy, Debug)]
pub struct WaveBar {
    pub base_height: f32,
    pub period: f32,
    pub phase: f32,
    pub swing: f32,
}

pub fn wave_bars(count: usize, seed: u64) -> Vec<WaveBar> {
    (0..count)
        .map(|i| {
            let mut rng = element_rng(seed, i);
            WaveBar {
                base_height: SIDE_BAR_BASE_HEIGHT + (i as f32 * 0.8).sin() * SIDE_BAR_HEIGHT_SWING,
                period: 1.5 + rng.gen::<f32>() * 0.5,
                phase: i as f32 * 0.05 * TAU,
                swing: 0.5 + rng.gen::<f32>() * 0.5,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarPulse {
    pub scale_y: f32,
    pub opacity: f32,
}

/// Oscillation of one wave bar at `time` seconds.
pub fn bar_pulse(bar: &WaveBar, time: f32) -> BarPulse {
    let osc = 0.5 * (1.0 + (TAU * time / bar.period - bar.phase).sin());
    BarPulse {
        scale_y: 1.0 + bar.swing * osc,
        opacity: 0.3 + 0.4 * osc,
    }
}

/// Height of bar `i` in the center spectrum: tallest in the middle, falling
/// off linearly toward the edges, never below the minimum.
pub fn center_bar_height(i: usize, count: usize) -> f32 {
    let center_distance = (i as f32 - (count as f32 - 1.0) / 2.0).abs();
    (CENTER_BAR_MAX_HEIGHT - center_distance * CENTER_BAR_FALLOFF).max(CENTER_BAR_MIN_HEIGHT)
}

/// Oscillation of one center-spectrum bar. Bars near the edges beat slightly
/// slower, with a small per-bar start delay rippling outward.
pub fn center_bar_pulse(i: usize, count: usize, time: f32) -> BarPulse {
    let center_distance = (i as f32 - (count as f32 - 1.0) / 2.0).abs();
    let period = 2.0 + center_distance * 0.1;
    let local = (time - i as f32 * 0.03).max(0.0);
    let osc = 0.5 * (1.0 + (TAU * local / period - PI / 2.0).sin());
    BarPulse {
        scale_y: 1.0 + 0.8 * osc,
        opacity: 0.4 + 0.4 * osc,
    }
}

// ---------------- dots and particles ----------------

#[derive(Clone, Copy, Debug)]
pub struct FloatingDot {
    /// Position as fractions of the viewport.
    pub anchor: Vec2,
    pub period: f32,
    pub delay: f32,
    pub drift_px: f32,
}

/// The grid of frequency dots scattered over the hero (4 columns x 3 rows).
pub fn frequency_dots(count: usize, seed: u64) -> Vec<FloatingDot> {
    (0..count)
        .map(|i| {
            let mut rng = element_rng(seed, i);
            FloatingDot {
                anchor: Vec2::new(
                    0.10 + (i % 4) as f32 * 0.25,
                    0.20 + (i / 4) as f32 * 0.30,
                ),
                period: 3.0 + i as f32 * 0.2 + rng.gen::<f32>() * 0.2,
                delay: i as f32 * 0.15,
                drift_px: 10.0,
            }
        })
        .collect()
}

/// The sparse floating particles living in the parallax mid layer.
pub fn particles(count: usize, seed: u64) -> Vec<FloatingDot> {
    (0..count)
        .map(|i| {
            let mut rng = element_rng(seed, i + 64);
            FloatingDot {
                anchor: Vec2::new(
                    0.15 + i as f32 * 0.15,
                    0.20 + (i % 3) as f32 * 0.25,
                ),
                period: 3.0 + i as f32 * 0.5 + rng.gen::<f32>() * 0.3,
                delay: i as f32 * 0.3,
                drift_px: 0.0,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotPulse {
    pub scale: f32,
    pub opacity: f32,
    pub offset_y: f32,
}

pub fn dot_pulse(dot: &FloatingDot, time: f32) -> DotPulse {
    let local = (time - dot.delay).max(0.0);
    let osc = 0.5 * (1.0 + (TAU * local / dot.period - PI / 2.0).sin());
    DotPulse {
        scale: 1.0 + 0.5 * osc,
        opacity: 0.2 + 0.3 * osc,
        offset_y: -dot.drift_px * osc,
    }
}

// ---------------- audio rings ----------------

#[derive(Clone, Copy, Debug)]
pub struct RingSpec {
    pub diameter: f32,
    pub period: f32,
    pub delay: f32,
}

/// The five expanding rings, staggered so one is always mid-flight.
pub const EXPANDING_RINGS: [RingSpec; 5] = [
    RingSpec { diameter: 280.0, period: 3.0, delay: 0.0 },
    RingSpec { diameter: 320.0, period: 3.5, delay: 0.5 },
    RingSpec { diameter: 360.0, period: 4.0, delay: 1.0 },
    RingSpec { diameter: 400.0, period: 4.5, delay: 1.5 },
    RingSpec { diameter: 440.0, period: 5.0, delay: 2.0 },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingState {
    pub scale: f32,
    pub opacity: f32,
}

/// One expansion cycle: scale eases out from 0.6 to 1.8 while opacity rises
/// to 0.4 at the midpoint and dies back to 0. `None` before the ring's first
/// cycle begins.
pub fn ring_state(ring: &RingSpec, time: f32) -> Option<RingState> {
    let local = time - ring.delay;
    if local < 0.0 {
        return None;
    }
    let phase = (local / ring.period).fract();
    Some(RingState {
        scale: 0.6 + 1.2 * ease_out_cubic(phase),
        opacity: 0.4 * (phase * PI).sin(),
    })
}

/// Gentle breathing of the inner ring `i`: scale 1.0..1.1, opacity 0.3..0.6.
pub fn inner_ring_state(i: usize, time: f32) -> RingState {
    let period = 2.0 + i as f32 * 0.3;
    let local = (time - i as f32 * 0.4).max(0.0);
    let osc = 0.5 * (1.0 + (TAU * local / period - PI / 2.0).sin());
    RingState {
        scale: 1.0 + 0.1 * osc,
        opacity: 0.3 + 0.3 * osc,
    }
}

#[inline]
pub fn inner_ring_diameter(i: usize) -> f32 {
    INNER_RING_BASE_DIAMETER + i as f32 * INNER_RING_DIAMETER_STEP
}

/// Angle of the slow dashed ring in radians.
#[inline]
pub fn rotating_ring_angle(time: f32) -> f32 {
    TAU * (time / ROTATING_RING_PERIOD_SEC).fract()
}

// ---------------- progress-keyed envelopes ----------------

#[inline]
pub fn wave_opacity(progress: f32) -> f32 {
    sample_keys(WAVE_OPACITY_KEYS, progress)
}

#[inline]
pub fn wave_scale(progress: f32) -> f32 {
    sample_keys(WAVE_SCALE_KEYS, progress)
}

#[inline]
pub fn center_opacity(progress: f32) -> f32 {
    sample_keys(CENTER_OPACITY_KEYS, progress)
}

#[inline]
pub fn freq_dot_opacity(progress: f32) -> f32 {
    sample_keys(FREQ_DOT_OPACITY_KEYS, progress)
}

#[inline]
pub fn ring_opacity(progress: f32) -> f32 {
    sample_keys(RING_OPACITY_KEYS, progress)
}

#[inline]
pub fn ring_scale(progress: f32) -> f32 {
    sample_keys(RING_SCALE_KEYS, progress)
}

// ---------------- parallax ----------------

/// Per-frame parallax layer state. Shifts are fractions of viewport height,
/// applied to the deep glow layer, the particle mid layer and the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub depth_shift: f32,
    pub mid_shift: f32,
    pub grid_shift: f32,
    pub depth_opacity: f32,
    pub grid_opacity: f32,
    pub mid_scale: f32,
}

pub fn parallax_frame(progress: f32) -> ParallaxFrame {
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    ParallaxFrame {
        depth_shift: PARALLAX_DEPTH_TRAVEL * p,
        mid_shift: PARALLAX_MID_TRAVEL * p,
        grid_shift: PARALLAX_GRID_TRAVEL * p,
        depth_opacity: sample_keys(PARALLAX_DEPTH_OPACITY_KEYS, p),
        grid_opacity: sample_keys(PARALLAX_GRID_OPACITY_KEYS, p),
        mid_scale: sample_keys(PARALLAX_MID_SCALE_KEYS, p),
    }
}
