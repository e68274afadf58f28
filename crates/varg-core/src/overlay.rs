//! Scroll-keyed text overlay timing.
//!
//! Each overlay owns a window of the progress range. It eases in over a
//! small margin at the front of the window, holds steady, then eases out
//! over the same margin at the back. Fade-in and fade-out are deliberately
//! asymmetric: text settles in from below (ease-out cubic, 40px of travel)
//! and drifts away upward (ease-in cubic, 30px), with scale and blur riding
//! the same local fraction.

use smallvec::SmallVec;

use crate::constants::{
    OVERLAY_BLUR_MAX, OVERLAY_DRIFT_PX, OVERLAY_FADE_MARGIN, OVERLAY_RISE_PX, OVERLAY_SCALE_MIN,
};
use crate::ease::{ease_in_cubic, ease_out_cubic, unlerp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One text block's visible scroll window. Construction normalizes the
/// configuration instead of failing: bounds are clamped to \[0, 1\], a
/// reversed window collapses to empty, and the margin never exceeds half the
/// window so the fades cannot overlap.
#[derive(Clone, Copy, Debug)]
pub struct OverlayRange {
    start: f32,
    end: f32,
    margin: f32,
    pub align: Align,
}

impl OverlayRange {
    pub fn new(start: f32, end: f32, align: Align) -> Self {
        Self::with_margin(start, end, OVERLAY_FADE_MARGIN, align)
    }

    pub fn with_margin(start: f32, end: f32, margin: f32, align: Align) -> Self {
        let start = if start.is_finite() {
            start.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let mut end = if end.is_finite() {
            end.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if end < start {
            log::warn!("overlay window [{start}, {end}] is reversed; collapsing to empty");
            end = start;
        }
        let span = end - start;
        let margin = if margin.is_finite() {
            margin.clamp(0.0, span / 2.0)
        } else {
            0.0
        };
        Self {
            start,
            end,
            margin,
            align,
        }
    }

    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.end
    }

    #[inline]
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Derive the overlay's visual state at `progress`. Total and continuous:
    /// opacity never jumps across a fade boundary.
    pub fn state(&self, progress: f32) -> OverlayState {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if p < self.start || p > self.end || self.end <= self.start {
            return OverlayState::hidden();
        }
        let fade_in_end = self.start + self.margin;
        let fade_out_start = self.end - self.margin;
        if p < fade_in_end {
            let t = ease_out_cubic(unlerp(self.start, fade_in_end, p));
            OverlayState {
                opacity: t,
                offset_y: OVERLAY_RISE_PX * (1.0 - t),
                scale: OVERLAY_SCALE_MIN + (1.0 - OVERLAY_SCALE_MIN) * t,
                blur: OVERLAY_BLUR_MAX * (1.0 - t),
            }
        } else if p < fade_out_start {
            OverlayState::steady()
        } else {
            let t = ease_in_cubic(unlerp(fade_out_start, self.end, p));
            OverlayState {
                opacity: 1.0 - t,
                offset_y: -OVERLAY_DRIFT_PX * t,
                scale: 1.0 - (1.0 - OVERLAY_SCALE_MIN) * t,
                blur: OVERLAY_BLUR_MAX * t,
            }
        }
    }
}

/// Derived per-frame state for one overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayState {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
    pub blur: f32,
}

impl OverlayState {
    #[inline]
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            offset_y: OVERLAY_RISE_PX,
            scale: OVERLAY_SCALE_MIN,
            blur: OVERLAY_BLUR_MAX,
        }
    }

    #[inline]
    pub fn steady() -> Self {
        Self {
            opacity: 1.0,
            offset_y: 0.0,
            scale: 1.0,
            blur: 0.0,
        }
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// The fixed set of overlays for the page. Windows may overlap; each overlay
/// is computed independently, so callers wanting exclusive visibility must
/// configure disjoint windows.
#[derive(Clone, Debug, Default)]
pub struct OverlaySet {
    ranges: Vec<OverlayRange>,
}

impl OverlaySet {
    pub fn new(ranges: Vec<OverlayRange>) -> Self {
        Self { ranges }
    }

    /// The four hero text blocks of the landing page.
    pub fn hero() -> Self {
        Self::new(vec![
            OverlayRange::new(0.0, 0.22, Align::Center),
            OverlayRange::new(0.28, 0.50, Align::Left),
            OverlayRange::new(0.55, 0.78, Align::Right),
            OverlayRange::new(0.82, 1.0, Align::Center),
        ])
    }

    #[inline]
    pub fn ranges(&self) -> &[OverlayRange] {
        &self.ranges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn states(&self, progress: f32) -> SmallVec<[OverlayState; 4]> {
        self.ranges.iter().map(|r| r.state(progress)).collect()
    }
}
