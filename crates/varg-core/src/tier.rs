//! Rendering-budget policy for constrained devices.
//!
//! Detection (media queries, core counts, user agent sniffing) lives in the
//! frontend; this record only states the resulting budgets. The sequencer
//! itself never branches on it — the rendering layer decides what to skip.

use crate::constants::{
    CENTER_BAR_COUNT, FREQ_DOT_COUNT, PARTICLE_COUNT, SIDE_BAR_COUNT, SLICE_COUNT,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionProfile {
    /// The user asked for reduced motion; decorative animation stops.
    pub reduced_motion: bool,
    /// Constrained device (few cores, mobile); decorations are thinned.
    pub low_power: bool,
}

impl MotionProfile {
    pub const FULL: Self = Self {
        reduced_motion: false,
        low_power: false,
    };

    pub fn side_bar_count(&self) -> usize {
        if self.reduced_motion {
            0
        } else if self.low_power {
            SIDE_BAR_COUNT / 2
        } else {
            SIDE_BAR_COUNT
        }
    }

    pub fn center_bar_count(&self) -> usize {
        if self.reduced_motion {
            0
        } else if self.low_power {
            CENTER_BAR_COUNT / 2
        } else {
            CENTER_BAR_COUNT
        }
    }

    pub fn freq_dot_count(&self) -> usize {
        if self.reduced_motion {
            0
        } else if self.low_power {
            FREQ_DOT_COUNT / 3
        } else {
            FREQ_DOT_COUNT
        }
    }

    pub fn particle_count(&self) -> usize {
        if self.reduced_motion {
            0
        } else if self.low_power {
            PARTICLE_COUNT / 2
        } else {
            PARTICLE_COUNT
        }
    }

    pub fn expanding_ring_count(&self) -> usize {
        if self.reduced_motion {
            0
        } else if self.low_power {
            2
        } else {
            5
        }
    }

    /// Slice count for the slit-scan pass; 1 disables the distortion and
    /// falls back to a plain crossfade.
    pub fn slice_count(&self) -> usize {
        if self.reduced_motion || self.low_power {
            1
        } else {
            SLICE_COUNT
        }
    }

    pub fn aberration_enabled(&self) -> bool {
        !self.reduced_motion && !self.low_power
    }
}
