//! Piecewise-linear keyframe tracks.
//!
//! A track maps progress (or any scalar driver) through a sorted list of
//! `(input, output)` keyframes with linear interpolation between neighbors
//! and clamping beyond the ends. Parallax offsets, decoration opacities and
//! the hero micro-interaction are all expressed as tracks.

use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct Track {
    keys: SmallVec<[(f32, f32); 8]>,
}

impl Track {
    /// Build a track from keyframes. Keys must be sorted by input; this is a
    /// programming error for the fixed tables we ship, so it is only checked
    /// in debug builds.
    pub fn new(keys: &[(f32, f32)]) -> Self {
        debug_assert!(
            keys.windows(2).all(|w| w[0].0 <= w[1].0),
            "track keyframes must be sorted by input"
        );
        Self {
            keys: SmallVec::from_slice(keys),
        }
    }

    pub fn sample(&self, input: f32) -> f32 {
        sample_keys(&self.keys, input)
    }
}

/// Sample a keyframe table directly, without building a `Track`.
pub fn sample_keys(keys: &[(f32, f32)], input: f32) -> f32 {
    let Some(&(first_in, first_out)) = keys.first() else {
        return 0.0;
    };
    let &(last_in, last_out) = keys.last().expect("non-empty");
    if !input.is_finite() || input <= first_in {
        return first_out;
    }
    if input >= last_in {
        return last_out;
    }
    for w in keys.windows(2) {
        let (a_in, a_out) = w[0];
        let (b_in, b_out) = w[1];
        if input < b_in {
            let width = b_in - a_in;
            // Duplicate inputs express a step; take the later value.
            if width <= f32::EPSILON {
                return b_out;
            }
            let t = (input - a_in) / width;
            return a_out + (b_out - a_out) * t;
        }
    }
    last_out
}
