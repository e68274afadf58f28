//! The scroll sequencer: maps normalized scroll progress to the pair of hero
//! images on screen and their crossfade weights.
//!
//! The timeline is an alternating run of hold zones (one image at full
//! opacity) and fade zones (two images crossfading), covering the whole
//! \[0, 1\] progress range and cycling back to the first image at the end.
//! Sampling is a pure function of progress: no hidden state, no side
//! effects, total over the clamped input range.

use std::f32::consts::PI;

use thiserror::Error;

use crate::constants::{
    FADE_AB_END, FADE_BC_END, FADE_PEAK_INTENSITY, FADE_PEAK_INTENSITY_WRAP, HOLD_A_END,
    HOLD_B_END, HOLD_C_END,
};
use crate::ease::unlerp;

/// Number of images in the hero sequence.
pub const HERO_IMAGE_COUNT: usize = 3;

const SPAN_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Zone {
    /// One image shown at full opacity.
    Hold { image: usize },
    /// Two images crossfading; `peak_intensity` is the slit-scan distortion
    /// strength at the midpoint of the window.
    Fade {
        from: usize,
        to: usize,
        peak_intensity: f32,
    },
}

/// A zone together with the progress range it occupies. Ranges are half-open
/// `[start, end)` except the final one, which includes its upper bound.
#[derive(Clone, Copy, Debug)]
pub struct Span {
    pub start: f32,
    pub end: f32,
    pub zone: Zone,
}

#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    #[error("timeline has no zones")]
    Empty,
    #[error("zone {index} starts at {start} but the previous zone ends at {expected}")]
    Discontinuous {
        index: usize,
        start: f32,
        expected: f32,
    },
    #[error("zone {index} spans [{start}, {end}), which is empty or reversed")]
    EmptySpan { index: usize, start: f32, end: f32 },
    #[error("timeline covers [{start}, {end}] instead of [0, 1]")]
    Uncovered { start: f32, end: f32 },
    #[error("zone {index} references image {image} but the sequence has {count}")]
    ImageOutOfRange {
        index: usize,
        image: usize,
        count: usize,
    },
}

/// Which images are visible at a given progress value and how they blend.
///
/// `blend` is the weight of the incoming (`secondary`) image; the outgoing
/// (`primary`) image carries the remaining `1 - blend`. In a hold zone
/// `secondary` is `None` and `blend` is 0, so the primary weight is 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionWindow {
    pub primary: usize,
    pub secondary: Option<usize>,
    pub blend: f32,
    /// Decorative distortion strength: rises from 0 to the zone's peak at the
    /// midpoint of a fade and back to 0, zero in hold zones.
    pub intensity: f32,
}

impl TransitionWindow {
    #[inline]
    pub fn primary_weight(&self) -> f32 {
        1.0 - self.blend
    }

    #[inline]
    pub fn secondary_weight(&self) -> f32 {
        self.blend
    }
}

#[derive(Clone, Debug)]
pub struct Timeline {
    spans: Vec<Span>,
    image_count: usize,
}

impl Timeline {
    /// Build a timeline from explicit spans, checking that they tile \[0, 1\]
    /// contiguously and only reference images that exist.
    pub fn new(spans: Vec<Span>, image_count: usize) -> Result<Self, TimelineError> {
        if spans.is_empty() {
            return Err(TimelineError::Empty);
        }
        let mut expected = 0.0f32;
        for (index, span) in spans.iter().enumerate() {
            if span.end <= span.start {
                return Err(TimelineError::EmptySpan {
                    index,
                    start: span.start,
                    end: span.end,
                });
            }
            if (span.start - expected).abs() > SPAN_EPSILON {
                return Err(TimelineError::Discontinuous {
                    index,
                    start: span.start,
                    expected,
                });
            }
            expected = span.end;
            match span.zone {
                Zone::Hold { image } => check_image(image, index, image_count)?,
                Zone::Fade { from, to, .. } => {
                    check_image(from, index, image_count)?;
                    check_image(to, index, image_count)?;
                }
            }
        }
        let start = spans[0].start;
        let end = spans[spans.len() - 1].end;
        if start.abs() > SPAN_EPSILON || (end - 1.0).abs() > SPAN_EPSILON {
            return Err(TimelineError::Uncovered { start, end });
        }
        Ok(Self { spans, image_count })
    }

    /// The hero sequence used on the landing page: three product shots with
    /// crossfades between them and a wrap-around fade back to the first.
    pub fn hero() -> Self {
        let spans = vec![
            Span {
                start: 0.0,
                end: HOLD_A_END,
                zone: Zone::Hold { image: 0 },
            },
            Span {
                start: HOLD_A_END,
                end: FADE_AB_END,
                zone: Zone::Fade {
                    from: 0,
                    to: 1,
                    peak_intensity: FADE_PEAK_INTENSITY,
                },
            },
            Span {
                start: FADE_AB_END,
                end: HOLD_B_END,
                zone: Zone::Hold { image: 1 },
            },
            Span {
                start: HOLD_B_END,
                end: FADE_BC_END,
                zone: Zone::Fade {
                    from: 1,
                    to: 2,
                    peak_intensity: FADE_PEAK_INTENSITY,
                },
            },
            Span {
                start: FADE_BC_END,
                end: HOLD_C_END,
                zone: Zone::Hold { image: 2 },
            },
            Span {
                start: HOLD_C_END,
                end: 1.0,
                zone: Zone::Fade {
                    from: 2,
                    to: 0,
                    peak_intensity: FADE_PEAK_INTENSITY_WRAP,
                },
            },
        ];
        Self::new(spans, HERO_IMAGE_COUNT).expect("hero timeline is statically valid")
    }

    #[inline]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    #[inline]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Sample the timeline at `progress`. Input is clamped to \[0, 1\] (and
    /// non-finite values resolve to 0) so this never panics or indexes out of
    /// bounds, whatever the host's scroll math produced.
    pub fn sample(&self, progress: f32) -> TransitionWindow {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        // Half-open intervals; the last span absorbs p == 1.0.
        let span = self
            .spans
            .iter()
            .find(|s| p < s.end)
            .unwrap_or(&self.spans[self.spans.len() - 1]);
        match span.zone {
            Zone::Hold { image } => TransitionWindow {
                primary: image,
                secondary: None,
                blend: 0.0,
                intensity: 0.0,
            },
            Zone::Fade {
                from,
                to,
                peak_intensity,
            } => {
                let t = unlerp(span.start, span.end, p);
                TransitionWindow {
                    primary: from,
                    secondary: Some(to),
                    blend: t,
                    intensity: (t * PI).sin() * peak_intensity,
                }
            }
        }
    }
}

#[inline]
fn check_image(image: usize, index: usize, count: usize) -> Result<(), TimelineError> {
    if image >= count {
        return Err(TimelineError::ImageOutOfRange {
            index,
            image,
            count,
        });
    }
    Ok(())
}
