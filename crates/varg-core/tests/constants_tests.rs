// Sanity checks on the tuning constants and their relationships.

use varg_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn zone_boundaries_are_ordered_within_unit_range() {
    assert!(0.0 < HOLD_A_END);
    assert!(HOLD_A_END < FADE_AB_END);
    assert!(FADE_AB_END < HOLD_B_END);
    assert!(HOLD_B_END < FADE_BC_END);
    assert!(FADE_BC_END < HOLD_C_END);
    assert!(HOLD_C_END < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_intensities_and_margins_are_sane() {
    assert!(FADE_PEAK_INTENSITY > 0.0 && FADE_PEAK_INTENSITY <= 1.0);
    // The wrap-around fade is deliberately gentler.
    assert!(FADE_PEAK_INTENSITY_WRAP < FADE_PEAK_INTENSITY);

    assert!(OVERLAY_FADE_MARGIN > 0.0);
    // The narrowest hero overlay window still has room for both fades.
    assert!(OVERLAY_FADE_MARGIN * 2.0 < 0.22);
    // Fade-out travel is shorter than fade-in travel.
    assert!(OVERLAY_DRIFT_PX < OVERLAY_RISE_PX);
    assert!(OVERLAY_SCALE_MIN > 0.0 && OVERLAY_SCALE_MIN < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_constants_are_positive_and_overdamped_enough() {
    assert!(SCROLL_STIFFNESS > 0.0);
    assert!(SCROLL_DAMPING > 0.0);
    assert!(SCROLL_REST_DELTA > 0.0);
    // The parallax spring is softer than the scroll spring.
    assert!(PARALLAX_STIFFNESS < SCROLL_STIFFNESS);
    assert!(PARALLAX_DAMPING < SCROLL_DAMPING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rasterization_constants_are_usable() {
    assert!(SLICE_COUNT > 1);
    assert!(SLICE_OFFSET_PX > 0.0);
    assert!(IMAGE_BASE_SCALE > 0.0 && IMAGE_BASE_SCALE <= 1.0);
    assert!(IMAGE_SCALE_SHIFT < IMAGE_BASE_SCALE);
    assert!(SCROLL_HINT_THRESHOLD > 0.0 && SCROLL_HINT_THRESHOLD < 1.0);
}
