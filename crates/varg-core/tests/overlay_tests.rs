// Host-side tests for overlay fade timing.

use varg_core::{Align, OverlayRange, OverlaySet};

#[test]
fn fade_in_follows_ease_out_cubic() {
    // Halfway through a 0.06 fade margin: easeOutCubic(0.5) = 1 - 0.5^3.
    let range = OverlayRange::new(0.0, 0.22, Align::Center);
    let state = range.state(0.03);
    assert!((state.opacity - 0.875).abs() < 1e-5, "opacity = {}", state.opacity);
    // Text is still travelling up toward its resting position.
    assert!(state.offset_y > 0.0);
    assert!(state.scale < 1.0 && state.scale > 0.95);
    assert!(state.blur > 0.0);
}

#[test]
fn fade_out_follows_ease_in_cubic() {
    // Local fade-out fraction at p = 0.95 is (0.95 - 0.92) / 0.08 = 0.375.
    let range = OverlayRange::with_margin(0.82, 1.0, 0.08, Align::Center);
    let state = range.state(0.95);
    let expected = 1.0 - 0.375f32.powi(3);
    assert!(
        (state.opacity - expected).abs() < 1e-5,
        "opacity = {}, expected {expected}",
        state.opacity
    );
    // Fade-out drifts upward, the opposite direction from fade-in travel.
    assert!(state.offset_y < 0.0);
}

#[test]
fn steady_zone_is_fully_settled() {
    let range = OverlayRange::new(0.28, 0.50, Align::Left);
    for p in [0.35, 0.40, 0.43] {
        let state = range.state(p);
        assert_eq!(state.opacity, 1.0);
        assert_eq!(state.offset_y, 0.0);
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.blur, 0.0);
    }
}

#[test]
fn outside_the_window_the_overlay_is_hidden() {
    let range = OverlayRange::new(0.28, 0.50, Align::Left);
    for p in [0.0, 0.27, 0.51, 1.0] {
        assert_eq!(range.state(p).opacity, 0.0, "visible at p={p}");
        assert!(!range.state(p).visible());
    }
}

#[test]
fn opacity_is_continuous_over_the_whole_progress_range() {
    let ranges = [
        OverlayRange::new(0.0, 0.22, Align::Center),
        OverlayRange::new(0.28, 0.50, Align::Left),
        OverlayRange::with_margin(0.82, 1.0, 0.08, Align::Center),
    ];
    for range in &ranges {
        let mut prev = range.state(0.0).opacity;
        for i in 1..=20_000 {
            let p = i as f32 / 20_000.0;
            let opacity = range.state(p).opacity;
            assert!(
                (opacity - prev).abs() < 0.01,
                "opacity jumps from {prev} to {opacity} at p={p}"
            );
            prev = opacity;
        }
    }
}

#[test]
fn fade_boundaries_line_up_exactly() {
    let range = OverlayRange::new(0.0, 0.22, Align::Center);
    // End of the fade-in margin reaches full opacity.
    let state = range.state(0.06);
    assert!((state.opacity - 1.0).abs() < 1e-5);
    assert!(state.offset_y.abs() < 1e-3);
    // The very end of the window is fully transparent again.
    assert!(range.state(0.22).opacity < 1e-5);
}

#[test]
fn malformed_ranges_are_normalized_not_rejected() {
    // Reversed window collapses to empty: never visible, never panics.
    let reversed = OverlayRange::new(0.6, 0.4, Align::Center);
    for i in 0..=100 {
        let p = i as f32 / 100.0;
        assert_eq!(reversed.state(p).opacity, 0.0);
    }

    // Oversized margin is clamped to half the window.
    let tight = OverlayRange::with_margin(0.4, 0.5, 0.3, Align::Center);
    assert!((tight.margin() - 0.05).abs() < 1e-6);
    // Midpoint is the seam between fade-in and fade-out; still defined.
    let state = tight.state(0.45);
    assert!(state.opacity >= 0.0 && state.opacity <= 1.0);

    // Out-of-range bounds are clamped into [0, 1].
    let wide = OverlayRange::new(-0.5, 1.5, Align::Center);
    assert_eq!(wide.start(), 0.0);
    assert_eq!(wide.end(), 1.0);

    // Non-finite input progress resolves to a defined state.
    let range = OverlayRange::new(0.0, 0.22, Align::Center);
    let state = range.state(f32::NAN);
    assert!(state.opacity.is_finite());
}

#[test]
fn overlay_states_are_computed_independently() {
    // Overlapping windows both report visible; no cross-overlay exclusivity.
    let set = OverlaySet::new(vec![
        OverlayRange::new(0.0, 0.5, Align::Left),
        OverlayRange::new(0.3, 0.8, Align::Right),
    ]);
    let states = set.states(0.4);
    assert!(states[0].visible());
    assert!(states[1].visible());
}

#[test]
fn hero_set_has_four_disjoint_windows() {
    let set = OverlaySet::hero();
    assert_eq!(set.len(), 4);
    let ranges = set.ranges();
    for w in ranges.windows(2) {
        assert!(
            w[0].end() <= w[1].start(),
            "hero overlay windows must not overlap"
        );
    }
    // Alignment pattern: center, left, right, center.
    assert_eq!(ranges[0].align, Align::Center);
    assert_eq!(ranges[1].align, Align::Left);
    assert_eq!(ranges[2].align, Align::Right);
    assert_eq!(ranges[3].align, Align::Center);
}
