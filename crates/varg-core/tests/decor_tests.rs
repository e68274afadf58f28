// Host-side tests for decoration math and rendering budgets.

use varg_core::{
    bar_pulse, center_bar_height, center_bar_pulse, center_opacity, dot_pulse, frequency_dots,
    inner_ring_diameter,
    inner_ring_state, parallax_frame, particles, ring_opacity, ring_state, rotating_ring_angle,
    wave_bars, wave_opacity, MotionProfile, CENTER_BAR_COUNT, CENTER_BAR_MIN_HEIGHT,
    EXPANDING_RINGS, FREQ_DOT_COUNT, PARALLAX_DEPTH_TRAVEL, PARALLAX_MID_TRAVEL, PARTICLE_COUNT,
    SIDE_BAR_COUNT, SLICE_COUNT,
};

#[test]
fn wave_bars_are_deterministic_for_a_seed() {
    let a = wave_bars(SIDE_BAR_COUNT, 7);
    let b = wave_bars(SIDE_BAR_COUNT, 7);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.period, y.period);
        assert_eq!(x.swing, y.swing);
        assert_eq!(x.base_height, y.base_height);
    }
    let c = wave_bars(SIDE_BAR_COUNT, 8);
    assert!(
        a.iter().zip(&c).any(|(x, y)| x.period != y.period),
        "different seeds should produce different jitter"
    );
}

#[test]
fn bar_pulse_stays_within_its_design_range() {
    for bar in wave_bars(SIDE_BAR_COUNT, 42) {
        assert!(bar.period >= 1.5 && bar.period <= 2.0);
        assert!(bar.swing >= 0.5 && bar.swing <= 1.0);
        for i in 0..200 {
            let t = i as f32 * 0.05;
            let pulse = bar_pulse(&bar, t);
            assert!(pulse.scale_y >= 1.0 - 1e-4 && pulse.scale_y <= 1.0 + bar.swing + 1e-4);
            assert!(pulse.opacity >= 0.3 - 1e-4 && pulse.opacity <= 0.7 + 1e-4);
        }
    }
}

#[test]
fn center_spectrum_peaks_in_the_middle() {
    let heights: Vec<f32> = (0..CENTER_BAR_COUNT)
        .map(|i| center_bar_height(i, CENTER_BAR_COUNT))
        .collect();
    let max = heights.iter().cloned().fold(f32::MIN, f32::max);
    // Symmetric about the center.
    for i in 0..CENTER_BAR_COUNT / 2 {
        let mirrored = heights[CENTER_BAR_COUNT - 1 - i];
        assert!((heights[i] - mirrored).abs() < 1e-4);
    }
    assert!(heights[CENTER_BAR_COUNT / 2] >= max - 1e-4);
    assert!(heights.iter().all(|&h| h >= CENTER_BAR_MIN_HEIGHT));
}

#[test]
fn center_bar_pulse_stays_in_range() {
    for i in 0..CENTER_BAR_COUNT {
        for t in 0..100 {
            let pulse = center_bar_pulse(i, CENTER_BAR_COUNT, t as f32 * 0.07);
            assert!(pulse.scale_y >= 1.0 - 1e-4 && pulse.scale_y <= 1.8 + 1e-4);
            assert!(pulse.opacity >= 0.4 - 1e-4 && pulse.opacity <= 0.8 + 1e-4);
        }
    }
}

#[test]
fn dots_and_particles_land_on_their_grid() {
    let dots = frequency_dots(FREQ_DOT_COUNT, 3);
    assert_eq!(dots.len(), FREQ_DOT_COUNT);
    for dot in &dots {
        assert!(dot.anchor.x > 0.0 && dot.anchor.x < 1.0);
        assert!(dot.anchor.y > 0.0 && dot.anchor.y < 1.0);
        let pulse = dot_pulse(dot, 10.0);
        assert!(pulse.scale >= 1.0 - 1e-4 && pulse.scale <= 1.5 + 1e-4);
        assert!(pulse.opacity >= 0.2 - 1e-4 && pulse.opacity <= 0.5 + 1e-4);
        assert!(pulse.offset_y <= 0.0, "dots drift upward only");
    }
    let dust = particles(PARTICLE_COUNT, 3);
    assert_eq!(dust.len(), PARTICLE_COUNT);
    for p in &dust {
        assert_eq!(dot_pulse(p, 5.0).offset_y, 0.0, "particles pulse in place");
    }
}

#[test]
fn expanding_rings_cycle_and_stagger() {
    // Before its delay a ring has not started.
    assert!(ring_state(&EXPANDING_RINGS[4], 1.0).is_none());
    for ring in &EXPANDING_RINGS {
        for i in 0..100 {
            let t = ring.delay + i as f32 * 0.1;
            let Some(state) = ring_state(ring, t) else {
                panic!("ring should be live after its delay");
            };
            assert!(state.scale >= 0.6 - 1e-4 && state.scale <= 1.8 + 1e-4);
            assert!(state.opacity >= -1e-4 && state.opacity <= 0.4 + 1e-4);
        }
        // A fresh cycle starts collapsed and transparent.
        let state = ring_state(ring, ring.delay).unwrap();
        assert!((state.scale - 0.6).abs() < 1e-3);
        assert!(state.opacity < 1e-3);
    }
}

#[test]
fn inner_rings_breathe_gently() {
    for i in 0..3 {
        assert!(inner_ring_diameter(i) > 0.0);
        for t in 0..100 {
            let state = inner_ring_state(i, t as f32 * 0.1);
            assert!(state.scale >= 1.0 - 1e-4 && state.scale <= 1.1 + 1e-4);
            assert!(state.opacity >= 0.3 - 1e-4 && state.opacity <= 0.6 + 1e-4);
        }
    }
}

#[test]
fn rotating_ring_wraps_once_per_period() {
    let a = rotating_ring_angle(0.0);
    let b = rotating_ring_angle(30.0);
    assert!((a - b).abs() < 1e-4, "full period should wrap to the same angle");
    assert!(rotating_ring_angle(7.5) > 0.0);
}

#[test]
fn progress_envelopes_hit_their_keyframes() {
    assert_eq!(wave_opacity(0.0), 0.0);
    assert!((wave_opacity(0.15) - 0.6).abs() < 1e-5);
    assert!((wave_opacity(0.5) - 0.8).abs() < 1e-5);
    assert!((ring_opacity(0.85) - 0.8).abs() < 1e-5);
    assert_eq!(center_opacity(0.05), 0.0);
    assert_eq!(center_opacity(1.0), 0.0);
}

#[test]
fn parallax_layers_separate_with_depth() {
    let frame = parallax_frame(1.0);
    assert!((frame.depth_shift - PARALLAX_DEPTH_TRAVEL).abs() < 1e-5);
    assert!((frame.mid_shift - PARALLAX_MID_TRAVEL).abs() < 1e-5);
    // The mid layer travels fastest; that is what sells the depth.
    assert!(frame.mid_shift < frame.depth_shift);
    assert!(frame.depth_shift < frame.grid_shift);

    let rest = parallax_frame(0.0);
    assert_eq!(rest.depth_shift, 0.0);
    assert_eq!(rest.mid_scale, 1.0);

    let drifted = parallax_frame(f32::NAN);
    assert_eq!(drifted.depth_shift, 0.0, "non-finite progress is clamped");
}

#[test]
fn motion_profile_budgets_shrink_with_the_tier() {
    let full = MotionProfile::FULL;
    assert_eq!(full.side_bar_count(), SIDE_BAR_COUNT);
    assert_eq!(full.slice_count(), SLICE_COUNT);
    assert!(full.aberration_enabled());

    let low = MotionProfile { low_power: true, reduced_motion: false };
    assert!(low.side_bar_count() < full.side_bar_count());
    assert!(low.particle_count() < full.particle_count());
    assert_eq!(low.slice_count(), 1, "low power falls back to a plain crossfade");
    assert!(!low.aberration_enabled());

    let reduced = MotionProfile { reduced_motion: true, low_power: false };
    assert_eq!(reduced.side_bar_count(), 0);
    assert_eq!(reduced.center_bar_count(), 0);
    assert_eq!(reduced.freq_dot_count(), 0);
    assert_eq!(reduced.expanding_ring_count(), 0);
    assert_eq!(reduced.slice_count(), 1);
}
