// Host-side tests for keyframe tracks and the spring smoother.

use varg_core::{sample_keys, Spring, Track, HERO_ROTATION_KEYS, HERO_SCALE_KEYS};

#[test]
fn track_clamps_beyond_the_ends() {
    let track = Track::new(&[(0.2, 1.0), (0.8, 3.0)]);
    assert_eq!(track.sample(0.0), 1.0);
    assert_eq!(track.sample(-5.0), 1.0);
    assert_eq!(track.sample(1.0), 3.0);
    assert_eq!(track.sample(42.0), 3.0);
}

#[test]
fn track_interpolates_linearly_between_keys() {
    let track = Track::new(&[(0.0, 0.0), (1.0, 10.0)]);
    for i in 0..=100 {
        let p = i as f32 / 100.0;
        assert!((track.sample(p) - 10.0 * p).abs() < 1e-4, "at p={p}");
    }
    // Multi-segment: midpoint of the second segment.
    let track = Track::new(&[(0.0, 0.0), (0.5, 2.0), (1.0, -1.0)]);
    assert!((track.sample(0.75) - 0.5).abs() < 1e-5);
}

#[test]
fn duplicate_key_inputs_express_a_step() {
    let track = Track::new(&[(0.0, 1.0), (0.5, 1.0), (0.5, 5.0), (1.0, 5.0)]);
    assert_eq!(track.sample(0.25), 1.0);
    assert_eq!(track.sample(0.75), 5.0);
}

#[test]
fn non_finite_input_resolves_to_the_first_key() {
    assert_eq!(sample_keys(&[(0.0, 7.0), (1.0, 9.0)], f32::NAN), 7.0);
    assert_eq!(sample_keys(&[], 0.5), 0.0);
}

#[test]
fn hero_micro_interaction_tables_sample_sensibly() {
    // Rotation sweeps 0 -> 2 degrees by mid-scroll, then back through -1.
    assert_eq!(sample_keys(HERO_ROTATION_KEYS, 0.0), 0.0);
    assert!((sample_keys(HERO_ROTATION_KEYS, 0.25) - 1.0).abs() < 1e-5);
    assert!((sample_keys(HERO_ROTATION_KEYS, 0.5) - 2.0).abs() < 1e-5);
    assert!((sample_keys(HERO_ROTATION_KEYS, 1.0) + 1.0).abs() < 1e-5);
    // Scale never strays far from 1.
    for i in 0..=100 {
        let s = sample_keys(HERO_SCALE_KEYS, i as f32 / 100.0);
        assert!((0.95..=1.05).contains(&s));
    }
}

#[test]
fn spring_converges_to_a_held_target() {
    let mut spring = Spring::scroll();
    for _ in 0..600 {
        spring.step(1.0, 1.0 / 60.0);
    }
    assert_eq!(spring.value(), 1.0, "spring should settle and snap exactly");
    assert!(spring.settled(1.0));
}

#[test]
fn spring_motion_is_smooth_and_bounded() {
    let mut spring = Spring::scroll();
    let mut prev = spring.value();
    for _ in 0..2000 {
        let v = spring.step(1.0, 1.0 / 120.0);
        assert!(v.is_finite());
        // These constants are overdamped; any numeric overshoot stays tiny.
        assert!(v > -0.5 && v < 1.5, "spring left a sane range: {v}");
        assert!((v - prev).abs() < 0.1, "step too large: {prev} -> {v}");
        prev = v;
    }
}

#[test]
fn spring_survives_a_background_tab_delta() {
    // A tab returning from the background can report seconds of elapsed time.
    let mut spring = Spring::scroll();
    let v = spring.step(1.0, 5.0);
    assert!(v.is_finite());
    assert!((-0.5..=1.5).contains(&v));
}

#[test]
fn spring_ignores_degenerate_deltas_and_targets() {
    let mut spring = Spring::scroll();
    spring.snap_to(0.4);
    assert_eq!(spring.step(1.0, 0.0), 0.4);
    assert_eq!(spring.step(1.0, -1.0), 0.4);
    assert_eq!(spring.step(1.0, f32::NAN), 0.4);
    assert_eq!(spring.step(f32::NAN, 0.016), 0.4);
}

#[test]
fn snap_to_kills_velocity() {
    let mut spring = Spring::scroll();
    spring.step(1.0, 0.1);
    assert!(spring.velocity() != 0.0);
    spring.snap_to(0.0);
    assert_eq!(spring.value(), 0.0);
    assert_eq!(spring.velocity(), 0.0);
}
