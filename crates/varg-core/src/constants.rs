// Shared tuning constants for the hero scroll sequence and its decorations.
// The web frontend consumes these; keeping them here makes them testable on
// the host.

// Image sequence zone boundaries (fractions of total scroll progress).
// Three hold zones separated by crossfade windows, cycling back to the
// first image at the end of the sequence.
pub const HOLD_A_END: f32 = 0.25;
pub const FADE_AB_END: f32 = 0.35;
pub const HOLD_B_END: f32 = 0.55;
pub const FADE_BC_END: f32 = 0.65;
pub const HOLD_C_END: f32 = 0.85;

// Slit-scan distortion strength at the midpoint of each crossfade
pub const FADE_PEAK_INTENSITY: f32 = 0.3;
pub const FADE_PEAK_INTENSITY_WRAP: f32 = 0.2; // gentler on the wrap-around

// Slit-scan rasterization
pub const SLICE_COUNT: usize = 20;
pub const SLICE_OFFSET_PX: f32 = 30.0; // max horizontal slice displacement
pub const SLICE_PHASE_RATE: f32 = 10.0; // progress -> slice phase multiplier
pub const SECONDARY_SLIT_FACTOR: f32 = 0.5; // incoming image distorts less

// Hero image framing
pub const IMAGE_BASE_SCALE: f32 = 0.85; // fraction of the fitted size
pub const IMAGE_SCALE_SHIFT: f32 = 0.05; // push/pull during a crossfade

// Chromatic aberration pass (only while transitioning)
pub const ABERRATION_ALPHA_FACTOR: f32 = 0.15;
pub const ABERRATION_OFFSET_PX: f64 = 2.0;

// Text overlay timing
pub const OVERLAY_FADE_MARGIN: f32 = 0.06;
pub const OVERLAY_RISE_PX: f32 = 40.0; // fade-in travel (settles upward to 0)
pub const OVERLAY_DRIFT_PX: f32 = 30.0; // fade-out travel (drifts further up)
pub const OVERLAY_SCALE_MIN: f32 = 0.95;
pub const OVERLAY_BLUR_MAX: f32 = 4.0;

// Scroll smoothing springs
pub const SCROLL_STIFFNESS: f32 = 80.0;
pub const SCROLL_DAMPING: f32 = 25.0;
pub const SCROLL_REST_DELTA: f32 = 1e-4;
pub const PARALLAX_STIFFNESS: f32 = 50.0;
pub const PARALLAX_DAMPING: f32 = 20.0;

// Scroll hint disappears once the user has committed to scrolling
pub const SCROLL_HINT_THRESHOLD: f32 = 0.08;

// Hero micro-interaction keyframes (progress -> value)
pub const HERO_ROTATION_KEYS: &[(f32, f32)] = &[(0.0, 0.0), (0.5, 2.0), (1.0, -1.0)];
pub const HERO_SCALE_KEYS: &[(f32, f32)] =
    &[(0.0, 1.0), (0.1, 1.02), (0.9, 1.02), (1.0, 0.98)];

// Parallax layers: vertical travel as a fraction of viewport height
pub const PARALLAX_DEPTH_TRAVEL: f32 = -0.30;
pub const PARALLAX_MID_TRAVEL: f32 = -0.50;
pub const PARALLAX_GRID_TRAVEL: f32 = -0.20;
pub const PARALLAX_DEPTH_OPACITY_KEYS: &[(f32, f32)] =
    &[(0.0, 0.15), (0.3, 0.25), (0.7, 0.15), (1.0, 0.05)];
pub const PARALLAX_GRID_OPACITY_KEYS: &[(f32, f32)] =
    &[(0.0, 0.1), (0.5, 0.2), (1.0, 0.05)];
pub const PARALLAX_MID_SCALE_KEYS: &[(f32, f32)] =
    &[(0.0, 1.0), (0.5, 1.1), (1.0, 1.2)];

// Side wave bar clusters
pub const SIDE_BAR_COUNT: usize = 8;
pub const SIDE_BAR_BASE_HEIGHT: f32 = 20.0;
pub const SIDE_BAR_HEIGHT_SWING: f32 = 15.0;
pub const WAVE_OPACITY_KEYS: &[(f32, f32)] = &[
    (0.0, 0.0),
    (0.15, 0.6),
    (0.3, 0.3),
    (0.5, 0.8),
    (0.7, 0.4),
    (0.85, 0.7),
    (1.0, 0.5),
];
pub const WAVE_SCALE_KEYS: &[(f32, f32)] =
    &[(0.0, 0.8), (0.25, 1.0), (0.5, 1.1), (0.75, 1.0), (1.0, 0.9)];

// Center spectrum bars
pub const CENTER_BAR_COUNT: usize = 24;
pub const CENTER_BAR_MAX_HEIGHT: f32 = 30.0;
pub const CENTER_BAR_MIN_HEIGHT: f32 = 8.0;
pub const CENTER_BAR_FALLOFF: f32 = 2.0; // px of height lost per bar of center distance
pub const CENTER_OPACITY_KEYS: &[(f32, f32)] =
    &[(0.1, 0.0), (0.3, 0.5), (0.8, 0.5), (1.0, 0.0)];

// Drifting frequency dots
pub const FREQ_DOT_COUNT: usize = 12;
pub const FREQ_DOT_OPACITY_KEYS: &[(f32, f32)] =
    &[(0.0, 0.0), (0.2, 0.4), (0.8, 0.4), (1.0, 0.0)];

// Floating particles in the parallax mid layer
pub const PARTICLE_COUNT: usize = 6;

// Audio ring decorations
pub const RING_OPACITY_KEYS: &[(f32, f32)] = &[
    (0.0, 0.3),
    (0.1, 0.6),
    (0.3, 0.4),
    (0.5, 0.7),
    (0.7, 0.5),
    (0.85, 0.8),
    (1.0, 0.4),
];
pub const RING_SCALE_KEYS: &[(f32, f32)] =
    &[(0.0, 1.0), (0.25, 1.1), (0.5, 1.0), (0.75, 1.15), (1.0, 1.0)];
pub const INNER_RING_COUNT: usize = 3;
pub const INNER_RING_BASE_DIAMETER: f32 = 180.0;
pub const INNER_RING_DIAMETER_STEP: f32 = 40.0;
pub const ROTATING_RING_DIAMETER: f32 = 350.0;
pub const ROTATING_RING_PERIOD_SEC: f32 = 30.0;
