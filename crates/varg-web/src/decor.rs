//! Canvas rendering of the hero decorations.
//!
//! All of the motion math comes from `varg_core::decor`; this module holds
//! the geometry that places it on the stage and the actual 2D-context calls.
//! Every draw function checks the motion profile's budget so constrained
//! devices render fewer elements or none at all.

use std::f32::consts::TAU;

use varg_core::{
    bar_pulse, center_bar_height, center_bar_pulse, center_opacity, dot_pulse, freq_dot_opacity,
    frequency_dots, inner_ring_diameter, inner_ring_state, parallax_frame, particles,
    ring_opacity, ring_scale, ring_state, rotating_ring_angle, wave_bars, wave_opacity, wave_scale,
    FloatingDot,
    MotionProfile, ParallaxFrame, WaveBar, CENTER_BAR_COUNT, EXPANDING_RINGS, FREQ_DOT_COUNT,
    INNER_RING_COUNT, PARTICLE_COUNT, ROTATING_RING_DIAMETER, SIDE_BAR_COUNT,
};
use web_sys as web;

use crate::draw::Viewport;

const SIDE_BAR_WIDTH: f64 = 3.0;
const SIDE_BAR_GAP: f64 = 6.0;
const SIDE_CLUSTER_INSET: f64 = 64.0;
const CENTER_BAR_WIDTH: f64 = 3.0;
const CENTER_BAR_GAP: f64 = 4.0;
const CENTER_BAR_BASELINE: f64 = 80.0;
const FREQ_DOT_RADIUS: f64 = 3.0;
const PARTICLE_RADIUS: f64 = 2.0;
const GRID_SPACING: f64 = 80.0;

/// Immutable per-session decoration config, built once at startup.
pub struct DecorState {
    pub bars: Vec<WaveBar>,
    pub dots: Vec<FloatingDot>,
    pub dust: Vec<FloatingDot>,
}

impl DecorState {
    pub fn new(seed: u64) -> Self {
        Self {
            bars: wave_bars(SIDE_BAR_COUNT, seed),
            dots: frequency_dots(FREQ_DOT_COUNT, seed),
            dust: particles(PARTICLE_COUNT, seed),
        }
    }
}

/// The deep background: two drifting glow blobs, the particle mid layer and
/// a faint grid, each moving at its own parallax rate.
pub fn draw_parallax(
    ctx: &web::CanvasRenderingContext2d,
    vp: &Viewport,
    progress: f32,
    dust: &[FloatingDot],
    time: f32,
    profile: &MotionProfile,
) {
    if profile.reduced_motion {
        return;
    }
    let frame = parallax_frame(progress);
    draw_glow_layer(ctx, vp, &frame);
    draw_grid_layer(ctx, vp, &frame);
    draw_dust_layer(ctx, vp, &frame, dust, time, profile);
}

fn draw_glow_layer(ctx: &web::CanvasRenderingContext2d, vp: &Viewport, frame: &ParallaxFrame) {
    let shift = frame.depth_shift as f64 * vp.height;
    let blobs = [
        (vp.width * 0.25, vp.height * 0.30, "rgba(139, 92, 246, 0.5)"),
        (vp.width * 0.75, vp.height * 0.70, "rgba(59, 130, 246, 0.4)"),
    ];
    ctx.save();
    ctx.set_global_alpha(frame.depth_opacity as f64);
    for (x, y, color) in blobs {
        let radius = vp.width.min(vp.height) * 0.35;
        let Ok(gradient) = ctx.create_radial_gradient(x, y + shift, 0.0, x, y + shift, radius)
        else {
            continue;
        };
        let _ = gradient.add_color_stop(0.0, color);
        let _ = gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)");
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(0.0, 0.0, vp.width, vp.height);
    }
    ctx.restore();
}

fn draw_grid_layer(ctx: &web::CanvasRenderingContext2d, vp: &Viewport, frame: &ParallaxFrame) {
    let shift = (frame.grid_shift as f64 * vp.height).rem_euclid(GRID_SPACING);
    ctx.save();
    ctx.set_global_alpha(frame.grid_opacity as f64);
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.15)");
    ctx.set_line_width(1.0);
    ctx.begin_path();
    let mut x = 0.0;
    while x <= vp.width {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, vp.height);
        x += GRID_SPACING;
    }
    let mut y = shift - GRID_SPACING;
    while y <= vp.height {
        ctx.move_to(0.0, y);
        ctx.line_to(vp.width, y);
        y += GRID_SPACING;
    }
    ctx.stroke();
    ctx.restore();
}

fn draw_dust_layer(
    ctx: &web::CanvasRenderingContext2d,
    vp: &Viewport,
    frame: &ParallaxFrame,
    dust: &[FloatingDot],
    time: f32,
    profile: &MotionProfile,
) {
    let shift = frame.mid_shift as f64 * vp.height;
    ctx.save();
    for dot in dust.iter().take(profile.particle_count()) {
        let pulse = dot_pulse(dot, time);
        let x = dot.anchor.x as f64 * vp.width;
        let y = dot.anchor.y as f64 * vp.height + shift;
        ctx.set_global_alpha(pulse.opacity as f64);
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
        ctx.begin_path();
        let radius = PARTICLE_RADIUS * pulse.scale as f64 * frame.mid_scale as f64;
        if ctx.arc(x, y, radius, 0.0, TAU as f64).is_ok() {
            ctx.fill();
        }
    }
    ctx.restore();
}

/// The audio rings behind the product shot: staggered expanding pulses,
/// three breathing inner rings and one slow dashed rotator.
pub fn draw_rings(
    ctx: &web::CanvasRenderingContext2d,
    vp: &Viewport,
    time: f32,
    progress: f32,
    profile: &MotionProfile,
) {
    if profile.reduced_motion {
        return;
    }
    let cx = vp.width / 2.0;
    let cy = vp.height / 2.0;
    let envelope = ring_opacity(progress) as f64;
    let spread = ring_scale(progress) as f64;

    ctx.save();
    ctx.set_line_width(1.0);
    for ring in EXPANDING_RINGS.iter().take(profile.expanding_ring_count()) {
        let Some(state) = ring_state(ring, time) else {
            continue;
        };
        let radius = ring.diameter as f64 / 2.0 * state.scale as f64 * spread;
        ctx.set_global_alpha(state.opacity as f64 * envelope);
        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.35)");
        ctx.begin_path();
        if ctx.arc(cx, cy, radius, 0.0, TAU as f64).is_ok() {
            ctx.stroke();
        }
    }

    for i in 0..INNER_RING_COUNT {
        let state = inner_ring_state(i, time);
        let radius = inner_ring_diameter(i) as f64 / 2.0 * state.scale as f64 * spread;
        ctx.set_global_alpha(state.opacity as f64 * envelope);
        ctx.set_stroke_style_str("rgba(139, 92, 246, 0.5)");
        ctx.begin_path();
        if ctx.arc(cx, cy, radius, 0.0, TAU as f64).is_ok() {
            ctx.stroke();
        }
    }

    // Slow dashed rotator; the dash pattern makes the rotation readable.
    let dashes = js_sys::Array::of2(&4.0.into(), &8.0.into());
    if ctx.set_line_dash(&dashes).is_ok() {
        ctx.set_global_alpha(0.3 * envelope);
        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.4)");
        let _ = ctx.translate(cx, cy);
        let _ = ctx.rotate(rotating_ring_angle(time) as f64);
        ctx.begin_path();
        let radius = ROTATING_RING_DIAMETER as f64 / 2.0 * spread;
        if ctx.arc(0.0, 0.0, radius, 0.0, TAU as f64).is_ok() {
            ctx.stroke();
        }
    }
    ctx.restore();
}

/// The two side wave-bar clusters, mirrored left and right.
pub fn draw_waves(
    ctx: &web::CanvasRenderingContext2d,
    vp: &Viewport,
    bars: &[WaveBar],
    time: f32,
    progress: f32,
    profile: &MotionProfile,
) {
    let count = profile.side_bar_count();
    if count == 0 {
        return;
    }
    let envelope = wave_opacity(progress) as f64;
    if envelope <= 0.0 {
        return;
    }
    let cluster_scale = wave_scale(progress) as f64;
    let cluster_width = count as f64 * (SIDE_BAR_WIDTH + SIDE_BAR_GAP) - SIDE_BAR_GAP;
    let mid_y = vp.height / 2.0;

    for side in [SIDE_CLUSTER_INSET, vp.width - SIDE_CLUSTER_INSET - cluster_width] {
        ctx.save();
        let _ = ctx.translate(side + cluster_width / 2.0, mid_y);
        let _ = ctx.scale(cluster_scale, cluster_scale);
        for (i, bar) in bars.iter().take(count).enumerate() {
            let pulse = bar_pulse(bar, time);
            let height = bar.base_height as f64 * pulse.scale_y as f64;
            let x = i as f64 * (SIDE_BAR_WIDTH + SIDE_BAR_GAP) - cluster_width / 2.0;
            ctx.set_global_alpha(pulse.opacity as f64 * envelope);
            ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
            ctx.fill_rect(x, -height / 2.0, SIDE_BAR_WIDTH, height);
        }
        ctx.restore();
    }
}

/// The frequency spectrum strip along the bottom of the stage.
pub fn draw_center_bars(
    ctx: &web::CanvasRenderingContext2d,
    vp: &Viewport,
    time: f32,
    progress: f32,
    profile: &MotionProfile,
) {
    let count = profile.center_bar_count();
    if count == 0 {
        return;
    }
    let envelope = center_opacity(progress) as f64;
    if envelope <= 0.0 {
        return;
    }
    let strip_width = count as f64 * (CENTER_BAR_WIDTH + CENTER_BAR_GAP) - CENTER_BAR_GAP;
    let left = (vp.width - strip_width) / 2.0;
    let baseline = vp.height - CENTER_BAR_BASELINE;

    ctx.save();
    for i in 0..count {
        let pulse = center_bar_pulse(i, count, time);
        let height = center_bar_height(i, CENTER_BAR_COUNT) as f64 * pulse.scale_y as f64;
        let x = left + i as f64 * (CENTER_BAR_WIDTH + CENTER_BAR_GAP);
        ctx.set_global_alpha(pulse.opacity as f64 * envelope);
        ctx.set_fill_style_str("rgba(139, 92, 246, 0.9)");
        ctx.fill_rect(x, baseline - height, CENTER_BAR_WIDTH, height);
    }
    ctx.restore();
}

/// The drifting frequency dots scattered over the stage.
pub fn draw_freq_dots(
    ctx: &web::CanvasRenderingContext2d,
    vp: &Viewport,
    dots: &[FloatingDot],
    time: f32,
    progress: f32,
    profile: &MotionProfile,
) {
    let count = profile.freq_dot_count();
    if count == 0 {
        return;
    }
    let envelope = freq_dot_opacity(progress) as f64;
    if envelope <= 0.0 {
        return;
    }
    ctx.save();
    for dot in dots.iter().take(count) {
        let pulse = dot_pulse(dot, time);
        let x = dot.anchor.x as f64 * vp.width;
        let y = dot.anchor.y as f64 * vp.height + pulse.offset_y as f64;
        ctx.set_global_alpha(pulse.opacity as f64 * envelope);
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
        ctx.begin_path();
        if ctx.arc(x, y, FREQ_DOT_RADIUS * pulse.scale as f64, 0.0, TAU as f64).is_ok() {
            ctx.fill();
        }
    }
    ctx.restore();
}

/// Darken the stage edges so the product shot stays the focal point.
pub fn draw_vignette(ctx: &web::CanvasRenderingContext2d, vp: &Viewport) {
    let cx = vp.width / 2.0;
    let cy = vp.height / 2.0;
    let inner = vp.width.min(vp.height) * 0.35;
    let outer = vp.width.hypot(vp.height) / 2.0;
    let Ok(gradient) = ctx.create_radial_gradient(cx, cy, inner, cx, cy, outer) else {
        return;
    };
    let _ = gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)");
    let _ = gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0.55)");
    ctx.save();
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, vp.width, vp.height);
    ctx.restore();
}
