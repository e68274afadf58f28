//! Canvas rendering of the hero image sequence.
//!
//! The sequencer decides which images are on screen and how they blend; this
//! module rasterizes that decision: slit-scan slices during a crossfade, a
//! plain alpha blend on constrained devices, and the chromatic aberration
//! pass at the peak of a transition.

use std::f32::consts::TAU;

use varg_core::{
    MotionProfile, TransitionWindow, ABERRATION_ALPHA_FACTOR, ABERRATION_OFFSET_PX,
    IMAGE_BASE_SCALE, IMAGE_SCALE_SHIFT, SECONDARY_SLIT_FACTOR, SLICE_OFFSET_PX, SLICE_PHASE_RATE,
};
use web_sys as web;

/// CSS-pixel size of the drawing surface plus the device pixel ratio the
/// backing store was allocated at.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    pub fn of_canvas(canvas: &web::HtmlCanvasElement) -> Self {
        let dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .max(1.0);
        Self {
            width: canvas.width() as f64 / dpr,
            height: canvas.height() as f64 / dpr,
            dpr,
        }
    }
}

/// Reset the transform for a new frame and fill the stage background.
pub fn clear(ctx: &web::CanvasRenderingContext2d, vp: &Viewport) {
    let _ = ctx.set_transform(vp.dpr, 0.0, 0.0, vp.dpr, 0.0, 0.0);
    ctx.set_fill_style_str("#050505");
    ctx.fill_rect(0.0, 0.0, vp.width, vp.height);
}

/// Draw the image pair for one transition window, with the micro-interaction
/// rotation and zoom applied around the stage center.
#[allow(clippy::too_many_arguments)]
pub fn draw_sequence(
    ctx: &web::CanvasRenderingContext2d,
    vp: &Viewport,
    images: &[web::HtmlImageElement],
    win: &TransitionWindow,
    rotation_deg: f32,
    zoom: f32,
    progress: f32,
    profile: &MotionProfile,
) {
    if images.is_empty() {
        return;
    }
    ctx.save();
    let _ = ctx.translate(vp.width / 2.0, vp.height / 2.0);
    let _ = ctx.rotate((rotation_deg as f64).to_radians());
    let _ = ctx.scale(zoom as f64, zoom as f64);
    let _ = ctx.translate(-vp.width / 2.0, -vp.height / 2.0);

    // The outgoing image shrinks slightly as the incoming one pushes in.
    if let Some(img) = images.get(win.primary) {
        let scale_shift = -win.blend * IMAGE_SCALE_SHIFT;
        draw_image_slices(
            ctx,
            vp,
            img,
            win.primary_weight(),
            win.intensity,
            scale_shift,
            progress,
            profile,
        );
    }
    if let Some(to) = win.secondary {
        if let Some(img) = images.get(to) {
            let scale_shift = (1.0 - win.blend) * IMAGE_SCALE_SHIFT;
            draw_image_slices(
                ctx,
                vp,
                img,
                win.secondary_weight(),
                win.intensity * SECONDARY_SLIT_FACTOR,
                scale_shift,
                progress,
                profile,
            );
        }
    }
    ctx.restore();

    if profile.aberration_enabled() && win.secondary.is_some() && win.intensity > 0.0 {
        draw_aberration(ctx, vp, win.intensity);
    }
}

/// One image, contain-fitted to the stage, drawn either whole or as a stack
/// of horizontally displaced slices.
#[allow(clippy::too_many_arguments)]
fn draw_image_slices(
    ctx: &web::CanvasRenderingContext2d,
    vp: &Viewport,
    img: &web::HtmlImageElement,
    opacity: f32,
    slit: f32,
    scale_shift: f32,
    progress: f32,
    profile: &MotionProfile,
) {
    if opacity <= 0.0 {
        return;
    }
    let iw = img.natural_width() as f64;
    let ih = img.natural_height() as f64;
    if iw <= 0.0 || ih <= 0.0 {
        return;
    }
    ctx.save();
    ctx.set_global_alpha(opacity.clamp(0.0, 1.0) as f64);

    let fit = (vp.width / iw).min(vp.height / ih) * (IMAGE_BASE_SCALE + scale_shift) as f64;
    let w = iw * fit;
    let h = ih * fit;
    let x = (vp.width - w) / 2.0;
    let y = (vp.height - h) / 2.0;

    let slices = profile.slice_count();
    if slit > 0.0 && slices > 1 {
        let dest_slice_h = h / slices as f64;
        let src_slice_h = ih / slices as f64;
        for i in 0..slices {
            let phase = (i as f32 / slices as f32) * TAU + progress * SLICE_PHASE_RATE;
            let offset = (phase.sin() * slit * SLICE_OFFSET_PX) as f64;
            // Overdraw each slice by a pixel to hide seams between rows.
            let _ = ctx
                .draw_image_with_html_image_element_and_sx_and_sy_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    img,
                    0.0,
                    i as f64 * src_slice_h,
                    iw,
                    src_slice_h,
                    x + offset,
                    y + i as f64 * dest_slice_h,
                    w,
                    dest_slice_h + 1.0,
                );
        }
    } else {
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h);
    }
    ctx.restore();
}

/// Red/blue fringing composited over the stage while a crossfade is hot.
fn draw_aberration(ctx: &web::CanvasRenderingContext2d, vp: &Viewport, intensity: f32) {
    ctx.save();
    let _ = ctx.set_global_composite_operation("screen");
    ctx.set_global_alpha((intensity * ABERRATION_ALPHA_FACTOR) as f64);
    ctx.set_fill_style_str("rgba(255, 0, 0, 0.3)");
    ctx.fill_rect(ABERRATION_OFFSET_PX, 0.0, vp.width, vp.height);
    ctx.set_fill_style_str("rgba(0, 0, 255, 0.3)");
    ctx.fill_rect(-ABERRATION_OFFSET_PX, 0.0, vp.width, vp.height);
    ctx.restore();
}
