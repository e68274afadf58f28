//! Applying derived overlay state to the DOM.
//!
//! The math lives in `varg_core::overlay`; this module only turns an
//! `OverlayState` into inline styles on the hero text blocks, plus the two
//! small chrome pieces keyed off progress (the progress bar and the scroll
//! hint).

use varg_core::{OverlayState, SCROLL_HINT_THRESHOLD};
use web_sys as web;

use crate::dom::set_style;

pub fn apply_overlay(el: &web::Element, state: &OverlayState) {
    if !state.visible() {
        // Fully hidden blocks also stop intercepting pointer events.
        set_style(el, "opacity:0;pointer-events:none");
        return;
    }
    let style = format!(
        "opacity:{:.4};transform:translateY({:.1}px) scale({:.4});filter:blur({:.2}px)",
        state.opacity, state.offset_y, state.scale, state.blur
    );
    set_style(el, &style);
}

pub fn set_progress_bar(el: &web::Element, progress: f32) {
    let pct = (progress.clamp(0.0, 1.0) * 100.0) as f64;
    set_style(el, &format!("width:{pct:.2}%"));
}

/// The "scroll" hint at the bottom of the hero fades once the user commits.
pub fn update_scroll_hint(el: &web::Element, progress: f32) {
    if progress < SCROLL_HINT_THRESHOLD {
        set_style(el, "opacity:1");
    } else {
        set_style(el, "opacity:0;transform:translate(-50%, 10px)");
    }
}
