//! Raw scroll progress of the tall hero container.
//!
//! The hero section is a 400vh container with a sticky viewport pinned
//! inside it. Progress is 0 when the container's top sits at the top of the
//! viewport and 1 when its bottom has reached the bottom, which matches the
//! distance the sticky stage stays pinned.

use web_sys as web;

pub fn hero_progress(container: &web::Element, viewport_height: f64) -> f32 {
    let rect = container.get_bounding_client_rect();
    let scrollable = rect.height() - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    ((-rect.top()) / scrollable).clamp(0.0, 1.0) as f32
}
