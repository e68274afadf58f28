//! Event wiring: resize, reduced-motion changes and the mobile menu.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use varg_core::MotionProfile;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame::FrameContext;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const LOW_POWER_CORE_LIMIT: f64 = 4.0;
const MOBILE_UA_MARKERS: [&str; 4] = ["iPhone", "iPad", "iPod", "Android"];

/// Classify the device once at startup. A wrong guess only changes how many
/// decorations are drawn.
pub fn detect_profile(window: &web::Window) -> MotionProfile {
    let reduced_motion = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false);

    let navigator = window.navigator();
    let cores = navigator.hardware_concurrency();
    let ua = navigator.user_agent().unwrap_or_default();
    let mobile = MOBILE_UA_MARKERS.iter().any(|m| ua.contains(m));
    let low_power = mobile || (cores > 0.0 && cores < LOW_POWER_CORE_LIMIT);

    let profile = MotionProfile {
        reduced_motion,
        low_power,
    };
    log::info!("motion profile: {profile:?}");
    profile
}

/// Track live changes to the reduced-motion preference.
pub fn wire_reduced_motion(window: &web::Window, profile: Rc<Cell<MotionProfile>>) {
    let Ok(Some(mql)) = window.match_media(REDUCED_MOTION_QUERY) else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
        let mut p = profile.get();
        p.reduced_motion = ev.matches();
        profile.set(p);
        log::info!("motion profile changed: {p:?}");
    }) as Box<dyn FnMut(_)>);
    mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}

/// Keep the canvas backing store in sync with its CSS size and repaint
/// immediately so a resize never shows a stale frame.
pub fn wire_resize(window: &web::Window, context: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move || {
        let mut ctx = context.borrow_mut();
        dom::sync_canvas_backing_size(&ctx.canvas);
        ctx.redraw();
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}

/// The hamburger button toggles the mobile navigation panel.
pub fn wire_menu_toggle(document: &web::Document) {
    let Some(button) = document.get_element_by_id("menu-toggle") else {
        return;
    };
    let Some(menu) = document.get_element_by_id("mobile-menu") else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        let _ = menu.class_list().toggle("open");
    }) as Box<dyn FnMut()>);
    button
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}
