//! Small DOM helpers shared by the frame loop and event wiring.

use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_and_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// CSS-pixel height of the viewport.
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Keep the canvas backing store at CSS size * devicePixelRatio so rendering
/// stays crisp on high-density screens.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let dpr = window.device_pixel_ratio().max(1.0);
    let rect = canvas.get_bounding_client_rect();
    let width = (rect.width() * dpr) as u32;
    let height = (rect.height() * dpr) as u32;
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
}

pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("missing #{id}");
    }
    el
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))
}

pub fn set_style(el: &web::Element, style: &str) {
    let _ = el.set_attribute("style", style);
}

pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        set_style(&el, "display:none");
    }
}

pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        set_style(&el, "");
    }
}

/// All elements carrying `class`, in document order.
pub fn elements_by_class(document: &web::Document, class: &str) -> Vec<web::Element> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}
