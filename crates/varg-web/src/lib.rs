#![cfg(target_arch = "wasm32")]

//! Browser entry point for the Varg X landing page.
//!
//! All of the scroll math lives in `varg-core`; this crate preloads the hero
//! images, wires up DOM events and runs the requestAnimationFrame pipeline.

pub mod decor;
pub mod dom;
pub mod draw;
pub mod events;
pub mod frame;
pub mod loader;
pub mod overlay;
pub mod scroll;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

const HERO_CONTAINER_ID: &str = "hero-scroll";
const HERO_CANVAS_ID: &str = "hero-canvas";
const LOADING_ID: &str = "hero-loading";
const LOAD_ERROR_ID: &str = "hero-load-error";
const PROGRESS_BAR_ID: &str = "scroll-progress";
const SCROLL_HINT_ID: &str = "scroll-hint";
const OVERLAY_IDS: [&str; 4] = [
    "overlay-intro",
    "overlay-drivers",
    "overlay-battery",
    "overlay-cta",
];
const REVEAL_CLASS: &str = "reveal";
const DECOR_SEED: u64 = 42;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("varg-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_and_document().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let profile = Rc::new(Cell::new(events::detect_profile(&window)));
    events::wire_reduced_motion(&window, profile.clone());
    events::wire_menu_toggle(&document);

    let canvas = dom::canvas_by_id(&document, HERO_CANVAS_ID)?;
    dom::sync_canvas_backing_size(&canvas);
    let ctx = dom::context_2d(&canvas)?;
    let container = document
        .get_element_by_id(HERO_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{HERO_CONTAINER_ID}"))?;

    let images = match loader::preload_images(&loader::HERO_IMAGE_SOURCES).await {
        Ok(images) => images,
        Err(e) => {
            // The rest of the page still works without the animated hero.
            log::error!("{e}");
            dom::hide(&document, LOADING_ID);
            dom::show(&document, LOAD_ERROR_ID);
            return Ok(());
        }
    };
    dom::hide(&document, LOADING_ID);

    let overlay_els = OVERLAY_IDS
        .iter()
        .map(|id| dom::element_by_id(&document, id))
        .collect();
    let context = frame::FrameContext::new(
        canvas,
        ctx,
        container,
        images,
        overlay_els,
        dom::element_by_id(&document, PROGRESS_BAR_ID),
        dom::element_by_id(&document, SCROLL_HINT_ID),
        dom::elements_by_class(&document, REVEAL_CLASS),
        profile,
        DECOR_SEED,
    );
    let context = Rc::new(RefCell::new(context));
    events::wire_resize(&window, context.clone());
    frame::start_loop(context);
    Ok(())
}
