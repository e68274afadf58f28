//! Hero image preloading.
//!
//! All three product shots are decoded before the first frame so the
//! crossfades never pop in a half-loaded image. Failure is non-fatal for the
//! page: the caller hides the canvas stage and shows a static fallback.

use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub const HERO_IMAGE_SOURCES: [&str; 3] = [
    "assets/varg-x-hero.png",
    "assets/varg-x-profile.png",
    "assets/varg-x-exploded.png",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not create an image element")]
    Element,
    #[error("one of the hero images failed to load ({sources})")]
    Failed { sources: String },
}

/// Kick off all image loads at once and wait for every one to finish.
pub async fn preload_images(sources: &[&str]) -> Result<Vec<web::HtmlImageElement>, LoadError> {
    let mut images = Vec::with_capacity(sources.len());
    let pending = js_sys::Array::new();
    for src in sources {
        let img = web::HtmlImageElement::new().map_err(|_| LoadError::Element)?;
        let loaded = js_sys::Promise::new(&mut |resolve, reject| {
            img.set_onload(Some(&resolve));
            img.set_onerror(Some(&reject));
        });
        img.set_src(src);
        pending.push(&loaded);
        images.push(img);
    }
    JsFuture::from(js_sys::Promise::all(&pending))
        .await
        .map_err(|_| LoadError::Failed {
            sources: sources.join(", "),
        })?;
    log::info!("preloaded {} hero images", images.len());
    Ok(images)
}
