use crate::scene::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(&'static str),
    #[error("#{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("2d context unavailable on #{0}")]
    NoContext(&'static str),
}

#[inline]
pub fn window() -> Result<web::Window, MountError> {
    web::window().ok_or(MountError::NoWindow)
}

#[inline]
pub fn window_document() -> Result<web::Document, MountError> {
    window()?.document().ok_or(MountError::NoDocument)
}

/// Layout viewport in CSS pixels; falls back to the scene default if the
/// browser reports something non-numeric.
pub fn viewport(window: &web::Window) -> Viewport {
    let fallback = Viewport::default();
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback.width);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback.height);
    Viewport::new(w, h)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn element_by_id(
    document: &web::Document,
    id: &'static str,
) -> Result<web::Element, MountError> {
    document
        .get_element_by_id(id)
        .ok_or(MountError::MissingElement(id))
}

/// Look up a canvas and its 2D context.
pub fn canvas_2d(
    document: &web::Document,
    id: &'static str,
) -> Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d), MountError> {
    let canvas = element_by_id(document, id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(id))?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(MountError::NoContext(id))?;
    Ok((canvas, ctx))
}

/// Match the canvas backing store to the viewport. Setting either dimension
/// clears the canvas even when unchanged.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width.max(1.0) as u32);
    canvas.set_height(viewport.height.max(1.0) as u32);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}
