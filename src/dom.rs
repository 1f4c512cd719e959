use crate::constants::CANVAS_Z_INDEX;
use crate::core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current `innerWidth` x `innerHeight` and `devicePixelRatio`.
pub fn viewport(window: &web::Window) -> Viewport {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(
        px(window.inner_width()),
        px(window.inner_height()),
        window.device_pixel_ratio() as f32,
    )
}

pub fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Backing store = viewport * devicePixelRatio; CSS size = viewport.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    let (w_px, h_px) = viewport.surface_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", viewport.width));
    let _ = style.set_property("height", &format!("{}px", viewport.height));
}

/// Fixed, full-viewport, click-through backdrop.
pub fn apply_backdrop_style(canvas: &web::HtmlCanvasElement, opacity: f32) {
    let style = canvas.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("inset", "0");
    let _ = style.set_property("z-index", CANVAS_Z_INDEX);
    let _ = style.set_property("pointer-events", "none");
    let _ = style.set_property("background", "transparent");
    let _ = style.set_property("opacity", &format!("{}", opacity.clamp(0.0, 1.0)));
}
