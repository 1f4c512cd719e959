use super::Listener;
use crate::dom;
use crate::frame::{FrameContext, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct ResizeWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
    pub frame_loop: FrameLoop,
}

/// Re-sync the canvas and regenerate the field on every window resize.
///
/// Losing the 2D context here stops the loop for good.
pub fn wire_resize(w: ResizeWiring) -> anyhow::Result<Listener> {
    let ResizeWiring {
        window,
        canvas,
        frame_ctx,
        frame_loop,
    } = w;
    let target = window.clone().into();
    Listener::attach(target, "resize", move |_ev: web::Event| {
        if !frame_loop.is_running() {
            return;
        }
        if let Err(e) = dom::context_2d(&canvas) {
            log::warn!("[resize] drawing surface lost, stopping: {:?}", e);
            frame_loop.stop();
            return;
        }
        let viewport = dom::viewport(&window);
        dom::sync_canvas_backing_size(&canvas, viewport);
        let mut ctx = frame_ctx.borrow_mut();
        ctx.resize(viewport);
        log::debug!(
            "[resize] {}x{} @{} -> {} particles",
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio,
            ctx.field.len()
        );
    })
}
