use super::Listener;
use crate::frame::FrameContext;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in viewport coordinates; the next tick reads it.
pub fn wire_pointermove(
    window: &web::Window,
    frame_ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Listener> {
    Listener::attach(window.clone().into(), "mousemove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            frame_ctx.borrow_mut().field.set_pointer(pos);
        }
    })
}
