#![cfg(target_arch = "wasm32")]
use crate::core::{FieldConfig, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-field loaded");
    Ok(())
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").into()
}

// Everything a mounted background owns. Dropping it detaches the listeners;
// `FrameLoop::stop` breaks the tick closure's self-reference.
struct Mounted {
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    frame_loop: frame::FrameLoop,
    _pointer: events::Listener,
    _resize: events::Listener,
}

/// Animated particle backdrop bound to one canvas.
///
/// Mounting never fails from JS's point of view: if the canvas or its 2D
/// context is unavailable the handle is inert and nothing is drawn.
#[wasm_bindgen]
pub struct ParticleBackground {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Start animating `canvas`. `config` is an optional object of overrides
    /// (`maxParticles`, `linkDistance`, `pointerRadius`, `palette`, ...).
    pub fn mount(canvas: web::HtmlCanvasElement, config: JsValue) -> ParticleBackground {
        let config = FieldConfig::from_js(&config);
        let mounted = match try_mount(canvas, config) {
            Ok(m) => Some(m),
            Err(e) => {
                log::warn!("[mount] particle background disabled: {:?}", e);
                None
            }
        };
        ParticleBackground { mounted }
    }

    /// Like `mount`, looking the canvas up by element id (defaults to
    /// `particle-background`).
    #[wasm_bindgen(js_name = mountById)]
    pub fn mount_by_id(id: Option<String>, config: JsValue) -> ParticleBackground {
        let id = id.unwrap_or_else(|| constants::DEFAULT_CANVAS_ID.to_string());
        match dom::canvas_by_id(&id) {
            Ok(canvas) => Self::mount(canvas, config),
            Err(e) => {
                log::warn!("[mount] particle background disabled: {:?}", e);
                ParticleBackground { mounted: None }
            }
        }
    }

    /// Detach listeners, cancel the pending frame and drop the particles.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.frame_loop.stop();
            log::info!("[mount] particle background unmounted");
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.frame_loop.is_running())
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map(|m| m.frame_ctx.borrow().field.len())
            .unwrap_or(0)
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn try_mount(canvas: web::HtmlCanvasElement, config: FieldConfig) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let ctx_2d = dom::context_2d(&canvas)?;

    let viewport = dom::viewport(&window);
    dom::apply_backdrop_style(&canvas, config.canvas_opacity);
    dom::sync_canvas_backing_size(&canvas, viewport);

    let mut rng = StdRng::from_entropy();
    let field = ParticleField::new(viewport, config, &mut rng);
    log::info!(
        "[mount] {}x{} @{} -> {} particles",
        viewport.width,
        viewport.height,
        viewport.device_pixel_ratio,
        field.len()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        surface: render::CanvasSurface::new(ctx_2d, viewport),
        rng,
        stats: frame::FrameStats::default(),
    }));

    let pointer = events::wire_pointermove(&window, frame_ctx.clone())?;
    let frame_loop = frame::start_loop(frame_ctx.clone());
    let resize = match events::wire_resize(events::ResizeWiring {
        window,
        canvas,
        frame_ctx: frame_ctx.clone(),
        frame_loop: frame_loop.clone(),
    }) {
        Ok(l) => l,
        Err(e) => {
            frame_loop.stop();
            return Err(e);
        }
    };

    Ok(Mounted {
        frame_ctx,
        frame_loop,
        _pointer: pointer,
        _resize: resize,
    })
}
