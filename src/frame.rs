use crate::constants::FRAME_STATS_WINDOW_SEC;
use crate::core::{FrameGate, FrameScheduler, ParticleField, Viewport};
use crate::render::CanvasSurface;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub surface: CanvasSurface,
    pub rng: StdRng,
    pub stats: FrameStats,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let started = Instant::now();
        self.field.tick(&mut self.surface, &mut self.rng);
        self.stats.record(started, self.field.len());
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.surface.configure(viewport);
        self.field.resize(viewport, &mut self.rng);
    }
}

/// Rolling average of tick cost, reported once per window.
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
    busy_sec: f32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
            busy_sec: 0.0,
        }
    }
}

impl FrameStats {
    fn record(&mut self, tick_started: Instant, particles: usize) {
        self.frames += 1;
        self.busy_sec += tick_started.elapsed().as_secs_f32();
        let window = self.window_start.elapsed().as_secs_f32();
        if window >= FRAME_STATS_WINDOW_SEC {
            log::debug!(
                "[frame] {:.1} fps, {:.3} ms/tick, {} particles",
                self.frames as f32 / window,
                1000.0 * self.busy_sec / self.frames as f32,
                particles
            );
            *self = Self::default();
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `FrameScheduler` backed by `requestAnimationFrame`.
pub struct RafScheduler {
    tick: TickClosure,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self) -> Option<i32> {
        let window = web::window()?;
        let tick = self.tick.borrow();
        let cb = tick.as_ref()?;
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(handle);
        }
    }
}

/// Handle to the requestAnimationFrame loop. Clones share the same loop.
#[derive(Clone)]
pub struct FrameLoop {
    gate: Rc<RefCell<FrameGate<RafScheduler>>>,
    tick: TickClosure,
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.gate.borrow().is_running()
    }

    /// Cancel the pending frame and release the tick closure. Idempotent;
    /// must not be called from inside the tick itself.
    pub fn stop(&self) {
        let was_running = self.gate.borrow_mut().stop();
        self.tick.borrow_mut().take();
        if was_running {
            log::info!("[frame] loop stopped");
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let gate = Rc::new(RefCell::new(FrameGate::new(RafScheduler { tick: tick.clone() })));

    let gate_tick = gate.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        gate_tick
            .borrow_mut()
            .fire(|| frame_ctx.borrow_mut().frame());
    }) as Box<dyn FnMut()>));

    if !gate.borrow_mut().start() {
        log::warn!("[frame] could not schedule the first frame");
    }
    FrameLoop { gate, tick }
}
