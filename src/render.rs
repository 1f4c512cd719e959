use crate::core::{Rgb, Surface, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Surface` over a 2D canvas context.
///
/// The context transform is `scale(dpr, dpr)`, so every call takes viewport
/// (CSS) pixels and lands on device pixels.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d, viewport: Viewport) -> Self {
        let mut surface = Self { ctx, viewport };
        surface.configure(viewport);
        surface
    }

    /// Reset the transform for a new viewport. Setting the canvas size
    /// already resets it, but a same-size resize does not.
    pub fn configure(&mut self, viewport: Viewport) {
        let dpr = viewport.device_pixel_ratio as f64;
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.viewport = viewport;
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.css_rgba(alpha));
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb, alpha: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.css_rgba(alpha));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
