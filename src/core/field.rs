use super::color::Rgb;
use super::config::FieldConfig;
use glam::Vec2;
use rand::Rng;

// Particle field simulation. Platform-free: drawing goes through `Surface`,
// randomness through any `rand::Rng`.

/// Drawing operations the field issues each tick, in viewport pixels.
pub trait Surface {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb, alpha: f32);
}

/// Viewport size in CSS pixels plus the display's device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    /// Non-finite or negative sizes become 0; a missing ratio becomes 1.
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let sane = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: sane(width),
            height: sane(height),
            device_pixel_ratio: dpr,
        }
    }

    /// Backing-store size in device pixels, at least 1x1.
    pub fn surface_size(&self) -> (u32, u32) {
        let w = (self.width * self.device_pixel_ratio).floor() as u32;
        let h = (self.height * self.device_pixel_ratio).floor() as u32;
        (w.max(1), h.max(1))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// `min(floor(width * density), max_particles)`; 0 for degenerate widths.
pub fn particle_count(viewport_width: f32, config: &FieldConfig) -> usize {
    if !viewport_width.is_finite() || viewport_width <= 0.0 || config.density <= 0.0 {
        return 0;
    }
    let n = (f64::from(viewport_width) * f64::from(config.density)).floor();
    (n as usize).min(config.max_particles)
}

/// Line opacity for two particles `distance` apart, or `None` when they are
/// too far apart to be linked.
pub fn link_opacity(distance: f32, config: &FieldConfig) -> Option<f32> {
    (distance < config.link_distance)
        .then(|| (1.0 - distance / config.link_distance) * config.link_alpha)
}

/// Proximity factor in (0, 1] inside the pointer radius, 0 outside.
pub fn pointer_force(distance: f32, config: &FieldConfig) -> f32 {
    if distance < config.pointer_radius {
        1.0 - distance / config.pointer_radius
    } else {
        0.0
    }
}

#[inline]
fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo && (hi - lo).is_finite() {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

#[inline]
fn jitter<R: Rng>(rng: &mut R, amplitude: f32) -> f32 {
    let a = amplitude.abs();
    uniform(rng, -a, a)
}

pub struct ParticleField {
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
}

impl ParticleField {
    pub fn new<R: Rng>(viewport: Viewport, config: FieldConfig, rng: &mut R) -> Self {
        let mut field = Self {
            config: config.sanitized(),
            viewport,
            particles: Vec::new(),
            // unknown until the first pointer move; nothing is attracted meanwhile
            pointer: None,
        };
        field.generate(rng);
        field
    }

    /// Replace the whole particle set using the current viewport.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) {
        let count = particle_count(self.viewport.width, &self.config);
        let cfg = &self.config;
        let (w, h) = (self.viewport.width, self.viewport.height);
        self.particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(uniform(rng, 0.0, w), uniform(rng, 0.0, h)),
                vel: Vec2::new(
                    jitter(rng, cfg.initial_speed),
                    jitter(rng, cfg.initial_speed),
                ),
                radius: uniform(rng, cfg.min_radius, cfg.max_radius),
                color: cfg.palette_color(rng.gen_range(0..cfg.palette_len())),
                alpha: uniform(rng, cfg.min_initial_alpha, cfg.max_initial_alpha),
            })
            .collect();
    }

    /// New viewport: the old particles are discarded, not rescaled.
    pub fn resize<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        self.viewport = viewport;
        self.generate(rng);
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance one frame and draw it onto `surface`.
    pub fn tick<S, R>(&mut self, surface: &mut S, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        surface.clear();
        self.step_particles(surface, rng);
        self.link_and_attract(surface);
    }

    fn step_particles<S, R>(&mut self, surface: &mut S, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        let cfg = &self.config;
        let (w, h) = (self.viewport.width, self.viewport.height);
        for p in self.particles.iter_mut() {
            p.pos += p.vel;

            if p.pos.x < 0.0 || p.pos.x > w {
                p.vel.x = -p.vel.x + jitter(rng, cfg.bounce_jitter);
            }
            if p.pos.y < 0.0 || p.pos.y > h {
                p.vel.y = -p.vel.y + jitter(rng, cfg.bounce_jitter);
            }

            p.vel.x += jitter(rng, cfg.drift_jitter);
            p.vel.y += jitter(rng, cfg.drift_jitter);
            p.vel *= cfg.damping;

            surface.fill_circle(p.pos, p.radius, p.color, p.alpha);
        }
    }

    // O(n^2) over unordered pairs; n is capped by `max_particles`.
    fn link_and_attract<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let cfg = &self.config;
        let n = self.particles.len();
        for i in 0..n {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let p = &mut head[i];

            for q in tail.iter() {
                let d = p.pos.distance(q.pos);
                if let Some(alpha) = link_opacity(d, cfg) {
                    surface.stroke_line(p.pos, q.pos, cfg.link_width, p.color, alpha);
                }
            }

            let force = self
                .pointer
                .map(|m| (m, pointer_force(p.pos.distance(m), cfg)))
                .filter(|&(_, f)| f > 0.0);
            match force {
                Some((m, f)) => {
                    let away = (p.pos - m).try_normalize().unwrap_or(Vec2::X);
                    p.vel += away * f * cfg.pointer_strength;
                    p.alpha = (p.alpha + f * cfg.pointer_alpha_gain).min(cfg.alpha_ceil);
                }
                None => {
                    p.alpha = (p.alpha - cfg.alpha_decay).max(cfg.alpha_floor);
                }
            }
            p.alpha = p.alpha.max(cfg.alpha_floor).min(cfg.alpha_ceil);
        }
    }
}
