// Host-side tests for the particle field simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod particles {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod field {
        include!("../src/core/field.rs");
    }
}

use glam::Vec2;
use particles::color::Rgb;
use particles::config::FieldConfig;
use particles::constants::*;
use particles::field::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct Recording {
    clears: usize,
    circles: Vec<(Vec2, f32, Rgb, f32)>,
    lines: Vec<(Vec2, Vec2, f32, Rgb, f32)>,
}

impl Surface for Recording {
    fn clear(&mut self) {
        self.clears += 1;
        self.circles.clear();
        self.lines.clear();
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.circles.push((center, radius, color, alpha));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb, alpha: f32) {
        self.lines.push((from, to, width, color, alpha));
    }
}

fn make_field(width: f32, height: f32, seed: u64) -> (ParticleField, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let field = ParticleField::new(
        Viewport::new(width, height, 1.0),
        FieldConfig::default(),
        &mut rng,
    );
    (field, rng)
}

// Park every particle at `positions` with zero velocity.
fn place(field: &mut ParticleField, positions: &[Vec2], alpha: f32) {
    assert_eq!(field.len(), positions.len());
    for (p, pos) in field.particles_mut().iter_mut().zip(positions) {
        p.pos = *pos;
        p.vel = Vec2::ZERO;
        p.alpha = alpha;
    }
}

#[test]
fn particle_count_follows_width_formula() {
    let cfg = FieldConfig::default();
    assert_eq!(particle_count(0.0, &cfg), 0);
    assert_eq!(particle_count(-250.0, &cfg), 0);
    assert_eq!(particle_count(f32::NAN, &cfg), 0);
    assert_eq!(particle_count(19.0, &cfg), 0);
    assert_eq!(particle_count(20.0, &cfg), 1);
    assert_eq!(particle_count(1000.0, &cfg), 50);
    assert_eq!(particle_count(1999.0, &cfg), 99);
    assert_eq!(particle_count(2000.0, &cfg), 100);
    assert_eq!(particle_count(7680.0, &cfg), MAX_PARTICLES);
}

#[test]
fn generated_particles_respect_initial_ranges() {
    for seed in 0..20 {
        let (field, _) = make_field(1440.0, 900.0, seed);
        assert_eq!(field.len(), 72);
        for p in field.particles() {
            assert!((0.0..1440.0).contains(&p.pos.x), "x out of range: {}", p.pos.x);
            assert!((0.0..900.0).contains(&p.pos.y), "y out of range: {}", p.pos.y);
            assert!(p.vel.x.abs() <= INITIAL_SPEED);
            assert!(p.vel.y.abs() <= INITIAL_SPEED);
            assert!(p.radius >= MIN_RADIUS && p.radius <= MAX_RADIUS);
            assert!(p.alpha >= MIN_INITIAL_ALPHA && p.alpha <= MAX_INITIAL_ALPHA);
            assert!(DEFAULT_PALETTE.contains(&p.color));
        }
    }
}

#[test]
fn generation_uses_whole_palette() {
    let (field, _) = make_field(2000.0, 1000.0, 7);
    for c in DEFAULT_PALETTE {
        assert!(
            field.particles().iter().any(|p| p.color == c),
            "palette color {} never chosen",
            c.to_hex()
        );
    }
}

#[test]
fn opacity_stays_within_envelope_over_many_ticks() {
    let (mut field, mut rng) = make_field(1280.0, 720.0, 3);
    let mut surface = Recording::default();
    for t in 0..600 {
        // sweep the pointer across the field so some ticks brighten
        let x = (t as f32 * 4.0) % 1280.0;
        field.set_pointer(Vec2::new(x, 360.0));
        field.tick(&mut surface, &mut rng);
        for p in field.particles() {
            assert!(
                p.alpha >= ALPHA_FLOOR && p.alpha <= ALPHA_CEIL,
                "tick {t}: alpha {} escaped envelope",
                p.alpha
            );
        }
    }
}

#[test]
fn tick_clears_and_draws_each_particle_once() {
    let (mut field, mut rng) = make_field(800.0, 600.0, 11);
    let mut surface = Recording::default();
    field.tick(&mut surface, &mut rng);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.circles.len(), field.len());
    for ((center, radius, color, _), p) in surface.circles.iter().zip(field.particles()) {
        assert_eq!(*center, p.pos);
        assert_eq!(*radius, p.radius);
        assert_eq!(*color, p.color);
    }
}

#[test]
fn empty_field_only_clears() {
    let (mut field, mut rng) = make_field(0.0, 600.0, 1);
    let mut surface = Recording::default();
    field.tick(&mut surface, &mut rng);
    assert!(field.is_empty());
    assert_eq!(surface.clears, 1);
    assert!(surface.circles.is_empty());
    assert!(surface.lines.is_empty());
}

#[test]
fn crossing_left_or_right_edge_flips_horizontal_velocity() {
    let (mut field, mut rng) = make_field(20.0, 600.0, 5);
    let mut surface = Recording::default();

    place(&mut field, &[Vec2::new(0.5, 300.0)], 0.4);
    field.particles_mut()[0].vel = Vec2::new(-1.0, 0.0);
    field.tick(&mut surface, &mut rng);
    assert!(field.particles()[0].pos.x < 0.0);
    assert!(field.particles()[0].vel.x > 0.0);

    place(&mut field, &[Vec2::new(19.5, 300.0)], 0.4);
    field.particles_mut()[0].vel = Vec2::new(1.0, 0.0);
    field.tick(&mut surface, &mut rng);
    assert!(field.particles()[0].pos.x > 20.0);
    assert!(field.particles()[0].vel.x < 0.0);
}

#[test]
fn crossing_top_or_bottom_edge_flips_vertical_velocity() {
    let (mut field, mut rng) = make_field(20.0, 100.0, 9);
    let mut surface = Recording::default();

    place(&mut field, &[Vec2::new(10.0, 0.2)], 0.4);
    field.particles_mut()[0].vel = Vec2::new(0.0, -1.0);
    field.tick(&mut surface, &mut rng);
    assert!(field.particles()[0].vel.y > 0.0);

    place(&mut field, &[Vec2::new(10.0, 99.8)], 0.4);
    field.particles_mut()[0].vel = Vec2::new(0.0, 1.0);
    field.tick(&mut surface, &mut rng);
    assert!(field.particles()[0].vel.y < 0.0);
}

#[test]
fn interior_motion_is_damped_without_bounce() {
    let (mut field, mut rng) = make_field(20.0, 600.0, 2);
    let mut surface = Recording::default();
    place(&mut field, &[Vec2::new(10.0, 300.0)], 0.4);
    field.particles_mut()[0].vel = Vec2::new(1.0, 1.0);
    field.tick(&mut surface, &mut rng);
    let p = &field.particles()[0];
    assert_eq!(p.pos, Vec2::new(11.0, 301.0));
    // 0.99 * (1 ± 0.01)
    assert!(p.vel.x > 0.979 && p.vel.x < 1.0);
    assert!(p.vel.y > 0.979 && p.vel.y < 1.0);
}

#[test]
fn link_opacity_threshold_and_scale() {
    let cfg = FieldConfig::default();
    assert_eq!(link_opacity(0.0, &cfg), Some(LINK_MAX_ALPHA));
    assert_eq!(link_opacity(LINK_DISTANCE, &cfg), None);
    assert_eq!(link_opacity(LINK_DISTANCE + 0.5, &cfg), None);
    let half = link_opacity(LINK_DISTANCE / 2.0, &cfg).unwrap();
    assert!((half - LINK_MAX_ALPHA / 2.0).abs() < 1e-6);
}

#[test]
fn nearby_pair_is_linked_in_first_particles_color() {
    let (mut field, mut rng) = make_field(40.0, 400.0, 13);
    let mut surface = Recording::default();
    place(&mut field, &[Vec2::new(10.0, 50.0), Vec2::new(10.0, 60.0)], 0.4);
    let first_color = field.particles()[0].color;

    field.tick(&mut surface, &mut rng);
    assert_eq!(surface.lines.len(), 1);
    let (from, to, width, color, alpha) = surface.lines[0];
    assert_eq!(from, Vec2::new(10.0, 50.0));
    assert_eq!(to, Vec2::new(10.0, 60.0));
    assert_eq!(width, LINK_WIDTH);
    assert_eq!(color, first_color);
    let expected = (1.0 - 10.0 / LINK_DISTANCE) * LINK_MAX_ALPHA;
    assert!((alpha - expected).abs() < 1e-5);
}

#[test]
fn distant_pair_is_not_linked() {
    let (mut field, mut rng) = make_field(40.0, 400.0, 13);
    let mut surface = Recording::default();
    place(&mut field, &[Vec2::new(10.0, 50.0), Vec2::new(10.0, 200.0)], 0.4);
    field.tick(&mut surface, &mut rng);
    assert!(surface.lines.is_empty());

    place(&mut field, &[Vec2::new(10.0, 50.0), Vec2::new(10.0, 350.0)], 0.4);
    field.tick(&mut surface, &mut rng);
    assert!(surface.lines.is_empty());
}

#[test]
fn pointer_force_is_full_at_pointer_and_zero_at_radius() {
    let cfg = FieldConfig::default();
    assert_eq!(pointer_force(0.0, &cfg), 1.0);
    assert_eq!(pointer_force(POINTER_RADIUS, &cfg), 0.0);
    assert_eq!(pointer_force(POINTER_RADIUS * 3.0, &cfg), 0.0);
    assert!((pointer_force(POINTER_RADIUS / 2.0, &cfg) - 0.5).abs() < 1e-6);
}

#[test]
fn particle_under_pointer_is_pushed_and_brightened() {
    let (mut field, mut rng) = make_field(20.0, 600.0, 17);
    let mut surface = Recording::default();
    let at = Vec2::new(10.0, 300.0);
    place(&mut field, &[at], 0.3);
    field.set_pointer(at);

    field.tick(&mut surface, &mut rng);
    let p = &field.particles()[0];
    // full-strength push along +x when the particle sits on the pointer
    assert!((p.vel.x - POINTER_STRENGTH).abs() < 0.011);
    assert!(p.vel.y.abs() < 0.011);
    assert!((p.alpha - (0.3 + POINTER_ALPHA_GAIN)).abs() < 1e-6);
}

#[test]
fn pointer_pushes_away_from_itself() {
    let (mut field, mut rng) = make_field(20.0, 600.0, 19);
    let mut surface = Recording::default();
    place(&mut field, &[Vec2::new(10.0, 300.0)], 0.3);
    field.set_pointer(Vec2::new(10.0, 400.0));

    field.tick(&mut surface, &mut rng);
    let p = &field.particles()[0];
    // pointer is below: push is upward with force 0.5
    assert!((p.vel.y + 0.5 * POINTER_STRENGTH).abs() < 0.011);
    assert!(p.vel.x.abs() < 0.011);
}

#[test]
fn pointer_brightening_is_capped() {
    let (mut field, mut rng) = make_field(20.0, 600.0, 23);
    let mut surface = Recording::default();
    let at = Vec2::new(10.0, 300.0);
    place(&mut field, &[at], 0.58);
    field.set_pointer(at);
    field.tick(&mut surface, &mut rng);
    assert_eq!(field.particles()[0].alpha, ALPHA_CEIL);
}

#[test]
fn particle_outside_radius_is_untouched_and_fades() {
    let (mut field, mut rng) = make_field(20.0, 600.0, 29);
    let mut surface = Recording::default();
    place(&mut field, &[Vec2::new(10.0, 50.0)], 0.4);
    field.set_pointer(Vec2::new(10.0, 50.0 + POINTER_RADIUS));

    field.tick(&mut surface, &mut rng);
    let p = &field.particles()[0];
    assert!(p.vel.length() < 0.015);
    assert!((p.alpha - (0.4 - ALPHA_DECAY)).abs() < 1e-6);
}

#[test]
fn without_pointer_every_particle_fades_to_floor() {
    let (mut field, mut rng) = make_field(1000.0, 800.0, 31);
    let mut surface = Recording::default();
    assert!(field.pointer().is_none());
    let before: Vec<f32> = field.particles().iter().map(|p| p.alpha).collect();

    field.tick(&mut surface, &mut rng);
    for (p, a) in field.particles().iter().zip(&before) {
        let expected = (a - ALPHA_DECAY).clamp(ALPHA_FLOOR, ALPHA_CEIL);
        assert!((p.alpha - expected).abs() < 1e-6);
    }

    for _ in 0..200 {
        field.tick(&mut surface, &mut rng);
    }
    assert!(field.particles().iter().all(|p| p.alpha == ALPHA_FLOOR));
}

#[test]
fn resize_regenerates_whole_set() {
    let (mut field, mut rng) = make_field(1000.0, 800.0, 37);
    assert_eq!(field.len(), 50);
    field.set_pointer(Vec2::new(100.0, 100.0));

    let small = Viewport::new(400.0, 300.0, 3.0);
    field.resize(small, &mut rng);
    assert_eq!(field.len(), 20);
    assert_eq!(field.viewport(), small);
    assert_eq!(field.viewport().surface_size(), (1200, 900));
    for p in field.particles() {
        assert!(p.pos.x < 400.0 && p.pos.y < 300.0);
    }

    let before = field.particles().to_vec();
    field.resize(small, &mut rng);
    assert_eq!(field.len(), before.len());
    assert_ne!(field.particles(), before.as_slice());
    assert_eq!(field.pointer(), Some(Vec2::new(100.0, 100.0)));
}

#[test]
fn surface_size_scales_by_device_pixel_ratio() {
    assert_eq!(Viewport::new(1280.5, 720.0, 1.5).surface_size(), (1920, 1080));
    assert_eq!(Viewport::new(1920.0, 1080.0, 1.0).surface_size(), (1920, 1080));
    assert_eq!(Viewport::new(390.0, 844.0, 3.0).surface_size(), (1170, 2532));
}

#[test]
fn viewport_sanitizes_degenerate_input() {
    let v = Viewport::new(f32::NAN, -3.0, 0.0);
    assert_eq!(v.width, 0.0);
    assert_eq!(v.height, 0.0);
    assert_eq!(v.device_pixel_ratio, 1.0);
    assert_eq!(v.surface_size(), (1, 1));
    assert_eq!(Viewport::new(10.0, 10.0, f32::INFINITY).device_pixel_ratio, 1.0);
}

#[test]
fn custom_config_caps_population_and_palette() {
    let mut rng = StdRng::seed_from_u64(41);
    let only = Rgb::new(1, 2, 3);
    let cfg = FieldConfig {
        max_particles: 12,
        palette: vec![only],
        ..FieldConfig::default()
    };
    let field = ParticleField::new(Viewport::new(3000.0, 1000.0, 1.0), cfg, &mut rng);
    assert_eq!(field.len(), 12);
    assert!(field.particles().iter().all(|p| p.color == only));
}

#[test]
fn same_seed_same_field() {
    let (a, _) = make_field(1200.0, 800.0, 99);
    let (b, _) = make_field(1200.0, 800.0, 99);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn extreme_config_generates_and_ticks_without_panicking() {
    let mut rng = StdRng::seed_from_u64(43);
    let cfg = FieldConfig {
        initial_speed: 3.0e38,
        max_radius: 1e300_f64 as f32,
        bounce_jitter: f32::INFINITY,
        drift_jitter: 3.0e38,
        alpha_floor: 0.9,
        alpha_ceil: 0.1,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(Viewport::new(800.0, 600.0, 1.0), cfg, &mut rng);
    assert_eq!(field.len(), 40);
    assert!(field.config().alpha_floor <= field.config().alpha_ceil);

    let mut surface = Recording::default();
    field.set_pointer(Vec2::new(400.0, 300.0));
    for _ in 0..10 {
        field.tick(&mut surface, &mut rng);
    }
    for p in field.particles() {
        assert!(p.radius.is_finite());
        assert!(p.alpha >= 0.1 && p.alpha <= 0.9);
    }
}
