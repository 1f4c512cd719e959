use super::color::Rgb;

// Visual tuning for the ambient particle backdrop.

// Population
pub const PARTICLE_DENSITY: f32 = 0.05; // particles per CSS px of viewport width
pub const MAX_PARTICLES: usize = 100;

// Initial state
pub const INITIAL_SPEED: f32 = 0.15; // each velocity axis drawn from ±INITIAL_SPEED
pub const MIN_RADIUS: f32 = 1.0;
pub const MAX_RADIUS: f32 = 4.0;
pub const MIN_INITIAL_ALPHA: f32 = 0.2;
pub const MAX_INITIAL_ALPHA: f32 = 0.7;

// Motion
pub const BOUNCE_JITTER: f32 = 0.1; // added to a velocity axis after an edge bounce
pub const DRIFT_JITTER: f32 = 0.01; // added to both axes every tick
pub const VELOCITY_DAMPING: f32 = 0.99;

// Links between nearby particles
pub const LINK_DISTANCE: f32 = 150.0;
pub const LINK_MAX_ALPHA: f32 = 0.25;
pub const LINK_WIDTH: f32 = 1.5;

// Pointer influence
pub const POINTER_RADIUS: f32 = 200.0;
pub const POINTER_STRENGTH: f32 = 0.2;
pub const POINTER_ALPHA_GAIN: f32 = 0.1;

// Opacity envelope once the field is running
pub const ALPHA_FLOOR: f32 = 0.2;
pub const ALPHA_CEIL: f32 = 0.6;
pub const ALPHA_DECAY: f32 = 0.005; // per tick, outside the pointer radius

// Purple palette
pub const DEFAULT_PALETTE: [Rgb; 3] = [
    Rgb::new(0x93, 0x33, 0xEA),
    Rgb::new(0xA8, 0x55, 0xF7),
    Rgb::new(0x7E, 0x22, 0xCE),
];

// CSS opacity of the whole canvas element
pub const CANVAS_OPACITY: f32 = 0.7;

// Hard limits applied to runtime overrides
pub const PARTICLE_LIMIT: usize = 10_000;
pub const MAGNITUDE_LIMIT: f32 = 1.0e6; // speeds, jitters, radii, distances
