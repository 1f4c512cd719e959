use super::color::Rgb;
use super::constants::*;

/// Every tuning value the particle field reads.
///
/// `Default` mirrors the constants in `constants.rs`; the web front-end may
/// overlay individual fields from a JS object at mount time.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub density: f32,
    pub max_particles: usize,
    pub initial_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_initial_alpha: f32,
    pub max_initial_alpha: f32,
    pub bounce_jitter: f32,
    pub drift_jitter: f32,
    pub damping: f32,
    pub link_distance: f32,
    pub link_alpha: f32,
    pub link_width: f32,
    pub pointer_radius: f32,
    pub pointer_strength: f32,
    pub pointer_alpha_gain: f32,
    pub alpha_floor: f32,
    pub alpha_ceil: f32,
    pub alpha_decay: f32,
    pub palette: Vec<Rgb>,
    pub canvas_opacity: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density: PARTICLE_DENSITY,
            max_particles: MAX_PARTICLES,
            initial_speed: INITIAL_SPEED,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            min_initial_alpha: MIN_INITIAL_ALPHA,
            max_initial_alpha: MAX_INITIAL_ALPHA,
            bounce_jitter: BOUNCE_JITTER,
            drift_jitter: DRIFT_JITTER,
            damping: VELOCITY_DAMPING,
            link_distance: LINK_DISTANCE,
            link_alpha: LINK_MAX_ALPHA,
            link_width: LINK_WIDTH,
            pointer_radius: POINTER_RADIUS,
            pointer_strength: POINTER_STRENGTH,
            pointer_alpha_gain: POINTER_ALPHA_GAIN,
            alpha_floor: ALPHA_FLOOR,
            alpha_ceil: ALPHA_CEIL,
            alpha_decay: ALPHA_DECAY,
            palette: DEFAULT_PALETTE.to_vec(),
            canvas_opacity: CANVAS_OPACITY,
        }
    }
}

impl FieldConfig {
    /// Palette entry `index` modulo the palette length, falling back to the
    /// default palette when the configured one is empty.
    pub fn palette_color(&self, index: usize) -> Rgb {
        if self.palette.is_empty() {
            DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
        } else {
            self.palette[index % self.palette.len()]
        }
    }

    pub fn palette_len(&self) -> usize {
        if self.palette.is_empty() {
            DEFAULT_PALETTE.len()
        } else {
            self.palette.len()
        }
    }

    /// Clamp every field into a range the simulation can sample from.
    ///
    /// Non-finite values fall back to the default; magnitudes are capped at
    /// `MAGNITUDE_LIMIT`, fractions at [0, 1], and inverted min/max pairs
    /// are swapped.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let mag = |v: f32, fallback: f32| clamp_or(v, 0.0, MAGNITUDE_LIMIT, fallback);
        let unit = |v: f32, fallback: f32| clamp_or(v, 0.0, 1.0, fallback);

        let (min_radius, max_radius) = ordered(
            mag(self.min_radius, d.min_radius),
            mag(self.max_radius, d.max_radius),
        );
        let (min_initial_alpha, max_initial_alpha) = ordered(
            unit(self.min_initial_alpha, d.min_initial_alpha),
            unit(self.max_initial_alpha, d.max_initial_alpha),
        );
        let (alpha_floor, alpha_ceil) = ordered(
            unit(self.alpha_floor, d.alpha_floor),
            unit(self.alpha_ceil, d.alpha_ceil),
        );

        Self {
            density: mag(self.density, d.density),
            max_particles: self.max_particles.min(PARTICLE_LIMIT),
            initial_speed: mag(self.initial_speed, d.initial_speed),
            min_radius,
            max_radius,
            min_initial_alpha,
            max_initial_alpha,
            bounce_jitter: mag(self.bounce_jitter, d.bounce_jitter),
            drift_jitter: mag(self.drift_jitter, d.drift_jitter),
            damping: unit(self.damping, d.damping),
            link_distance: mag(self.link_distance, d.link_distance),
            link_alpha: unit(self.link_alpha, d.link_alpha),
            link_width: mag(self.link_width, d.link_width),
            pointer_radius: mag(self.pointer_radius, d.pointer_radius),
            pointer_strength: mag(self.pointer_strength, d.pointer_strength),
            pointer_alpha_gain: mag(self.pointer_alpha_gain, d.pointer_alpha_gain),
            alpha_floor,
            alpha_ceil,
            alpha_decay: mag(self.alpha_decay, d.alpha_decay),
            palette: self.palette,
            canvas_opacity: unit(self.canvas_opacity, d.canvas_opacity),
        }
    }
}

#[inline]
fn clamp_or(v: f32, lo: f32, hi: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v.clamp(lo, hi)
    } else {
        fallback
    }
}

#[inline]
fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(target_arch = "wasm32")]
impl FieldConfig {
    /// Overlay fields from a plain JS object with camelCase keys.
    ///
    /// `undefined`/`null` and non-objects yield the defaults. Keys that are
    /// missing or not numbers are left untouched; the result is sanitized.
    pub fn from_js(value: &wasm_bindgen::JsValue) -> Self {
        let mut config = Self::default();
        if !value.is_object() {
            return config;
        }

        macro_rules! extract {
            ($field:ident, $key:expr, $ty:ty) => {
                if let Ok(v) = js_sys::Reflect::get(value, &$key.into()) {
                    if let Some(num) = v.as_f64().filter(|n| !n.is_nan()) {
                        config.$field = num as $ty;
                    }
                }
            };
        }

        extract!(density, "density", f32);
        extract!(max_particles, "maxParticles", usize);
        extract!(initial_speed, "initialSpeed", f32);
        extract!(min_radius, "minRadius", f32);
        extract!(max_radius, "maxRadius", f32);
        extract!(min_initial_alpha, "minInitialAlpha", f32);
        extract!(max_initial_alpha, "maxInitialAlpha", f32);
        extract!(bounce_jitter, "bounceJitter", f32);
        extract!(drift_jitter, "driftJitter", f32);
        extract!(damping, "damping", f32);
        extract!(link_distance, "linkDistance", f32);
        extract!(link_alpha, "linkAlpha", f32);
        extract!(link_width, "linkWidth", f32);
        extract!(pointer_radius, "pointerRadius", f32);
        extract!(pointer_strength, "pointerStrength", f32);
        extract!(pointer_alpha_gain, "pointerAlphaGain", f32);
        extract!(alpha_floor, "alphaFloor", f32);
        extract!(alpha_ceil, "alphaCeil", f32);
        extract!(alpha_decay, "alphaDecay", f32);
        extract!(canvas_opacity, "canvasOpacity", f32);

        if let Ok(palette_val) = js_sys::Reflect::get(value, &"palette".into()) {
            if js_sys::Array::is_array(&palette_val) {
                let arr: js_sys::Array = palette_val.into();
                let colors: Vec<Rgb> = arr
                    .iter()
                    .filter_map(|c| c.as_string())
                    .filter_map(|s| Rgb::from_hex(&s))
                    .collect();
                if !colors.is_empty() {
                    config.palette = colors;
                }
            }
        }

        config.sanitized()
    }
}
