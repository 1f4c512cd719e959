pub mod color;
pub mod config;
pub mod constants;
pub mod field;
pub mod schedule;

pub use color::Rgb;
pub use config::FieldConfig;
pub use field::{ParticleField, Surface, Viewport};
pub use schedule::{FrameGate, FrameScheduler};
