// Browser-side tuning for the frame loop and canvas element.
// Simulation tuning lives in `core/constants.rs`.

// Frame statistics are logged (at debug level) once per window
pub const FRAME_STATS_WINDOW_SEC: f32 = 5.0;

// The backdrop sits under the page content
pub const CANVAS_Z_INDEX: &str = "0";

// Element id `ParticleBackground::mount_by_id` falls back to
pub const DEFAULT_CANVAS_ID: &str = "particle-background";
