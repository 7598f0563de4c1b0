// Population sizes, motion bounds and drawing constants for the page effects.
// Kept free of platform types so host-side tests can `include!` this file.

use std::f64::consts::PI;

// ---------------- Clouds ----------------
pub const CLOUD_COUNT: usize = 8;
pub const CLOUD_DELAY_STEP: f64 = 1.2; // delay = index * step
pub const CLOUD_MARGIN_PX: f64 = 200.0; // off-screen slack on both sides
pub const CLOUD_DELAY_SPACING_PX: f64 = 200.0; // extra start offset per unit of delay
pub const CLOUD_SCALE_MIN: f64 = 0.3;
pub const CLOUD_SCALE_MAX: f64 = 1.7;
pub const CLOUD_OPACITY_MIN: f64 = 0.12;
pub const CLOUD_OPACITY_MAX: f64 = 0.30;
pub const CLOUD_SPEED_MIN: f64 = 0.1;
pub const CLOUD_SPEED_MAX: f64 = 0.3;
pub const CLOUD_ROTATION_MIN_DEG: f64 = -15.0;
pub const CLOUD_ROTATION_MAX_DEG: f64 = 15.0;
pub const CLOUD_Y_HEIGHT_FACTOR: f64 = 1.2; // vertical spawn band as a multiple of viewport height
pub const CLOUD_BLUR_PER_SCALE_PX: f64 = 2.0;
pub const CLOUD_Z_PER_SCALE: f64 = 10.0;

// ---------------- Rays ----------------
pub const RAY_COUNT: usize = 12;
pub const RAY_RECYCLE_BOUND_Y: f64 = -100.0; // recycled once y exceeds this
pub const RAY_SPAWN_Y_MIN: f64 = -300.0;
pub const RAY_SPAWN_Y_MAX: f64 = -100.0;
pub const RAY_RECYCLE_Y_MIN: f64 = -400.0;
pub const RAY_RECYCLE_Y_MAX: f64 = -200.0;
pub const RAY_WIDTH_MIN: f64 = 30.0;
pub const RAY_WIDTH_MAX: f64 = 80.0;
pub const RAY_LENGTH_MIN: f64 = 800.0;
pub const RAY_LENGTH_MAX: f64 = 1400.0;
pub const RAY_ANGLE_MIN: f64 = PI / 24.0;
pub const RAY_ANGLE_MAX: f64 = PI / 24.0 + PI / 12.0;
pub const RAY_SPEED_MIN: f64 = 0.05;
pub const RAY_SPEED_MAX: f64 = 0.20;
pub const RAY_OPACITY_MIN: f64 = 0.05;
pub const RAY_OPACITY_MAX: f64 = 0.20;
pub const RAY_SPREAD_MIN: f64 = 1.5;
pub const RAY_SPREAD_MAX: f64 = 3.0;
pub const RAY_BLUR_PER_WIDTH: f64 = 0.1;

// Gradient stop offsets and the opacity multiplier applied at each stop
pub const RAY_GRADIENT_OFFSETS: [f64; 4] = [0.0, 0.3, 0.7, 1.0];
pub const RAY_GRADIENT_ALPHA: [f64; 3] = [1.0, 0.7, 0.4];

// Curve control points as fractions of ray length
pub const RAY_NEAR_CTRL_FRAC: f64 = 0.6;
pub const RAY_FAR_CTRL_FRAC: f64 = 0.8;
pub const RAY_TIP_SPREAD_MUL: f64 = 1.5;

// Sunset palettes: start, mid, end (RGB)
pub const RAY_PALETTES: [[[u8; 3]; 3]; 4] = [
    [[255, 255, 255], [255, 233, 213], [255, 183, 143]],
    [[255, 241, 230], [255, 210, 161], [255, 140, 120]],
    [[255, 226, 226], [255, 190, 190], [255, 150, 150]],
    [[255, 218, 233], [255, 182, 193], [255, 130, 170]],
];

// ---------------- Cursor trail ----------------
pub const TRAIL_MOVE_THRESHOLD_PX: f64 = 0.1; // per-axis dead zone
pub const TRAIL_PX_PER_PARTICLE: f64 = 3.0;
pub const TRAIL_MAX_PER_FRAME: usize = 10;
pub const TRAIL_LIFETIME_MIN: u32 = 60; // frames
pub const TRAIL_LIFETIME_MAX: u32 = 140; // frames, exclusive
pub const TRAIL_SPEED_FACTOR_MIN: f64 = 1.0;
pub const TRAIL_SPEED_FACTOR_MAX: f64 = 3.0;
pub const TRAIL_SIZE_MIN: f64 = 2.0;
pub const TRAIL_SIZE_MAX: f64 = 5.0;
pub const TRAIL_MIN_RADIUS: f64 = 0.1;
pub const TRAIL_ANGLE_JITTER: f64 = PI / 6.0; // ±30°
pub const TRAIL_CHANNEL_MIN: f64 = 240.0; // green/blue floor for near-white shades
pub const TRAIL_CHANNEL_SPAN: f64 = 15.0;
pub const TRAIL_BASE_ALPHA: f64 = 0.7;
pub const TRAIL_SHADOW_BLUR: f64 = 15.0;
// Enough slots for a full emission every frame over the longest lifetime
pub const TRAIL_CAPACITY: usize = TRAIL_MAX_PER_FRAME * TRAIL_LIFETIME_MAX as usize;

pub const GLOW_RADIUS: f64 = 20.0;
pub const GLOW_INNER_ALPHA: f64 = 0.4;

// ---------------- Parallax ----------------
pub const PARALLAX_TRANSITION: &str = "transform 0.1s cubic-bezier(0.17, 0.67, 0.83, 0.67)";
pub const CLOUD_TRANSITION: &str = "transform 0.1s linear";
