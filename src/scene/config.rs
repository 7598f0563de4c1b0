use super::constants::*;
use rand::Rng;

/// Half-open numeric range `[min, max)` used for every randomized tunable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw a value from the range; a degenerate or inverted span yields `min`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    #[cfg(test)]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v < self.max
    }
}

/// Visible area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.width * 0.5, self.height * 0.5)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

#[derive(Clone, Debug)]
pub struct CloudConfig {
    pub count: usize,
    pub speed: Span,
    pub opacity: Span,
    pub scale: Span,
    pub rotation_deg: Span,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            count: CLOUD_COUNT,
            speed: Span::new(CLOUD_SPEED_MIN, CLOUD_SPEED_MAX),
            opacity: Span::new(CLOUD_OPACITY_MIN, CLOUD_OPACITY_MAX),
            scale: Span::new(CLOUD_SCALE_MIN, CLOUD_SCALE_MAX),
            rotation_deg: Span::new(CLOUD_ROTATION_MIN_DEG, CLOUD_ROTATION_MAX_DEG),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RayConfig {
    pub count: usize,
    pub speed: Span,
    pub opacity: Span,
    pub width: Span,
    pub length: Span,
    pub angle: Span,
    pub spread: Span,
    pub spawn_y: Span,
    pub recycle_y: Span,
}

impl Default for RayConfig {
    fn default() -> Self {
        Self {
            count: RAY_COUNT,
            speed: Span::new(RAY_SPEED_MIN, RAY_SPEED_MAX),
            opacity: Span::new(RAY_OPACITY_MIN, RAY_OPACITY_MAX),
            width: Span::new(RAY_WIDTH_MIN, RAY_WIDTH_MAX),
            length: Span::new(RAY_LENGTH_MIN, RAY_LENGTH_MAX),
            angle: Span::new(RAY_ANGLE_MIN, RAY_ANGLE_MAX),
            spread: Span::new(RAY_SPREAD_MIN, RAY_SPREAD_MAX),
            spawn_y: Span::new(RAY_SPAWN_Y_MIN, RAY_SPAWN_Y_MAX),
            recycle_y: Span::new(RAY_RECYCLE_Y_MIN, RAY_RECYCLE_Y_MAX),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TrailConfig {
    pub max_per_frame: usize,
    /// Lifetime in whole frames, `[min, max)`.
    pub lifetime: (u32, u32),
    pub speed_factor: Span,
    pub size: Span,
    pub capacity: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_per_frame: TRAIL_MAX_PER_FRAME,
            lifetime: (TRAIL_LIFETIME_MIN, TRAIL_LIFETIME_MAX),
            speed_factor: Span::new(TRAIL_SPEED_FACTOR_MIN, TRAIL_SPEED_FACTOR_MAX),
            size: Span::new(TRAIL_SIZE_MIN, TRAIL_SIZE_MAX),
            capacity: TRAIL_CAPACITY,
        }
    }
}

impl TrailConfig {
    pub fn sample_lifetime<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let (lo, hi) = self.lifetime;
        if hi > lo {
            rng.gen_range(lo..hi)
        } else {
            lo
        }
    }
}
