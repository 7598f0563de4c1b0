use super::config::{CloudConfig, Viewport};
use super::constants::*;
use rand::Rng;

/// One drifting cloud sprite. Only `x`/`y` change after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub rotation_deg: f64,
    pub speed: f64,
    pub delay: f64,
}

impl Cloud {
    pub fn random<R: Rng + ?Sized>(
        index: usize,
        viewport: Viewport,
        cfg: &CloudConfig,
        rng: &mut R,
    ) -> Self {
        let delay = index as f64 * CLOUD_DELAY_STEP;
        let mut cloud = Self {
            x: 0.0,
            y: random_y(viewport, rng),
            scale: cfg.scale.sample(rng),
            opacity: cfg.opacity.sample(rng),
            rotation_deg: cfg.rotation_deg.sample(rng),
            speed: cfg.speed.sample(rng),
            delay,
        };
        cloud.x = cloud.start_x();
        cloud
    }

    /// Left-of-screen position a cloud resets to; later clouds start further out.
    #[inline]
    pub fn start_x(&self) -> f64 {
        -CLOUD_MARGIN_PX - self.delay * CLOUD_DELAY_SPACING_PX
    }

    /// Advance one frame. Returns true when the cloud wrapped back to its start.
    pub fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) -> bool {
        if self.x > viewport.width + CLOUD_MARGIN_PX {
            self.x = self.start_x();
            self.y = random_y(viewport, rng);
            true
        } else {
            self.x += self.speed;
            false
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.x, self.y, self.scale, self.rotation_deg
        )
    }

    pub fn filter(&self) -> String {
        format!("blur({}px) contrast(0.9)", CLOUD_BLUR_PER_SCALE_PX * self.scale)
    }

    /// Larger clouds stack above smaller ones.
    #[inline]
    pub fn z_index(&self) -> i32 {
        (self.scale * CLOUD_Z_PER_SCALE).floor() as i32
    }
}

#[inline]
fn random_y<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> f64 {
    rng.gen::<f64>() * viewport.height * CLOUD_Y_HEIGHT_FACTOR
}

/// Fixed population of clouds, updated in place every frame.
#[derive(Clone, Debug)]
pub struct CloudField {
    pub clouds: Vec<Cloud>,
    pub viewport: Viewport,
}

impl CloudField {
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, cfg: &CloudConfig, rng: &mut R) -> Self {
        let clouds = (0..cfg.count)
            .map(|i| Cloud::random(i, viewport, cfg, rng))
            .collect();
        Self { clouds, viewport }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance every cloud; returns how many wrapped this frame.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let viewport = self.viewport;
        self.clouds
            .iter_mut()
            .map(|c| c.step(viewport, rng))
            .filter(|wrapped| *wrapped)
            .count()
    }
}
