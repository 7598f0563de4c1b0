use super::config::{RayConfig, Viewport};
use super::constants::*;
use glam::{DAffine2, DVec2};
use rand::Rng;

/// Straight or quadratic path segment in ray-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo { ctrl: DVec2, to: DVec2 },
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub rgb: [u8; 3],
    pub alpha: f64,
}

impl GradientStop {
    pub fn css(&self) -> String {
        rgba_css(self.rgb, self.alpha)
    }
}

#[inline]
pub fn rgba_css(rgb: [u8; 3], alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
    pub angle: f64,
    pub speed: f64,
    pub opacity: f64,
    pub palette: usize,
    pub spread: f64,
}

impl Ray {
    pub fn random<R: Rng + ?Sized>(viewport_width: f64, cfg: &RayConfig, rng: &mut R) -> Self {
        Self {
            x: rng.gen::<f64>() * viewport_width,
            y: cfg.spawn_y.sample(rng),
            width: cfg.width.sample(rng),
            length: cfg.length.sample(rng),
            angle: cfg.angle.sample(rng),
            speed: cfg.speed.sample(rng),
            opacity: cfg.opacity.sample(rng),
            palette: rng.gen_range(0..RAY_PALETTES.len()),
            spread: cfg.spread.sample(rng),
        }
    }

    /// Re-randomize position and look in place; width, length, angle and
    /// speed keep their mount-time values.
    pub fn recycle<R: Rng + ?Sized>(&mut self, viewport_width: f64, cfg: &RayConfig, rng: &mut R) {
        self.y = cfg.recycle_y.sample(rng);
        self.x = rng.gen::<f64>() * viewport_width;
        self.opacity = cfg.opacity.sample(rng);
        self.palette = rng.gen_range(0..RAY_PALETTES.len());
        self.spread = cfg.spread.sample(rng);
    }

    /// Move one frame down; returns true if the ray was recycled.
    pub fn step<R: Rng + ?Sized>(&mut self, viewport_width: f64, cfg: &RayConfig, rng: &mut R) -> bool {
        self.y += self.speed;
        if self.y > RAY_RECYCLE_BOUND_Y {
            self.recycle(viewport_width, cfg, rng);
            return true;
        }
        false
    }

    /// Local-to-screen map: translate to the anchor, then rotate.
    #[inline]
    pub fn local_to_screen(&self) -> DAffine2 {
        DAffine2::from_translation(DVec2::new(self.x, self.y)) * DAffine2::from_angle(self.angle)
    }

    /// Fan-shaped outline: a flat top edge and two curves out to a wide tip.
    pub fn outline(&self) -> [PathOp; 5] {
        let w = self.width;
        let len = self.length;
        let tip = w * self.spread * RAY_TIP_SPREAD_MUL;
        [
            PathOp::MoveTo(DVec2::new(-w / 2.0, 0.0)),
            PathOp::LineTo(DVec2::new(w / 2.0, 0.0)),
            PathOp::QuadTo {
                ctrl: DVec2::new(w * self.spread, len * RAY_NEAR_CTRL_FRAC),
                to: DVec2::new(tip, len),
            },
            PathOp::QuadTo {
                ctrl: DVec2::new(0.0, len * RAY_FAR_CTRL_FRAC),
                to: DVec2::new(-tip, len),
            },
            PathOp::Close,
        ]
    }

    /// Stops along the ray axis, from the anchor (0) to the tip (`length`).
    pub fn gradient_stops(&self) -> [GradientStop; 4] {
        let [start, mid, end] = RAY_PALETTES[self.palette % RAY_PALETTES.len()];
        let o = RAY_GRADIENT_OFFSETS;
        let a = RAY_GRADIENT_ALPHA;
        [
            GradientStop { offset: o[0], rgb: start, alpha: self.opacity * a[0] },
            GradientStop { offset: o[1], rgb: mid, alpha: self.opacity * a[1] },
            GradientStop { offset: o[2], rgb: end, alpha: self.opacity * a[2] },
            GradientStop { offset: o[3], rgb: [255, 255, 255], alpha: 0.0 },
        ]
    }

    pub fn blur_filter(&self) -> String {
        format!("blur({}px)", self.width * RAY_BLUR_PER_WIDTH)
    }
}

/// The ray caster's fixed population plus the width used for recycling.
#[derive(Clone, Debug)]
pub struct RayField {
    pub rays: Vec<Ray>,
    pub viewport: Viewport,
    cfg: RayConfig,
}

impl RayField {
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, cfg: RayConfig, rng: &mut R) -> Self {
        let rays = (0..cfg.count)
            .map(|_| Ray::random(viewport.width, &cfg, rng))
            .collect();
        Self { rays, viewport, cfg }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance all rays in array order; returns how many recycled.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let width = self.viewport.width;
        let cfg = &self.cfg;
        self.rays
            .iter_mut()
            .map(|r| r.step(width, cfg, rng))
            .filter(|recycled| *recycled)
            .count()
    }
}
