use super::config::TrailConfig;
use super::constants::*;
use super::pool::Pool;
use glam::DVec2;
use rand::Rng;
use smallvec::SmallVec;

/// Pointer position as last reported and as of the previous trail frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub current: DVec2,
    pub previous: DVec2,
}

impl PointerState {
    pub fn at(pos: DVec2) -> Self {
        Self {
            current: pos,
            previous: pos,
        }
    }

    #[inline]
    pub fn movement(&self) -> DVec2 {
        self.current - self.previous
    }

    /// Called once per frame after emission.
    #[inline]
    pub fn commit(&mut self) {
        self.previous = self.current;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    pub age: u32,
    pub max_age: u32,
    pub rgb: [u8; 3],
}

/// Per-frame draw parameters derived from a particle's age.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSprite {
    pub pos: DVec2,
    pub radius: f64,
    pub opacity: f64,
    pub rgb: [u8; 3],
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age < self.max_age
    }

    /// Remaining life in `[0, 1]`; reaches 0 on the frame the particle expires.
    #[inline]
    pub fn fade(&self) -> f64 {
        if self.max_age == 0 {
            return 0.0;
        }
        1.0 - self.age as f64 / self.max_age as f64
    }

    pub fn sprite(&self) -> ParticleSprite {
        let fade = self.fade();
        ParticleSprite {
            pos: self.pos,
            radius: (self.size * fade).max(TRAIL_MIN_RADIUS),
            opacity: fade.max(0.0),
            rgb: self.rgb,
        }
    }

    /// Advance position and age by one frame; false once expired.
    #[inline]
    pub fn step(&mut self) -> bool {
        self.pos += self.vel;
        self.age = self.age.saturating_add(1);
        self.is_alive()
    }
}

/// Near-white shade with a slight green/blue variation.
pub fn white_shade<R: Rng + ?Sized>(rng: &mut R) -> [u8; 3] {
    let g = (rng.gen::<f64>() * TRAIL_CHANNEL_SPAN + TRAIL_CHANNEL_MIN).round() as u8;
    let b = (rng.gen::<f64>() * TRAIL_CHANNEL_SPAN + TRAIL_CHANNEL_MIN).round() as u8;
    [255, g, b]
}

/// Particles to emit for a pointer movement of `delta` in one frame.
pub fn emission_count(delta: DVec2, max_per_frame: usize) -> usize {
    if delta.x.abs() <= TRAIL_MOVE_THRESHOLD_PX && delta.y.abs() <= TRAIL_MOVE_THRESHOLD_PX {
        return 0;
    }
    ((delta.length() / TRAIL_PX_PER_PARTICLE).floor() as usize).min(max_per_frame)
}

/// Particles spread evenly along `from -> from + delta`, each heading roughly
/// along the path with a ±30° jitter.
pub fn emit_along<R: Rng + ?Sized>(
    from: DVec2,
    delta: DVec2,
    cfg: &TrailConfig,
    rng: &mut R,
) -> SmallVec<[Particle; TRAIL_MAX_PER_FRAME]> {
    let count = emission_count(delta, cfg.max_per_frame);
    let heading = delta.y.atan2(delta.x);
    let mut out = SmallVec::new();
    for i in 0..count {
        let ratio = i as f64 / count as f64;
        let angle = heading + rng.gen_range(-TRAIL_ANGLE_JITTER..TRAIL_ANGLE_JITTER);
        let speed = cfg.speed_factor.sample(rng);
        out.push(Particle {
            pos: from + delta * ratio,
            vel: DVec2::from_angle(angle) * speed,
            size: cfg.size.sample(rng),
            age: 0,
            max_age: cfg.sample_lifetime(rng),
            rgb: white_shade(rng),
        });
    }
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrailFrame {
    pub emitted: usize,
    pub dropped: usize,
    pub expired: usize,
}

/// Live particle set backed by a fixed-capacity pool.
#[derive(Debug)]
pub struct Trail {
    particles: Pool<Particle>,
    cfg: TrailConfig,
}

impl Trail {
    pub fn new(cfg: TrailConfig) -> Self {
        Self {
            particles: Pool::with_capacity(cfg.capacity),
            cfg,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn capacity(&self) -> usize {
        self.particles.capacity()
    }

    /// Live particles in emission order, oldest first.
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Insert one particle directly; returns false if the pool is full.
    pub fn spawn(&mut self, p: Particle) -> bool {
        self.particles.insert(p).is_ok()
    }

    /// One frame: emit along the pointer path, advance every particle, and
    /// free the expired ones. Commits the pointer afterwards.
    pub fn step<R: Rng + ?Sized>(&mut self, pointer: &mut PointerState, rng: &mut R) -> TrailFrame {
        let mut frame = TrailFrame::default();
        for p in emit_along(pointer.previous, pointer.movement(), &self.cfg, rng) {
            if self.spawn(p) {
                frame.emitted += 1;
            } else {
                frame.dropped += 1;
            }
        }
        let mut expired = 0;
        self.particles.retain_mut(|p| {
            let alive = p.step();
            if !alive {
                expired += 1;
            }
            alive
        });
        frame.expired = expired;
        pointer.commit();
        frame
    }
}
