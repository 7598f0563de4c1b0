// Host-side tests for the cursor trail and its particle pool.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene {
    pub mod constants {
        include!("../src/scene/constants.rs");
    }
    pub mod config {
        include!("../src/scene/config.rs");
    }
    pub mod pool {
        include!("../src/scene/pool.rs");
    }
    pub mod trail {
        include!("../src/scene/trail.rs");
    }
}

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::config::TrailConfig;
use scene::constants::*;
use scene::pool::Pool;
use scene::trail::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn still_particle(max_age: u32) -> Particle {
    Particle {
        pos: DVec2::new(10.0, 10.0),
        vel: DVec2::new(1.0, -0.5),
        size: 4.0,
        age: 0,
        max_age,
        rgb: [255, 250, 245],
    }
}

#[test]
fn small_horizontal_move_emits_one_particle() {
    // (100,100) -> (103,100): floor(3 / 3) = 1
    let mut trail = Trail::new(TrailConfig::default());
    let mut pointer = PointerState::at(DVec2::new(100.0, 100.0));
    pointer.current = DVec2::new(103.0, 100.0);

    let frame = trail.step(&mut pointer, &mut rng());
    assert_eq!(frame.emitted, 1);
    assert_eq!(trail.len(), 1);
    assert_eq!(emission_count(DVec2::new(3.0, 0.0), TRAIL_MAX_PER_FRAME), 1);
}

#[test]
fn sub_threshold_move_emits_nothing() {
    let mut trail = Trail::new(TrailConfig::default());
    let mut pointer = PointerState::at(DVec2::ZERO);
    pointer.current = DVec2::new(0.0, 0.05);

    let frame = trail.step(&mut pointer, &mut rng());
    assert_eq!(frame.emitted, 0);
    assert_eq!(trail.len(), 0);
}

#[test]
fn moves_above_threshold_but_under_three_px_emit_nothing() {
    assert_eq!(emission_count(DVec2::new(0.2, 0.0), TRAIL_MAX_PER_FRAME), 0);
    assert_eq!(emission_count(DVec2::new(2.0, 2.0), TRAIL_MAX_PER_FRAME), 0);
    assert_eq!(emission_count(DVec2::new(3.0, 3.0), TRAIL_MAX_PER_FRAME), 1);
}

#[test]
fn emission_is_capped_per_frame() {
    assert_eq!(emission_count(DVec2::new(300.0, 400.0), TRAIL_MAX_PER_FRAME), 10);
    assert_eq!(emission_count(DVec2::new(-33.0, 0.0), TRAIL_MAX_PER_FRAME), 10);
    assert_eq!(emission_count(DVec2::new(0.0, -29.9), TRAIL_MAX_PER_FRAME), 9);
}

#[test]
fn emitted_particles_are_spaced_along_the_path() {
    let cfg = TrailConfig::default();
    let from = DVec2::new(100.0, 50.0);
    let batch = emit_along(from, DVec2::new(30.0, 0.0), &cfg, &mut rng());
    assert_eq!(batch.len(), 10);
    for (i, p) in batch.iter().enumerate() {
        assert!((p.pos.x - (100.0 + 3.0 * i as f64)).abs() < 1e-9);
        assert!((p.pos.y - 50.0).abs() < 1e-9);
    }
}

#[test]
fn emitted_particles_respect_tunable_ranges() {
    let cfg = TrailConfig::default();
    let mut r = rng();
    let delta = DVec2::new(20.0, 20.0);
    let heading = delta.y.atan2(delta.x);
    for _ in 0..50 {
        for p in emit_along(DVec2::ZERO, delta, &cfg, &mut r) {
            assert_eq!(p.age, 0);
            assert!((TRAIL_LIFETIME_MIN..TRAIL_LIFETIME_MAX).contains(&p.max_age));
            assert!(p.size >= TRAIL_SIZE_MIN && p.size < TRAIL_SIZE_MAX);

            let speed = p.vel.length();
            assert!(speed >= TRAIL_SPEED_FACTOR_MIN - 1e-9 && speed < TRAIL_SPEED_FACTOR_MAX + 1e-9);

            let off = p.vel.y.atan2(p.vel.x) - heading;
            assert!(off.abs() <= TRAIL_ANGLE_JITTER + 1e-9, "angle offset {off}");

            assert_eq!(p.rgb[0], 255);
            assert!(p.rgb[1] >= 240 && p.rgb[2] >= 240);
        }
    }
}

#[test]
fn age_increases_by_one_per_frame() {
    let mut trail = Trail::new(TrailConfig::default());
    let mut pointer = PointerState::at(DVec2::ZERO);
    assert!(trail.spawn(still_particle(100)));

    for frame in 1..=20u32 {
        trail.step(&mut pointer, &mut rng());
        let p = trail.particles().next().expect("particle alive");
        assert_eq!(p.age, frame);
    }
}

#[test]
fn particle_removed_exactly_at_max_age() {
    let mut trail = Trail::new(TrailConfig::default());
    let mut pointer = PointerState::at(DVec2::ZERO);
    assert!(trail.spawn(still_particle(60)));

    let mut r = rng();
    for _ in 0..59 {
        let frame = trail.step(&mut pointer, &mut r);
        assert_eq!(frame.expired, 0);
        assert_eq!(trail.len(), 1);
    }
    let frame = trail.step(&mut pointer, &mut r);
    assert_eq!(frame.expired, 1);
    assert_eq!(trail.len(), 0);
}

#[test]
fn particle_moves_by_its_velocity() {
    let mut p = still_particle(10);
    assert!(p.step());
    assert_eq!(p.pos, DVec2::new(11.0, 9.5));
    assert!(p.step());
    assert_eq!(p.pos, DVec2::new(12.0, 9.0));
}

#[test]
fn sprite_fades_and_shrinks_linearly() {
    let mut p = still_particle(4);
    let fresh = p.sprite();
    assert_eq!(fresh.opacity, 1.0);
    assert_eq!(fresh.radius, 4.0);

    p.age = 1;
    let s = p.sprite();
    assert!((s.opacity - 0.75).abs() < 1e-12);
    assert!((s.radius - 3.0).abs() < 1e-12);

    p.age = 4;
    let s = p.sprite();
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.radius, TRAIL_MIN_RADIUS);
}

#[test]
fn pointer_is_committed_after_each_frame() {
    let mut trail = Trail::new(TrailConfig::default());
    let mut pointer = PointerState::at(DVec2::new(5.0, 5.0));
    pointer.current = DVec2::new(50.0, 5.0);
    trail.step(&mut pointer, &mut rng());
    assert_eq!(pointer.previous, pointer.current);
    assert_eq!(pointer.movement(), DVec2::ZERO);

    // Without further movement nothing new appears
    let before = trail.len();
    let frame = trail.step(&mut pointer, &mut rng());
    assert_eq!(frame.emitted, 0);
    assert_eq!(trail.len(), before);
}

#[test]
fn sustained_fast_movement_stays_within_capacity() {
    let mut trail = Trail::new(TrailConfig::default());
    let mut pointer = PointerState::at(DVec2::ZERO);
    let mut r = rng();
    let mut dropped = 0;
    for i in 0..1000 {
        // 40 px per frame, alternating direction
        let dir = if i % 2 == 0 { 40.0 } else { -40.0 };
        pointer.current = pointer.previous + DVec2::new(dir, 0.0);
        let frame = trail.step(&mut pointer, &mut r);
        assert_eq!(frame.emitted + frame.dropped, TRAIL_MAX_PER_FRAME);
        dropped += frame.dropped;
        assert!(trail.len() <= trail.capacity());
    }
    assert_eq!(dropped, 0, "default capacity covers the worst case");
    assert!(trail.len() > 0);
}

#[test]
fn full_pool_drops_extra_emissions() {
    let cfg = TrailConfig {
        capacity: 3,
        ..TrailConfig::default()
    };
    let mut trail = Trail::new(cfg);
    let mut pointer = PointerState::at(DVec2::ZERO);
    pointer.current = DVec2::new(30.0, 0.0);
    let frame = trail.step(&mut pointer, &mut rng());
    assert_eq!(frame.emitted, 3);
    assert_eq!(frame.dropped, 7);
    assert_eq!(trail.len(), 3);
}

#[test]
fn pool_reuses_freed_slots() {
    let mut pool: Pool<u32> = Pool::with_capacity(2);
    let a = pool.insert(1).unwrap();
    let b = pool.insert(2).unwrap();
    assert_ne!(a, b);
    assert_eq!(pool.insert(3), Err(3));

    pool.retain_mut(|v| *v != 1);
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.insert(4), Ok(a));
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.capacity(), 2);
}

#[test]
fn pool_retain_frees_rejected_values() {
    let mut pool: Pool<u32> = Pool::with_capacity(8);
    for v in 0..8 {
        pool.insert(v).unwrap();
    }
    pool.retain_mut(|v| {
        *v += 10;
        *v % 2 == 0
    });
    assert_eq!(pool.len(), 4);
    let left: Vec<u32> = pool.iter().copied().collect();
    assert_eq!(left, vec![10, 12, 14, 16]);

    for v in 0..4 {
        assert!(pool.insert(v).is_ok());
    }
    assert!(pool.insert(99).is_err());
}

#[test]
fn pool_iterates_in_insertion_order_across_reused_slots() {
    let mut pool: Pool<u32> = Pool::with_capacity(4);
    for v in [1, 2, 3, 4] {
        pool.insert(v).unwrap();
    }
    // Free the two oldest; their low slots get reused next
    pool.retain_mut(|v| *v > 2);
    let a = pool.insert(5).unwrap();
    let b = pool.insert(6).unwrap();
    assert!(a < 2 && b < 2);

    let order: Vec<u32> = pool.iter().copied().collect();
    assert_eq!(order, vec![3, 4, 5, 6]);

    let mut visited = Vec::new();
    pool.retain_mut(|v| {
        visited.push(*v);
        true
    });
    assert_eq!(visited, order);
}

#[test]
fn newer_particles_are_drawn_after_older_ones() {
    let mut trail = Trail::new(TrailConfig::default());
    let mut pointer = PointerState::at(DVec2::ZERO);
    let mut r = rng();
    assert!(trail.spawn(still_particle(2)));
    assert!(trail.spawn(still_particle(50)));

    // The short-lived one expires and frees the lowest slot
    trail.step(&mut pointer, &mut r);
    trail.step(&mut pointer, &mut r);
    assert_eq!(trail.len(), 1);

    pointer.current = DVec2::new(30.0, 0.0);
    let frame = trail.step(&mut pointer, &mut r);
    assert_eq!(frame.emitted, 10);

    let ages: Vec<u32> = trail.particles().map(|p| p.age).collect();
    assert_eq!(ages.len(), 11);
    assert_eq!(ages[0], 3);
    assert!(ages[1..].iter().all(|&age| age == 1));

    // Emitted batch keeps its path order
    let xs: Vec<f64> = trail.particles().skip(1).map(|p| p.pos.x - p.vel.x).collect();
    for (i, x) in xs.iter().enumerate() {
        assert!((x - 3.0 * i as f64).abs() < 1e-9, "particle {i} at {x}");
    }
}

#[test]
fn white_shades_stay_near_white() {
    let mut r = rng();
    for _ in 0..500 {
        let [red, g, b] = white_shade(&mut r);
        assert_eq!(red, 255);
        assert!((240..=255).contains(&g));
        assert!((240..=255).contains(&b));
    }
}
