use super::EffectHandle;
use crate::dom::{self, MountError};
use crate::events;
use crate::frame::FrameLoop;
use crate::render;
use crate::scene::{PointerState, Trail, TrailConfig};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

pub const CANVAS_ID: &str = "trail-canvas";

// Frames between "pool full" warnings
const DROP_WARN_INTERVAL: u32 = 60;

pub fn mount(window: &web::Window, document: &web::Document) -> Result<EffectHandle, MountError> {
    let (canvas, ctx) = dom::canvas_2d(document, CANVAS_ID)?;
    let viewport = dom::viewport(window);
    dom::sync_canvas_size(&canvas, viewport);

    // Single writer (pointermove), single reader (frame tick)
    let pointer = Rc::new(Cell::new(PointerState::at(viewport.center())));

    let resize = {
        let win = window.clone();
        let canvas = canvas.clone();
        events::on_resize(window, move || {
            dom::sync_canvas_size(&canvas, dom::viewport(&win));
        })
    };
    let pointer_move = {
        let pointer = pointer.clone();
        events::on_pointer_move(window, move |x, y| {
            let mut p = pointer.get();
            p.current = DVec2::new(x, y);
            pointer.set(p);
        })
    };

    let mut rng = StdRng::from_entropy();
    let mut trail = Trail::new(TrailConfig::default());
    log::info!("[trail] pool capacity {}", trail.capacity());
    let mut since_warn = 0u32;
    let mut dropped = 0usize;

    let frame = FrameLoop::start("trail", move || {
        render::clear(&ctx, &canvas);

        let mut p = pointer.get();
        let summary = trail.step(&mut p, &mut rng);
        pointer.set(p);

        for particle in trail.particles() {
            render::draw_particle(&ctx, &particle.sprite());
        }
        render::draw_cursor_glow(&ctx, p.current);

        dropped += summary.dropped;
        since_warn = since_warn.saturating_add(1);
        if dropped > 0 && since_warn >= DROP_WARN_INTERVAL {
            log::warn!(
                "[trail] pool full ({} live), dropped {} particles",
                trail.len(),
                dropped
            );
            dropped = 0;
            since_warn = 0;
        }
    });

    Ok(EffectHandle::new("trail", Some(frame), vec![resize, pointer_move]))
}
