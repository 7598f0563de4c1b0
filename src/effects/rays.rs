use super::EffectHandle;
use crate::dom::{self, MountError};
use crate::events;
use crate::frame::FrameLoop;
use crate::render;
use crate::scene::{RayConfig, RayField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub const CANVAS_ID: &str = "ray-canvas";

pub fn mount(window: &web::Window, document: &web::Document) -> Result<EffectHandle, MountError> {
    let (canvas, ctx) = dom::canvas_2d(document, CANVAS_ID)?;
    let viewport = dom::viewport(window);
    dom::sync_canvas_size(&canvas, viewport);

    let mut rng = StdRng::from_entropy();
    let field = Rc::new(RefCell::new(RayField::new(
        viewport,
        RayConfig::default(),
        &mut rng,
    )));
    log::info!(
        "[rays] {} rays on {}x{}",
        field.borrow().rays.len(),
        viewport.width,
        viewport.height
    );

    let resize = {
        let win = window.clone();
        let canvas = canvas.clone();
        let field = field.clone();
        events::on_resize(window, move || {
            let vp = dom::viewport(&win);
            dom::sync_canvas_size(&canvas, vp);
            field.borrow_mut().resize(vp);
        })
    };

    let frame = FrameLoop::start("rays", move || {
        render::clear(&ctx, &canvas);
        let mut field = field.borrow_mut();
        for ray in &field.rays {
            render::draw_ray(&ctx, ray);
        }
        field.step(&mut rng);
    });

    Ok(EffectHandle::new("rays", Some(frame), vec![resize]))
}
