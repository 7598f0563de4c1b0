use crate::scene::constants::*;
use crate::scene::ray::rgba_css;
use crate::scene::trail::ParticleSprite;
use crate::scene::{PathOp, Ray};
use glam::DVec2;
use std::f64::consts::TAU;
use web_sys as web;

#[inline]
pub fn clear(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

fn trace_path(ctx: &web::CanvasRenderingContext2d, ops: &[PathOp]) {
    ctx.begin_path();
    for op in ops {
        match *op {
            PathOp::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathOp::LineTo(p) => ctx.line_to(p.x, p.y),
            PathOp::QuadTo { ctrl, to } => ctx.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y),
            PathOp::Close => ctx.close_path(),
        }
    }
}

/// Fill one ray in its own rotated frame, blended with `screen`.
pub fn draw_ray(ctx: &web::CanvasRenderingContext2d, ray: &Ray) {
    ctx.save();
    let m = ray.local_to_screen();
    _ = ctx.transform(
        m.matrix2.x_axis.x,
        m.matrix2.x_axis.y,
        m.matrix2.y_axis.x,
        m.matrix2.y_axis.y,
        m.translation.x,
        m.translation.y,
    );

    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, ray.length);
    for stop in ray.gradient_stops() {
        _ = gradient.add_color_stop(stop.offset as f32, &stop.css());
    }

    trace_path(ctx, &ray.outline());
    ctx.set_filter(&ray.blur_filter());
    _ = ctx.set_global_composite_operation("screen");
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill();
    ctx.restore();
}

pub fn draw_particle(ctx: &web::CanvasRenderingContext2d, sprite: &ParticleSprite) {
    ctx.set_shadow_blur(TRAIL_SHADOW_BLUR);
    ctx.set_shadow_color(&rgba_css(sprite.rgb, TRAIL_BASE_ALPHA));
    ctx.begin_path();
    _ = ctx.arc(sprite.pos.x, sprite.pos.y, sprite.radius, 0.0, TAU);
    ctx.set_fill_style_str(&rgba_css(sprite.rgb, sprite.opacity));
    ctx.fill();
}

/// Soft white halo under the pointer, drawn without particle shadows.
pub fn draw_cursor_glow(ctx: &web::CanvasRenderingContext2d, at: DVec2) {
    ctx.set_shadow_blur(0.0);
    ctx.begin_path();
    _ = ctx.arc(at.x, at.y, GLOW_RADIUS, 0.0, TAU);
    if let Ok(gradient) = ctx.create_radial_gradient(at.x, at.y, 0.0, at.x, at.y, GLOW_RADIUS) {
        _ = gradient.add_color_stop(0.0, &rgba_css([255, 255, 255], GLOW_INNER_ALPHA));
        _ = gradient.add_color_stop(1.0, &rgba_css([255, 255, 255], 0.0));
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();
    }
}
