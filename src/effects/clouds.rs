use super::EffectHandle;
use crate::dom::{self, MountError};
use crate::events;
use crate::frame::FrameLoop;
use crate::scene::constants::CLOUD_TRANSITION;
use crate::scene::{Cloud, CloudConfig, CloudField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CONTAINER_ID: &str = "clouds";

// Body plus four overlapping puffs; shapes and gradients live in the page CSS.
const CLOUD_MARKUP: &str = "<div class=\"cloud-body\">\
<div class=\"puff puff-1\"></div>\
<div class=\"puff puff-2\"></div>\
<div class=\"puff puff-3\"></div>\
<div class=\"puff puff-4\"></div>\
</div>";

fn create_sprite(document: &web::Document, cloud: &Cloud) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_class_name("cloud");
    el.set_inner_html(CLOUD_MARKUP);
    dom::set_style(&el, "position", "fixed");
    dom::set_style(&el, "top", "0");
    dom::set_style(&el, "left", "0");
    dom::set_style(&el, "opacity", &cloud.opacity.to_string());
    dom::set_style(&el, "filter", &cloud.filter());
    dom::set_style(&el, "transition", CLOUD_TRANSITION);
    dom::set_style(&el, "z-index", &cloud.z_index().to_string());
    dom::set_style(&el, "transform", &cloud.transform());
    Some(el)
}

pub fn mount(window: &web::Window, document: &web::Document) -> Result<EffectHandle, MountError> {
    let container = dom::element_by_id(document, CONTAINER_ID)?;
    let viewport = dom::viewport(window);

    let mut rng = StdRng::from_entropy();
    let field = CloudField::new(viewport, &CloudConfig::default(), &mut rng);
    let sprites: Vec<web::HtmlElement> = field
        .clouds
        .iter()
        .filter_map(|c| {
            let el = create_sprite(document, c)?;
            container.append_child(&el).ok()?;
            Some(el)
        })
        .collect();
    if sprites.len() != field.clouds.len() {
        log::debug!(
            "[clouds] created {} of {} sprites",
            sprites.len(),
            field.clouds.len()
        );
    }
    let nodes: Vec<web::Element> = sprites.iter().map(|el| el.clone().unchecked_into()).collect();
    let field = Rc::new(RefCell::new(field));

    let resize = {
        let win = window.clone();
        let field = field.clone();
        events::on_resize(window, move || {
            field.borrow_mut().resize(dom::viewport(&win));
        })
    };

    let frame = FrameLoop::start("clouds", move || {
        let mut field = field.borrow_mut();
        field.step(&mut rng);
        for (cloud, el) in field.clouds.iter().zip(&sprites) {
            dom::set_style(el, "transform", &cloud.transform());
        }
    });

    Ok(EffectHandle::new("clouds", Some(frame), vec![resize]).with_nodes(nodes))
}
