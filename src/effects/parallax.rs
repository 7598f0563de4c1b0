use super::EffectHandle;
use crate::dom::{self, MountError};
use crate::events;
use crate::scene::constants::PARALLAX_TRANSITION;
use crate::scene::ParallaxLayer;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const SPEED_ATTR: &str = "data-parallax-speed";

fn collect_sections(document: &web::Document) -> Vec<(web::HtmlElement, ParallaxLayer)> {
    let Ok(nodes) = document.query_selector_all("[data-parallax-speed]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .filter_map(|el| {
            let raw = el.get_attribute(SPEED_ATTR)?;
            match ParallaxLayer::from_attr(&raw) {
                Some(layer) => Some((el, layer)),
                None => {
                    log::debug!("[parallax] ignoring speed {:?}", raw);
                    None
                }
            }
        })
        .collect()
}

fn apply(sections: &[(web::HtmlElement, ParallaxLayer)], scroll_y: f64) {
    for (el, layer) in sections {
        dom::set_style(el, "transform", &layer.transform(scroll_y));
    }
}

/// Scroll-driven only; there is no frame loop to cancel.
pub fn mount(window: &web::Window, document: &web::Document) -> Result<EffectHandle, MountError> {
    let sections = collect_sections(document);
    for (el, _) in &sections {
        dom::set_style(el, "transition", PARALLAX_TRANSITION);
    }
    apply(&sections, dom::scroll_y(window));
    log::info!("[parallax] {} sections", sections.len());

    let scroll = {
        let win = window.clone();
        events::on_scroll(window, move || {
            apply(&sections, dom::scroll_y(&win));
        })
    };

    Ok(EffectHandle::new("parallax", None, vec![scroll]))
}
