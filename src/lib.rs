#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod effects;
mod events;
mod frame;
mod render;
mod scene;

use dom::MountError;
use effects::EffectHandle;
use events::Listener;

type MountFn = fn(&web::Window, &web::Document) -> Result<EffectHandle, MountError>;

// Back-to-front, matching the page's stacking order
const EFFECTS: [(&str, MountFn); 4] = [
    ("clouds", effects::clouds::mount),
    ("rays", effects::rays::mount),
    ("trail", effects::trail::mount),
    ("parallax", effects::parallax::mount),
];

/// All mounted effects plus the listener that tears them down when the page
/// unloads. A page entering the back/forward cache keeps them.
struct Page {
    effects: Vec<EffectHandle>,
    _page_hide: Listener,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("asterisland starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    if PAGE.with(|p| p.borrow().is_some()) {
        log::debug!("already mounted");
        return Ok(());
    }
    let window = dom::window()?;
    let document = dom::window_document()?;

    let mut mounted = Vec::with_capacity(EFFECTS.len());
    for (name, mount) in EFFECTS {
        match mount(&window, &document) {
            Ok(handle) => mounted.push(handle),
            // Missing surface: that effect stays absent
            Err(e) => log::debug!("[{}] not mounted: {}", name, e),
        }
    }
    log::info!(
        "mounted {} of {} effects ({} animating)",
        mounted.len(),
        EFFECTS.len(),
        mounted.iter().filter(|h| h.is_animating()).count()
    );

    let page_hide = events::on_page_hide(&window, |hide| {
        if hide.tears_down() {
            teardown();
        } else {
            log::debug!("page cached, effects kept");
        }
    });
    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            effects: mounted,
            _page_hide: page_hide,
        })
    });
    Ok(())
}

/// Cancel every frame loop and remove every listener. Safe to call twice.
#[wasm_bindgen]
pub fn teardown() {
    let Some(page) = PAGE.with(|p| p.borrow_mut().take()) else {
        return;
    };
    for handle in page.effects {
        handle.teardown();
    }
    log::info!("asterisland torn down");
}
