use crate::scene::PageHide;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that stays registered for as long as this value lives.
/// Dropping it removes the listener from its target.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn on_resize(window: &web::Window, mut handler: impl FnMut() + 'static) -> Listener {
    Listener::new(window, "resize", move |_| handler())
}

pub fn on_scroll(window: &web::Window, mut handler: impl FnMut() + 'static) -> Listener {
    Listener::new(window, "scroll", move |_| handler())
}

/// Pointer movement in client (viewport) coordinates.
pub fn on_pointer_move(window: &web::Window, mut handler: impl FnMut(f64, f64) + 'static) -> Listener {
    Listener::new(window, "pointermove", move |ev: web::Event| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            handler(me.client_x() as f64, me.client_y() as f64);
        }
    })
}

pub fn on_page_hide(window: &web::Window, mut handler: impl FnMut(PageHide) + 'static) -> Listener {
    Listener::new(window, "pagehide", move |ev: web::Event| {
        // A plain Event (no `persisted`) is treated as an unload
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(web::PageTransitionEvent::persisted);
        handler(PageHide::from_persisted(persisted));
    })
}
