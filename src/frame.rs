use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Frames between pacing traces
const PACING_LOG_INTERVAL: u32 = 600;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A requestAnimationFrame loop that re-arms itself after every tick until
/// cancelled. Dropping the handle cancels it.
pub struct FrameLoop {
    name: &'static str,
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(name: &'static str, mut on_frame: impl FnMut() + 'static) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let tick_rearm = tick.clone();
        let pending_tick = pending.clone();
        let running_tick = running.clone();
        let mut frames = 0u32;
        let mut window_start = Instant::now();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            on_frame();
            frames += 1;
            if frames == PACING_LOG_INTERVAL {
                let secs = window_start.elapsed().as_secs_f64();
                log::trace!("[{}] {:.1} fps", name, frames as f64 / secs.max(1e-6));
                frames = 0;
                window_start = Instant::now();
            }
            pending_tick.set(request_frame(&tick_rearm));
        }) as Box<dyn FnMut()>));

        pending.set(request_frame(&tick));
        Self {
            name,
            tick,
            pending,
            running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and release the self-referencing closure.
    pub fn cancel(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::debug!("[{}] frame loop cancelled", self.name);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}
