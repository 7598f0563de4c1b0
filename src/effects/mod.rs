pub mod clouds;
pub mod parallax;
pub mod rays;
pub mod trail;

use crate::events::Listener;
use crate::frame::FrameLoop;
use web_sys as web;

/// Everything a mounted effect keeps alive: its frame loop (if it animates
/// per frame), the listeners it registered and any elements it inserted.
/// Dropping the handle stops the effect; `teardown` also removes the elements.
pub struct EffectHandle {
    pub name: &'static str,
    frame: Option<FrameLoop>,
    listeners: Vec<Listener>,
    nodes: Vec<web::Element>,
}

impl EffectHandle {
    pub fn new(name: &'static str, frame: Option<FrameLoop>, listeners: Vec<Listener>) -> Self {
        Self {
            name,
            frame,
            listeners,
            nodes: Vec::new(),
        }
    }

    /// Elements this effect added to the page, removed again on teardown.
    pub fn with_nodes(mut self, nodes: Vec<web::Element>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn is_animating(&self) -> bool {
        self.frame.as_ref().is_some_and(FrameLoop::is_running)
    }

    /// Cancel the next frame first so no tick runs against released listeners.
    pub fn teardown(mut self) {
        if let Some(f) = self.frame.take() {
            f.cancel();
        }
        let n = self.listeners.len();
        self.listeners.clear();
        for node in self.nodes.drain(..) {
            node.remove();
        }
        log::debug!("[{}] torn down ({} listeners removed)", self.name, n);
    }
}
