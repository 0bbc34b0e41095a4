use super::Listener;
use crate::render::Track;
use marquee_core::{Marquee, SystemClock};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feed the page's vertical scroll offset into the strip's sampler.
pub fn wire_scroll(
    window: &web::Window,
    engine: &Rc<RefCell<Marquee<SystemClock>>>,
) -> Option<Listener> {
    if let Ok(y) = window.scroll_y() {
        // baseline, so the first real scroll measures a velocity
        engine.borrow_mut().on_scroll(y);
    }
    let engine = engine.clone();
    let win = window.clone();
    Listener::new(window, "scroll", move |_ev| {
        if let Ok(y) = win.scroll_y() {
            engine.borrow_mut().on_scroll(y);
        }
    })
}

/// Re-measure tiles when the viewport changes size.
pub fn wire_resize(window: &web::Window, track: &Rc<RefCell<Track>>) -> Option<Listener> {
    let track = track.clone();
    Listener::new(window, "resize", move |_ev| {
        track.borrow_mut().measure();
    })
}
