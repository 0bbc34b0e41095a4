use super::Listener;
use marquee_core::{Marquee, SystemClock};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pause the strip while a pointer is over its host.
pub fn wire_hover(
    host: &web::HtmlElement,
    engine: &Rc<RefCell<Marquee<SystemClock>>>,
) -> Vec<Listener> {
    let enter = {
        let engine = engine.clone();
        Listener::new(host, "pointerenter", move |_ev| {
            engine.borrow_mut().pointer_enter();
        })
    };
    let leave = {
        let engine = engine.clone();
        Listener::new(host, "pointerleave", move |_ev| {
            engine.borrow_mut().pointer_leave();
        })
    };
    enter.into_iter().chain(leave).collect()
}
