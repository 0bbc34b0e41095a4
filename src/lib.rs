#![cfg(target_arch = "wasm32")]
use crate::constants::{MARQUEE_SELECTOR, MOUNT_ID_ATTR};
use crate::events::Listener;
use crate::frame::FrameLoop;
use crate::render::Track;
use fnv::FnvHashMap;
use marquee_core::{Marquee, MotionConfig, SystemClock};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod style;

/// Everything one mounted strip owns. Dropping it stops the frame loop,
/// detaches listeners and restores the host's original children.
struct Mounted {
    frame: FrameLoop,
    listeners: Vec<Listener>,
    track: Rc<RefCell<Track>>,
    host: web::HtmlElement,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame.stop();
        self.listeners.clear();
        self.track.borrow_mut().restore();
        _ = self.host.remove_attribute(MOUNT_ID_ATTR);
    }
}

thread_local! {
    static MOUNTED: RefCell<FnvHashMap<u32, Mounted>> = RefCell::new(FnvHashMap::default());
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

fn mount(host: &web::HtmlElement) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let attrs = dom::MarqueeAttrs::read(host);
    let config = MotionConfig::from_attrs(
        attrs.base_speed.as_deref(),
        attrs.continuous.as_deref(),
        attrs.clamp_factor.as_deref(),
    )?;
    let fit = style::parse_fit(attrs.fit.as_deref());

    let track = Rc::new(RefCell::new(Track::build(host, fit)?));
    let engine = Rc::new(RefCell::new(Marquee::new(config, SystemClock::new())));

    let mut listeners = Vec::new();
    listeners.extend(events::wire_scroll(&window, &engine));
    listeners.extend(events::wire_hover(host, &engine));
    listeners.extend(events::wire_resize(&window, &track));

    let frame = {
        let engine = engine.clone();
        let track = track.clone();
        FrameLoop::start(move || {
            let wrapped = engine.borrow_mut().tick();
            let mut track = track.borrow_mut();
            track.sync_width();
            track.apply(wrapped);
        })
    };

    log::info!(
        "[marquee] mounted speed={} continuous={} clamp={} fit={:?} tiles={}",
        config.base_speed,
        config.continuous,
        config.clamp_factor,
        fit,
        track.borrow().tiles()
    );
    Ok(Mounted {
        frame,
        listeners,
        track,
        host: host.clone(),
    })
}

fn registered_id(host: &web::HtmlElement) -> Option<u32> {
    host.get_attribute(MOUNT_ID_ATTR)?.parse().ok()
}

/// Mount a marquee on `host`, configured from its `data-*` attributes.
/// Mounting an already mounted host returns its existing id.
#[wasm_bindgen]
pub fn mount_marquee(host: web::HtmlElement) -> Result<u32, JsValue> {
    if let Some(id) = registered_id(&host) {
        if MOUNTED.with(|m| m.borrow().contains_key(&id)) {
            return Ok(id);
        }
    }
    let mounted = mount(&host).map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    let id = NEXT_ID.with(|n| n.replace(n.get().wrapping_add(1)));
    _ = host.set_attribute(MOUNT_ID_ATTR, &id.to_string());
    MOUNTED.with(|m| m.borrow_mut().insert(id, mounted));
    Ok(id)
}

/// Tear down one marquee. Returns false if `id` was not mounted.
#[wasm_bindgen]
pub fn unmount_marquee(id: u32) -> bool {
    let removed = MOUNTED.with(|m| m.borrow_mut().remove(&id));
    let found = removed.is_some();
    drop(removed);
    if found {
        log::info!("[marquee] unmounted {}", id);
    }
    found
}

#[wasm_bindgen]
pub fn unmount_all() {
    let all: Vec<Mounted> = MOUNTED.with(|m| m.borrow_mut().drain().map(|(_, v)| v).collect());
    log::info!("[marquee] unmounting {} strip(s)", all.len());
    drop(all);
}

fn mount_all(document: &web::Document) {
    let nodes = match document.query_selector_all(MARQUEE_SELECTOR) {
        Ok(n) => n,
        Err(e) => {
            log::error!("query {} failed: {:?}", MARQUEE_SELECTOR, e);
            return;
        }
    };
    for i in 0..nodes.length() {
        let Some(host) = nodes.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        if let Err(e) = mount_marquee(host) {
            log::warn!("[marquee] skipping element: {}", e.as_string().unwrap_or_default());
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("marquee-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let closure = Closure::<dyn FnMut()>::once(move || mount_all(&doc));
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        mount_all(&document);
    }
    Ok(())
}
