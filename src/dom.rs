use crate::constants::FIT_ATTR;
use marquee_core::{Content, BASE_SPEED_ATTR, CLAMP_FACTOR_ATTR, CONTINUOUS_ATTR};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Raw marquee attributes as written in markup.
#[derive(Debug, Default)]
pub struct MarqueeAttrs {
    pub base_speed: Option<String>,
    pub continuous: Option<String>,
    pub clamp_factor: Option<String>,
    pub fit: Option<String>,
}

impl MarqueeAttrs {
    pub fn read(el: &web::Element) -> Self {
        Self {
            base_speed: el.get_attribute(BASE_SPEED_ATTR),
            continuous: el.get_attribute(CONTINUOUS_ATTR),
            clamp_factor: el.get_attribute(CLAMP_FACTOR_ATTR),
            fit: el.get_attribute(FIT_ATTR),
        }
    }
}

/// Classify a host's children: element children are items, otherwise its
/// text is the content.
pub fn read_content(host: &web::Element) -> Content<web::Element> {
    let nodes = host.child_nodes();
    let items: Vec<web::Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect();
    if items.is_empty() {
        let text = host.text_content().unwrap_or_default();
        Content::Text(text.trim().to_string())
    } else {
        Content::Items(items)
    }
}

pub fn create_html_element(
    document: &web::Document,
    tag: &str,
    class: &str,
    style: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class);
    _ = el.set_attribute("style", style);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

/// Move every child of `from` to the end of `to`.
pub fn move_children(from: &web::Node, to: &web::Node) {
    while let Some(child) = from.first_child() {
        if to.append_child(&child).is_err() {
            log::warn!("failed to move marquee child node");
            break;
        }
    }
}

#[inline]
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
