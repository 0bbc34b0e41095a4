use crate::constants::{TILE_CLASS, TILE_STYLE, TRACK_CLASS, TRACK_STYLE};
use crate::dom;
use crate::style::{tile_count, tile_offset_px, tile_width_changed, translate_css, Fit};
use wasm_bindgen::JsCast;
use web_sys as web;

struct Parts {
    track: web::HtmlElement,
    tile: web::HtmlElement,
    clones: Vec<web::Node>,
}

/// The scrolling track inside a host element: the original children in one
/// tile, followed by deep copies of that tile.
///
/// A host with no content gets no track at all and stays inert.
pub struct Track {
    host: web::HtmlElement,
    parts: Option<Parts>,
    fixed_copies: usize,
    fit: Fit,
    tile_width: f64,
}

impl Track {
    pub fn build(host: &web::HtmlElement, fit: Fit) -> anyhow::Result<Self> {
        let content = dom::read_content(host);
        let mut track = Self {
            host: host.clone(),
            parts: None,
            fixed_copies: content.multiplicity(),
            fit,
            tile_width: 0.0,
        };
        if content.is_empty() {
            log::debug!("marquee host has no content; leaving it inert");
            return Ok(track);
        }
        let document = host
            .owner_document()
            .ok_or_else(|| anyhow::anyhow!("host is not attached to a document"))?;
        let track_el = dom::create_html_element(&document, "div", TRACK_CLASS, TRACK_STYLE)?;
        let tile = dom::create_html_element(&document, "div", TILE_CLASS, TILE_STYLE)?;
        dom::move_children(host, &tile);
        track_el
            .append_child(&tile)
            .map_err(|e| anyhow::anyhow!("append tile: {:?}", e))?;
        host.append_child(&track_el)
            .map_err(|e| anyhow::anyhow!("append track: {:?}", e))?;
        track.parts = Some(Parts {
            track: track_el,
            tile,
            clones: Vec::new(),
        });
        track.measure();
        Ok(track)
    }

    pub fn tiles(&self) -> usize {
        self.parts.as_ref().map_or(0, |p| p.clones.len() + 1)
    }

    /// Re-read the tile width and, in viewport fit, the number of copies.
    pub fn measure(&mut self) {
        let Some(parts) = &mut self.parts else {
            return;
        };
        self.tile_width = f64::from(parts.tile.offset_width());
        let wanted = tile_count(self.fit, self.fixed_copies, self.tile_width, dom::viewport_width());
        let wanted_clones = wanted.saturating_sub(1);
        while parts.clones.len() > wanted_clones {
            if let Some(node) = parts.clones.pop() {
                _ = parts.track.remove_child(&node);
            }
        }
        while parts.clones.len() < wanted_clones {
            let Ok(copy) = parts.tile.clone_node_with_deep(true) else {
                log::warn!("failed to clone marquee tile");
                break;
            };
            if let Some(el) = copy.dyn_ref::<web::Element>() {
                _ = el.set_attribute("aria-hidden", "true");
            }
            if parts.track.append_child(&copy).is_err() {
                break;
            }
            parts.clones.push(copy);
        }
    }

    /// Re-measure if the tile's laid-out width moved since the last measure.
    /// Returns true when it did.
    pub fn sync_width(&mut self) -> bool {
        let Some(parts) = &self.parts else {
            return false;
        };
        let current = f64::from(parts.tile.offset_width());
        if !tile_width_changed(self.tile_width, current) {
            return false;
        }
        log::debug!("marquee tile width {} -> {}", self.tile_width, current);
        self.measure();
        true
    }

    /// Write the wrapped translation (percent of a tile) to the track.
    pub fn apply(&self, wrapped: f64) {
        if let Some(parts) = &self.parts {
            let css = translate_css(tile_offset_px(self.tile_width, wrapped));
            _ = parts.track.style().set_property("transform", &css);
        }
    }

    /// Put the original children back and drop the generated track.
    pub fn restore(&mut self) {
        if let Some(parts) = self.parts.take() {
            dom::move_children(&parts.tile, &self.host);
            _ = self.host.remove_child(&parts.track);
        }
    }
}
