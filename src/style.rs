// Pure helpers turning engine output into CSS. Kept free of `web_sys` so
// they can be tested on the host.

use crate::constants::{MIN_FIT_COPIES, TRANSFORM_DECIMALS};
use marquee_core::coverage_copies;

/// How many tiles a mounted strip renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fit {
    /// Fixed multiplicity by content kind.
    #[default]
    Fixed,
    /// Enough tiles to span twice the viewport, re-measured on resize.
    Viewport,
}

#[inline]
pub fn parse_fit(value: Option<&str>) -> Fit {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if v == "viewport" => Fit::Viewport,
        _ => Fit::Fixed,
    }
}

/// Number of tiles (original plus copies) to render.
#[inline]
pub fn tile_count(fit: Fit, fixed: usize, tile_width: f64, viewport_width: f64) -> usize {
    match fit {
        Fit::Fixed => fixed,
        Fit::Viewport => coverage_copies(tile_width, viewport_width).max(MIN_FIT_COPIES),
    }
}

/// Whether a freshly read tile width differs from the one the track was
/// laid out with. Images and web fonts settle after mount, and hidden hosts
/// read 0 until shown, so the frame loop checks this before every write.
#[inline]
pub fn tile_width_changed(laid_out: f64, current: f64) -> bool {
    current.is_finite() && (current - laid_out).abs() >= 0.5
}

/// Pixel offset for a wrapped translation given in percent of one tile.
#[inline]
pub fn tile_offset_px(tile_width: f64, wrapped_percent: f64) -> f64 {
    if !tile_width.is_finite() || !wrapped_percent.is_finite() {
        return 0.0;
    }
    tile_width * wrapped_percent / 100.0
}

#[inline]
pub fn translate_css(offset_px: f64) -> String {
    let scale = 10f64.powi(TRANSFORM_DECIMALS as i32);
    let rounded = (offset_px * scale).round() / scale;
    // no "-0.000px"
    let px = if rounded == 0.0 { 0.0 } else { rounded };
    format!("translate3d({:.*}px, 0, 0)", TRANSFORM_DECIMALS, px)
}
