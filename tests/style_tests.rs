// Host-side tests for the CSS helpers the frame loop uses.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use marquee_core::{wrap, ITEM_COPIES, TEXT_COPIES};
use style::*;

#[test]
fn fit_defaults_to_fixed() {
    assert_eq!(parse_fit(None), Fit::Fixed);
    assert_eq!(parse_fit(Some("")), Fit::Fixed);
    assert_eq!(parse_fit(Some("fixed")), Fit::Fixed);
    assert_eq!(parse_fit(Some("bogus")), Fit::Fixed);
    assert_eq!(parse_fit(Some(" Viewport ")), Fit::Viewport);
}

#[test]
fn fixed_fit_uses_content_multiplicity() {
    assert_eq!(tile_count(Fit::Fixed, ITEM_COPIES, 400.0, 1200.0), 3);
    assert_eq!(tile_count(Fit::Fixed, TEXT_COPIES, 0.0, 1200.0), 5);
}

#[test]
fn viewport_fit_covers_twice_the_viewport() {
    assert_eq!(tile_count(Fit::Viewport, ITEM_COPIES, 400.0, 1200.0), 6);
    // a tile wider than the viewport still needs a second copy
    assert_eq!(tile_count(Fit::Viewport, ITEM_COPIES, 3000.0, 1200.0), 2);
    // unmeasured tile (not laid out yet)
    assert_eq!(tile_count(Fit::Viewport, ITEM_COPIES, 0.0, 1200.0), 2);
}

#[test]
fn late_layout_triggers_remeasure() {
    // logos without explicit sizes measure 0 at mount, then load
    assert!(tile_width_changed(0.0, 800.0));
    assert!(!tile_width_changed(800.0, 800.0));
    // host hidden after mount
    assert!(tile_width_changed(800.0, 0.0));
    assert!(!tile_width_changed(800.0, f64::NAN));
}

#[test]
fn remeasured_width_drives_full_tile_travel() {
    // with the stale width the strip would never move
    assert_eq!(tile_offset_px(0.0, -50.0), 0.0);
    assert!(tile_width_changed(0.0, 800.0));
    assert_eq!(tile_offset_px(800.0, -50.0), -400.0);
    assert_eq!(translate_css(tile_offset_px(800.0, -50.0)), "translate3d(-400.000px, 0, 0)");
    // viewport fit grows once the real width is known
    assert_eq!(tile_count(Fit::Viewport, ITEM_COPIES, 0.0, 1200.0), 2);
    assert_eq!(tile_count(Fit::Viewport, ITEM_COPIES, 300.0, 1200.0), 8);
}

#[test]
fn offset_scales_wrapped_percent_by_tile_width() {
    assert_eq!(tile_offset_px(800.0, -25.0), -200.0);
    assert_eq!(tile_offset_px(800.0, wrap(125.0)), -200.0);
    assert_eq!(tile_offset_px(800.0, -100.0), -800.0);
    assert_eq!(tile_offset_px(f64::NAN, -25.0), 0.0);
    assert_eq!(tile_offset_px(800.0, f64::NAN), 0.0);
}

#[test]
fn translate_is_rounded_and_never_negative_zero() {
    assert_eq!(translate_css(-200.0), "translate3d(-200.000px, 0, 0)");
    assert_eq!(translate_css(-12.34567), "translate3d(-12.346px, 0, 0)");
    assert_eq!(translate_css(-0.0), "translate3d(0.000px, 0, 0)");
    assert_eq!(translate_css(-0.0001), "translate3d(0.000px, 0, 0)");
}
