// Host-side tests for the front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn fit_needs_at_least_two_tiles() {
    assert!(MIN_FIT_COPIES >= 2);
    assert!(MIN_FIT_COPIES <= marquee_core::ITEM_COPIES);
}

#[test]
fn selectors_and_attributes_are_data_attributes() {
    assert_eq!(MARQUEE_SELECTOR, "[data-marquee]");
    assert!(MOUNT_ID_ATTR.starts_with("data-"));
    assert!(FIT_ATTR.starts_with("data-"));
    assert_ne!(MOUNT_ID_ATTR, FIT_ATTR);
}

#[test]
fn generated_classes_are_distinct() {
    assert_ne!(TRACK_CLASS, TILE_CLASS);
    assert!(TRACK_STYLE.contains("display:flex"));
    // tiles must not shrink, or the measured width would not match one loop
    assert!(TILE_STYLE.contains("flex:none"));
}
