// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/input.rs"]
mod input;

use glam::DVec2;
use input::*;

#[test]
fn backing_store_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(DVec2::new(560.0, 440.0), 2.0), Some((1120, 880)));
    assert_eq!(backing_size(DVec2::new(560.0, 440.0), 1.0), Some((560, 440)));
    assert_eq!(backing_size(DVec2::new(100.4, 50.6), 1.5), Some((151, 76)));
}

#[test]
fn hidden_canvas_keeps_its_backing_store() {
    assert_eq!(backing_size(DVec2::ZERO, 2.0), None);
    assert_eq!(backing_size(DVec2::new(560.0, 0.0), 1.0), None);
    assert_eq!(backing_size(DVec2::new(0.0, 440.0), 1.0), None);
}

#[test]
fn tiny_canvas_never_collapses_to_zero() {
    assert_eq!(backing_size(DVec2::new(0.2, 0.2), 1.0), Some((1, 1)));
}

#[test]
fn drawing_size_is_reported_in_css_pixels() {
    // a retina backing store draws at the same CSS size as a 1x one
    assert_eq!(css_size((1120, 880), 2.0), DVec2::new(560.0, 440.0));
    assert_eq!(css_size((560, 440), 1.0), DVec2::new(560.0, 440.0));
}

#[test]
fn css_round_trip_keeps_globe_geometry_independent_of_dpr() {
    let css = DVec2::new(560.0, 440.0);
    for dpr in [1.0, 1.25, 2.0, 3.0] {
        let backing = backing_size(css, dpr).unwrap();
        let back = css_size(backing, dpr);
        assert!((back - css).abs().max_element() < 0.5, "dpr {}: {:?}", dpr, back);
    }
}

#[test]
fn invalid_ratio_falls_back_to_one() {
    assert_eq!(backing_size(DVec2::new(10.0, 10.0), 0.0), Some((10, 10)));
    assert_eq!(css_size((10, 10), -1.0), DVec2::new(10.0, 10.0));
}
