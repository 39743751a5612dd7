// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn viewport_pct_maps_corners() {
    let vp = Vec2::new(1200.0, 800.0);
    assert_eq!(viewport_pct(Vec2::ZERO, vp), Vec2::ZERO);
    assert_eq!(viewport_pct(vp, vp), Vec2::splat(100.0));
    assert_eq!(viewport_pct(Vec2::new(600.0, 400.0), vp), Vec2::splat(50.0));
}

#[test]
fn viewport_pct_clamps_outside_points() {
    let vp = Vec2::new(400.0, 400.0);
    assert_eq!(viewport_pct(Vec2::new(-50.0, 900.0), vp), Vec2::new(0.0, 100.0));
}

#[test]
fn viewport_pct_unknown_viewport_is_center() {
    assert_eq!(viewport_pct(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::splat(50.0));
    assert_eq!(viewport_pct(Vec2::new(10.0, 10.0), Vec2::new(0.0, 300.0)), Vec2::splat(50.0));
}
