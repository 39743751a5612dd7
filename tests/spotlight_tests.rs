// Host-side tests for pointer tracking and the spotlight layers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod profile {
    include!("../src/core/profile.rs");
}
mod spotlight {
    include!("../src/core/spotlight.rs");
}

use glam::Vec2;
use profile::*;
use spotlight::*;

fn tracker() -> PointerTracker {
    PointerTracker::new(Vec2::new(1200.0, 800.0))
}

#[test]
fn position_defaults_to_viewport_center() {
    let t = tracker();
    assert_eq!(t.position(), Vec2::new(600.0, 400.0));
    assert_eq!(t.commits(), 0);
}

#[test]
fn unknown_viewport_starts_at_origin_then_centers_on_resize() {
    let mut t = PointerTracker::default();
    assert_eq!(t.position(), Vec2::ZERO);
    t.resize(Vec2::new(400.0, 700.0));
    assert_eq!(t.position(), Vec2::new(200.0, 350.0));
}

#[test]
fn burst_within_one_frame_commits_last_sample_once() {
    let mut t = tracker();
    let samples = [
        Vec2::new(10.0, 10.0),
        Vec2::new(20.0, 30.0),
        Vec2::new(500.0, 120.0),
        Vec2::new(321.0, 654.0),
    ];
    let requests = samples.iter().filter(|s| t.on_move(**s)).count();
    assert_eq!(requests, 1, "only the first sample should request a frame");
    // nothing applied until the frame runs
    assert_eq!(t.position(), Vec2::new(600.0, 400.0));

    assert_eq!(t.on_frame(), Some(Vec2::new(321.0, 654.0)));
    assert_eq!(t.position(), Vec2::new(321.0, 654.0));
    assert_eq!(t.commits(), 1);
}

#[test]
fn frame_without_samples_changes_nothing() {
    let mut t = tracker();
    assert_eq!(t.on_frame(), None);
    assert_eq!(t.commits(), 0);
}

#[test]
fn each_frame_requests_again_after_flush() {
    let mut t = tracker();
    for frame in 0..5 {
        assert!(t.on_move(Vec2::new(frame as f32, 1.0)));
        assert!(!t.on_move(Vec2::new(frame as f32 + 0.5, 2.0)));
        assert!(t.on_frame().is_some());
    }
    assert_eq!(t.commits(), 5);
    assert_eq!(t.position(), Vec2::new(4.5, 2.0));
}

#[test]
fn committed_positions_stay_inside_viewport() {
    let mut t = tracker();
    t.on_move(Vec2::new(-40.0, 5000.0));
    t.on_frame();
    assert_eq!(t.position(), Vec2::new(0.0, 800.0));

    t.resize(Vec2::new(300.0, 300.0));
    assert_eq!(t.position(), Vec2::new(0.0, 300.0));
}

#[test]
fn cancel_drops_pending_sample() {
    let mut t = tracker();
    t.on_move(Vec2::new(1.0, 1.0));
    assert!(t.has_pending());
    t.cancel_pending();
    assert!(!t.has_pending());
    assert_eq!(t.on_frame(), None);
    assert_eq!(t.position(), Vec2::new(600.0, 400.0));
}

#[test]
fn leaving_the_page_goes_dark_until_next_move() {
    let profile = CapabilityProfile::desktop();
    let mut t = tracker();
    t.on_move(Vec2::new(100.0, 100.0));
    t.on_leave();
    // sample from before the leave must not relight the page
    assert_eq!(t.on_frame(), None);
    assert_eq!(t.overlay(&profile), OverlayFrame::Dark);

    assert!(t.on_move(Vec2::new(200.0, 200.0)));
    t.on_frame();
    assert!(t.is_on_page());
    assert!(matches!(t.overlay(&profile), OverlayFrame::Lit { .. }));
}

#[test]
fn narrow_viewport_renders_single_layer() {
    let profile = CapabilityProfile::from_viewport_width(400.0);
    let t = PointerTracker::new(Vec2::new(400.0, 800.0));
    let styles = overlay_styles(&t.overlay(&profile));
    assert_eq!(styles.len(), 1);
    assert!(styles[0].1.starts_with("radial-gradient("));
}

#[test]
fn wide_viewport_renders_three_layers_inner_on_top() {
    let profile = CapabilityProfile::from_viewport_width(1200.0);
    let t = tracker();
    let styles = overlay_styles(&t.overlay(&profile));
    assert_eq!(styles.len(), 3);
    assert!(styles[0].0 > styles[1].0 && styles[1].0 > styles[2].0);
    assert!(styles[0].1.contains("circle 150px"));
    assert!(styles[1].1.contains("circle 300px"));
    assert!(styles[2].1.contains("circle 500px"));
}

#[test]
fn dark_frame_is_one_opaque_sheet() {
    let styles = overlay_styles(&OverlayFrame::Dark);
    assert_eq!(styles.len(), 1);
    assert_eq!(styles[0].1, "rgba(0, 0, 0, 0.95)");
}

#[test]
fn gradient_css_is_centered_on_pointer() {
    let layer = GradientLayer {
        radius_px: 300.0,
        clear_stop: 0.5,
        edge_alpha: 0.7,
    };
    let css = gradient_css(&layer, Vec2::new(12.0, 34.5));
    assert_eq!(
        css,
        "radial-gradient(circle 300px at 12.0px 34.5px, transparent 0%, transparent 50%, rgba(0, 0, 0, 0.7) 100%)"
    );
}

#[test]
fn outer_layers_are_darker_and_wider() {
    let profile = CapabilityProfile::desktop();
    for pair in profile.spotlight_layers.windows(2) {
        assert!(pair[1].radius_px > pair[0].radius_px);
        assert!(pair[1].edge_alpha > pair[0].edge_alpha);
    }
}

#[test]
fn coalescer_is_generic_over_sample_type() {
    let mut c: FrameCoalescer<u32> = FrameCoalescer::default();
    assert!(c.push(1));
    assert!(!c.push(2));
    assert!(c.is_scheduled());
    assert_eq!(c.take(), Some(2));
    assert_eq!(c.take(), None);
}
