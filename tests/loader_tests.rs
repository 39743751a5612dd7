// Host-side tests for the loading gate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod loader {
    include!("../src/core/loader.rs");
}

use constants::*;
use glam::Vec2;
use loader::*;

#[test]
fn gate_starts_closed() {
    let gate = LoadingGate::default();
    assert!(!gate.is_loaded());
    assert_eq!(gate.phase(), LoaderPhase::Progress);
    assert_eq!(gate.progress(), 0.0);
    assert_eq!(gate.opacity(), 1.0);
}

#[test]
fn gate_opens_exactly_once_and_never_reverts() {
    let mut gate = LoadingGate::default();
    let mut opened = 0;
    // ~10 seconds at 60 fps
    for _ in 0..600 {
        if gate.advance(1.0 / 60.0) {
            opened += 1;
        }
        if opened > 0 {
            assert!(gate.is_loaded());
        }
    }
    assert_eq!(opened, 1);
    assert_eq!(gate.phase(), LoaderPhase::Done);
    assert!(!gate.advance(100.0));
    assert!(gate.is_loaded());
}

#[test]
fn gate_opens_after_progress_and_fade() {
    let mut gate = LoadingGate::default();
    assert!(!gate.advance(LOADER_PROGRESS_SEC - 0.01));
    assert_eq!(gate.phase(), LoaderPhase::Progress);
    assert!(!gate.advance(0.02));
    assert_eq!(gate.phase(), LoaderPhase::FadingOut);
    assert_eq!(gate.progress(), 100.0);
    assert!(gate.advance(LOADER_FADE_SEC));
    assert_eq!(gate.opacity(), 0.0);
}

#[test]
fn one_huge_step_still_opens_once() {
    let mut gate = LoadingGate::default();
    assert!(gate.advance(1000.0));
    assert!(!gate.advance(1.0));
}

#[test]
fn progress_is_monotonic_and_eased() {
    let mut gate = LoadingGate::default();
    let mut last = 0.0;
    let mut samples = Vec::new();
    while gate.phase() == LoaderPhase::Progress {
        gate.advance(0.1);
        let p = gate.progress();
        assert!(p >= last);
        last = p;
        samples.push(p);
    }
    // ease-out: first step covers more than the last
    let first = samples[1] - samples[0];
    let tail = samples[samples.len() - 2] - samples[samples.len() - 3];
    assert!(first > tail);
}

#[test]
fn negative_or_nan_dt_is_ignored() {
    let mut gate = LoadingGate::default();
    gate.advance(-5.0);
    gate.advance(f32::NAN);
    assert_eq!(gate.progress(), 0.0);
}

#[test]
fn fade_opacity_decreases() {
    let mut gate = LoadingGate::default();
    gate.advance(LOADER_PROGRESS_SEC + 0.1);
    let a = gate.opacity();
    gate.advance(0.5);
    let b = gate.opacity();
    assert!(a > b && b > 0.0 && a < 1.0);
}

#[test]
fn status_messages_follow_progress() {
    assert_eq!(status_message(0.0), "Awakening the spirits...");
    assert_eq!(status_message(29.9), "Awakening the spirits...");
    assert_eq!(status_message(30.0), "Conjuring dark magic...");
    assert_eq!(status_message(60.0), "Weaving ethereal experiences...");
    assert_eq!(status_message(90.0), "Almost ready to haunt...");
    assert_eq!(status_message(100.0), "Almost ready to haunt...");
}

#[test]
fn ghost_target_is_scaled_offset_from_center() {
    assert_eq!(GhostFollower::target_for(Vec2::splat(50.0)), Vec2::ZERO);
    let t = GhostFollower::target_for(Vec2::new(100.0, 0.0));
    assert!((t - Vec2::new(15.0, -15.0)).length() < 1e-4);
}

#[test]
fn ghost_eases_towards_pointer() {
    let mut ghost = GhostFollower::default();
    let target = GhostFollower::target_for(Vec2::new(100.0, 100.0));
    let first = ghost.step(Vec2::new(100.0, 100.0), 0.1);
    assert!(first.x > 0.0 && first.x < target.x);
    for _ in 0..120 {
        ghost.step(Vec2::new(100.0, 100.0), 1.0 / 60.0);
    }
    assert!((ghost.offset() - target).length() < 0.5);
}

#[test]
fn progress_follows_cubic_ease_out() {
    let mut gate = LoadingGate::default();
    gate.advance(LOADER_PROGRESS_SEC * 0.5);
    assert!((gate.progress() - 87.5).abs() < 0.01, "got {}", gate.progress());
    assert_eq!(gate.message(), "Almost ready to haunt...");

    let mut gate = LoadingGate::default();
    gate.advance(LOADER_PROGRESS_SEC * 0.25);
    // 1 - 0.75^3
    assert!((gate.progress() - 57.8125).abs() < 0.01, "got {}", gate.progress());
    assert_eq!(gate.message(), "Conjuring dark magic...");
}

#[test]
fn fade_follows_cubic_ease_in_out() {
    let mut gate = LoadingGate::default();
    gate.advance(LOADER_PROGRESS_SEC);
    gate.advance(LOADER_FADE_SEC * 0.25);
    assert_eq!(gate.phase(), LoaderPhase::FadingOut);
    assert!((gate.opacity() - 0.9375).abs() < 1e-3, "got {}", gate.opacity());
    gate.advance(LOADER_FADE_SEC * 0.25);
    assert!((gate.opacity() - 0.5).abs() < 1e-3, "got {}", gate.opacity());
    gate.advance(LOADER_FADE_SEC * 0.25);
    assert!((gate.opacity() - 0.0625).abs() < 1e-3, "got {}", gate.opacity());
}
