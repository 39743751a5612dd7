// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spotlight_layers_grow_outwards() {
    let [inner, middle, outer] = SPOTLIGHT_DESKTOP_LAYERS;
    assert!(inner.0 < middle.0 && middle.0 < outer.0);
    assert!(inner.2 < middle.2 && middle.2 < outer.2);
    for (_, clear, alpha) in SPOTLIGHT_DESKTOP_LAYERS {
        assert!((0.0..=1.0).contains(&clear));
        assert!((0.0..=1.0).contains(&alpha));
    }
    assert!(SPOTLIGHT_CONSTRAINED_LAYER.0 < outer.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn decoration_ranges_are_ordered() {
    assert!(SPARKLE_SIZE_RANGE.0 <= SPARKLE_SIZE_RANGE.1);
    assert!(SPARKLE_DURATION_RANGE.0 > 0.0);
    assert!(SPARKLE_DURATION_RANGE.0 <= SPARKLE_DURATION_RANGE.1);
    assert!(PARTICLE_LIFE_RANGE.0 < PARTICLE_LIFE_RANGE.1);
}

#[test]
fn every_ghost_gets_its_own_color() {
    assert_eq!(GHOST_PALETTE.len(), GHOST_COUNT);
    let mut seen = GHOST_PALETTE.to_vec();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), GHOST_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_is_positive() {
    assert!(LOADER_PROGRESS_SEC > 0.0);
    assert!(LOADER_FADE_SEC > 0.0);
    assert!(PARTICLE_STEP_SEC > 0.0);
    assert!(PARTICLE_SPAWN_CHANCE > 0.0 && PARTICLE_SPAWN_CHANCE <= 1.0);
    assert!(PARTICLE_MAX_CONSTRAINED <= PARTICLE_MAX_DESKTOP);
}
