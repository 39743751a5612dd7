// Host-side tests for font preloading and its fallback.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod fonts {
    include!("../src/core/fonts.rs");
}

use constants::*;
use fonts::*;
use std::cell::Cell;

/// Replays one canned outcome and counts requests.
struct ScriptedSource {
    outcome: Result<FontResponse, FontError>,
    calls: Cell<usize>,
}

impl ScriptedSource {
    fn status(status: u16, body_len: usize) -> Self {
        Self {
            outcome: Ok(FontResponse { status, body_len }),
            calls: Cell::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            outcome: Err(FontError::Network("connection refused".into())),
            calls: Cell::new(0),
        }
    }
}

impl FontSource for ScriptedSource {
    async fn fetch(&self, _url: &str) -> Result<FontResponse, FontError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}

const URL: &str = "https://fonts.example.com/nosifer.woff2";

#[test]
fn not_found_falls_back() {
    let source = ScriptedSource::status(404, 0);
    let mut cache = FontCache::new();
    let resolved = pollster::block_on(cache.resolve(&source, URL));
    assert_eq!(resolved, FALLBACK_FONT);
    assert!(!cache.is_loaded(URL));
}

#[test]
fn tiny_body_falls_back() {
    let source = ScriptedSource::status(200, 10);
    let mut cache = FontCache::new();
    let err = pollster::block_on(cache.preload(&source, URL)).unwrap_err();
    assert_eq!(err, FontError::TooSmall(10));
    let resolved = pollster::block_on(cache.resolve(&source, URL));
    assert_eq!(resolved, FALLBACK_FONT);
    assert!(cache.is_empty());
}

#[test]
fn network_failure_falls_back() {
    let source = ScriptedSource::failing();
    let mut cache = FontCache::new();
    assert_eq!(pollster::block_on(cache.resolve(&source, URL)), FALLBACK_FONT);
}

#[test]
fn valid_font_is_cached_and_not_refetched() {
    let source = ScriptedSource::status(200, 48_000);
    let mut cache = FontCache::new();
    assert_eq!(pollster::block_on(cache.resolve(&source, URL)), URL);
    assert!(cache.is_loaded(URL));
    assert_eq!(source.calls.get(), 1);

    assert_eq!(pollster::block_on(cache.resolve(&source, URL)), URL);
    assert_eq!(source.calls.get(), 1, "second call must hit the cache");
    assert_eq!(cache.len(), 1);
}

#[test]
fn failures_are_not_cached() {
    let source = ScriptedSource::status(500, 0);
    let mut cache = FontCache::new();
    pollster::block_on(cache.resolve(&source, URL));
    pollster::block_on(cache.resolve(&source, URL));
    assert_eq!(source.calls.get(), 2);
}

#[test]
fn validate_checks_status_then_size() {
    assert_eq!(
        validate(FontResponse { status: 404, body_len: 10_000 }),
        Err(FontError::Status(404))
    );
    assert_eq!(
        validate(FontResponse { status: 200, body_len: FONT_MIN_BYTES - 1 }),
        Err(FontError::TooSmall(FONT_MIN_BYTES - 1))
    );
    assert_eq!(validate(FontResponse { status: 200, body_len: FONT_MIN_BYTES }), Ok(()));
    assert_eq!(validate(FontResponse { status: 204, body_len: 4096 }), Ok(()));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(FontError::Status(404).to_string(), "failed to fetch font: HTTP 404");
    assert_eq!(FontError::TooSmall(10).to_string(), "invalid font file size: 10 bytes");
}

#[test]
fn bundled_font_paths() {
    assert_eq!(fallback_font(), "/fonts/helvetiker_regular.typeface.json");
    assert!(local_font().ends_with(".woff"));
    assert!(SYSTEM_FONT.ends_with(".typeface.json"));
}
