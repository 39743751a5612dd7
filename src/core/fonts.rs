use super::constants::{FALLBACK_FONT, FONT_MIN_BYTES, LOCAL_FONT};
use fnv::FnvHashSet;

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum FontError {
    #[error("failed to fetch font: {0}")]
    Network(String),
    #[error("failed to fetch font: HTTP {0}")]
    Status(u16),
    #[error("invalid font file size: {0} bytes")]
    TooSmall(usize),
}

/// Raw outcome of a font request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontResponse {
    pub status: u16,
    pub body_len: usize,
}

impl FontResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can fetch a font. The browser implementation wraps
/// `window.fetch`; tests use a scripted source.
#[allow(async_fn_in_trait)]
pub trait FontSource {
    async fn fetch(&self, url: &str) -> Result<FontResponse, FontError>;
}

pub fn validate(response: FontResponse) -> Result<(), FontError> {
    if !response.is_ok() {
        return Err(FontError::Status(response.status));
    }
    if response.body_len < FONT_MIN_BYTES {
        return Err(FontError::TooSmall(response.body_len));
    }
    Ok(())
}

/// Fonts that already passed preloading.
///
/// An explicit object owned by whoever boots the page; nothing here is global.
#[derive(Debug, Default)]
pub struct FontCache {
    loaded: FnvHashSet<String>,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self, url: &str) -> bool {
        self.loaded.contains(url)
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    /// Fetch and validate `url` unless it is already cached.
    pub async fn preload<S: FontSource>(&mut self, source: &S, url: &str) -> Result<(), FontError> {
        if self.is_loaded(url) {
            return Ok(());
        }
        let response = source.fetch(url).await?;
        validate(response)?;
        self.loaded.insert(url.to_owned());
        Ok(())
    }

    /// The URL to use for `url`: itself when it preloads, the fallback otherwise.
    pub async fn resolve<S: FontSource>(&mut self, source: &S, url: &str) -> String {
        match self.preload(source, url).await {
            Ok(()) => url.to_owned(),
            Err(e) => {
                log::warn!("Failed to preload font {}: {}", url, e);
                fallback_font().to_owned()
            }
        }
    }
}

pub fn fallback_font() -> &'static str {
    FALLBACK_FONT
}

pub fn local_font() -> &'static str {
    LOCAL_FONT
}
