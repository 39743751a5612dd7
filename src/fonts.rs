use crate::core::fonts::local_font;
use crate::core::{FontCache, FontError, FontResponse, FontSource};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// `window.fetch` backed font source.
pub struct BrowserFontSource {
    window: web::Window,
}

impl BrowserFontSource {
    pub fn new(window: &web::Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl FontSource for BrowserFontSource {
    async fn fetch(&self, url: &str) -> Result<FontResponse, FontError> {
        let value = JsFuture::from(self.window.fetch_with_str(url))
            .await
            .map_err(|e| FontError::Network(format!("{:?}", e)))?;
        let response: web::Response = value
            .dyn_into()
            .map_err(|_| FontError::Network("fetch did not resolve to a Response".into()))?;
        let status = response.status();
        if !response.ok() {
            return Ok(FontResponse { status, body_len: 0 });
        }
        let body = response
            .array_buffer()
            .map_err(|e| FontError::Network(format!("{:?}", e)))?;
        let buffer = JsFuture::from(body)
            .await
            .map_err(|e| FontError::Network(format!("{:?}", e)))?;
        let body_len = buffer.unchecked_into::<js_sys::ArrayBuffer>().byte_length() as usize;
        Ok(FontResponse { status, body_len })
    }
}

/// Preload the display font and publish whichever URL ended up usable as
/// `data-display-font` on `<html>` for the stylesheet and 3D text to pick up.
pub async fn preload_display_font(window: web::Window, cache: &mut FontCache) {
    let source = BrowserFontSource::new(&window);
    let url = cache.resolve(&source, local_font()).await;
    log::info!("[fonts] display font: {}", url);
    if let Some(html) = window.document().and_then(|d| d.document_element()) {
        _ = html.set_attribute("data-display-font", &url);
    }
}
