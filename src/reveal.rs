use crate::constants::{PROJECT_CARD_SELECTOR, REVEAL_CLASS};
use crate::core::constants::REVEAL_THRESHOLD;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Adds the fade-in class to project cards the first time they scroll in.
pub struct ScrollReveal {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl ScrollReveal {
    pub fn observe_cards(document: &web::Document) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        _ = target.class_list().add_1(REVEAL_CLASS);
                        // revealed cards stay revealed
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;

        let cards = document
            .query_selector_all(PROJECT_CARD_SELECTOR)
            .map_err(|e| anyhow::anyhow!("query {}: {:?}", PROJECT_CARD_SELECTOR, e))?;
        let mut observed = 0;
        for i in 0..cards.length() {
            if let Some(el) = cards.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                observer.observe(&el);
                observed += 1;
            }
        }
        log::debug!("[reveal] observing {} cards", observed);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
