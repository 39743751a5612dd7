use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS pixel size of the layout viewport; zero when unknown.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E, F>(target: &web::EventTarget, event: &'static str, mut handler: F) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn create_div(document: &web::Document, class: &str, style: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div: {:?}", e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    _ = el.set_attribute("style", style);
    Ok(el)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append child: {:?}", e))
}

/// Attach a `<style>` element to `<head>`; remove it with `Element::remove`.
pub fn inject_style(document: &web::Document, css: &str) -> anyhow::Result<web::Element> {
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("create style: {:?}", e))?;
    style.set_text_content(Some(css));
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("append style: {:?}", e))?;
    Ok(style)
}

/// Element to host fixed-position effects: `#effects-root` if present,
/// otherwise `<body>`.
pub fn effects_host(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(crate::constants::EFFECTS_ROOT_ID) {
        return Ok(el);
    }
    document
        .body()
        .map(Into::into)
        .ok_or_else(|| anyhow::anyhow!("no <body>"))
}

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(crate::constants::HIDDEN_CLASS);
        // fallback for environments without the CSS class
        _ = el.remove_attribute("aria-hidden");
        if el.get_attribute("style").is_some_and(|s| s.contains("display:none")) {
            _ = el.set_attribute("style", "");
        }
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(crate::constants::HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "true");
        _ = el.set_attribute("style", "display:none");
    }
}
