use crate::core::PointerTracker;
use crate::dom::{self, Listener};
use crate::frame::FrameRequest;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub tracker: Rc<RefCell<PointerTracker>>,
    pub frame: Rc<FrameRequest>,
}

/// Feed pointer, touch, leave and resize events into the tracker.
///
/// Handlers only record samples; the frame callback applies them. Dropping
/// the returned listeners unhooks everything.
pub fn wire_pointer_handlers(
    window: &web::Window,
    document: &web::Document,
    w: &PointerWiring,
) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointermove(window, w)?,
        wire_touch(window, "touchstart", w)?,
        wire_touch(window, "touchmove", w)?,
        wire_mouseleave(document, w)?,
        wire_resize(window, w)?,
    ])
}

fn wire_pointermove(window: &web::Window, w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    Listener::new(window, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::mouse_viewport_px(&ev);
        if w.tracker.borrow_mut().on_move(pos) {
            w.frame.request();
        }
    })
}

fn wire_touch(window: &web::Window, event: &'static str, w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    Listener::new(window, event, move |ev: web::TouchEvent| {
        let Some(pos) = input::touch_viewport_px(&ev) else {
            return;
        };
        if w.tracker.borrow_mut().on_move(pos) {
            w.frame.request();
        }
    })
}

fn wire_mouseleave(document: &web::Document, w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    Listener::new(document, "mouseleave", move |_ev: web::MouseEvent| {
        w.tracker.borrow_mut().on_leave();
        w.frame.request();
    })
}

fn wire_resize(window: &web::Window, w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let window_for_size = window.clone();
    Listener::new(window, "resize", move |_ev: web::Event| {
        let viewport = dom::viewport_size(&window_for_size);
        w.tracker.borrow_mut().resize(viewport);
        w.frame.request();
    })
}
