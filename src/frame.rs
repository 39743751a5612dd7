use crate::ambient::AmbientLayer;
use crate::core::PointerTracker;
use crate::dom;
use crate::input;
use crate::loader::LoaderView;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A single pending `requestAnimationFrame`.
///
/// `request` is a no-op while a frame is already pending, so any number of
/// requests within one refresh interval yield one callback.
pub struct FrameRequest {
    callback: Closure<dyn FnMut()>,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameRequest {
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let handle_cb = handle.clone();
        let callback = Closure::wrap(Box::new(move || {
            handle_cb.set(None);
            on_frame();
        }) as Box<dyn FnMut()>);
        Self { callback, handle }
    }

    pub fn request(&self) {
        if self.handle.get().is_some() {
            return;
        }
        if let Some(w) = web::window() {
            match w.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
                Ok(id) => self.handle.set(Some(id)),
                Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Per-frame state for everything that animates continuously.
pub struct FrameContext {
    pub window: web::Window,
    pub document: web::Document,
    pub tracker: Rc<RefCell<PointerTracker>>,
    pub loader: Option<LoaderView>,
    pub ambient: Option<AmbientLayer>,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Returns true on the frame that opens the loading gate.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        let viewport = dom::viewport_size(&self.window);
        let tracker = self.tracker.borrow();

        let mut revealed = false;
        if let Some(loader) = self.loader.as_mut() {
            let pct = input::viewport_pct(tracker.position(), viewport);
            if loader.tick(dt_sec, pct) {
                revealed = true;
            }
        }
        if revealed {
            // dropping the view tears the loader DOM down
            self.loader = None;
            dom::show(&self.document, crate::constants::MAIN_CONTENT_ID);
            log::info!("[loader] content revealed");
        }

        if let Some(ambient) = self.ambient.as_mut() {
            ambient.tick(dt_sec, viewport, &tracker);
        }
        revealed
    }
}

/// Continuous `requestAnimationFrame` loop. Stops when dropped.
pub struct AnimationLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
}

pub fn start_loop(
    frame_ctx: Rc<RefCell<FrameContext>>,
    mut on_reveal: impl FnMut() + 'static,
) -> AnimationLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let revealed = frame_ctx_tick.borrow_mut().frame();
        if revealed {
            on_reveal();
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            handle_clone.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
    AnimationLoop { tick, handle }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure -> tick cycle
        self.tick.borrow_mut().take();
    }
}
