use crate::core::spotlight::{overlay_styles, OverlayFrame};
use crate::core::{CapabilityProfile, PointerTracker};
use crate::dom::{self, Listener};
use crate::events;
use crate::frame::FrameRequest;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const SHEET_BASE_STYLE: &str =
    "position:fixed;top:0;left:0;width:100vw;height:100vh;pointer-events:none;transition:background 0.1s ease-out;";

/// Full-viewport sheets that draw the spotlight.
///
/// Sheets are created lazily and hidden rather than destroyed when the frame
/// needs fewer of them (dark mode uses one, lit mode up to three).
pub struct SpotlightOverlay {
    document: web::Document,
    host: web::Element,
    sheets: Vec<web::Element>,
}

impl SpotlightOverlay {
    pub fn new(document: &web::Document, host: &web::Element) -> Self {
        Self {
            document: document.clone(),
            host: host.clone(),
            sheets: Vec::new(),
        }
    }

    pub fn apply(&mut self, frame: &OverlayFrame) {
        let styles = overlay_styles(frame);
        while self.sheets.len() < styles.len() {
            match dom::create_div(&self.document, "spotlight-layer", SHEET_BASE_STYLE) {
                Ok(el) => {
                    if let Err(e) = dom::append(&self.host, &el) {
                        log::error!("[spotlight] {:?}", e);
                        return;
                    }
                    self.sheets.push(el);
                }
                Err(e) => {
                    log::error!("[spotlight] {:?}", e);
                    return;
                }
            }
        }
        for (i, sheet) in self.sheets.iter().enumerate() {
            let style = match styles.get(i) {
                Some((z, bg)) => format!("{}z-index:{};background:{};", SHEET_BASE_STYLE, z, bg),
                None => format!("{}display:none;", SHEET_BASE_STYLE),
            };
            _ = sheet.set_attribute("style", &style);
        }
    }
}

impl Drop for SpotlightOverlay {
    fn drop(&mut self) {
        for s in self.sheets.drain(..) {
            s.remove();
        }
    }
}

/// Pointer-following spotlight: tracker, frame coalescing and the sheets.
///
/// Listeners run from mount so the tracker is warm; the sheets only appear
/// once [`Spotlight::show`] is called.
pub struct Spotlight {
    listeners: Vec<Listener>,
    frame: Rc<FrameRequest>,
    tracker: Rc<RefCell<PointerTracker>>,
    overlay: Rc<RefCell<Option<SpotlightOverlay>>>,
    profile: Rc<CapabilityProfile>,
}

impl Spotlight {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        tracker: Rc<RefCell<PointerTracker>>,
        profile: Rc<CapabilityProfile>,
    ) -> anyhow::Result<Self> {
        let overlay: Rc<RefCell<Option<SpotlightOverlay>>> = Rc::new(RefCell::new(None));
        let frame = {
            let tracker = tracker.clone();
            let overlay = overlay.clone();
            let profile = profile.clone();
            Rc::new(FrameRequest::new(move || {
                let mut t = tracker.borrow_mut();
                t.on_frame();
                if let Some(o) = overlay.borrow_mut().as_mut() {
                    o.apply(&t.overlay(&profile));
                }
            }))
        };
        let listeners = events::wire_pointer_handlers(
            window,
            document,
            &events::PointerWiring {
                tracker: tracker.clone(),
                frame: frame.clone(),
            },
        )?;
        log::info!(
            "[spotlight] mounted ({:?}, {} layers)",
            profile.class,
            profile.spotlight_layers.len()
        );
        Ok(Self {
            listeners,
            frame,
            tracker,
            overlay,
            profile,
        })
    }

    pub fn show(&self, document: &web::Document, host: &web::Element) {
        let mut overlay = SpotlightOverlay::new(document, host);
        overlay.apply(&self.tracker.borrow().overlay(&self.profile));
        *self.overlay.borrow_mut() = Some(overlay);
    }
}

impl Drop for Spotlight {
    fn drop(&mut self) {
        self.listeners.clear();
        self.frame.cancel();
        self.tracker.borrow_mut().cancel_pending();
        self.overlay.borrow_mut().take();
        log::debug!("[spotlight] unmounted");
    }
}
