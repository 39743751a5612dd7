#![cfg(target_arch = "wasm32")]
use crate::core::{CapabilityProfile, FontCache, PointerTracker};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod ambient;
mod constants;
pub mod core;
mod decor;
mod dom;
mod events;
mod fonts;
mod frame;
mod input;
mod loader;
mod overlay;
mod reveal;

/// Everything mounted on the page. Dropping it unhooks all listeners,
/// cancels pending frames and removes the injected DOM.
#[allow(dead_code)] // several fields are only held for their Drop
struct Page {
    // dropped first so no frame fires into a half torn-down page
    animation: Option<frame::AnimationLoop>,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    spotlight: overlay::Spotlight,
    decor: Option<decor::DecorLayer>,
    reveal: Option<reveal::ScrollReveal>,
    fonts: Rc<RefCell<FontCache>>,
    document: web::Document,
    profile: Rc<CapabilityProfile>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

impl Page {
    /// Runs once, when the loading gate opens.
    fn mount_effects(&mut self) -> anyhow::Result<()> {
        if self.decor.is_some() {
            return Ok(());
        }
        let host = dom::effects_host(&self.document)?;
        let seed = random_seed();

        self.spotlight.show(&self.document, &host);
        self.decor = Some(decor::DecorLayer::mount(
            &self.document,
            &host,
            &self.profile,
            seed,
        )?);
        let ambient =
            ambient::AmbientLayer::mount(&self.document, &host, &self.profile, seed.rotate_left(17))?;
        self.frame_ctx.borrow_mut().ambient = Some(ambient);

        self.reveal = match reveal::ScrollReveal::observe_cards(&self.document) {
            Ok(r) => Some(r),
            Err(e) => {
                log::warn!("scroll reveal unavailable: {:?}", e);
                None
            }
        };
        Ok(())
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

fn on_revealed() {
    PAGE.with(|p| {
        if let Some(page) = p.borrow_mut().as_mut() {
            if let Err(e) = page.mount_effects() {
                log::error!("effects mount error: {:?}", e);
            }
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("phantom-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Tear the page effects down. Safe to call more than once.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if page.is_some() {
        drop(page);
        log::info!("phantom-web unmounted");
    }
}

fn init() -> anyhow::Result<()> {
    if PAGE.with(|p| p.borrow().is_some()) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Resolved once; effects never look at the viewport width themselves
    let viewport = dom::viewport_size(&window);
    let profile = Rc::new(CapabilityProfile::from_viewport_width(viewport.x));
    log::info!(
        "[profile] {:?} for {:.0}x{:.0} viewport",
        profile.class,
        viewport.x,
        viewport.y
    );

    let tracker = Rc::new(RefCell::new(PointerTracker::new(viewport)));

    // Anything fallible must run before the content is hidden
    let spotlight = overlay::Spotlight::mount(&window, &document, tracker.clone(), profile.clone())?;

    dom::hide(&document, constants::MAIN_CONTENT_ID);
    let loader = match loader::LoaderView::mount(&document) {
        Ok(l) => Some(l),
        Err(e) => {
            log::error!("loader mount error: {:?}", e);
            None
        }
    };
    let loader_skipped = loader.is_none();
    if loader_skipped {
        dom::show(&document, constants::MAIN_CONTENT_ID);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        window: window.clone(),
        document: document.clone(),
        tracker,
        loader,
        ambient: None,
        last_instant: Instant::now(),
    }));

    let font_cache = Rc::new(RefCell::new(FontCache::new()));
    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            animation: None,
            frame_ctx: frame_ctx.clone(),
            spotlight,
            decor: None,
            reveal: None,
            fonts: font_cache.clone(),
            document,
            profile,
        });
    });

    // Start RAF loop
    let animation = frame::start_loop(frame_ctx, on_revealed);
    PAGE.with(|p| {
        if let Some(page) = p.borrow_mut().as_mut() {
            page.animation = Some(animation);
        }
    });
    if loader_skipped {
        on_revealed();
    }

    spawn_local(async move {
        // the cache is taken out for the await so no RefCell borrow spans it
        let mut cache = std::mem::take(&mut *font_cache.borrow_mut());
        fonts::preload_display_font(window, &mut cache).await;
        *font_cache.borrow_mut() = cache;
    });
    Ok(())
}
