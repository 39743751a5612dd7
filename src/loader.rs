use crate::constants::*;
use crate::core::{GhostFollower, LoadingGate};
use crate::dom;
use glam::Vec2;
use web_sys as web;

const ROOT_STYLE: &str =
    "position:fixed;inset:0;display:flex;flex-direction:column;align-items:center;justify-content:center;background-color:#000000;";

/// DOM for the loading screen, driven by a [`LoadingGate`].
pub struct LoaderView {
    gate: LoadingGate,
    ghost: GhostFollower,
    root: web::Element,
    bar: web::Element,
    percent: web::Element,
    message: web::Element,
    ghost_el: web::Element,
    keyframes: web::Element,
}

impl LoaderView {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let root = match document.get_element_by_id(LOADER_ROOT_ID) {
            Some(el) => el,
            None => {
                let el = dom::create_div(document, "", "")?;
                el.set_id(LOADER_ROOT_ID);
                dom::append(&dom::effects_host(document)?, &el)?;
                el
            }
        };
        _ = root.set_attribute("style", &format!("{}z-index:{};", ROOT_STYLE, LOADER_Z));
        root.set_inner_html("");

        let keyframes = dom::inject_style(document, LOADER_KEYFRAMES)?;

        let ghost_el = dom::create_div(
            document,
            "loader-ghost",
            &ghost_style(Vec2::ZERO),
        )?;
        for side in ["left", "right"] {
            let eye = dom::create_div(
                document,
                "ghost-eye",
                &format!("position:absolute;top:10px;{}:10px;width:6px;height:6px;background:#000;border-radius:50%;", side),
            )?;
            dom::append(&ghost_el, &eye)?;
        }
        dom::append(&root, &ghost_el)?;

        let ui = dom::create_div(document, "loader-ui", "position:absolute;bottom:80px;text-align:center;")?;
        let title = dom::create_div(document, "loader-title", "font-size:1.5rem;font-weight:700;color:#c084fc;margin-bottom:8px;")?;
        title.set_text_content(Some("PHANTOM3"));
        let tagline = dom::create_div(document, "loader-tagline", "font-size:1.125rem;color:#d1d5db;margin-bottom:24px;")?;
        tagline.set_text_content(Some("Materializing the ethereal..."));
        let track = dom::create_div(
            document,
            "loader-track",
            "width:320px;height:8px;background:#1f2937;border-radius:9999px;overflow:hidden;margin-bottom:16px;",
        )?;
        let bar = dom::create_div(document, "loader-bar", &bar_style(0.0))?;
        dom::append(&track, &bar)?;
        let percent = dom::create_div(document, "loader-percent", "font-size:0.875rem;color:#9ca3af;")?;
        let message = dom::create_div(document, "loader-message", "margin-top:16px;font-size:0.875rem;color:#d8b4fe;opacity:0.7;")?;
        for el in [&title, &tagline, &track, &percent, &message] {
            dom::append(&ui, el)?;
        }
        dom::append(&root, &ui)?;

        let view = Self {
            gate: LoadingGate::default(),
            ghost: GhostFollower::default(),
            root,
            bar,
            percent,
            message,
            ghost_el,
            keyframes,
        };
        view.render();
        log::info!("[loader] mounted");
        Ok(view)
    }

    /// Advance the gate; true once, when the page may be revealed.
    pub fn tick(&mut self, dt_sec: f32, pointer_pct: Vec2) -> bool {
        let opened = self.gate.advance(dt_sec);
        self.ghost.step(pointer_pct, dt_sec);
        if !opened {
            self.render();
        }
        opened
    }

    fn render(&self) {
        let progress = self.gate.progress();
        _ = self.bar.set_attribute("style", &bar_style(progress));
        self.percent
            .set_text_content(Some(&format!("{}% Complete", progress.round() as i32)));
        self.message.set_text_content(Some(self.gate.message()));
        _ = self.ghost_el.set_attribute("style", &ghost_style(self.ghost.offset()));
        _ = self.root.set_attribute(
            "style",
            &format!("{}z-index:{};opacity:{:.3};", ROOT_STYLE, LOADER_Z, self.gate.opacity()),
        );
    }
}

impl Drop for LoaderView {
    fn drop(&mut self) {
        self.keyframes.remove();
        self.root.remove();
    }
}

fn bar_style(progress: f32) -> String {
    format!(
        "height:100%;width:{:.1}%;background:linear-gradient(to right, #9333ea, #0891b2);transition:width 0.3s ease-out;",
        progress.clamp(0.0, 100.0)
    )
}

fn ghost_style(offset: Vec2) -> String {
    format!(
        "position:fixed;left:calc(50% + {x:.1}px - {h}px);top:calc(50% + {y:.1}px - {h}px);width:{s}px;height:{s}px;pointer-events:none;z-index:{z};background:rgba(255, 255, 255, 0.9);border-radius:50% 50% 50% 50% / 60% 60% 40% 40%;box-shadow:0 0 20px rgba(255, 255, 255, 0.6), inset 0 0 15px rgba(139, 92, 246, 0.3);animation:ghostFloat 3s ease-in-out infinite;",
        s = LOADER_GHOST_PX,
        h = LOADER_GHOST_PX / 2.0,
        z = LOADER_GHOST_Z,
        x = offset.x,
        y = offset.y
    )
}
