use crate::constants::*;
use crate::core::{CapabilityProfile, CursorTrail, PointerTracker, RisingParticles};
use crate::dom;
use glam::Vec2;
use web_sys as web;

/// Cursor trail plus the rising particle layer.
///
/// Both reuse a pool of elements; surplus nodes are hidden instead of removed
/// so the DOM does not churn every frame.
pub struct AmbientLayer {
    document: web::Document,
    container: web::Element,
    particles: RisingParticles,
    particle_nodes: Vec<web::Element>,
    trail: CursorTrail,
    trail_nodes: Vec<web::Element>,
    seen_commits: u64,
}

impl AmbientLayer {
    pub fn mount(
        document: &web::Document,
        host: &web::Element,
        profile: &CapabilityProfile,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let container = dom::create_div(
            document,
            "ambient-layer",
            &format!("position:fixed;inset:0;pointer-events:none;z-index:{};", PARTICLE_LAYER_Z),
        )?;
        _ = container.set_attribute("aria-hidden", "true");
        dom::append(host, &container)?;
        Ok(Self {
            document: document.clone(),
            container,
            particles: RisingParticles::new(profile.particle_max, seed),
            particle_nodes: Vec::new(),
            trail: CursorTrail::new(profile.trail_len),
            trail_nodes: Vec::new(),
            seen_commits: 0,
        })
    }

    pub fn tick(&mut self, dt_sec: f32, viewport: Vec2, tracker: &PointerTracker) {
        if tracker.commits() != self.seen_commits {
            self.seen_commits = tracker.commits();
            self.trail.push(tracker.position());
            self.render_trail();
        }
        if self.particles.advance(dt_sec, viewport) > 0 {
            self.render_particles();
        }
    }

    fn render_particles(&mut self) {
        let styles: Vec<String> = self
            .particles
            .particles()
            .iter()
            .map(|p| {
                let f = p.fade();
                format!(
                    "position:absolute;left:{:.1}px;top:{:.1}px;width:{s}px;height:{s}px;background:#c084fc;border-radius:50%;opacity:{:.3};transform:scale({:.3});",
                    p.position.x,
                    p.position.y,
                    f,
                    f,
                    s = PARTICLE_SIZE_PX
                )
            })
            .collect();
        Self::sync_pool(&self.document, &self.container, &mut self.particle_nodes, "rising-particle", &styles);
    }

    fn render_trail(&mut self) {
        let styles: Vec<String> = self
            .trail
            .styled()
            .map(|(p, opacity, scale)| {
                format!(
                    "position:fixed;left:{:.1}px;top:{:.1}px;width:{s}px;height:{s}px;margin:-{h}px 0 0 -{h}px;border-radius:50%;background:radial-gradient(circle, rgba(192, 132, 252, 0.8) 0%, transparent 70%);pointer-events:none;z-index:{z};opacity:{:.3};transform:scale({:.3});",
                    p.position.x,
                    p.position.y,
                    opacity,
                    scale,
                    s = TRAIL_DOT_PX,
                    h = TRAIL_DOT_PX / 2.0,
                    z = TRAIL_Z
                )
            })
            .collect();
        Self::sync_pool(&self.document, &self.container, &mut self.trail_nodes, "cursor-trail", &styles);
    }

    fn sync_pool(
        document: &web::Document,
        container: &web::Element,
        pool: &mut Vec<web::Element>,
        class: &str,
        styles: &[String],
    ) {
        while pool.len() < styles.len() {
            match dom::create_div(document, class, "display:none;") {
                Ok(el) => {
                    if dom::append(container, &el).is_err() {
                        return;
                    }
                    pool.push(el);
                }
                Err(e) => {
                    log::error!("[ambient] {:?}", e);
                    return;
                }
            }
        }
        for (i, el) in pool.iter().enumerate() {
            let style = styles.get(i).map(String::as_str).unwrap_or("display:none;");
            _ = el.set_attribute("style", style);
        }
    }
}

impl Drop for AmbientLayer {
    fn drop(&mut self) {
        self.container.remove();
    }
}
