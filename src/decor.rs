use crate::constants::DECOR_KEYFRAMES;
use crate::core::profile::CapabilityProfile;
use crate::core::{DecorKind, DecorationField};
use crate::dom;
use web_sys as web;

/// Mounted sparkles, fires, ghosts and orbs.
///
/// The field is generated here, after the document exists, and never again
/// for the lifetime of the layer.
pub struct DecorLayer {
    field: DecorationField,
    nodes: Vec<web::Element>,
    keyframes: web::Element,
}

impl DecorLayer {
    pub fn mount(
        document: &web::Document,
        host: &web::Element,
        profile: &CapabilityProfile,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let field = DecorationField::generate(&profile.decor, seed);
        let keyframes = dom::inject_style(document, DECOR_KEYFRAMES)?;
        let mut layer = Self {
            field,
            nodes: Vec::new(),
            keyframes,
        };
        for (item, style) in layer.field.items().iter().zip(layer.field.render_styles()) {
            let el = dom::create_div(document, item.kind.class_name(), &style)?;
            _ = el.set_attribute("aria-hidden", "true");
            if item.kind == DecorKind::Ghost {
                for side in ["left", "right"] {
                    let eye = dom::create_div(
                        document,
                        "ghost-eye",
                        &format!("position:absolute;top:6px;{}:6px;width:4px;height:4px;background:#000;border-radius:50%;", side),
                    )?;
                    dom::append(&el, &eye)?;
                }
            }
            dom::append(host, &el)?;
            layer.nodes.push(el);
        }
        log::info!(
            "[decor] mounted {} items (seed {:#x})",
            layer.field.len(),
            layer.field.seed()
        );
        Ok(layer)
    }
}

impl Drop for DecorLayer {
    fn drop(&mut self) {
        for n in self.nodes.drain(..) {
            n.remove();
        }
        self.keyframes.remove();
        log::debug!("[decor] unmounted");
    }
}
