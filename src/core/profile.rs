use super::constants::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Constrained,
}

/// One radial gradient ring of the spotlight.
///
/// Transparent from the centre out to `clear_stop * radius_px`, then fades to
/// black at `edge_alpha` on the rim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientLayer {
    pub radius_px: f32,
    pub clear_stop: f32,
    pub edge_alpha: f32,
}

impl GradientLayer {
    const fn from_tuple(t: (f32, f32, f32)) -> Self {
        Self {
            radius_px: t.0,
            clear_stop: t.1,
            edge_alpha: t.2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecorCounts {
    pub sparkles: usize,
    pub fires: usize,
    pub ghosts: usize,
    pub orbs: usize,
}

impl DecorCounts {
    pub fn total(&self) -> usize {
        self.sparkles + self.fires + self.ghosts + self.orbs
    }
}

/// Device capability profile.
///
/// Resolved once at startup from the viewport and handed to every effect, so
/// width checks live in exactly one place.
#[derive(Clone, Debug)]
pub struct CapabilityProfile {
    pub class: DeviceClass,
    /// Innermost layer first.
    pub spotlight_layers: SmallVec<[GradientLayer; 3]>,
    pub decor: DecorCounts,
    pub particle_max: usize,
    pub trail_len: usize,
}

impl CapabilityProfile {
    pub fn desktop() -> Self {
        Self {
            class: DeviceClass::Desktop,
            spotlight_layers: SPOTLIGHT_DESKTOP_LAYERS
                .iter()
                .copied()
                .map(GradientLayer::from_tuple)
                .collect(),
            decor: DecorCounts {
                sparkles: SPARKLE_COUNT,
                fires: FIRE_COUNT,
                ghosts: GHOST_COUNT,
                orbs: ORB_COUNT,
            },
            particle_max: PARTICLE_MAX_DESKTOP,
            trail_len: TRAIL_LEN,
        }
    }

    pub fn constrained() -> Self {
        let halve = |n: usize| n.div_ceil(2);
        let mut layers = SmallVec::new();
        layers.push(GradientLayer::from_tuple(SPOTLIGHT_CONSTRAINED_LAYER));
        Self {
            class: DeviceClass::Constrained,
            spotlight_layers: layers,
            decor: DecorCounts {
                sparkles: halve(SPARKLE_COUNT),
                fires: halve(FIRE_COUNT),
                ghosts: halve(GHOST_COUNT),
                orbs: halve(ORB_COUNT),
            },
            particle_max: PARTICLE_MAX_CONSTRAINED,
            trail_len: 0,
        }
    }

    /// Pick a profile from the viewport width in CSS pixels.
    ///
    /// Non-finite or non-positive widths mean the viewport is not known yet;
    /// those fall back to the desktop profile.
    pub fn from_viewport_width(width_px: f32) -> Self {
        if width_px.is_finite() && width_px > 0.0 && width_px < CONSTRAINED_MAX_WIDTH_PX {
            Self::constrained()
        } else {
            Self::desktop()
        }
    }

    pub fn is_constrained(&self) -> bool {
        self.class == DeviceClass::Constrained
    }
}
