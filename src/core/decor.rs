// Ambient decorations: sparkles, spinning fires, ghosts and floating orbs.
// Generation is a pure, seeded function; the web layer calls it once per
// mount and only reads the resulting field afterwards.

use super::constants::*;
use super::profile::DecorCounts;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorKind {
    Sparkle,
    Fire,
    Ghost,
    Orb,
}

impl DecorKind {
    pub const ALL: [DecorKind; 4] = [Self::Sparkle, Self::Fire, Self::Ghost, Self::Orb];

    /// CSS class, also used as the keyframes name prefix.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Sparkle => "floating-sparkle",
            Self::Fire => "spinning-fire",
            Self::Ghost => "spinning-ghost",
            Self::Orb => "floating-orb",
        }
    }

    pub fn keyframes(self) -> &'static str {
        match self {
            Self::Sparkle => "sparkle",
            Self::Fire => "spinFire",
            Self::Ghost => "spinGhost",
            Self::Orb => "floatOrb",
        }
    }

    pub fn easing(self) -> &'static str {
        match self {
            Self::Fire => "linear",
            _ => "ease-in-out",
        }
    }

    pub fn count(self, counts: &DecorCounts) -> usize {
        match self {
            Self::Sparkle => counts.sparkles,
            Self::Fire => counts.fires,
            Self::Ghost => counts.ghosts,
            Self::Orb => counts.orbs,
        }
    }

    pub fn bounds(self) -> DecorBounds {
        match self {
            Self::Sparkle => DecorBounds {
                size: SPARKLE_SIZE_RANGE,
                duration: SPARKLE_DURATION_RANGE,
                delay: (0.0, SPARKLE_DELAY_MAX),
                palette: &SPARKLE_PALETTE,
                colors: ColorPick::Uniform,
            },
            Self::Fire => DecorBounds {
                size: (FIRE_SIZE, FIRE_SIZE),
                duration: (FIRE_DURATION, FIRE_DURATION),
                delay: (0.0, FIRE_DELAY_MAX),
                palette: &[FIRE_COLOR],
                colors: ColorPick::Uniform,
            },
            Self::Ghost => DecorBounds {
                size: (GHOST_SIZE, GHOST_SIZE),
                duration: (GHOST_DURATION, GHOST_DURATION),
                delay: (0.0, GHOST_DELAY_MAX),
                palette: &GHOST_PALETTE,
                colors: ColorPick::InOrder,
            },
            Self::Orb => DecorBounds {
                size: (ORB_SIZE, ORB_SIZE),
                duration: (ORB_DURATION, ORB_DURATION),
                delay: (0.0, ORB_DELAY_MAX),
                palette: &ORB_PALETTE,
                colors: ColorPick::Uniform,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorPick {
    Uniform,
    /// Item `i` takes palette entry `i` (wrapping).
    InOrder,
}

/// Inclusive ranges the generator draws from.
#[derive(Clone, Copy, Debug)]
pub struct DecorBounds {
    pub size: (f32, f32),
    pub duration: (f32, f32),
    pub delay: (f32, f32),
    pub palette: &'static [&'static str],
    pub colors: ColorPick,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    pub kind: DecorKind,
    /// Percent of the viewport, 0..=100 on both axes.
    pub position: Vec2,
    pub color: &'static str,
    pub size_px: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
}

impl Decoration {
    /// Inline style for the element rendering this item.
    pub fn style(&self) -> String {
        let size = self.size_px;
        let glow = match self.kind {
            DecorKind::Sparkle => format!(
                "background:{c};border-radius:50%;box-shadow:0 0 {a}px {c}, 0 0 {b}px {c};transform:translate(-50%, -50%);",
                c = self.color,
                a = size * 2.0,
                b = size * 4.0
            ),
            DecorKind::Fire => format!(
                "background:radial-gradient(circle, #ff6b35 0%, #f7931e 30%, #ffd23f 70%, transparent 100%);border-radius:50%;filter:blur(1px);box-shadow:0 0 12px {c}, 0 0 24px #f7931e;",
                c = self.color
            ),
            DecorKind::Ghost => format!(
                "background:{c};border-radius:50% 50% 50% 50% / 60% 60% 40% 40%;box-shadow:0 0 15px {c}, inset 0 0 10px rgba(139, 92, 246, 0.3);",
                c = self.color
            ),
            DecorKind::Orb => format!(
                "background:radial-gradient(circle, {c} 0%, transparent 70%);border-radius:50%;box-shadow:0 0 10px {c};",
                c = self.color
            ),
        };
        format!(
            "position:fixed;left:{:.3}%;top:{:.3}%;width:{:.2}px;height:{:.2}px;pointer-events:none;z-index:{};animation:{} {:.3}s {} infinite;animation-delay:{:.3}s;{}",
            self.position.x,
            self.position.y,
            size,
            size,
            if self.kind == DecorKind::Ghost { 1 } else { 1000 },
            self.kind.keyframes(),
            self.duration_sec,
            self.kind.easing(),
            self.delay_sec,
            glow
        )
    }
}

fn draw(rng: &mut StdRng, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

/// Generate `count` items of `kind`. Same seed, same output.
pub fn generate(kind: DecorKind, count: usize, seed: u64, bounds: &DecorBounds) -> Vec<Decoration> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let position = Vec2::new(rng.gen_range(0.0..=100.0), rng.gen_range(0.0..=100.0));
            let size_px = draw(&mut rng, bounds.size);
            let color = match (bounds.colors, bounds.palette.is_empty()) {
                (_, true) => "#FFFFFF",
                (ColorPick::Uniform, false) => bounds.palette[rng.gen_range(0..bounds.palette.len())],
                (ColorPick::InOrder, false) => bounds.palette[i % bounds.palette.len()],
            };
            let duration_sec = draw(&mut rng, bounds.duration);
            let delay_sec = draw(&mut rng, bounds.delay);
            Decoration {
                kind,
                position,
                color,
                size_px,
                duration_sec,
                delay_sec,
            }
        })
        .collect()
}

/// Every decoration for one mount, generated once and never mutated.
#[derive(Debug)]
pub struct DecorationField {
    items: Box<[Decoration]>,
    seed: u64,
}

impl DecorationField {
    pub fn generate(counts: &DecorCounts, seed: u64) -> Self {
        let items = DecorKind::ALL
            .iter()
            .enumerate()
            .flat_map(|(k, kind)| {
                // Separate stream per kind so changing one count leaves the others alone
                let kind_seed = seed ^ (k as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                generate(*kind, kind.count(counts), kind_seed, &kind.bounds())
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { items, seed }
    }

    pub fn items(&self) -> &[Decoration] {
        &self.items
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn of_kind(&self, kind: DecorKind) -> impl Iterator<Item = &Decoration> {
        self.items.iter().filter(move |d| d.kind == kind)
    }

    /// Inline styles, in item order. Pure, so re-rendering cannot reshuffle.
    pub fn render_styles(&self) -> Vec<String> {
        self.items.iter().map(Decoration::style).collect()
    }
}
