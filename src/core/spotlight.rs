use super::constants::{SPOTLIGHT_BASE_Z, SPOTLIGHT_DARKNESS_ALPHA};
use super::profile::{CapabilityProfile, GradientLayer};
use glam::Vec2;
use smallvec::SmallVec;

/// Collects high-frequency samples and hands out at most one per frame.
///
/// `push` reports whether a frame callback has to be requested; only the
/// first sample after a flush does. `take` is called from the frame callback
/// and yields the newest sample, if any.
#[derive(Debug)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    scheduled: bool,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self {
            pending: None,
            scheduled: false,
        }
    }
}

impl<T> FrameCoalescer<T> {
    pub fn push(&mut self, value: T) -> bool {
        self.pending = Some(value);
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    pub fn take(&mut self) -> Option<T> {
        self.scheduled = false;
        self.pending.take()
    }

    /// Drop any pending sample; the caller cancels its frame request.
    pub fn cancel(&mut self) {
        self.scheduled = false;
        self.pending = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

/// What the overlay should currently draw.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayFrame {
    /// Pointer left the page: a single opaque sheet.
    Dark,
    /// Gradient rings centred on the pointer, innermost first.
    Lit {
        center: Vec2,
        layers: SmallVec<[GradientLayer; 3]>,
    },
}

/// Pointer position state behind the spotlight overlay.
#[derive(Debug)]
pub struct PointerTracker {
    position: Vec2,
    viewport: Vec2,
    on_page: bool,
    commits: u64,
    coalescer: FrameCoalescer<Vec2>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl PointerTracker {
    /// A zero viewport means "not known yet"; position stays at the origin
    /// until `resize` provides real bounds.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            position: viewport * 0.5,
            viewport,
            on_page: true,
            commits: 0,
            coalescer: FrameCoalescer::default(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_on_page(&self) -> bool {
        self.on_page
    }

    /// Number of frames that changed the tracked position.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Record a pointer sample. Returns true when a frame must be requested.
    pub fn on_move(&mut self, sample: Vec2) -> bool {
        self.coalescer.push(sample)
    }

    /// Apply the newest sample from this frame, if any.
    pub fn on_frame(&mut self) -> Option<Vec2> {
        let sample = self.coalescer.take()?;
        self.position = self.clamp(sample);
        self.on_page = true;
        self.commits += 1;
        Some(self.position)
    }

    /// Pointer left the page. Samples still pending for this frame are stale.
    pub fn on_leave(&mut self) {
        self.coalescer.cancel();
        self.on_page = false;
    }

    pub fn resize(&mut self, viewport: Vec2) {
        let was_unknown = self.viewport.x <= 0.0 || self.viewport.y <= 0.0;
        self.viewport = viewport;
        if was_unknown && self.commits == 0 {
            self.position = viewport * 0.5;
        } else {
            self.position = self.clamp(self.position);
        }
    }

    pub fn has_pending(&self) -> bool {
        self.coalescer.is_scheduled()
    }

    pub fn cancel_pending(&mut self) {
        self.coalescer.cancel();
    }

    pub fn overlay(&self, profile: &CapabilityProfile) -> OverlayFrame {
        if !self.on_page {
            return OverlayFrame::Dark;
        }
        OverlayFrame::Lit {
            center: self.position,
            layers: profile.spotlight_layers.clone(),
        }
    }

    fn clamp(&self, p: Vec2) -> Vec2 {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return p;
        }
        p.clamp(Vec2::ZERO, self.viewport)
    }
}

/// CSS `background` value for one ring.
pub fn gradient_css(layer: &GradientLayer, center: Vec2) -> String {
    format!(
        "radial-gradient(circle {:.0}px at {:.1}px {:.1}px, transparent 0%, transparent {:.0}%, rgba(0, 0, 0, {}) 100%)",
        layer.radius_px,
        center.x,
        center.y,
        layer.clear_stop * 100.0,
        layer.edge_alpha
    )
}

pub fn darkness_css() -> String {
    format!("rgba(0, 0, 0, {})", SPOTLIGHT_DARKNESS_ALPHA)
}

/// `(z-index, background)` for every sheet the overlay needs this frame.
pub fn overlay_styles(frame: &OverlayFrame) -> SmallVec<[(i32, String); 3]> {
    match frame {
        OverlayFrame::Dark => {
            let mut out = SmallVec::new();
            out.push((SPOTLIGHT_BASE_Z, darkness_css()));
            out
        }
        OverlayFrame::Lit { center, layers } => layers
            .iter()
            .enumerate()
            .map(|(i, l)| (SPOTLIGHT_BASE_Z - i as i32, gradient_css(l, *center)))
            .collect(),
    }
}
