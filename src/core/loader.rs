use super::constants::{
    LOADER_FADE_SEC, LOADER_GHOST_EASE_SEC, LOADER_GHOST_FOLLOW, LOADER_PROGRESS_SEC,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Progress,
    FadingOut,
    Done,
}

/// Placeholder gate in front of the page content.
///
/// Progress eases from 0 to 100 over [`LOADER_PROGRESS_SEC`], the loader then
/// fades for [`LOADER_FADE_SEC`], and the gate opens. It never closes again.
#[derive(Debug)]
pub struct LoadingGate {
    elapsed: f32,
    phase: LoaderPhase,
    progress_sec: f32,
    fade_sec: f32,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(LOADER_PROGRESS_SEC, LOADER_FADE_SEC)
    }
}

impl LoadingGate {
    pub fn new(progress_sec: f32, fade_sec: f32) -> Self {
        Self {
            elapsed: 0.0,
            phase: LoaderPhase::Progress,
            progress_sec: progress_sec.max(0.0),
            fade_sec: fade_sec.max(0.0),
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == LoaderPhase::Done
    }

    /// Advance by `dt_sec`. Returns true on the one call that opens the gate.
    pub fn advance(&mut self, dt_sec: f32) -> bool {
        if self.phase == LoaderPhase::Done {
            return false;
        }
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.elapsed += dt_sec;
        }
        let next = if self.elapsed >= self.progress_sec + self.fade_sec {
            LoaderPhase::Done
        } else if self.elapsed >= self.progress_sec {
            LoaderPhase::FadingOut
        } else {
            LoaderPhase::Progress
        };
        if next != self.phase {
            log::debug!("[loader] {:?} -> {:?}", self.phase, next);
        }
        self.phase = next;
        self.phase == LoaderPhase::Done
    }

    /// 0..=100 with a power2-out (cubic) ease.
    pub fn progress(&self) -> f32 {
        if self.progress_sec <= 0.0 {
            return 100.0;
        }
        let t = (self.elapsed / self.progress_sec).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        eased * 100.0
    }

    /// Loader opacity, 1 while progressing, fading to 0 afterwards.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            LoaderPhase::Progress => 1.0,
            LoaderPhase::Done => 0.0,
            LoaderPhase::FadingOut => {
                if self.fade_sec <= 0.0 {
                    return 0.0;
                }
                let t = ((self.elapsed - self.progress_sec) / self.fade_sec).clamp(0.0, 1.0);
                // power2-in-out, cubic
                let eased = if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                };
                1.0 - eased
            }
        }
    }

    pub fn message(&self) -> &'static str {
        status_message(self.progress())
    }
}

pub fn status_message(progress: f32) -> &'static str {
    if progress < 30.0 {
        "Awakening the spirits..."
    } else if progress < 60.0 {
        "Conjuring dark magic..."
    } else if progress < 90.0 {
        "Weaving ethereal experiences..."
    } else {
        "Almost ready to haunt..."
    }
}

/// Loader ghost that drifts after the pointer.
///
/// Target is in viewport percent; output offset is in pixels from the
/// ghost's resting place at the centre of the screen.
#[derive(Debug, Default)]
pub struct GhostFollower {
    offset: Vec2,
}

impl GhostFollower {
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn target_for(pointer_pct: Vec2) -> Vec2 {
        (pointer_pct - Vec2::splat(50.0)) * LOADER_GHOST_FOLLOW
    }

    /// Exponential approach; covers ~95% of the gap in LOADER_GHOST_EASE_SEC.
    pub fn step(&mut self, pointer_pct: Vec2, dt_sec: f32) -> Vec2 {
        let target = Self::target_for(pointer_pct);
        let tau = LOADER_GHOST_EASE_SEC / 3.0;
        let k = 1.0 - (-dt_sec.max(0.0) / tau).exp();
        self.offset += (target - self.offset) * k;
        self.offset
    }
}
