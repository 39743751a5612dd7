pub mod constants;
pub mod decor;
pub mod fonts;
pub mod loader;
pub mod particles;
pub mod profile;
pub mod spotlight;
pub mod trail;

pub use decor::{DecorKind, Decoration, DecorationField};
pub use fonts::{FontCache, FontError, FontResponse, FontSource};
pub use loader::{GhostFollower, LoadingGate};
pub use particles::RisingParticles;
pub use profile::{CapabilityProfile, DeviceClass};
pub use spotlight::{OverlayFrame, PointerTracker};
pub use trail::CursorTrail;
