// DOM hooks and stylesheet snippets used by the web shell.

// Element ids expected in index.html
pub const LOADER_ROOT_ID: &str = "loader-root";
pub const MAIN_CONTENT_ID: &str = "main-content";
pub const EFFECTS_ROOT_ID: &str = "effects-root";

// Selectors / classes
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const REVEAL_CLASS: &str = "fade-in-up";
pub const HIDDEN_CLASS: &str = "hidden";

// Stacking
pub const LOADER_Z: i32 = 50;
pub const LOADER_GHOST_Z: i32 = 40;
pub const PARTICLE_LAYER_Z: i32 = 10;
pub const TRAIL_Z: i32 = 10000;

// Sizes (px)
pub const PARTICLE_SIZE_PX: f32 = 8.0;
pub const TRAIL_DOT_PX: f32 = 10.0;
pub const LOADER_GHOST_PX: f32 = 40.0;

pub const DECOR_KEYFRAMES: &str = r#"
@keyframes sparkle {
  0%, 100% { opacity: 0.3; transform: translate(-50%, -50%) scale(0.8) rotate(0deg); }
  50% { opacity: 1; transform: translate(-50%, -50%) scale(1.2) rotate(180deg); }
}
@keyframes spinFire {
  0% { transform: rotate(0deg) scale(1); opacity: 0.8; }
  25% { transform: rotate(90deg) scale(1.2); opacity: 1; }
  50% { transform: rotate(180deg) scale(0.9); opacity: 0.6; }
  75% { transform: rotate(270deg) scale(1.1); opacity: 1; }
  100% { transform: rotate(360deg) scale(1); opacity: 0.8; }
}
@keyframes spinGhost {
  0% { transform: rotate(0deg) translateY(0px); opacity: 0.7; }
  25% { transform: rotate(90deg) translateY(-10px); opacity: 1; }
  50% { transform: rotate(180deg) translateY(0px); opacity: 0.8; }
  75% { transform: rotate(270deg) translateY(-5px); opacity: 0.9; }
  100% { transform: rotate(360deg) translateY(0px); opacity: 0.7; }
}
@keyframes floatOrb {
  0%, 100% { transform: translateY(0px) scale(1); opacity: 0.6; }
  33% { transform: translateY(-20px) scale(1.1); opacity: 1; }
  66% { transform: translateY(-10px) scale(0.9); opacity: 0.8; }
}
"#;

pub const LOADER_KEYFRAMES: &str = r#"
@keyframes ghostFloat {
  0%, 100% { transform: rotate(-5deg) translateY(0px) scale(1); }
  50% { transform: rotate(5deg) translateY(-10px) scale(1.05); }
}
"#;
