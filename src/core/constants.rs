// Effect tuning shared by the core and the web shell.

// Viewports narrower than this are treated as constrained (phones)
pub const CONSTRAINED_MAX_WIDTH_PX: f32 = 768.0;

// Spotlight gradient layers: (radius px, clear stop 0..1, edge alpha)
pub const SPOTLIGHT_DESKTOP_LAYERS: [(f32, f32, f32); 3] =
    [(150.0, 0.8, 0.3), (300.0, 0.5, 0.7), (500.0, 0.3, 0.95)];
pub const SPOTLIGHT_CONSTRAINED_LAYER: (f32, f32, f32) = (220.0, 0.3, 0.95);
pub const SPOTLIGHT_DARKNESS_ALPHA: f32 = 0.95; // mouse left the page
pub const SPOTLIGHT_BASE_Z: i32 = 9999; // innermost layer, outer layers stack below

// Decoration counts on a desktop-class viewport
pub const SPARKLE_COUNT: usize = 25;
pub const FIRE_COUNT: usize = 8;
pub const GHOST_COUNT: usize = 6;
pub const ORB_COUNT: usize = 12;

// Decoration timing (seconds) and sizing (px)
pub const SPARKLE_SIZE_RANGE: (f32, f32) = (1.0, 3.0);
pub const SPARKLE_DURATION_RANGE: (f32, f32) = (2.0, 5.0);
pub const SPARKLE_DELAY_MAX: f32 = 5.0;
pub const FIRE_DURATION: f32 = 3.0;
pub const FIRE_DELAY_MAX: f32 = 3.0;
pub const FIRE_SIZE: f32 = 12.0;
pub const GHOST_DURATION: f32 = 4.0;
pub const GHOST_DELAY_MAX: f32 = 4.0;
pub const GHOST_SIZE: f32 = 25.0;
pub const ORB_DURATION: f32 = 6.0;
pub const ORB_DELAY_MAX: f32 = 6.0;
pub const ORB_SIZE: f32 = 8.0;

// Palettes
pub const SPARKLE_PALETTE: [&str; 8] = [
    "#FFD700", "#FF69B4", "#00FFFF", "#90EE90", "#FF6347", "#DDA0DD", "#F0E68C", "#87CEEB",
];
pub const ORB_PALETTE: [&str; 8] = [
    "#8B5CF6", "#EC4899", "#10B981", "#F59E0B", "#EF4444", "#3B82F6", "#06B6D4", "#84CC16",
];
// One colour per ghost, handed out in order
pub const GHOST_PALETTE: [&str; 6] = [
    "rgba(255, 255, 255, 0.8)",
    "rgba(139, 92, 246, 0.8)",
    "rgba(236, 72, 153, 0.8)",
    "rgba(59, 130, 246, 0.8)",
    "rgba(16, 185, 129, 0.8)",
    "rgba(245, 158, 11, 0.8)",
];
pub const FIRE_COLOR: &str = "#ff6b35";

// Loading gate
pub const LOADER_PROGRESS_SEC: f32 = 3.0;
pub const LOADER_FADE_SEC: f32 = 1.0;
pub const LOADER_GHOST_FOLLOW: f32 = 0.3; // fraction of pointer offset from centre (pct units)
pub const LOADER_GHOST_EASE_SEC: f32 = 0.8;

// Cursor trail
pub const TRAIL_LEN: usize = 9;
pub const TRAIL_MAX_OPACITY: f32 = 0.5;

// Rising particles
pub const PARTICLE_STEP_SEC: f32 = 0.05;
pub const PARTICLE_SPAWN_CHANCE: f32 = 0.1;
pub const PARTICLE_MAX_DESKTOP: usize = 20;
pub const PARTICLE_MAX_CONSTRAINED: usize = 8;
pub const PARTICLE_SPAWN_BELOW_PX: f32 = 10.0;
pub const PARTICLE_ESCAPE_ABOVE_PX: f32 = -10.0;
pub const PARTICLE_LIFE_RANGE: (u32, u32) = (100, 200);

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Fonts
pub const FONT_MIN_BYTES: usize = 100;
pub const FALLBACK_FONT: &str = "/fonts/helvetiker_regular.typeface.json";
pub const LOCAL_FONT: &str = "/fonts/Inter-Bold.woff";
pub const SYSTEM_FONT: &str = "/fonts/helvetiker_bold.typeface.json";
