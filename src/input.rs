use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn mouse_viewport_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// First active touch, in viewport pixels.
#[inline]
pub fn touch_viewport_px(ev: &web::TouchEvent) -> Option<Vec2> {
    let t = ev.touches().get(0)?;
    Some(Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

/// Viewport pixels to 0..=100 percent; centre when the viewport is unknown.
#[inline]
pub fn viewport_pct(px: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x > 0.0 && viewport.y > 0.0 {
        (px / viewport * 100.0).clamp(Vec2::ZERO, Vec2::splat(100.0))
    } else {
        Vec2::splat(50.0)
    }
}
