use glam::Vec2;
use web_sys as web;

/// Pointer position of a click in viewport (client) coordinates.
#[inline]
pub fn click_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn is_escape(ev: &web::KeyboardEvent) -> bool {
    ev.key() == "Escape"
}
