//! Pointer and canvas sizing helpers.
//!
//! The globe works in CSS pixels throughout: pointer offsets, hit radius,
//! click slop and marker sizes. Only the canvas backing store is scaled by
//! the device pixel ratio, and `CanvasSurface` undoes that with a transform.

use glam::DVec2;
use web_sys as web;

/// Backing-store size for an element of `css_size` CSS pixels. `None` when
/// the element is not laid out (zero area, e.g. inside a hidden panel), in
/// which case the current backing size should be kept.
#[inline]
pub fn backing_size(css_size: DVec2, dpr: f64) -> Option<(u32, u32)> {
    if css_size.x <= 0.0 || css_size.y <= 0.0 {
        return None;
    }
    let dpr = if dpr > 0.0 { dpr } else { 1.0 };
    let px = (css_size * dpr).round().max(DVec2::ONE);
    Some((px.x as u32, px.y as u32))
}

/// Drawing size in CSS pixels of a backing store scaled by `dpr`.
#[inline]
pub fn css_size(backing_size: (u32, u32), dpr: f64) -> DVec2 {
    let dpr = if dpr > 0.0 { dpr } else { 1.0 };
    DVec2::new(backing_size.0 as f64, backing_size.1 as f64) / dpr
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

// ---------------- Pointer helpers ----------------
/// Pointer position relative to the canvas' top-left corner, in CSS pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64) - DVec2::new(rect.left(), rect.top())
}
