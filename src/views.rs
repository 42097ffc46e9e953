use crate::constants::*;
use crate::dom;
use crate::Globe;
use web_sys as web;

/// Reflect the active view on panels and navigation buttons.
pub fn apply_active_view(document: &web::Document, view_id: &str) {
    for panel in dom::query_all(document, VIEW_PANEL_SELECTOR) {
        _ = panel
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, panel.id() == view_id);
    }
    for button in dom::query_all(document, NAV_BUTTON_SELECTOR) {
        let is_active = button.get_attribute(NAV_VIEW_ATTR).as_deref() == Some(view_id);
        _ = button.class_list().toggle_with_force(ACTIVE_CLASS, is_active);
        _ = button.set_attribute("aria-current", if is_active { "page" } else { "false" });
    }
}

/// Each `.nav-btn` switches to the view named by its `data-view` attribute.
/// Returning to the globe re-measures the canvas, since resizes while it was
/// hidden are skipped.
pub fn wire_nav_buttons(document: &web::Document, globe: &Globe, canvas: &web::HtmlCanvasElement) {
    let buttons = dom::query_all(document, NAV_BUTTON_SELECTOR);
    if buttons.is_empty() {
        log::warn!("[view] no navigation buttons found; globe view stays active");
    }
    for button in buttons {
        let Some(view_id) = button.get_attribute(NAV_VIEW_ATTR) else {
            log::warn!("[view] navigation button without {}", NAV_VIEW_ATTR);
            continue;
        };
        let globe = globe.clone();
        let doc = document.clone();
        let canvas = canvas.clone();
        dom::add_click_listener(&button, move || {
            globe.borrow_mut().switch_view(&view_id);
            apply_active_view(&doc, &view_id);
            if globe.borrow().view().is_globe_active() {
                dom::sync_canvas_backing_size(&canvas);
            }
        });
    }
}
