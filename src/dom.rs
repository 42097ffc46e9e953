use crate::constants::missing_ids;
use crate::input;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Fail with every absent id listed, before any wiring happens.
pub fn require_ids(document: &web::Document, ids: &[&str]) -> anyhow::Result<()> {
    let missing = missing_ids(ids, |id| document.get_element_by_id(id).is_some());
    if missing.is_empty() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("page is missing #{}", missing.join(", #")))
    }
}

pub fn required_element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn required_element_as<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    required_element(document, id)?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Elements matching `selector`, in document order. Invalid selectors yield none.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Match the backing store to CSS size x devicePixelRatio. A canvas that is
/// not laid out (hidden view) keeps its current size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    let css = DVec2::new(rect.width(), rect.height());
    let Some((w_px, h_px)) = input::backing_size(css, input::device_pixel_ratio()) else {
        log::debug!("[canvas] not laid out; keeping {}x{}", canvas.width(), canvas.height());
        return;
    };
    if canvas.width() != w_px || canvas.height() != h_px {
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}
