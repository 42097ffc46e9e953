use crate::constants::{ASSISTANT_BUTTON_ID, ASSISTANT_DIALOG_ID};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Open the assistant dialog from its trigger button. Either element may be
/// absent from the page, in which case the feature is skipped.
pub fn wire_assistant_dialog(document: &web::Document) {
    let Some(button) = document.get_element_by_id(ASSISTANT_BUTTON_ID) else {
        log::warn!("[assistant] #{} not found; skipping", ASSISTANT_BUTTON_ID);
        return;
    };
    let Some(dialog) = document
        .get_element_by_id(ASSISTANT_DIALOG_ID)
        .and_then(|el| el.dyn_into::<web::HtmlDialogElement>().ok())
    else {
        log::warn!("[assistant] #{} missing or not a <dialog>; skipping", ASSISTANT_DIALOG_ID);
        return;
    };
    dom::add_click_listener(&button, move || {
        if let Err(e) = dialog.show_modal() {
            log::warn!("[assistant] showModal failed: {:?}", e);
        }
    });
}
