use crate::Globe;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, globe: &Globe) {
    let key = ev.key();
    if globe.borrow_mut().key_down(&key) {
        let g = globe.borrow();
        log::info!("[keys] {} -> {}", key, g.selected_destination().name);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(globe: Globe) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &globe);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
