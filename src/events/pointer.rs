use crate::input;
use crate::Globe;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(canvas: &web::HtmlCanvasElement, globe: &Globe) {
    wire_pointerdown(canvas, globe);
    wire_pointermove(canvas, globe);
    wire_pointerup(canvas, globe);
    wire_pointercancel(canvas, globe);
}

fn listen(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>
    );
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, globe: &Globe) {
    let globe = globe.clone();
    let c = canvas.clone();
    listen(canvas, "pointerdown", move |ev| {
        let pos = input::pointer_canvas_px(&ev, &c);
        globe.borrow_mut().pointer_down(pos.x, pos.y);
        _ = c.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, globe: &Globe) {
    let globe = globe.clone();
    let c = canvas.clone();
    listen(canvas, "pointermove", move |ev| {
        if !globe.borrow().gesture().is_dragging() {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &c);
        globe.borrow_mut().pointer_move(pos.x, pos.y);
    });
}

fn wire_pointerup(canvas: &web::HtmlCanvasElement, globe: &Globe) {
    let globe = globe.clone();
    let c = canvas.clone();
    listen(canvas, "pointerup", move |ev| {
        let pos = input::pointer_canvas_px(&ev, &c);
        let picked = globe.borrow_mut().pointer_up(pos.x, pos.y);
        if c.has_pointer_capture(ev.pointer_id()) {
            _ = c.release_pointer_capture(ev.pointer_id());
        }
        if let Some(i) = picked {
            log::info!("[click] picked destination {}", i);
        }
    });
}

fn wire_pointercancel(canvas: &web::HtmlCanvasElement, globe: &Globe) {
    let globe = globe.clone();
    listen(canvas, "pointercancel", move |_ev| {
        globe.borrow_mut().pointer_cancel();
        log::debug!("[pointer] gesture cancelled");
    });
}
