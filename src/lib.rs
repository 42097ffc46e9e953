#![cfg(target_arch = "wasm32")]
use globe_core::{Catalog, GlobeController, GlobeParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod details;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod views;

/// Shared handle to the page's globe; all callbacks run on the one UI thread.
pub(crate) type Globe = Rc<RefCell<GlobeController<details::DomDetailsPanel>>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::require_ids(&document, &constants::REQUIRED_IDS)?;

    let canvas: web::HtmlCanvasElement =
        dom::required_element_as(&document, constants::CANVAS_ID)?;
    wire_canvas_resize(&canvas);

    let panel = details::DomDetailsPanel::from_document(&document)?;
    let catalog = Catalog::builtin();
    log::info!("[globe] {} destinations", catalog.len());
    let globe: Globe = Rc::new(RefCell::new(GlobeController::new(
        catalog,
        GlobeParams::default(),
        panel,
    )));

    let mut surface = canvas::CanvasSurface::new(canvas.clone())?;
    globe.borrow_mut().draw(&mut surface);

    views::apply_active_view(&document, globe.borrow().view().active());
    views::wire_nav_buttons(&document, &globe, &canvas);
    overlay::wire_assistant_dialog(&document);
    events::wire_input_handlers(&canvas, &globe);
    events::wire_global_keydown(globe.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        globe,
        surface,
        frames: Default::default(),
    }));
    frame::wire_visibility_pause(&document, frame_ctx.clone());
    frame::start_loop(frame_ctx);
    Ok(())
}
