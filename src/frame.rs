use crate::canvas::CanvasSurface;
use crate::Globe;
use globe_core::{FrameLoop, FrameOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub globe: Globe,
    pub surface: CanvasSurface,
    pub frames: FrameLoop,
}

impl FrameContext {
    pub fn frame(&mut self) -> FrameOutcome {
        let mut globe = self.globe.borrow_mut();
        self.frames.tick(&mut *globe, &mut self.surface)
    }
}

/// Drive `frame_ctx` from requestAnimationFrame for the lifetime of the page.
/// Idle and paused frames still reschedule.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Pause the frame loop while the page is hidden.
pub fn wire_visibility_pause(document: &web::Document, frame_ctx: Rc<RefCell<FrameContext>>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let mut ctx = frame_ctx.borrow_mut();
        if doc.hidden() {
            ctx.frames.pause();
        } else {
            ctx.frames.resume();
        }
        log::debug!("[frame] paused={}", ctx.frames.is_paused());
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
