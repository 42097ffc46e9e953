//! `DrawSurface` backed by a Canvas 2D context.
//!
//! Coordinates are CSS pixels; each frame starts by scaling the context by
//! the device pixel ratio so the backing store stays sharp.

use crate::input;
use globe_core::{DrawSurface, Paint};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

// Style setters go through Reflect so strings and gradients share one path.
fn ctx_set_fill_style(ctx: &web::CanvasRenderingContext2d, value: &JsValue) {
    _ = js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str("fillStyle"), value);
}

fn ctx_set_stroke_style(ctx: &web::CanvasRenderingContext2d, value: &JsValue) {
    _ = js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str("strokeStyle"), value);
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        let css = input::css_size(
            (self.canvas.width(), self.canvas.height()),
            input::device_pixel_ratio(),
        );
        (css.x, css.y)
    }

    fn clear(&mut self) {
        let dpr = input::device_pixel_ratio();
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        // a fresh sub-path so the arc is not joined to a previous point
        self.ctx.move_to(x + radius, y);
        _ = self.ctx.arc(x, y, radius, 0.0, TAU);
    }

    fn fill(&mut self, paint: &Paint<'_>) {
        match paint {
            Paint::Solid(color) => ctx_set_fill_style(&self.ctx, &JsValue::from_str(color)),
            Paint::Radial(g) => {
                let (x0, y0, r0) = g.inner;
                let (x1, y1, r1) = g.outer;
                match self.ctx.create_radial_gradient(x0, y0, r0, x1, y1, r1) {
                    Ok(gradient) => {
                        for (offset, color) in &g.stops {
                            _ = gradient.add_color_stop(*offset as f32, color);
                        }
                        ctx_set_fill_style(&self.ctx, gradient.as_ref());
                    }
                    Err(e) => {
                        log::warn!("[canvas] radial gradient rejected: {:?}", e);
                        if let Some((_, color)) = g.stops.last() {
                            ctx_set_fill_style(&self.ctx, &JsValue::from_str(color));
                        }
                    }
                }
            }
        }
        self.ctx.fill();
    }

    fn stroke(&mut self, color: &str, width: f64) {
        ctx_set_stroke_style(&self.ctx, &JsValue::from_str(color));
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn clip(&mut self) {
        self.ctx.clip();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
