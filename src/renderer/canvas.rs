//! Canvas 2D surface (WASM only)
//!
//! Keeps the CSS size of the canvas and scales the backing store by the
//! device pixel ratio, so all drawing happens in logical pixels.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Surface, css_color};
use crate::sim::Aabb;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Logical (CSS pixel) size
    size: Vec2,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        let mut surface = Self {
            canvas,
            ctx,
            size: Vec2::ZERO,
        };
        surface.fit()?;
        Ok(surface)
    }

    /// Match the backing store to the displayed size and DPR
    pub fn fit(&mut self) -> Result<(), JsValue> {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .max(1.0);
        let rect = self.canvas.get_bounding_client_rect();
        self.canvas.set_width((rect.width() * dpr).round() as u32);
        self.canvas.set_height((rect.height() * dpr).round() as u32);
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        self.size = Vec2::new(rect.width() as f32, rect.height() as f32);
        log::debug!("Canvas fitted to {}x{} @ {}x", rect.width(), rect.height(), dpr);
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_round_rect(&mut self, rect: Aabb, radius: f32, color: Color) {
        let (x, y) = (rect.left() as f64, rect.top() as f64);
        let (r, b) = (rect.right() as f64, rect.bottom() as f64);
        let radius = radius as f64;

        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.begin_path();
        self.ctx.move_to(x + radius, y);
        let corners = [(r, y, r, b), (r, b, x, b), (x, b, x, y), (x, y, r, y)];
        for (x1, y1, x2, y2) in corners {
            if let Err(e) = self.ctx.arc_to(x1, y1, x2, y2, radius) {
                log::warn!("arc_to failed: {:?}", e);
                return;
            }
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
