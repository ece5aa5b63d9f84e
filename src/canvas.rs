use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::{Rgb, Surface, Viewport};

/// `Surface` backed by a 2D canvas context. Drawing happens in CSS pixels;
/// the backing store is scaled by the device pixel ratio.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    size: Viewport,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let size = Viewport::new(canvas.width().max(1) as f32, canvas.height().max(1) as f32);
        Ok(Self { canvas, ctx, size })
    }

    /// Matches the canvas to `viewport` (CSS px) at `dpr` device pixels per
    /// CSS pixel.
    pub fn resize(&mut self, viewport: Viewport, dpr: f64) {
        let w_px = (viewport.width as f64 * dpr).round() as u32;
        let h_px = (viewport.height as f64 * dpr).round() as u32;
        self.canvas.set_width(w_px.max(1));
        self.canvas.set_height(h_px.max(1));
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", viewport.width));
        _ = style.set_property("height", &format!("{}px", viewport.height));
        // resizing resets the context state, so the scale is reapplied every time
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.size = viewport;
    }
}

impl Surface for CanvasSurface {
    fn fill_background(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(0.0, 0.0, self.size.width as f64, self.size.height as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: f32, color: Rgb) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size as f64, size as f64);
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: Rgb) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        self.ctx.move_to(points[0].x as f64, points[0].y as f64);
        self.ctx.line_to(points[1].x as f64, points[1].y as f64);
        self.ctx.line_to(points[2].x as f64, points[2].y as f64);
        self.ctx.close_path();
        self.ctx.fill();
    }
}
