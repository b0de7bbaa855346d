//! `CanvasRenderingContext2d` as a drawing [`Surface`].

use lyric_core::model::Color;
use lyric_render::{LineCap, LineJoin, Surface};
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface<'_> {
    fn size(&self) -> (f64, f64) {
        self.ctx
            .canvas()
            .map_or((0.0, 0.0), |c| (c.width() as f64, c.height() as f64))
    }

    fn resize(&mut self, width: f64, height: f64) {
        if let Some(canvas) = self.ctx.canvas() {
            // Assigning the size resets the backing store and context state.
            canvas.set_width(width.max(0.0).round() as u32);
            canvas.set_height(height.max(0.0).round() as u32);
        }
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_hex());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(cap.as_css());
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ctx.set_line_join(join.as_css());
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

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
