//! Raster surface capability.
//!
//! A minimal 2D stroking API matching what an HTML canvas context offers.
//! The browser bridge implements it over `CanvasRenderingContext2d`;
//! [`RecordingSurface`] implements it in memory for tests.

use lyric_core::model::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_css(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_css(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// A 2D raster target that can be cleared and stroked.
pub trait Surface {
    /// Current pixel size `(width, height)`.
    fn size(&self) -> (f64, f64);

    /// Set the pixel size. Prior raster content is lost.
    fn resize(&mut self, width: f64, height: f64);

    /// Erase the whole surface.
    fn clear(&mut self);

    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);

    /// Stroke the current path with the current stroke settings.
    fn stroke(&mut self);
}

// ─── Recording surface ───────────────────────────────────────────────────

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Resize(f64, f64),
    Clear,
    StrokeColor(Color),
    LineWidth(f64),
    LineCap(LineCap),
    LineJoin(LineJoin),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
}

/// A polyline that was stroked onto a [`RecordingSurface`] and is still
/// visible (no clear or resize since).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedStroke {
    pub points: Vec<(f64, f64)>,
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

/// In-memory surface that logs every call and tracks what is visible.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    color: Color,
    line_width: f64,
    cap: LineCap,
    join: LineJoin,
    current: Vec<(f64, f64)>,
    visible: Vec<RecordedStroke>,
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            color: Color::BLACK,
            line_width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            current: Vec::new(),
            visible: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Strokes currently on the raster, in paint order.
    pub fn visible_strokes(&self) -> &[RecordedStroke] {
        &self.visible
    }

    pub fn is_blank(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of `Clear` calls recorded.
    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, SurfaceOp::Clear)).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.visible.clear();
        self.ops.push(SurfaceOp::Resize(width, height));
    }

    fn clear(&mut self) {
        self.visible.clear();
        self.ops.push(SurfaceOp::Clear);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.color = color;
        self.ops.push(SurfaceOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
        self.ops.push(SurfaceOp::LineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.cap = cap;
        self.ops.push(SurfaceOp::LineCap(cap));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.join = join;
        self.ops.push(SurfaceOp::LineJoin(join));
    }

    fn begin_path(&mut self) {
        self.current.clear();
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.current.push((x, y));
        self.ops.push(SurfaceOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.current.push((x, y));
        self.ops.push(SurfaceOp::LineTo(x, y));
    }

    fn stroke(&mut self) {
        if !self.current.is_empty() {
            self.visible.push(RecordedStroke {
                points: self.current.clone(),
                color: self.color,
                width: self.line_width,
                cap: self.cap,
                join: self.join,
            });
        }
        self.ops.push(SurfaceOp::Stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_becomes_visible_until_clear() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.begin_path();
        s.move_to(0.0, 0.0);
        s.line_to(5.0, 5.0);
        s.stroke();
        assert_eq!(s.visible_strokes().len(), 1);
        s.clear();
        assert!(s.is_blank());
        assert_eq!(s.clear_count(), 1);
    }

    #[test]
    fn resize_erases_raster() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.begin_path();
        s.move_to(1.0, 1.0);
        s.stroke();
        s.resize(640.0, 480.0);
        assert!(s.is_blank());
        assert_eq!(s.size(), (640.0, 480.0));
    }

    #[test]
    fn css_names() {
        assert_eq!(LineCap::Round.as_css(), "round");
        assert_eq!(LineJoin::Bevel.as_css(), "bevel");
    }
}
