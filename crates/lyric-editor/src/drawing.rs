//! Drawing pad: freehand stroke capture over a retained path model.
//!
//! Each stroke runs **Idle → Capturing → Idle**. Pointer-down on the surface
//! starts a stroke with one point, every move appends a point (no
//! downsampling), and pointer-up or pointer-leave commits the stroke as an
//! immutable [`DrawingPath`] if it has at least one point. Presses and moves
//! with non-finite coordinates are ignored.
//!
//! The pad never paints on its own. Anything that changes what the surface
//! should show sets a dirty flag; the host calls [`DrawingPad::render`],
//! which repaints from scratch.

use crate::input::{InputEvent, SurfaceRect};
use lyric_core::id::EntityId;
use lyric_core::model::{Color, DrawingPath, Point, clamp_pen_width};
use lyric_render::{Pen, Surface, paint_drawing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    Idle,
    Capturing,
}

/// What an input event did to the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeOutcome {
    /// Nothing changed.
    Ignored,
    /// The in-progress stroke changed; repaint only.
    Updated,
    /// A stroke was committed; persist the path collection and repaint.
    Committed(EntityId),
}

#[derive(Debug, Clone)]
pub struct DrawingPad {
    paths: Vec<DrawingPath>,
    in_progress: Vec<Point>,
    state: StrokeState,
    pen: Pen,
    bounds: SurfaceRect,
    /// Surface must be resized to `bounds` before the next paint.
    resize_pending: bool,
    dirty: bool,
}

impl Default for DrawingPad {
    fn default() -> Self {
        Self::new(Pen::default())
    }
}

impl DrawingPad {
    pub fn new(pen: Pen) -> Self {
        Self {
            paths: Vec::new(),
            in_progress: Vec::new(),
            state: StrokeState::Idle,
            pen,
            bounds: SurfaceRect::default(),
            resize_pending: false,
            dirty: true,
        }
    }

    pub fn with_paths(pen: Pen, paths: Vec<DrawingPath>) -> Self {
        Self {
            paths,
            ..Self::new(pen)
        }
    }

    pub fn paths(&self) -> &[DrawingPath] {
        &self.paths
    }

    pub fn in_progress(&self) -> &[Point] {
        &self.in_progress
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn bounds(&self) -> SurfaceRect {
        self.bounds
    }

    // ─── Pen ─────────────────────────────────────────────────────────────

    pub fn set_pen_color(&mut self, color: Color) {
        if self.pen.color != color {
            self.pen.color = color;
            self.dirty = true;
        }
    }

    /// Set the pen width, clamped to `[1, 20]`.
    pub fn set_pen_width(&mut self, width: i64) {
        let width = clamp_pen_width(width);
        if self.pen.width != width {
            self.pen.width = width;
            self.dirty = true;
        }
    }

    // ─── Geometry ────────────────────────────────────────────────────────

    /// Record the surface's client rectangle. The raster is resized to match
    /// (and therefore erased) before the next paint; the path model is kept.
    pub fn set_bounds(&mut self, bounds: SurfaceRect) {
        self.bounds = bounds;
        self.resize_pending = true;
        self.dirty = true;
    }

    /// Resize the surface to the current bounds on the next `render`, e.g.
    /// when the canvas is shown again after being unmounted.
    pub fn request_resize(&mut self) {
        self.resize_pending = true;
        self.dirty = true;
    }

    // ─── Stroke capture ──────────────────────────────────────────────────

    pub fn handle(&mut self, event: &InputEvent) -> StrokeOutcome {
        match (*event, self.state) {
            (InputEvent::PointerDown { x, y } | InputEvent::PointerMove { x, y }, _)
                if !(x.is_finite() && y.is_finite()) =>
            {
                log::debug!("pad: ignoring pointer at ({x}, {y})");
                StrokeOutcome::Ignored
            }
            (InputEvent::PointerDown { x, y }, StrokeState::Idle) => {
                if !self.bounds.contains(x, y) {
                    return StrokeOutcome::Ignored;
                }
                let (lx, ly) = self.bounds.to_local(x, y);
                self.in_progress.clear();
                self.in_progress.push(Point::new(lx, ly));
                self.state = StrokeState::Capturing;
                self.dirty = true;
                log::trace!("pad: stroke start at ({lx}, {ly})");
                StrokeOutcome::Updated
            }
            // A second press mid-stroke (multi-button mice) just continues it.
            (InputEvent::PointerDown { x, y }, StrokeState::Capturing)
            | (InputEvent::PointerMove { x, y }, StrokeState::Capturing) => {
                let (lx, ly) = self.bounds.to_local(x, y);
                self.in_progress.push(Point::new(lx, ly));
                self.dirty = true;
                StrokeOutcome::Updated
            }
            (InputEvent::PointerUp { .. } | InputEvent::PointerLeave, StrokeState::Capturing) => {
                self.state = StrokeState::Idle;
                self.commit()
            }
            _ => StrokeOutcome::Ignored,
        }
    }

    fn commit(&mut self) -> StrokeOutcome {
        if self.in_progress.is_empty() {
            return StrokeOutcome::Ignored;
        }
        let path = DrawingPath {
            id: EntityId::generate(),
            points: std::mem::take(&mut self.in_progress),
            color: self.pen.color,
            width: self.pen.width,
        };
        let id = path.id;
        log::debug!("pad: commit {id} ({} points)", path.points.len());
        self.paths.push(path);
        self.dirty = true;
        StrokeOutcome::Committed(id)
    }

    /// Drop every committed path and any stroke in progress.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.in_progress.clear();
        self.state = StrokeState::Idle;
        self.dirty = true;
        log::debug!("pad: cleared");
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Repaint the surface if anything changed since the last paint.
    /// Returns whether a paint happened.
    pub fn render(&mut self, surface: &mut dyn Surface) -> bool {
        if self.resize_pending {
            surface.resize(self.bounds.width, self.bounds.height);
            self.resize_pending = false;
            self.dirty = true;
        }
        if !self.dirty {
            return false;
        }
        paint_drawing(surface, &self.paths, &self.in_progress, &self.pen);
        self.dirty = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyric_render::RecordingSurface;
    use pretty_assertions::assert_eq;

    fn pad() -> DrawingPad {
        let mut pad = DrawingPad::default();
        pad.set_bounds(SurfaceRect::new(10.0, 20.0, 300.0, 200.0));
        pad
    }

    #[test]
    fn stroke_points_are_surface_relative() {
        let mut p = pad();
        assert_eq!(p.handle(&InputEvent::from_pointer_down(15.0, 25.0)), StrokeOutcome::Updated);
        assert_eq!(p.state(), StrokeState::Capturing);
        p.handle(&InputEvent::from_pointer_move(20.0, 30.0));
        assert_eq!(p.in_progress(), &[Point::new(5.0, 5.0), Point::new(10.0, 10.0)]);
    }

    #[test]
    fn pointer_up_commits_with_pen() {
        let mut p = pad();
        p.set_pen_color(Color::from_hex("#FF0000").unwrap());
        p.set_pen_width(6);
        p.handle(&InputEvent::from_pointer_down(15.0, 25.0));
        p.handle(&InputEvent::from_pointer_move(16.0, 26.0));
        p.handle(&InputEvent::from_pointer_move(17.0, 27.0));
        let outcome = p.handle(&InputEvent::from_pointer_up(17.0, 27.0));
        let StrokeOutcome::Committed(id) = outcome else {
            panic!("expected commit, got {outcome:?}");
        };
        assert_eq!(p.paths().len(), 1);
        let path = &p.paths()[0];
        assert_eq!(path.id, id);
        assert_eq!(path.points.len(), 3);
        assert_eq!(path.color.to_hex(), "#FF0000");
        assert_eq!(path.width, 6);
        assert!(p.in_progress().is_empty());
        assert_eq!(p.state(), StrokeState::Idle);
    }

    #[test]
    fn tap_commits_single_point_path() {
        let mut p = pad();
        p.handle(&InputEvent::from_pointer_down(50.0, 50.0));
        assert!(matches!(
            p.handle(&InputEvent::from_pointer_up(50.0, 50.0)),
            StrokeOutcome::Committed(_)
        ));
        assert_eq!(p.paths()[0].points, vec![Point::new(40.0, 30.0)]);
    }

    #[test]
    fn release_without_capture_commits_nothing() {
        let mut p = pad();
        assert_eq!(p.handle(&InputEvent::from_pointer_up(50.0, 50.0)), StrokeOutcome::Ignored);
        assert_eq!(p.handle(&InputEvent::PointerLeave), StrokeOutcome::Ignored);
        assert!(p.paths().is_empty());
    }

    #[test]
    fn press_outside_surface_is_ignored() {
        let mut p = pad();
        assert_eq!(p.handle(&InputEvent::from_pointer_down(0.0, 0.0)), StrokeOutcome::Ignored);
        assert_eq!(p.handle(&InputEvent::from_pointer_move(50.0, 50.0)), StrokeOutcome::Ignored);
        assert!(p.in_progress().is_empty());
    }

    #[test]
    fn leave_ends_stroke() {
        let mut p = pad();
        p.handle(&InputEvent::from_pointer_down(50.0, 50.0));
        p.handle(&InputEvent::from_pointer_move(400.0, 50.0));
        assert!(matches!(p.handle(&InputEvent::PointerLeave), StrokeOutcome::Committed(_)));
        assert_eq!(p.paths()[0].points.len(), 2);
    }

    #[test]
    fn pen_width_clamped() {
        let mut p = pad();
        p.set_pen_width(0);
        assert_eq!(p.pen().width, 1);
        p.set_pen_width(50);
        assert_eq!(p.pen().width, 20);
    }

    #[test]
    fn clear_drops_everything_and_blanks_surface() {
        let mut p = pad();
        let mut surface = RecordingSurface::new(0.0, 0.0);
        p.handle(&InputEvent::from_pointer_down(50.0, 50.0));
        p.handle(&InputEvent::from_pointer_up(50.0, 50.0));
        p.handle(&InputEvent::from_pointer_down(60.0, 60.0));
        p.render(&mut surface);
        assert_eq!(surface.visible_strokes().len(), 2);

        p.clear();
        assert!(p.render(&mut surface));
        assert!(p.paths().is_empty());
        assert!(p.in_progress().is_empty());
        assert!(surface.is_blank());
    }

    #[test]
    fn render_skips_when_clean_and_resizes_when_asked() {
        let mut p = pad();
        let mut surface = RecordingSurface::new(0.0, 0.0);
        assert!(p.render(&mut surface));
        assert_eq!(surface.size(), (300.0, 200.0));
        assert!(!p.render(&mut surface));

        p.handle(&InputEvent::from_pointer_down(50.0, 50.0));
        p.handle(&InputEvent::from_pointer_up(50.0, 50.0));
        p.render(&mut surface);

        p.set_bounds(SurfaceRect::new(10.0, 20.0, 640.0, 480.0));
        assert!(p.render(&mut surface));
        assert_eq!(surface.size(), (640.0, 480.0));
        assert_eq!(surface.visible_strokes().len(), 1, "path model repainted after resize");
    }

    #[test]
    fn live_stroke_uses_current_pen() {
        let mut p = pad();
        let mut surface = RecordingSurface::new(0.0, 0.0);
        p.handle(&InputEvent::from_pointer_down(50.0, 50.0));
        p.set_pen_color(Color::from_hex("#00FF00").unwrap());
        p.render(&mut surface);
        assert_eq!(surface.visible_strokes()[0].color.to_hex(), "#00FF00");
    }

    #[test]
    fn non_finite_points_are_dropped() {
        let mut p = pad();
        assert_eq!(
            p.handle(&InputEvent::from_pointer_down(f64::NAN, 50.0)),
            StrokeOutcome::Ignored
        );
        assert_eq!(p.state(), StrokeState::Idle);

        p.handle(&InputEvent::from_pointer_down(50.0, 50.0));
        assert_eq!(
            p.handle(&InputEvent::from_pointer_move(f64::INFINITY, 60.0)),
            StrokeOutcome::Ignored
        );
        assert_eq!(
            p.handle(&InputEvent::from_pointer_down(60.0, f64::NEG_INFINITY)),
            StrokeOutcome::Ignored
        );
        assert!(matches!(
            p.handle(&InputEvent::from_pointer_up(f64::NAN, f64::NAN)),
            StrokeOutcome::Committed(_)
        ));
        assert_eq!(p.paths()[0].points, vec![Point::new(40.0, 30.0)]);
    }

    #[test]
    fn requested_resize_applies_current_bounds() {
        let mut p = pad();
        let mut surface = RecordingSurface::new(0.0, 0.0);
        p.render(&mut surface);

        let mut remounted = RecordingSurface::new(300.0, 150.0);
        assert!(!p.render(&mut remounted));
        p.request_resize();
        assert!(p.render(&mut remounted));
        assert_eq!(remounted.size(), (300.0, 200.0));
    }
}
