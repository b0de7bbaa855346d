//! Drawing model → surface strokes.
//!
//! Every repaint is a full repaint: clear, then stroke each committed path in
//! commit order with its own pen, then the in-progress stroke with the
//! current pen. Keeping the whole path model around is what lets a resized
//! (and therefore erased) surface come back intact.

use crate::surface::{LineCap, LineJoin, Surface};
use kurbo::{BezPath, PathEl};
use lyric_core::model::{Color, DrawingPath, Point};

/// The pen applied to the in-progress stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: u32,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 2,
        }
    }
}

/// Clear the surface and repaint all committed paths plus the live stroke.
pub fn paint_drawing(
    surface: &mut dyn Surface,
    paths: &[DrawingPath],
    in_progress: &[Point],
    pen: &Pen,
) {
    surface.clear();
    surface.set_line_cap(LineCap::Round);
    surface.set_line_join(LineJoin::Round);

    for path in paths {
        log::trace!(
            "PAINT path {} ({} points, {}px {})",
            path.id,
            path.points.len(),
            path.width,
            path.color.to_hex()
        );
        stroke_points(surface, &path.points, path.color, path.width);
    }

    if !in_progress.is_empty() {
        stroke_points(surface, in_progress, pen.color, pen.width);
    }
}

/// Build a connected polyline through `points`.
///
/// A single point becomes a zero-length segment so round caps render it as a
/// dot.
pub fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to((first.x, first.y));
    if rest.is_empty() {
        path.line_to((first.x, first.y));
    }
    for p in rest {
        path.line_to((p.x, p.y));
    }
    path
}

fn stroke_points(surface: &mut dyn Surface, points: &[Point], color: Color, width: u32) {
    let path = polyline(points);
    if path.elements().is_empty() {
        return;
    }
    surface.set_stroke_color(color);
    surface.set_line_width(width as f64);
    surface.begin_path();
    emit_path(surface, &path);
    surface.stroke();
}

fn emit_path(surface: &mut dyn Surface, path: &BezPath) {
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => surface.move_to(p.x, p.y),
            PathEl::LineTo(p) => surface.line_to(p.x, p.y),
            PathEl::QuadTo(..) | PathEl::CurveTo(..) | PathEl::ClosePath => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use lyric_core::EntityId;
    use pretty_assertions::assert_eq;

    fn path(id: &str, pts: &[(f64, f64)], hex: &str, width: u32) -> DrawingPath {
        DrawingPath {
            id: EntityId::intern(id),
            points: pts.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            color: Color::from_hex(hex).unwrap(),
            width,
        }
    }

    #[test]
    fn paints_committed_then_live_stroke() {
        let mut surface = RecordingSurface::new(200.0, 200.0);
        let paths = vec![
            path("a", &[(0.0, 0.0), (10.0, 10.0)], "#FF0000", 3),
            path("b", &[(5.0, 5.0), (6.0, 6.0), (7.0, 9.0)], "#00FF00", 8),
        ];
        let live = [Point::new(50.0, 50.0), Point::new(60.0, 55.0)];
        let pen = Pen {
            color: Color::from_hex("#0000FF").unwrap(),
            width: 12,
        };

        paint_drawing(&mut surface, &paths, &live, &pen);

        let strokes = surface.visible_strokes();
        assert_eq!(strokes.len(), 3);
        assert_eq!(strokes[0].points, vec![(0.0, 0.0), (10.0, 10.0)]);
        assert_eq!(strokes[0].width, 3.0);
        assert_eq!(strokes[1].color.to_hex(), "#00FF00");
        assert_eq!(strokes[2].color.to_hex(), "#0000FF");
        assert_eq!(strokes[2].width, 12.0);
        assert!(strokes.iter().all(|s| s.cap == LineCap::Round && s.join == LineJoin::Round));
    }

    #[test]
    fn repaint_starts_with_clear() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        paint_drawing(&mut surface, &[], &[], &Pen::default());
        paint_drawing(&mut surface, &[], &[], &Pen::default());
        assert_eq!(surface.clear_count(), 2);
        assert!(surface.is_blank());
    }

    #[test]
    fn single_point_is_a_dot() {
        let bez = polyline(&[Point::new(4.0, 4.0)]);
        assert_eq!(bez.elements().len(), 2);

        let mut surface = RecordingSurface::new(10.0, 10.0);
        paint_drawing(&mut surface, &[path("dot", &[(4.0, 4.0)], "#000", 5)], &[], &Pen::default());
        assert_eq!(surface.visible_strokes()[0].points, vec![(4.0, 4.0), (4.0, 4.0)]);
    }

    #[test]
    fn empty_polyline_strokes_nothing() {
        assert!(polyline(&[]).elements().is_empty());
    }

    #[test]
    fn polyline_is_straight_segments_only() {
        let bez = polyline(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 0.0)]);
        assert!(matches!(bez.elements()[0], PathEl::MoveTo(_)));
        assert!(bez.elements()[1..].iter().all(|el| matches!(el, PathEl::LineTo(_))));

        let mut surface = RecordingSurface::new(10.0, 10.0);
        paint_drawing(&mut surface, &[], &[Point::new(0.0, 0.0), Point::new(3.0, 4.0)], &Pen::default());
        assert_eq!(surface.visible_strokes()[0].points, vec![(0.0, 0.0), (3.0, 4.0)]);
    }
}
