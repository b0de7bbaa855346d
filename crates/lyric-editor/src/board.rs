//! Brainstorm board: free-positioned sticky notes.
//!
//! Notes are kept in creation order, which is also paint order (later notes
//! sit on top). Positions are never clamped; a note dragged off the board
//! stays off the board. Non-finite positions and deltas are rejected, since
//! JSON has no encoding for them.

use crate::config::WorkspaceConfig;
use crate::random::RandomSource;
use lyric_core::id::EntityId;
use lyric_core::model::{BrainstormNote, NOTE_PALETTE, Point};

/// Where new notes may land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub fallback_width: f64,
    pub fallback_height: f64,
    pub margin: f64,
    pub note_extent: f64,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::from_config(&WorkspaceConfig::default())
    }
}

impl BoardGeometry {
    pub fn from_config(config: &WorkspaceConfig) -> Self {
        Self {
            fallback_width: config.board_fallback_width,
            fallback_height: config.board_fallback_height,
            margin: config.note_margin,
            note_extent: config.note_extent,
        }
    }
}

/// An in-flight note drag. Deltas accumulate until the drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteDrag {
    pub id: EntityId,
    start_x: f64,
    start_y: f64,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, Default)]
pub struct BrainstormBoard {
    notes: Vec<BrainstormNote>,
    geometry: BoardGeometry,
    /// Measured container size, once the host has laid the board out.
    container: Option<(f64, f64)>,
    drag: Option<NoteDrag>,
}

impl BrainstormBoard {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    pub fn with_notes(geometry: BoardGeometry, notes: Vec<BrainstormNote>) -> Self {
        Self {
            notes,
            geometry,
            ..Self::default()
        }
    }

    pub fn notes(&self) -> &[BrainstormNote] {
        &self.notes
    }

    pub fn get(&self, id: EntityId) -> Option<&BrainstormNote> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Record the board container's size. Non-finite sizes are ignored.
    pub fn measure(&mut self, width: f64, height: f64) {
        if finite(width, height) {
            self.container = Some((width, height));
        }
    }

    fn container_size(&self) -> (f64, f64) {
        self.container
            .unwrap_or((self.geometry.fallback_width, self.geometry.fallback_height))
    }

    /// Add a note with a random palette color at a random spot on the board.
    /// Blank text is ignored.
    pub fn add_note(&mut self, text: &str, rng: &mut dyn RandomSource) -> Option<EntityId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let (w, h) = self.container_size();
        let g = self.geometry;
        let color = NOTE_PALETTE[rng.pick_index(NOTE_PALETTE.len())];
        let x = rng.in_span(g.margin, w - g.note_extent - g.margin);
        let y = rng.in_span(g.margin, h - g.note_extent - g.margin);

        let note = BrainstormNote {
            id: EntityId::generate(),
            content: text.to_string(),
            color,
            position: Point::new(x, y),
        };
        let id = note.id;
        log::debug!("board: add {id} {color:?} at ({x:.0}, {y:.0})");
        self.notes.push(note);
        Some(id)
    }

    pub fn delete_note(&mut self, id: EntityId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.drag.is_some_and(|d| d.id == id) {
            self.drag = None;
        }
        self.notes.len() != before
    }

    /// Shift a note by a drag delta.
    pub fn move_note(&mut self, id: EntityId, dx: f64, dy: f64) -> bool {
        if !finite(dx, dy) {
            log::debug!("board: rejecting move of {id} by ({dx}, {dy})");
            return false;
        }
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        note.position = note.position.offset(dx, dy);
        log::trace!("board: move {id} by ({dx}, {dy})");
        true
    }

    // ─── Drag gesture ────────────────────────────────────────────────────

    /// Start dragging a note from a pointer position.
    pub fn begin_drag(&mut self, id: EntityId, x: f64, y: f64) -> bool {
        if !finite(x, y) || self.get(id).is_none() {
            return false;
        }
        self.drag = Some(NoteDrag {
            id,
            start_x: x,
            start_y: y,
            dx: 0.0,
            dy: 0.0,
        });
        true
    }

    /// Update the live drag offset. The note itself does not move yet.
    /// A non-finite position leaves the offset where it was.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<NoteDrag> {
        let drag = self.drag.as_mut()?;
        if !finite(x, y) {
            return Some(*drag);
        }
        drag.dx = x - drag.start_x;
        drag.dy = y - drag.start_y;
        Some(*drag)
    }

    pub fn active_drag(&self) -> Option<NoteDrag> {
        self.drag
    }

    /// Drop the note, applying the total delta. Returns whether a note moved.
    pub fn end_drag(&mut self, x: f64, y: f64) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        let (dx, dy) = (x - drag.start_x, y - drag.start_y);
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        self.move_note(drag.id, dx, dy)
    }

    /// Abandon the drag without moving the note. Returns whether one was in
    /// flight.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }
}

fn finite(a: f64, b: f64) -> bool {
    a.is_finite() && b.is_finite()
}
