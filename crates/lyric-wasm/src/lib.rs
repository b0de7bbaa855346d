//! WASM bridge for Lyric Workshop. Exposes the Rust workspace to the
//! browser widget.
//!
//! Compiled via `wasm-pack build --target web`. The host page owns the DOM;
//! it forwards user input to [`LyricWorkshop`], reads JSON views back, and
//! hands over its canvas context whenever a repaint is due.

mod canvas;
mod console;
pub mod json;
mod storage;

use canvas::CanvasSurface;
use lyric_core::id::EntityId;
use lyric_editor::input::{InputEvent, SurfaceRect};
use lyric_editor::{Tab, Workspace, WorkspaceConfig};
use storage::BrowserStore;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing controller. All interaction from the page goes
/// through this struct.
#[wasm_bindgen]
pub struct LyricWorkshop {
    workspace: Workspace<BrowserStore>,
}

/// Resolve an ID from the page. Strings no entity ever used are rejected
/// without interning them.
fn known_id(id: &str) -> Option<EntityId> {
    EntityId::lookup(id)
}

#[wasm_bindgen]
impl LyricWorkshop {
    /// Load the workspace from `localStorage`. `config_json` may be omitted
    /// or partial; a malformed config is logged and defaults are used.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        console::setup(log::LevelFilter::Info);

        let config = match config_json.as_deref() {
            Some(json) => WorkspaceConfig::from_json(json).unwrap_or_else(|e| {
                log::warn!("{e}; using default config");
                WorkspaceConfig::default()
            }),
            None => WorkspaceConfig::default(),
        };

        Self {
            workspace: Workspace::load(BrowserStore::open(), config),
        }
    }

    // ─── Views ───────────────────────────────────────────────────────────

    /// Sidebar file list as JSON.
    pub fn files(&self) -> String {
        json::files_json(&self.workspace).to_string()
    }

    /// Editor pane state as JSON.
    pub fn editor(&self) -> String {
        json::editor_json(&self.workspace).to_string()
    }

    /// Brainstorm notes as JSON.
    pub fn notes(&self) -> String {
        json::notes_json(&self.workspace).to_string()
    }

    /// Pen and drawing summary as JSON.
    pub fn pen(&self) -> String {
        json::pen_json(&self.workspace).to_string()
    }

    // ─── Files ───────────────────────────────────────────────────────────

    /// Create a file and return its ID.
    pub fn create_file(&mut self) -> String {
        self.workspace.create_file().as_str().to_string()
    }

    pub fn select_file(&mut self, id: &str) -> bool {
        known_id(id).is_some_and(|id| self.workspace.select_file(id))
    }

    pub fn rename_file(&mut self, id: &str, title: &str) -> bool {
        known_id(id).is_some_and(|id| self.workspace.rename_file(id, title))
    }

    pub fn delete_file(&mut self, id: &str) -> bool {
        known_id(id).is_some_and(|id| self.workspace.delete_file(id))
    }

    // ─── Editor ──────────────────────────────────────────────────────────

    /// Textarea change. Returns `false` when no file is open.
    pub fn set_content(&mut self, text: &str) -> bool {
        self.workspace.edit_content(text)
    }

    pub fn toggle_preview(&mut self) -> bool {
        self.workspace.toggle_preview()
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.workspace.toggle_sidebar()
    }

    /// Raise the "Saving..." indicator. Poll `editor().saving` to lower it.
    pub fn save(&mut self) -> bool {
        self.workspace.save()
    }

    /// Switch views: `"lyrics"`, `"brainstorm"`, or `"drawing"`.
    pub fn set_tab(&mut self, name: &str) -> bool {
        match Tab::from_name(name) {
            Some(tab) => {
                self.workspace.set_tab(tab);
                true
            }
            None => false,
        }
    }

    // ─── Brainstorm ──────────────────────────────────────────────────────

    pub fn measure_board(&mut self, width: f64, height: f64) {
        self.workspace.measure_board(width, height);
    }

    /// Add a note; returns its ID, or `undefined` for blank text.
    pub fn add_note(&mut self, text: &str) -> Option<String> {
        self.workspace
            .add_note(text)
            .map(|id| id.as_str().to_string())
    }

    pub fn delete_note(&mut self, id: &str) -> bool {
        known_id(id).is_some_and(|id| self.workspace.delete_note(id))
    }

    pub fn move_note(&mut self, id: &str, dx: f64, dy: f64) -> bool {
        known_id(id).is_some_and(|id| self.workspace.move_note(id, dx, dy))
    }

    pub fn begin_note_drag(&mut self, id: &str, x: f64, y: f64) -> bool {
        known_id(id).is_some_and(|id| self.workspace.begin_note_drag(id, x, y))
    }

    /// Returns `true` while a drag is in flight (re-read `notes()`).
    pub fn drag_note_to(&mut self, x: f64, y: f64) -> bool {
        self.workspace.drag_note_to(x, y).is_some()
    }

    pub fn end_note_drag(&mut self, x: f64, y: f64) -> bool {
        self.workspace.end_note_drag(x, y)
    }

    /// `pointercancel` during a note drag: the note snaps back.
    pub fn cancel_note_drag(&mut self) -> bool {
        self.workspace.cancel_note_drag()
    }

    // ─── Drawing ─────────────────────────────────────────────────────────

    /// Report the canvas container's client rectangle.
    pub fn resize_surface(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.workspace
            .resize_surface(SurfaceRect::new(left, top, width, height));
    }

    /// Pointer handlers take client coordinates. Each returns `true` when
    /// the canvas needs a repaint.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.workspace
            .handle_pointer(&InputEvent::from_pointer_down(x, y))
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.workspace
            .handle_pointer(&InputEvent::from_pointer_move(x, y))
    }

    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.workspace
            .handle_pointer(&InputEvent::from_pointer_up(x, y))
    }

    pub fn handle_pointer_leave(&mut self) -> bool {
        self.workspace.handle_pointer(&InputEvent::PointerLeave)
    }

    pub fn set_pen_color(&mut self, hex: &str) -> bool {
        self.workspace.set_pen_color(hex)
    }

    pub fn set_pen_width(&mut self, width: i32) {
        self.workspace.set_pen_width(width as i64);
    }

    pub fn clear_drawing(&mut self) {
        self.workspace.clear_drawing();
    }

    /// Repaint the drawing canvas if needed. Returns whether it painted.
    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) -> bool {
        let mut surface = CanvasSurface::new(ctx);
        self.workspace.render(&mut surface)
    }
}

// ─── Standalone helpers (no workspace needed) ────────────────────────────

/// Render lyric markdown to HTML.
#[wasm_bindgen]
pub fn render_markdown(source: &str) -> String {
    lyric_core::markdown::render_html(source)
}
