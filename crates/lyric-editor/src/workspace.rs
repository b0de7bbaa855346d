//! Workspace: the four components wired to the persistent store.
//!
//! Every handler follows the same shape: mutate one in-memory collection,
//! then, if it actually changed, write that collection's whole snapshot to
//! the store. Persistence is an explicit call at the end of each handler,
//! never a side effect hidden in a component, and never mid-mutation.
//!
//! Store write failures are logged and absorbed; the in-memory state stays
//! authoritative for the rest of the session.

use crate::board::{BoardGeometry, BrainstormBoard, NoteDrag};
use crate::clock::{Clock, SystemClock};
use crate::config::WorkspaceConfig;
use crate::drawing::{DrawingPad, StrokeOutcome};
use crate::files::FileRegistry;
use crate::input::{InputEvent, SurfaceRect};
use crate::panel::TextPanel;
use crate::random::{EntropyRandom, RandomSource};
use chrono::{DateTime, Duration, Utc};
use lyric_core::id::EntityId;
use lyric_core::model::{Color, LyricFile};
use lyric_core::store::{Document, KeyValueStore, Snapshot, save_collection};
use lyric_render::{Pen, Surface};
use std::ops::Range;

/// Which view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Lyrics,
    Brainstorm,
    Drawing,
}

impl Tab {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lyrics" => Some(Tab::Lyrics),
            "brainstorm" => Some(Tab::Brainstorm),
            "drawing" => Some(Tab::Drawing),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::Lyrics => "lyrics",
            Tab::Brainstorm => "brainstorm",
            Tab::Drawing => "drawing",
        }
    }
}

/// View state. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub tab: Tab,
    pub sidebar_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            tab: Tab::Lyrics,
            sidebar_open: true,
        }
    }
}

pub struct Workspace<S: KeyValueStore> {
    store: S,
    config: WorkspaceConfig,
    files: FileRegistry,
    panel: TextPanel,
    board: BrainstormBoard,
    pad: DrawingPad,
    view: ViewState,
    random: Box<dyn RandomSource>,
    clock: Box<dyn Clock>,
    saving_since: Option<DateTime<Utc>>,
}

impl<S: KeyValueStore> Workspace<S> {
    /// Load all three documents from `store` with OS randomness and the
    /// system clock.
    pub fn load(store: S, config: WorkspaceConfig) -> Self {
        Self::with_capabilities(
            store,
            config,
            Box::new(EntropyRandom::new()),
            Box::new(SystemClock),
        )
    }

    /// Load with injected random source and clock.
    pub fn with_capabilities(
        store: S,
        config: WorkspaceConfig,
        random: Box<dyn RandomSource>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let Snapshot {
            files,
            notes,
            paths,
        } = Snapshot::load(&store);
        log::debug!(
            "workspace: loaded {} files, {} notes, {} paths",
            files.len(),
            notes.len(),
            paths.len()
        );

        let pen = Pen {
            color: Color::from_hex(&config.pen_color).unwrap_or_else(|| {
                log::warn!("workspace: bad pen color {:?}, using black", config.pen_color);
                Color::BLACK
            }),
            width: lyric_core::model::clamp_pen_width(config.pen_width as i64),
        };

        let files = FileRegistry::from_files(files);
        let mut panel = TextPanel::new();
        if let Some(active) = files.active() {
            panel.load(&active.content);
        }

        Self {
            board: BrainstormBoard::with_notes(BoardGeometry::from_config(&config), notes),
            pad: DrawingPad::with_paths(pen, paths),
            store,
            config,
            files,
            panel,
            view: ViewState::default(),
            random,
            clock,
            saving_since: None,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn files(&self) -> &FileRegistry {
        &self.files
    }

    pub fn active_file(&self) -> Option<&LyricFile> {
        self.files.active()
    }

    pub fn panel(&self) -> &TextPanel {
        &self.panel
    }

    pub fn board(&self) -> &BrainstormBoard {
        &self.board
    }

    pub fn pad(&self) -> &DrawingPad {
        &self.pad
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    // ─── Persistence ─────────────────────────────────────────────────────

    fn persist(&mut self, doc: Document) {
        let result = match doc {
            Document::Files => save_collection(&mut self.store, doc, self.files.files()),
            Document::Notes => save_collection(&mut self.store, doc, self.board.notes()),
            Document::Paths => save_collection(&mut self.store, doc, self.pad.paths()),
        };
        if let Err(e) = result {
            log::error!("workspace: failed to persist `{}`: {e}", doc.key());
        }
    }

    /// Reload the editor buffer from whatever file is now active.
    fn sync_panel_from_active(&mut self) {
        let content = self
            .files
            .active()
            .map(|f| f.content.clone())
            .unwrap_or_default();
        self.panel.load(&content);
    }

    // ─── Files ───────────────────────────────────────────────────────────

    pub fn create_file(&mut self) -> EntityId {
        let id = self.files.create(self.clock.now());
        self.panel.load("");
        self.persist(Document::Files);
        id
    }

    pub fn select_file(&mut self, id: EntityId) -> bool {
        if !self.files.select(id) {
            return false;
        }
        self.sync_panel_from_active();
        true
    }

    pub fn rename_file(&mut self, id: EntityId, title: &str) -> bool {
        let changed = self.files.rename(id, title, self.clock.now());
        if changed {
            self.persist(Document::Files);
        }
        changed
    }

    pub fn delete_file(&mut self, id: EntityId) -> bool {
        let was_active = self.files.active_id() == Some(id);
        if !self.files.delete(id) {
            return false;
        }
        if was_active {
            self.sync_panel_from_active();
        }
        self.persist(Document::Files);
        true
    }

    // ─── Editor ──────────────────────────────────────────────────────────

    /// Push the panel buffer into the active file. No-op without one.
    fn commit_buffer(&mut self) -> bool {
        let Some(id) = self.files.active_id() else {
            return false;
        };
        let text = self.panel.text();
        let changed = self.files.update_content(id, &text, self.clock.now());
        if changed {
            self.persist(Document::Files);
        }
        changed
    }

    /// Replace the active file's text (a textarea change event).
    pub fn edit_content(&mut self, text: &str) -> bool {
        if self.files.active_id().is_none() {
            return false;
        }
        self.panel.replace(text);
        self.commit_buffer()
    }

    pub fn insert_text(&mut self, char_idx: usize, text: &str) -> bool {
        if self.files.active_id().is_none() {
            return false;
        }
        self.panel.insert(char_idx, text);
        self.commit_buffer()
    }

    pub fn remove_text(&mut self, range: Range<usize>) -> bool {
        if self.files.active_id().is_none() {
            return false;
        }
        self.panel.remove(range);
        self.commit_buffer()
    }

    pub fn toggle_preview(&mut self) -> bool {
        self.panel.toggle_preview()
    }

    /// Raise the cosmetic "Saving..." indicator. Content is already durable;
    /// nothing is written.
    pub fn save(&mut self) -> bool {
        if self.files.active_id().is_none() {
            return false;
        }
        self.saving_since = Some(self.clock.now());
        true
    }

    pub fn is_saving(&self) -> bool {
        let window = Duration::milliseconds(self.config.save_indicator_ms);
        self.saving_since
            .is_some_and(|since| self.clock.now() - since < window)
    }

    // ─── View ────────────────────────────────────────────────────────────

    pub fn toggle_sidebar(&mut self) -> bool {
        self.view.sidebar_open = !self.view.sidebar_open;
        self.view.sidebar_open
    }

    /// Switch views. Showing the drawing view resizes its surface and
    /// repaints on the next `render`.
    pub fn set_tab(&mut self, tab: Tab) {
        if self.view.tab != tab {
            self.view.tab = tab;
            if tab == Tab::Drawing {
                self.pad.request_resize();
            }
        }
    }

    // ─── Brainstorm ──────────────────────────────────────────────────────

    pub fn measure_board(&mut self, width: f64, height: f64) {
        self.board.measure(width, height);
    }

    pub fn add_note(&mut self, text: &str) -> Option<EntityId> {
        let id = self.board.add_note(text, self.random.as_mut())?;
        self.persist(Document::Notes);
        Some(id)
    }

    pub fn delete_note(&mut self, id: EntityId) -> bool {
        let changed = self.board.delete_note(id);
        if changed {
            self.persist(Document::Notes);
        }
        changed
    }

    pub fn move_note(&mut self, id: EntityId, dx: f64, dy: f64) -> bool {
        let changed = self.board.move_note(id, dx, dy);
        if changed {
            self.persist(Document::Notes);
        }
        changed
    }

    pub fn begin_note_drag(&mut self, id: EntityId, x: f64, y: f64) -> bool {
        self.board.begin_drag(id, x, y)
    }

    pub fn drag_note_to(&mut self, x: f64, y: f64) -> Option<NoteDrag> {
        self.board.drag_to(x, y)
    }

    pub fn end_note_drag(&mut self, x: f64, y: f64) -> bool {
        let changed = self.board.end_drag(x, y);
        if changed {
            self.persist(Document::Notes);
        }
        changed
    }

    /// Pointer cancelled mid-drag: the note stays put and nothing is written.
    pub fn cancel_note_drag(&mut self) -> bool {
        self.board.cancel_drag()
    }

    // ─── Drawing ─────────────────────────────────────────────────────────

    /// Report the drawing surface's client rectangle (view shown, window
    /// resized). The next render resizes the raster and repaints.
    pub fn resize_surface(&mut self, bounds: SurfaceRect) {
        self.pad.set_bounds(bounds);
    }

    /// Feed a pointer event to the drawing pad. Returns whether a repaint is
    /// needed.
    pub fn handle_pointer(&mut self, event: &InputEvent) -> bool {
        match self.pad.handle(event) {
            StrokeOutcome::Ignored => false,
            StrokeOutcome::Updated => true,
            StrokeOutcome::Committed(_) => {
                self.persist(Document::Paths);
                true
            }
        }
    }

    /// Set the pen from a color-picker value. Unparseable colors are ignored.
    pub fn set_pen_color(&mut self, hex: &str) -> bool {
        match Color::from_hex(hex) {
            Some(color) => {
                self.pad.set_pen_color(color);
                true
            }
            None => {
                log::debug!("workspace: ignoring pen color {hex:?}");
                false
            }
        }
    }

    pub fn set_pen_width(&mut self, width: i64) {
        self.pad.set_pen_width(width);
    }

    pub fn clear_drawing(&mut self) {
        self.pad.clear();
        self.persist(Document::Paths);
    }

    /// Repaint the drawing surface if the drawing view is showing and
    /// something changed. Returns whether a paint happened.
    pub fn render(&mut self, surface: &mut dyn Surface) -> bool {
        if self.view.tab != Tab::Drawing {
            return false;
        }
        self.pad.render(surface)
    }
}
