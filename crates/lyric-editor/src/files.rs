//! File registry: the ordered lyric file list and its active-file pointer.
//!
//! Invariant: `active` is either `None` or the ID of a file in `files`.
//! Every method that can break it (delete) repairs it before returning, and
//! every method that would set a dangling pointer (select) refuses to.
//!
//! Mutating methods return `true` when the collection changed, which is the
//! caller's cue to persist the `lyricFiles` document.

use chrono::{DateTime, Utc};
use lyric_core::id::EntityId;
use lyric_core::model::{LyricFile, untitled_title};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileRegistry {
    files: Vec<LyricFile>,
    active: Option<EntityId>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a loaded collection, activating the most recently modified
    /// file. Ties go to the earliest file in collection order.
    pub fn from_files(files: Vec<LyricFile>) -> Self {
        let mut registry = Self {
            files,
            active: None,
        };
        registry.active = registry.most_recent().map(|f| f.id);
        registry
    }

    fn most_recent(&self) -> Option<&LyricFile> {
        self.files.iter().fold(None, |best: Option<&LyricFile>, f| match best {
            Some(b) if b.last_modified >= f.last_modified => Some(b),
            _ => Some(f),
        })
    }

    pub fn files(&self) -> &[LyricFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&LyricFile> {
        self.files.iter().find(|f| f.id == id)
    }

    fn get_mut(&mut self, id: EntityId) -> Option<&mut LyricFile> {
        self.files.iter_mut().find(|f| f.id == id)
    }

    pub fn active_id(&self) -> Option<EntityId> {
        self.active
    }

    pub fn active(&self) -> Option<&LyricFile> {
        self.active.and_then(|id| self.get(id))
    }

    /// Append a new empty file titled `Untitled Lyrics {n+1}` and make it
    /// active.
    pub fn create(&mut self, now: DateTime<Utc>) -> EntityId {
        let file = LyricFile::new(untitled_title(self.files.len() + 1), now);
        let id = file.id;
        log::debug!("files: create {id} {:?}", file.title);
        self.files.push(file);
        self.active = Some(id);
        id
    }

    /// Make `id` the active file. Unknown IDs are ignored and leave the
    /// current selection in place. Returns whether `id` is now active.
    pub fn select(&mut self, id: EntityId) -> bool {
        if self.get(id).is_none() {
            log::debug!("files: ignoring select of unknown {id}");
            return false;
        }
        self.active = Some(id);
        true
    }

    /// Retitle a file. Blank titles and unknown IDs are ignored.
    pub fn rename(&mut self, id: EntityId, title: &str, now: DateTime<Utc>) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        let Some(file) = self.get_mut(id) else {
            return false;
        };
        file.title = title.to_string();
        file.last_modified = now;
        log::debug!("files: rename {id} -> {title:?}");
        true
    }

    /// Remove a file. If it was active, the first remaining file becomes
    /// active, or none.
    pub fn delete(&mut self, id: EntityId) -> bool {
        let Some(pos) = self.files.iter().position(|f| f.id == id) else {
            return false;
        };
        self.files.remove(pos);
        if self.active == Some(id) {
            self.active = self.files.first().map(|f| f.id);
        }
        log::debug!("files: delete {id}, active now {:?}", self.active);
        true
    }

    /// Replace the content of the active file. Writes to any other file are
    /// ignored.
    pub fn update_content(&mut self, id: EntityId, text: &str, now: DateTime<Utc>) -> bool {
        if self.active != Some(id) {
            return false;
        }
        let Some(file) = self.get_mut(id) else {
            return false;
        };
        file.content = text.to_string();
        file.last_modified = now;
        log::trace!("files: update {id} ({} bytes)", text.len());
        true
    }
}
