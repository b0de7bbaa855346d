//! Persistent store: an opaque key-value capability plus the JSON codec for
//! the three workspace documents.
//!
//! Each document is a whole-collection snapshot. Writing one never touches the
//! others, and a corrupt document only costs its own collection.

use crate::model::{BrainstormNote, DrawingPath, LyricFile};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

// ─── Capability ──────────────────────────────────────────────────────────

/// A host key-value byte store (browser `localStorage`, a file, memory).
pub trait KeyValueStore {
    /// Read the bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Replace the bytes stored under `key`.
    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), String>;
}

/// In-memory store for tests and native hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Stored value as UTF-8 text, for assertions and debugging.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|b| std::str::from_utf8(b).ok())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), String> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        self.writes += 1;
        Ok(())
    }
}

// ─── Documents ───────────────────────────────────────────────────────────

/// The three independently persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Files,
    Notes,
    Paths,
}

impl Document {
    /// Store key for this document.
    pub const fn key(self) -> &'static str {
        match self {
            Document::Files => "lyricFiles",
            Document::Notes => "brainstormNotes",
            Document::Paths => "drawingPaths",
        }
    }
}

/// Encode a collection as a JSON array.
pub fn encode_collection<T: Serialize>(items: &[T]) -> Result<Vec<u8>, String> {
    serde_json::to_vec(items).map_err(|e| format!("Serialization error: {e}"))
}

/// Decode a JSON array. An empty or whitespace-only payload decodes as empty.
pub fn decode_collection<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, String> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(bytes).map_err(|e| format!("Deserialization error: {e}"))
}

/// Load one document. A missing key yields an empty collection; a corrupt
/// one is logged and also yields an empty collection.
pub fn load_collection<T: DeserializeOwned>(store: &impl KeyValueStore, doc: Document) -> Vec<T> {
    let Some(bytes) = store.get(doc.key()) else {
        log::debug!("store: no `{}` document, starting empty", doc.key());
        return Vec::new();
    };
    match decode_collection(&bytes) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("store: discarding corrupt `{}` document: {e}", doc.key());
            Vec::new()
        }
    }
}

/// Write one document as a whole-collection snapshot.
pub fn save_collection<T: Serialize>(
    store: &mut impl KeyValueStore,
    doc: Document,
    items: &[T],
) -> Result<(), String> {
    let bytes = encode_collection(items)?;
    log::trace!("store: writing `{}` ({} items, {} bytes)", doc.key(), items.len(), bytes.len());
    store.set(doc.key(), &bytes)
}

// ─── Snapshot ────────────────────────────────────────────────────────────

/// All three collections as loaded from a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub files: Vec<LyricFile>,
    pub notes: Vec<BrainstormNote>,
    pub paths: Vec<DrawingPath>,
}

impl Snapshot {
    /// Load each document independently.
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            files: load_collection(store, Document::Files),
            notes: load_collection(store, Document::Notes),
            paths: load_collection(store, Document::Paths),
        }
    }
}
