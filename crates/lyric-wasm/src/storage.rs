//! Browser `localStorage` as a [`KeyValueStore`].
//!
//! `localStorage` holds strings, so bytes are stored as UTF-8 text (the
//! documents are JSON anyway). When storage is unavailable (disabled
//! cookies, sandboxed iframes) the bridge falls back to memory for the
//! session.

use lyric_core::store::{KeyValueStore, MemoryStore};
use web_sys::Storage;

pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Open `window.localStorage`, or fall back to memory.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match storage {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                log::warn!("localStorage unavailable; changes will not survive a reload");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self {
            BrowserStore::Local(storage) => match storage.get_item(key) {
                Ok(value) => value.map(String::into_bytes),
                Err(e) => {
                    log::warn!("localStorage.getItem({key}) failed: {e:?}");
                    None
                }
            },
            BrowserStore::Memory(mem) => mem.get(key),
        }
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), String> {
        match self {
            BrowserStore::Local(storage) => {
                let text = std::str::from_utf8(bytes).map_err(|e| format!("non-UTF-8 value: {e}"))?;
                storage
                    .set_item(key, text)
                    .map_err(|e| format!("localStorage.setItem({key}) failed: {e:?}"))
            }
            BrowserStore::Memory(mem) => mem.set(key, bytes),
        }
    }
}
