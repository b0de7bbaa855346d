//! Interned entity identifiers.
//!
//! Interned strings are never released. Every generated ID (one per note and
//! committed stroke) stays in the interner for the life of the process, even
//! after its entity is deleted or the drawing is cleared.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for entity IDs.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// A lightweight, interned identifier for files, notes, and drawing paths.
/// Internally a `Spur` index: 4 bytes, Copy, O(1) Eq and Hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(Spur);

impl EntityId {
    /// Intern a string as an EntityId, or return existing if already interned.
    pub fn intern(s: &str) -> Self {
        EntityId(INTERNER.get_or_intern(s))
    }

    /// Look up an already-interned ID without interning.
    ///
    /// Returns `None` for strings no entity has ever used, which lets bridge
    /// code reject unknown IDs without growing the interner.
    pub fn lookup(s: &str) -> Option<Self> {
        INTERNER.get(s).map(EntityId)
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Generate a fresh random ID (UUID v4 text).
    pub fn generate() -> Self {
        Self::intern(&uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(EntityId::intern(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = EntityId::intern("chorus-draft");
        let b = EntityId::intern("chorus-draft");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "chorus-draft");
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = EntityId::generate();
        let b = EntityId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36, "expected hyphenated uuid text");
    }

    #[test]
    fn lookup_does_not_intern() {
        assert!(EntityId::lookup("never-seen-before-7c1f").is_none());
        let id = EntityId::intern("seen-once");
        assert_eq!(EntityId::lookup("seen-once"), Some(id));
    }

    #[test]
    fn generated_ids_remain_resolvable() {
        let id = EntityId::generate();
        let text = id.as_str().to_string();
        assert_eq!(EntityId::lookup(&text), Some(id));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EntityId::intern("verse-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"verse-1\"");
        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
