pub mod id;
pub mod markdown;
pub mod model;
pub mod store;

pub use id::EntityId;
pub use model::*;
pub use store::{Document, KeyValueStore, MemoryStore, Snapshot};
