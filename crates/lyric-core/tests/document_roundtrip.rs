//! Integration tests: collection → store → collection round-trip.
//!
//! Verifies that the three persisted documents survive a full write/read
//! cycle and that documents written by the browser build load unchanged.

use chrono::{TimeZone, Utc};
use lyric_core::store::{Document, Snapshot, load_collection, save_collection};
use lyric_core::*;
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_snapshot() -> Snapshot {
    let files = vec![
        LyricFile {
            id: EntityId::intern("file-a"),
            title: "Verse".into(),
            content: "la la la\n\n**hook**".into(),
            last_modified: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        },
        LyricFile {
            id: EntityId::intern("file-b"),
            title: "Bridge \"quoted\"".into(),
            content: String::new(),
            last_modified: Utc.timestamp_millis_opt(1_760_000_000_123).unwrap(),
        },
    ];
    let notes = vec![BrainstormNote {
        id: EntityId::intern("note-a"),
        content: "rhyme with fire".into(),
        color: NoteColor::Pink,
        position: Point::new(-12.5, 480.0),
    }];
    let paths = vec![DrawingPath {
        id: EntityId::intern("path-a"),
        points: vec![Point::new(1.0, 1.0), Point::new(2.5, 3.25)],
        color: Color::from_hex("#1E90FF").unwrap(),
        width: 7,
    }];
    Snapshot { files, notes, paths }
}

// ─── Round-trip ──────────────────────────────────────────────────────────

#[test]
fn all_documents_roundtrip() {
    init_logging();
    let snapshot = sample_snapshot();
    let mut store = MemoryStore::new();
    save_collection(&mut store, Document::Files, &snapshot.files).unwrap();
    save_collection(&mut store, Document::Notes, &snapshot.notes).unwrap();
    save_collection(&mut store, Document::Paths, &snapshot.paths).unwrap();

    assert_eq!(Snapshot::load(&store), snapshot);
}

#[test]
fn writing_one_document_leaves_others_alone() {
    init_logging();
    let snapshot = sample_snapshot();
    let mut store = MemoryStore::new();
    save_collection(&mut store, Document::Notes, &snapshot.notes).unwrap();

    assert!(store.get_str(Document::Files.key()).is_none());
    assert!(store.get_str(Document::Paths.key()).is_none());
}

// ─── Browser-written documents ───────────────────────────────────────────

#[test]
fn loads_document_written_by_browser_build() {
    init_logging();
    let mut store = MemoryStore::new();
    store
        .set(
            Document::Files.key(),
            br#"[{"id":"6f1c2a7e-0000-4000-8000-000000000001","title":"Hook","content":"oh oh","lastModified":"2026-10-19T08:15:30.250Z"}]"#,
        )
        .unwrap();

    let files: Vec<LyricFile> = load_collection(&store, Document::Files);
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].title, "Hook");
    assert_eq!(
        files[0].last_modified,
        Utc.timestamp_millis_opt(1_792_397_730_250).unwrap()
    );
}

#[test]
fn corrupt_files_document_does_not_block_notes() {
    init_logging();
    let snapshot = sample_snapshot();
    let mut store = MemoryStore::new();
    store.set(Document::Files.key(), b"[{\"id\":").unwrap();
    save_collection(&mut store, Document::Notes, &snapshot.notes).unwrap();

    let loaded = Snapshot::load(&store);
    assert!(loaded.files.is_empty());
    assert_eq!(loaded.notes, snapshot.notes);
}
