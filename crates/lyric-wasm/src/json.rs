//! JSON views handed to the host UI.
//!
//! Plain functions over a [`Workspace`] so they can be tested natively.

use lyric_core::store::KeyValueStore;
use lyric_editor::Workspace;
use serde_json::{Value, json};

/// File list for the sidebar.
pub fn files_json<S: KeyValueStore>(ws: &Workspace<S>) -> Value {
    let active = ws.files().active_id();
    let files: Vec<Value> = ws
        .files()
        .files()
        .iter()
        .map(|f| {
            json!({
                "id": f.id.as_str(),
                "title": f.title,
                "date": f.display_date(),
                "active": Some(f.id) == active,
            })
        })
        .collect();
    Value::Array(files)
}

/// The editor pane: active file, buffer, and preview.
pub fn editor_json<S: KeyValueStore>(ws: &Workspace<S>) -> Value {
    let panel = ws.panel();
    let view = ws.view();
    let active = ws.active_file().map(|f| {
        json!({
            "id": f.id.as_str(),
            "title": f.title,
        })
    });
    let preview = if panel.preview_visible() {
        Value::String(panel.preview_html())
    } else {
        Value::Null
    };
    json!({
        "active": active,
        "content": panel.text(),
        "previewVisible": panel.preview_visible(),
        "preview": preview,
        "words": panel.word_count(),
        "lines": panel.line_count(),
        "saving": ws.is_saving(),
        "sidebarOpen": view.sidebar_open,
        "tab": view.tab.name(),
    })
}

/// Board notes in paint order, with their fill colors.
pub fn notes_json<S: KeyValueStore>(ws: &Workspace<S>) -> Value {
    let drag = ws.board().active_drag();
    let notes: Vec<Value> = ws
        .board()
        .notes()
        .iter()
        .map(|n| {
            let (dx, dy) = drag
                .filter(|d| d.id == n.id)
                .map_or((0.0, 0.0), |d| (d.dx, d.dy));
            json!({
                "id": n.id.as_str(),
                "content": n.content,
                "color": n.color,
                "fill": n.color.fill().to_hex(),
                "x": n.position.x + dx,
                "y": n.position.y + dy,
            })
        })
        .collect();
    Value::Array(notes)
}

/// Pen state for the drawing toolbar.
pub fn pen_json<S: KeyValueStore>(ws: &Workspace<S>) -> Value {
    let pen = ws.pad().pen();
    json!({
        "color": pen.color.to_hex(),
        "width": pen.width,
        "paths": ws.pad().paths().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyric_core::store::MemoryStore;
    use lyric_editor::WorkspaceConfig;
    use pretty_assertions::assert_eq;

    fn ws() -> Workspace<MemoryStore> {
        Workspace::load(MemoryStore::new(), WorkspaceConfig::default())
    }

    #[test]
    fn files_mark_active() {
        let mut ws = ws();
        ws.create_file();
        let b = ws.create_file();
        let json = files_json(&ws);
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["active"], false);
        assert_eq!(arr[1]["active"], true);
        assert_eq!(arr[1]["id"], b.as_str());
        assert_eq!(arr[1]["title"], "Untitled Lyrics 2");
    }

    #[test]
    fn editor_preview_only_when_visible() {
        let mut ws = ws();
        ws.create_file();
        ws.edit_content("**bold** words here");
        let hidden = editor_json(&ws);
        assert_eq!(hidden["preview"], Value::Null);
        assert_eq!(hidden["words"], 3);

        ws.toggle_preview();
        let shown = editor_json(&ws);
        assert!(shown["preview"].as_str().unwrap().contains("<strong>bold</strong>"));
        assert_eq!(shown["tab"], "lyrics");
    }

    #[test]
    fn notes_include_live_drag_offset() {
        let mut ws = ws();
        let id = ws.add_note("idea").unwrap();
        let x0 = notes_json(&ws)[0]["x"].as_f64().unwrap();
        ws.begin_note_drag(id, 0.0, 0.0);
        ws.drag_note_to(25.0, 0.0);
        let x1 = notes_json(&ws)[0]["x"].as_f64().unwrap();
        assert!((x1 - x0 - 25.0).abs() < 1e-9);
    }

    #[test]
    fn pen_defaults() {
        let json = pen_json(&ws());
        assert_eq!(json["color"], "#000000");
        assert_eq!(json["width"], 2);
    }
}
