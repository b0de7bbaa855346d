//! Text/markdown panel: the editable buffer for the active file and its
//! derived preview.
//!
//! The panel holds no document state of its own. It mirrors the active
//! file's content; every edit is pushed back into the registry by the
//! workspace.

use lyric_core::markdown;
use ropey::Rope;
use std::ops::Range;

#[derive(Debug, Clone, Default)]
pub struct TextPanel {
    buffer: Rope,
    preview_visible: bool,
}

impl TextPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer with a file's content (file switch, create, delete).
    pub fn load(&mut self, text: &str) {
        self.buffer = Rope::from_str(text);
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Replace the whole buffer, as a textarea change event does.
    pub fn replace(&mut self, text: &str) {
        self.load(text);
    }

    /// Insert at a char index. The index is clamped to the buffer end.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        let at = char_idx.min(self.buffer.len_chars());
        self.buffer.insert(at, text);
    }

    /// Remove a char range. The range is clamped to the buffer; an inverted
    /// range removes nothing.
    pub fn remove(&mut self, range: Range<usize>) {
        let len = self.buffer.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start < end {
            self.buffer.remove(start..end);
        }
    }

    /// Rendered HTML for the preview pane.
    pub fn preview_html(&self) -> String {
        markdown::render_html(&self.text())
    }

    pub fn preview_visible(&self) -> bool {
        self.preview_visible
    }

    pub fn toggle_preview(&mut self) -> bool {
        self.preview_visible = !self.preview_visible;
        self.preview_visible
    }

    pub fn word_count(&self) -> usize {
        markdown::word_count(&self.text())
    }

    pub fn line_count(&self) -> usize {
        markdown::line_count(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove_are_clamped() {
        let mut p = TextPanel::new();
        p.load("hello");
        p.insert(99, " world");
        assert_eq!(p.text(), "hello world");
        p.remove(5..1000);
        assert_eq!(p.text(), "hello");
        p.remove(4..2);
        assert_eq!(p.text(), "hello");
    }

    #[test]
    fn char_indices_respect_multibyte_text() {
        let mut p = TextPanel::new();
        p.load("café");
        p.insert(4, "!");
        assert_eq!(p.text(), "café!");
        p.remove(3..4);
        assert_eq!(p.text(), "caf!");
    }

    #[test]
    fn preview_is_derived() {
        let mut p = TextPanel::new();
        p.replace("## Verse");
        assert!(p.preview_html().contains("<h2>Verse</h2>"));
        assert!(!p.preview_visible());
        assert!(p.toggle_preview());
        assert!(!p.toggle_preview());
    }

    #[test]
    fn counts_follow_buffer() {
        let mut p = TextPanel::new();
        p.replace("la la la\nhey hey");
        assert_eq!(p.word_count(), 5);
        assert_eq!(p.line_count(), 2);
    }
}
