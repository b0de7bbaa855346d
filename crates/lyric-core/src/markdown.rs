//! Markdown → HTML preview for the lyric editor.
//!
//! Uses `pulldown-cmark`, which accepts any input: unclosed emphasis, stray
//! fences, and broken links all render as best-effort HTML rather than
//! failing. Raw HTML in the source is escaped and shown as text so a lyric
//! sheet can never inject markup into the preview.

use pulldown_cmark::{Event, Options, Parser, html};

fn preview_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render lyric markdown to an HTML fragment.
#[must_use]
pub fn render_html(source: &str) -> String {
    let parser = Parser::new_ext(source, preview_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(source.len() + source.len() / 2);
    html::push_html(&mut out, parser);
    out
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of lines, counting a trailing partial line. Empty text has zero.
pub fn line_count(text: &str) -> usize {
    text.lines().count()
}
