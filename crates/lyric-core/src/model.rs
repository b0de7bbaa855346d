//! Core data model for Lyric Workshop documents.
//!
//! Three independent collections make up a workspace: lyric files, brainstorm
//! notes, and drawing paths. Each is persisted as a whole-document JSON array
//! (see [`crate::store`]), so every type here derives `Serialize` and
//! `Deserialize` with camelCase field names.

use crate::id::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0], persisted as a CSS hex string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        let short = |i: usize| hex_val(bytes[i]).map(|v| (v * 17) as f32 / 255.0);
        let long = |i: usize| -> Option<f32> {
            let byte = hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?;
            Some(byte as f32 / 255.0)
        };

        match bytes.len() {
            3 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, 1.0)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, 1.0)),
            8 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (channel(self.r), channel(self.g), channel(self.b), channel(self.a));
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s:?}")))
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// A 2D point in pixels. Used for note positions and stroke samples.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by a delta. No clamping.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

// ─── Lyric files ─────────────────────────────────────────────────────────

/// A lyric document in the file list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricFile {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub last_modified: DateTime<Utc>,
}

impl LyricFile {
    /// A fresh, empty file with a generated ID.
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::generate(),
            title: title.into(),
            content: String::new(),
            last_modified: now,
        }
    }

    /// Short date for the file list, e.g. `Oct 19, 2026`.
    pub fn display_date(&self) -> String {
        self.last_modified.format("%b %-d, %Y").to_string()
    }
}

/// Auto-generated title for the `n`-th file (1-based).
pub fn untitled_title(n: usize) -> String {
    format!("Untitled Lyrics {n}")
}

// ─── Brainstorm notes ────────────────────────────────────────────────────

/// Sticky-note color. The palette is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
}

/// Every note color, in palette order.
pub const NOTE_PALETTE: [NoteColor; 5] = [
    NoteColor::Yellow,
    NoteColor::Pink,
    NoteColor::Blue,
    NoteColor::Green,
    NoteColor::Purple,
];

impl NoteColor {
    /// Background fill used when drawing the note.
    pub fn fill(self) -> Color {
        let hex = match self {
            NoteColor::Yellow => "#FEF08A",
            NoteColor::Pink => "#FBCFE8",
            NoteColor::Blue => "#BFDBFE",
            NoteColor::Green => "#BBF7D0",
            NoteColor::Purple => "#E9D5FF",
        };
        Color::from_hex(hex).unwrap_or_default()
    }
}

/// A positioned sticky note on the brainstorm board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainstormNote {
    pub id: EntityId,
    pub content: String,
    pub color: NoteColor,
    /// Top-left offset inside the board, in pixels.
    pub position: Point,
}

// ─── Drawing paths ───────────────────────────────────────────────────────

pub const MIN_PEN_WIDTH: u32 = 1;
pub const MAX_PEN_WIDTH: u32 = 20;

/// Clamp a requested pen width into `[MIN_PEN_WIDTH, MAX_PEN_WIDTH]`.
pub fn clamp_pen_width(width: i64) -> u32 {
    width.clamp(MIN_PEN_WIDTH as i64, MAX_PEN_WIDTH as i64) as u32
}

/// A committed freehand stroke. Immutable once committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingPath {
    pub id: EntityId,
    pub points: Vec<Point>,
    pub color: Color,
    pub width: u32,
}
