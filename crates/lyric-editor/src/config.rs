//! Workspace configuration.

use serde::{Deserialize, Serialize};

/// Tunables for a [`crate::workspace::Workspace`].
///
/// Every field has a default, so a host may pass a partial JSON object (or
/// nothing at all).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceConfig {
    /// Board size assumed before the host has measured the container.
    pub board_fallback_width: f64,
    pub board_fallback_height: f64,

    /// Minimum distance of a new note from the board's top-left corner.
    pub note_margin: f64,

    /// Space reserved to the right and below a new note's origin.
    pub note_extent: f64,

    /// Initial pen, as a CSS hex color.
    pub pen_color: String,
    pub pen_width: u32,

    /// How long the cosmetic "Saving..." indicator stays up.
    pub save_indicator_ms: i64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            board_fallback_width: 400.0,
            board_fallback_height: 300.0,
            note_margin: 20.0,
            note_extent: 200.0,
            pen_color: "#000000".to_string(),
            pen_width: 2,
            save_indicator_ms: 800,
        }
    }
}

impl WorkspaceConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Config parse error: {e}"))
    }
}
