//! Board data model
//!
//! Rust structs for the three persisted entities: cases, notes and
//! connections. Field names serialize in camelCase so the stored JSON keeps
//! the `{id, x, y, text, imageUrl, fileUrl, fileName}` shape.

use crate::config::{DEFAULT_NOTE_X, DEFAULT_NOTE_Y};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CaseId = String;
pub type NoteId = String;
pub type ConnectionId = String;

/// Allocate a new entity id.
///
/// UUIDv7 keeps ids ordered by creation time while staying unique for
/// creations within the same millisecond.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// A named container for one board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: CaseId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Case {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// A 200x200 card on the board; `x`/`y` is its top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub file_name: String,
}

impl Note {
    /// Creates an empty note at the default board position.
    pub fn new() -> Self {
        Self::with_id(new_id())
    }

    pub fn with_id(id: impl Into<NoteId>) -> Self {
        Self {
            id: id.into(),
            x: DEFAULT_NOTE_X,
            y: DEFAULT_NOTE_Y,
            text: String::new(),
            image_url: String::new(),
            file_url: String::new(),
            file_name: String::new(),
        }
    }

    /// Moves the note, clamping both coordinates to the board's lower bound.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = clamp_coordinate(x);
        self.y = clamp_coordinate(y);
    }

    pub fn fields(&self) -> NoteFields {
        NoteFields {
            text: self.text.clone(),
            image_url: self.image_url.clone(),
            file_url: self.file_url.clone(),
            file_name: self.file_name.clone(),
        }
    }

    pub fn apply_fields(&mut self, fields: NoteFields) {
        self.text = fields.text;
        self.image_url = fields.image_url;
        self.file_url = fields.file_url;
        self.file_name = fields.file_name;
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps a coordinate finite and non-negative. NaN maps to the origin and
/// +inf to `f64::MAX`, since JSON cannot carry non-finite numbers.
fn clamp_coordinate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else if value == f64::INFINITY {
        f64::MAX
    } else {
        value.max(0.0)
    }
}

/// The editable content of a note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteFields {
    pub text: String,
    pub image_url: String,
    pub file_url: String,
    pub file_name: String,
}

/// Fixed palette for connection strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionColor {
    #[serde(rename = "#ef4444")]
    Red,
    #[serde(rename = "#3b82f6")]
    Blue,
    #[serde(rename = "#10b981")]
    Green,
    #[serde(rename = "#a855f7")]
    Purple,
    #[serde(rename = "#f97316")]
    Orange,
}

impl ConnectionColor {
    pub const PALETTE: [ConnectionColor; 5] = [
        ConnectionColor::Red,
        ConnectionColor::Blue,
        ConnectionColor::Green,
        ConnectionColor::Purple,
        ConnectionColor::Orange,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            ConnectionColor::Red => "#ef4444",
            ConnectionColor::Blue => "#3b82f6",
            ConnectionColor::Green => "#10b981",
            ConnectionColor::Purple => "#a855f7",
            ConnectionColor::Orange => "#f97316",
        }
    }

    /// Uniformly random palette entry
    pub fn random() -> Self {
        *Self::PALETTE
            .choose(&mut rand::thread_rng())
            .unwrap_or(&ConnectionColor::Red)
    }
}

/// A link between two distinct notes of the same case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub from: NoteId,
    pub to: NoteId,
    pub color: ConnectionColor,
}

impl Connection {
    pub fn new(from: impl Into<NoteId>, to: impl Into<NoteId>, color: ConnectionColor) -> Self {
        Self {
            id: new_id(),
            from: from.into(),
            to: to.into(),
            color,
        }
    }

    pub fn touches(&self, note_id: &str) -> bool {
        self.from == note_id || self.to == note_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = Note::new();
        assert_eq!((note.x, note.y), (100.0, 100.0));
        assert!(note.text.is_empty());
        assert!(note.image_url.is_empty());
        assert!(note.file_url.is_empty());
        assert!(note.file_name.is_empty());
    }

    #[test]
    fn test_move_clamps_to_origin() {
        let mut note = Note::new();
        note.move_to(-40.0, 12.5);
        assert_eq!((note.x, note.y), (0.0, 12.5));

        note.move_to(f64::NAN, -0.1);
        assert_eq!((note.x, note.y), (0.0, 0.0));
    }

    #[test]
    fn test_move_keeps_coordinates_finite() {
        let mut note = Note::new();
        note.move_to(f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!((note.x, note.y), (f64::MAX, 0.0));

        let json = serde_json::to_string(&note).unwrap();
        let parsed: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, note);
    }

    #[test]
    fn test_note_json_shape() {
        let mut note = Note::with_id("n1");
        note.image_url = "https://example.com/a.png".to_string();

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "n1",
                "x": 100.0,
                "y": 100.0,
                "text": "",
                "imageUrl": "https://example.com/a.png",
                "fileUrl": "",
                "fileName": ""
            })
        );
    }

    #[test]
    fn test_note_missing_text_fields_default_to_empty() {
        let note: Note = serde_json::from_str(r#"{"id":"n","x":5,"y":6}"#).unwrap();
        assert_eq!(note.x, 5.0);
        assert!(note.text.is_empty());
    }

    #[test]
    fn test_connection_color_serializes_as_hex() {
        let conn = Connection {
            id: "c1".to_string(),
            from: "a".to_string(),
            to: "b".to_string(),
            color: ConnectionColor::Purple,
        };

        let json = serde_json::to_string(&conn).unwrap();
        assert_eq!(json, r##"{"id":"c1","from":"a","to":"b","color":"#a855f7"}"##);

        let parsed: Connection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, conn);
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let result =
            serde_json::from_str::<Connection>(r##"{"id":"c","from":"a","to":"b","color":"#000"}"##);
        assert!(result.is_err());
    }

    #[test]
    fn test_hex_matches_serialized_name() {
        for color in ConnectionColor::PALETTE {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, format!("\"{}\"", color.hex()));
        }
    }

    #[test]
    fn test_random_color_is_in_palette() {
        for _ in 0..50 {
            assert!(ConnectionColor::PALETTE.contains(&ConnectionColor::random()));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_case_created_at_round_trips() {
        let case = Case::new("Alpha");
        let json = serde_json::to_string(&case).unwrap();
        assert!(json.contains("\"createdAt\""));
        let parsed: Case = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, case);
    }
}
