//! Note card view model and gesture routing

use crate::config::{
    DEFAULT_FILE_LABEL, EMPTY_NOTE_PLACEHOLDER, NOTE_BACKGROUND, NOTE_HEIGHT, NOTE_HIGHLIGHT_SCALE,
    NOTE_HOVER_SCALE, NOTE_HOVER_SCALE_CONNECT, NOTE_PREVIEW_MAX_CHARS, NOTE_PREVIEW_MAX_LINES,
    NOTE_ROTATION_DEG, NOTE_ROTATION_DRAGGING_DEG, NOTE_SHADOW, NOTE_SHADOW_DRAGGING, NOTE_WIDTH,
    NOTE_Z_INDEX, NOTE_Z_INDEX_DRAGGING,
};
use crate::database::{Note, NoteId};
use serde::Serialize;

/// Board-level flags that affect how one card renders
#[derive(Debug, Clone, Copy, Default)]
pub struct CardFlags {
    pub connect_mode: bool,
    /// First endpoint of a pending connection
    pub highlighted: bool,
    pub dragging: bool,
    /// Header image failed to load earlier in this session
    pub image_failed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCardView {
    pub id: NoteId,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub background: &'static str,
    pub z_index: u32,
    pub rotation_deg: f64,
    pub shadow: &'static str,
    pub scale: f64,
    pub hover_scale: f64,
    pub highlighted: bool,
    pub image_url: Option<String>,
    pub text: String,
    pub text_is_placeholder: bool,
    pub attachment: Option<Attachment>,
}

impl NoteCardView {
    pub fn build(note: &Note, flags: CardFlags) -> Self {
        let (text, text_is_placeholder) = if note.text.is_empty() {
            (EMPTY_NOTE_PLACEHOLDER.to_string(), true)
        } else {
            (text_preview(&note.text), false)
        };

        let attachment = (!note.file_url.is_empty()).then(|| Attachment {
            url: note.file_url.clone(),
            label: if note.file_name.is_empty() {
                DEFAULT_FILE_LABEL.to_string()
            } else {
                note.file_name.clone()
            },
        });

        Self {
            id: note.id.clone(),
            left: note.x,
            top: note.y,
            width: NOTE_WIDTH,
            height: NOTE_HEIGHT,
            background: NOTE_BACKGROUND,
            z_index: if flags.dragging {
                NOTE_Z_INDEX_DRAGGING
            } else {
                NOTE_Z_INDEX
            },
            rotation_deg: if flags.dragging {
                NOTE_ROTATION_DRAGGING_DEG
            } else {
                NOTE_ROTATION_DEG
            },
            shadow: if flags.dragging {
                NOTE_SHADOW_DRAGGING
            } else {
                NOTE_SHADOW
            },
            scale: if flags.highlighted {
                NOTE_HIGHLIGHT_SCALE
            } else {
                1.0
            },
            hover_scale: if flags.connect_mode {
                NOTE_HOVER_SCALE_CONNECT
            } else {
                NOTE_HOVER_SCALE
            },
            highlighted: flags.highlighted,
            image_url: (!note.image_url.is_empty() && !flags.image_failed)
                .then(|| note.image_url.clone()),
            text,
            text_is_placeholder,
            attachment,
        }
    }
}

/// Truncate note text to the card's visible lines and characters.
pub fn text_preview(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut preview = lines
        .iter()
        .take(NOTE_PREVIEW_MAX_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    let mut truncated = lines.len() > NOTE_PREVIEW_MAX_LINES;

    if preview.chars().count() > NOTE_PREVIEW_MAX_CHARS {
        preview = preview.chars().take(NOTE_PREVIEW_MAX_CHARS).collect();
        truncated = true;
    }

    if truncated {
        preview.truncate(preview.trim_end().len());
        preview.push_str("...");
    }
    preview
}

/// What a pointer gesture on a card means to the board
#[derive(Debug, Clone, PartialEq)]
pub enum CardIntent {
    StartDrag,
    SelectForConnection(NoteId),
    Edit(NoteId),
    Nothing,
}

/// Routes raw card gestures, making one physical click select a note once
/// in connect mode even though both the press and the click report it.
#[derive(Debug, Clone, Default)]
pub struct GestureRouter {
    forwarded_press: Option<NoteId>,
}

impl GestureRouter {
    pub fn press(&mut self, note_id: &str, connect_mode: bool) -> CardIntent {
        if connect_mode {
            self.forwarded_press = Some(note_id.to_string());
            CardIntent::SelectForConnection(note_id.to_string())
        } else {
            self.forwarded_press = None;
            CardIntent::StartDrag
        }
    }

    pub fn click(&mut self, note_id: &str, connect_mode: bool) -> CardIntent {
        let pressed = self.forwarded_press.take();
        if !connect_mode || pressed.as_deref() == Some(note_id) {
            CardIntent::Nothing
        } else {
            CardIntent::SelectForConnection(note_id.to_string())
        }
    }

    pub fn double_click(&mut self, note_id: &str, connect_mode: bool) -> CardIntent {
        if connect_mode {
            CardIntent::Nothing
        } else {
            CardIntent::Edit(note_id.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Note {
        let mut note = Note::with_id("n1");
        note.x = 40.0;
        note.y = 60.0;
        note
    }

    #[test]
    fn test_resting_card() {
        let view = NoteCardView::build(&note(), CardFlags::default());

        assert_eq!((view.left, view.top), (40.0, 60.0));
        assert_eq!((view.width, view.height), (200.0, 200.0));
        assert_eq!(view.z_index, 10);
        assert_eq!(view.rotation_deg, -1.0);
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.text, "Empty note...");
        assert!(view.text_is_placeholder);
        assert_eq!(view.image_url, None);
        assert_eq!(view.attachment, None);
    }

    #[test]
    fn test_dragging_and_highlighted_card() {
        let view = NoteCardView::build(
            &note(),
            CardFlags {
                connect_mode: true,
                highlighted: true,
                dragging: true,
                image_failed: false,
            },
        );

        assert_eq!(view.z_index, 1000);
        assert_eq!(view.rotation_deg, 2.0);
        assert_eq!(view.shadow, NOTE_SHADOW_DRAGGING);
        assert_eq!(view.scale, 1.1);
        assert_eq!(view.hover_scale, 1.1);
        assert!(view.highlighted);
    }

    #[test]
    fn test_image_hidden_after_failure() {
        let mut n = note();
        n.image_url = "https://example.com/pin.png".to_string();

        let shown = NoteCardView::build(&n, CardFlags::default());
        assert_eq!(shown.image_url.as_deref(), Some("https://example.com/pin.png"));

        let hidden = NoteCardView::build(
            &n,
            CardFlags {
                image_failed: true,
                ..CardFlags::default()
            },
        );
        assert_eq!(hidden.image_url, None);
    }

    #[test]
    fn test_attachment_label() {
        let mut n = note();
        n.file_url = "https://example.com/report.pdf".to_string();

        let view = NoteCardView::build(&n, CardFlags::default());
        assert_eq!(view.attachment.unwrap().label, "File");

        n.file_name = "report.pdf".to_string();
        let view = NoteCardView::build(&n, CardFlags::default());
        assert_eq!(view.attachment.unwrap().label, "report.pdf");
    }

    #[test]
    fn test_file_name_without_url_has_no_attachment() {
        let mut n = note();
        n.file_name = "orphan.pdf".to_string();

        assert_eq!(NoteCardView::build(&n, CardFlags::default()).attachment, None);
    }

    #[test]
    fn test_text_preview_limits() {
        assert_eq!(text_preview("short"), "short");
        assert_eq!(text_preview("1\n2\n3\n4\n5\n6"), "1\n2\n3\n4...");

        let long = "x".repeat(200);
        let preview = text_preview(&long);
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_press_outside_connect_mode_starts_drag() {
        let mut router = GestureRouter::default();
        assert_eq!(router.press("a", false), CardIntent::StartDrag);
        assert_eq!(router.click("a", false), CardIntent::Nothing);
    }

    #[test]
    fn test_connect_mode_click_selects_once() {
        let mut router = GestureRouter::default();

        assert_eq!(
            router.press("a", true),
            CardIntent::SelectForConnection("a".to_string())
        );
        assert_eq!(router.click("a", true), CardIntent::Nothing);

        // A click without a forwarded press still selects
        assert_eq!(
            router.click("b", true),
            CardIntent::SelectForConnection("b".to_string())
        );
    }

    #[test]
    fn test_double_click_edits_only_outside_connect_mode() {
        let mut router = GestureRouter::default();
        assert_eq!(router.double_click("a", false), CardIntent::Edit("a".to_string()));
        assert_eq!(router.double_click("a", true), CardIntent::Nothing);
    }
}
