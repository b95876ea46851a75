//! Note editor form state
//!
//! Holds a draft of the four editable fields for one note. Nothing is
//! written to the note until the draft is saved.

use crate::config::{CONFIRM_DELETE_NOTE, EDITOR_IMAGE_ERROR, EDITOR_TITLE};
use crate::database::{Note, NoteFields, NoteId};
use crate::ui::Confirm;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorField {
    Text,
    ImageUrl,
    FileUrl,
    FileName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteEditor {
    note_id: NoteId,
    draft: NoteFields,
    image_failed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub title: &'static str,
    pub note_id: NoteId,
    pub fields: NoteFields,
    pub image_preview: Option<String>,
    pub image_error: Option<&'static str>,
}

impl NoteEditor {
    /// Open the editor with fields populated from `note`
    pub fn open(note: &Note) -> Self {
        Self {
            note_id: note.id.clone(),
            draft: note.fields(),
            image_failed: false,
        }
    }

    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    pub fn draft(&self) -> &NoteFields {
        &self.draft
    }

    pub fn set_field(&mut self, field: EditorField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EditorField::Text => self.draft.text = value,
            EditorField::ImageUrl => {
                if self.draft.image_url != value {
                    self.image_failed = false;
                }
                self.draft.image_url = value;
            }
            EditorField::FileUrl => self.draft.file_url = value,
            EditorField::FileName => self.draft.file_name = value,
        }
    }

    /// The preview image failed to load
    pub fn image_load_failed(&mut self) {
        if !self.draft.image_url.is_empty() {
            self.image_failed = true;
        }
    }

    /// Commit the draft; the editor closes
    pub fn save(self) -> (NoteId, NoteFields) {
        (self.note_id, self.draft)
    }

    /// Ask for confirmation; yields the note to delete when confirmed
    pub fn request_delete(&self, confirm: &dyn Confirm) -> Option<NoteId> {
        confirm
            .confirm(CONFIRM_DELETE_NOTE)
            .then(|| self.note_id.clone())
    }

    pub fn view(&self) -> EditorView {
        let has_image = !self.draft.image_url.is_empty();
        EditorView {
            title: EDITOR_TITLE,
            note_id: self.note_id.clone(),
            fields: self.draft.clone(),
            image_preview: (has_image && !self.image_failed).then(|| self.draft.image_url.clone()),
            image_error: (has_image && self.image_failed).then_some(EDITOR_IMAGE_ERROR),
        }
    }
}
