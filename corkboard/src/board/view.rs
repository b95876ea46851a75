//! Board view coordinator
//!
//! Owns the authoritative notes and connections of the active case and
//! mirrors every mutation to the [`BoardStore`] before returning, so a
//! gesture's state change and its persistence complete together.

use super::connect::{ConnectMode, ConnectStep};
use super::curve::{self, CurveView};
use super::drag::{DragState, DragUpdate};
use super::editor::{EditorView, NoteEditor};
use super::geometry::{anchor, Point, Rect};
use super::links::LinkIndex;
use super::note_card::{CardFlags, CardIntent, GestureRouter, NoteCardView};
use crate::config::{
    BOARD_CANVAS_HEIGHT, BOARD_CANVAS_WIDTH, BOARD_EMPTY_HINT, BOARD_EMPTY_TITLE,
    CONNECT_BUTTON_LABEL, CONNECT_BUTTON_LABEL_ACTIVE, TOAST_CONNECTION_CREATED,
    TOAST_FIRST_SELECTED, TOAST_FIRST_SELECTED_TITLE, TOAST_SAME_NOTE, TOAST_SUCCESS_TITLE,
    TOAST_WARNING_TITLE,
};
use crate::database::{CaseId, Connection, ConnectionColor, ConnectionId, Note, NoteId};
use crate::error::{AppError, Result};
use crate::storage::BoardStore;
use crate::ui::{EmptyState, Toast, Ui};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Everything the front end needs to draw the board
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardScene {
    pub case_id: CaseId,
    pub title: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub connect_mode: bool,
    pub connect_label: &'static str,
    pub pending_note: Option<NoteId>,
    pub notes: Vec<NoteCardView>,
    pub connections: Vec<CurveView>,
    pub empty_state: Option<EmptyState>,
    pub editor: Option<EditorView>,
    /// Document-level mouse listeners should be installed
    pub capture_pointer: bool,
}

pub struct BoardView {
    store: BoardStore,
    ui: Ui,
    case_id: CaseId,
    case_name: String,
    notes: Vec<Note>,
    connections: Vec<Connection>,
    links: LinkIndex,
    connect: ConnectMode,
    drag: DragState,
    gestures: GestureRouter,
    editor: Option<NoteEditor>,
    hovered_connection: Option<ConnectionId>,
    failed_images: HashSet<NoteId>,
}

impl BoardView {
    /// Load the board for `case_id`.
    ///
    /// An unknown case yields a blank title over whatever notes and
    /// connections are stored under its id (normally none).
    pub async fn mount(store: BoardStore, ui: Ui, case_id: &str) -> Result<Self> {
        let case_name = store
            .load_cases()
            .await?
            .into_iter()
            .find(|c| c.id == case_id)
            .map(|c| c.name)
            .unwrap_or_default();

        let mut notes = store.load_notes(case_id).await?;
        for note in &mut notes {
            if note.x < 0.0 || note.y < 0.0 {
                tracing::warn!("Clamping stored note {} at ({}, {})", note.id, note.x, note.y);
                let (x, y) = (note.x, note.y);
                note.move_to(x, y);
            }
        }

        let note_ids: HashSet<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        let mut connections = store.load_connections(case_id).await?;
        connections.retain(|c| {
            let valid =
                c.from != c.to && note_ids.contains(c.from.as_str()) && note_ids.contains(c.to.as_str());
            if !valid {
                tracing::warn!(
                    "Dropping dangling connection {} ({} -> {})",
                    c.id,
                    c.from,
                    c.to
                );
            }
            valid
        });

        tracing::info!(
            "Mounted board for case {} ({} notes, {} connections)",
            case_id,
            notes.len(),
            connections.len()
        );

        Ok(Self {
            store,
            ui,
            case_id: case_id.to_string(),
            case_name,
            links: LinkIndex::build(&connections),
            notes,
            connections,
            connect: ConnectMode::Off,
            drag: DragState::Idle,
            gestures: GestureRouter::default(),
            editor: None,
            hovered_connection: None,
            failed_images: HashSet::new(),
        })
    }

    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    pub fn case_name(&self) -> &str {
        &self.case_name
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connect_mode(&self) -> &ConnectMode {
        &self.connect
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn editor(&self) -> Option<&NoteEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut NoteEditor> {
        self.editor.as_mut()
    }

    pub fn note(&self, note_id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == note_id)
    }

    fn require_note(&self, note_id: &str) -> Result<&Note> {
        self.note(note_id)
            .ok_or_else(|| AppError::NoteNotFound(note_id.to_string()))
    }

    // ===== Notes =====

    /// Create an empty note at the default position and open it in the editor.
    pub async fn add_note(&mut self) -> Result<NoteId> {
        let note = Note::new();
        let id = note.id.clone();

        self.editor = Some(NoteEditor::open(&note));
        self.notes.push(note);
        self.persist_notes().await?;

        tracing::info!("Created note {} in case {}", id, self.case_id);
        Ok(id)
    }

    /// Remove a note and every connection that references it.
    pub async fn delete_note(&mut self, note_id: &str) -> Result<()> {
        self.require_note(note_id)?;

        self.notes.retain(|n| n.id != note_id);
        let doomed = self.links.detach_note(note_id);
        self.connections.retain(|c| !doomed.contains(&c.id));

        if self.connect.pending() == Some(note_id) {
            self.connect = ConnectMode::On { first: None };
        }
        if self
            .hovered_connection
            .as_ref()
            .is_some_and(|id| doomed.contains(id))
        {
            self.hovered_connection = None;
        }
        if self.editor.as_ref().is_some_and(|e| e.note_id() == note_id) {
            self.editor = None;
        }
        self.failed_images.remove(note_id);

        self.persist_notes().await?;
        self.persist_connections().await?;

        tracing::info!(
            "Deleted note {} and {} connection(s) in case {}",
            note_id,
            doomed.len(),
            self.case_id
        );
        Ok(())
    }

    /// The note's header image failed to load; hide it for this session
    pub fn note_image_failed(&mut self, note_id: &str) {
        self.failed_images.insert(note_id.to_string());
    }

    // ===== Pointer gestures =====

    /// Mouse press on a card. Arms a drag, or selects the note in connect mode.
    pub async fn note_mouse_down(&mut self, note_id: &str, client: Point, card: Rect) -> Result<()> {
        self.require_note(note_id)?;

        match self.gestures.press(note_id, self.connect.is_active()) {
            CardIntent::StartDrag => {
                self.drag.press(note_id, client, card);
                tracing::debug!("Drag started for note {}", note_id);
                Ok(())
            }
            CardIntent::SelectForConnection(id) => self.select_for_connection(&id).await,
            CardIntent::Edit(_) | CardIntent::Nothing => Ok(()),
        }
    }

    /// Cursor moved while the document listeners are installed.
    /// Returns true when an animation frame should be requested.
    pub fn mouse_move(&mut self, client: Point, board: Rect) -> bool {
        self.drag.track(client, board)
    }

    /// Apply at most one coalesced position update.
    pub async fn animation_frame(&mut self) -> Result<bool> {
        match self.drag.frame() {
            Some(update) => {
                self.apply_drag(update).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn mouse_up(&mut self) -> Result<()> {
        if let Some(update) = self.drag.release() {
            self.apply_drag(update).await?;
        }
        Ok(())
    }

    pub async fn note_click(&mut self, note_id: &str) -> Result<()> {
        self.require_note(note_id)?;

        match self.gestures.click(note_id, self.connect.is_active()) {
            CardIntent::SelectForConnection(id) => self.select_for_connection(&id).await,
            _ => Ok(()),
        }
    }

    pub fn note_double_click(&mut self, note_id: &str) -> Result<()> {
        self.require_note(note_id)?;

        if let CardIntent::Edit(id) = self.gestures.double_click(note_id, self.connect.is_active()) {
            self.editor = self.note(&id).map(NoteEditor::open);
        }
        Ok(())
    }

    async fn apply_drag(&mut self, update: DragUpdate) -> Result<()> {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == update.note_id) else {
            return Ok(());
        };
        note.move_to(update.position.x, update.position.y);

        tracing::debug!(
            "Moved note {} to ({}, {})",
            update.note_id,
            update.position.x,
            update.position.y
        );
        self.persist_notes().await
    }

    // ===== Connect mode =====

    pub fn toggle_connect_mode(&mut self) {
        self.connect.toggle();
        tracing::debug!("Connect mode active: {}", self.connect.is_active());
    }

    async fn select_for_connection(&mut self, note_id: &str) -> Result<()> {
        match self.connect.click(note_id) {
            ConnectStep::Ignored => Ok(()),
            ConnectStep::FirstSelected(_) => {
                self.ui
                    .notify(Toast::new(TOAST_FIRST_SELECTED_TITLE, TOAST_FIRST_SELECTED));
                Ok(())
            }
            ConnectStep::SameNote(_) => {
                self.ui
                    .notify(Toast::destructive(TOAST_WARNING_TITLE, TOAST_SAME_NOTE));
                Ok(())
            }
            ConnectStep::Completed { from, to } => {
                let connection = Connection::new(from, to, ConnectionColor::random());
                tracing::info!(
                    "Connected {} -> {} ({}) in case {}",
                    connection.from,
                    connection.to,
                    connection.color.hex(),
                    self.case_id
                );

                self.links.insert(&connection);
                self.connections.push(connection);
                self.persist_connections().await?;

                self.ui
                    .notify(Toast::new(TOAST_SUCCESS_TITLE, TOAST_CONNECTION_CREATED));
                Ok(())
            }
        }
    }

    // ===== Connections =====

    pub fn hover_connection(&mut self, connection_id: &str, hovered: bool) {
        if hovered {
            self.hovered_connection = Some(connection_id.to_string());
        } else if self.hovered_connection.as_deref() == Some(connection_id) {
            self.hovered_connection = None;
        }
    }

    /// Click on a connection's hit region. Returns true when it was deleted.
    pub async fn click_connection(&mut self, connection_id: &str) -> Result<bool> {
        if !self.connections.iter().any(|c| c.id == connection_id) {
            return Err(AppError::ConnectionNotFound(connection_id.to_string()));
        }

        match curve::confirm_delete(connection_id, self.ui.confirm.as_ref()) {
            Some(id) => {
                self.delete_connection(&id).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn delete_connection(&mut self, connection_id: &str) -> Result<()> {
        let before = self.connections.len();
        self.connections.retain(|c| c.id != connection_id);
        if self.connections.len() == before {
            return Err(AppError::ConnectionNotFound(connection_id.to_string()));
        }

        self.links.remove(connection_id);
        if self.hovered_connection.as_deref() == Some(connection_id) {
            self.hovered_connection = None;
        }
        self.persist_connections().await?;

        tracing::info!("Deleted connection {} in case {}", connection_id, self.case_id);
        Ok(())
    }

    // ===== Editor =====

    /// Commit the editor's draft to its note and close the editor.
    pub async fn save_editor(&mut self) -> Result<()> {
        let Some(editor) = self.editor.take() else {
            return Ok(());
        };
        let (note_id, fields) = editor.save();

        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or_else(|| AppError::NoteNotFound(note_id.clone()))?;
        note.apply_fields(fields);
        // Saved image URLs get a fresh load attempt
        self.failed_images.remove(&note_id);

        self.persist_notes().await?;
        tracing::debug!("Saved note {}", note_id);
        Ok(())
    }

    pub fn cancel_editor(&mut self) {
        self.editor = None;
    }

    /// Delete the edited note after confirmation. Returns true when deleted.
    pub async fn delete_from_editor(&mut self) -> Result<bool> {
        let Some(note_id) = self
            .editor
            .as_ref()
            .and_then(|e| e.request_delete(self.ui.confirm.as_ref()))
        else {
            return Ok(false);
        };

        self.delete_note(&note_id).await?;
        Ok(true)
    }

    // ===== Persistence =====

    async fn persist_notes(&self) -> Result<()> {
        self.store.save_notes(&self.case_id, &self.notes).await
    }

    async fn persist_connections(&self) -> Result<()> {
        self.store
            .save_connections(&self.case_id, &self.connections)
            .await
    }

    // ===== Rendering =====

    pub fn scene(&self) -> BoardScene {
        let pending = self.connect.pending();
        let dragging = self.drag.dragging_note();

        let notes: Vec<NoteCardView> = self
            .notes
            .iter()
            .map(|note| {
                NoteCardView::build(
                    note,
                    CardFlags {
                        connect_mode: self.connect.is_active(),
                        highlighted: pending == Some(note.id.as_str()),
                        dragging: dragging == Some(note.id.as_str()),
                        image_failed: self.failed_images.contains(&note.id),
                    },
                )
            })
            .collect();

        let by_id: HashMap<&str, &Note> = self.notes.iter().map(|n| (n.id.as_str(), n)).collect();
        let connections: Vec<CurveView> = self
            .connections
            .iter()
            .filter_map(|c| {
                let from = by_id.get(c.from.as_str())?;
                let to = by_id.get(c.to.as_str())?;
                Some(CurveView::build(
                    &c.id,
                    anchor(from),
                    anchor(to),
                    c.color,
                    self.hovered_connection.as_deref() == Some(c.id.as_str()),
                ))
            })
            .collect();

        BoardScene {
            case_id: self.case_id.clone(),
            title: self.case_name.clone(),
            canvas_width: BOARD_CANVAS_WIDTH,
            canvas_height: BOARD_CANVAS_HEIGHT,
            connect_mode: self.connect.is_active(),
            connect_label: if self.connect.is_active() {
                CONNECT_BUTTON_LABEL_ACTIVE
            } else {
                CONNECT_BUTTON_LABEL
            },
            pending_note: pending.map(str::to_string),
            notes,
            connections,
            empty_state: self.notes.is_empty().then_some(EmptyState {
                title: BOARD_EMPTY_TITLE,
                hint: BOARD_EMPTY_HINT,
            }),
            editor: self.editor.as_ref().map(NoteEditor::view),
            capture_pointer: self.drag.wants_document_listeners(),
        }
    }
}
