//! Note drag gesture
//!
//! `Idle` / `Dragging` state machine. A press records the grab offset inside
//! the card; cursor moves compute a candidate position, and at most one
//! position update is released per animation frame. Document-level mouse
//! listeners are wanted exactly while a drag is active.

use super::geometry::{Point, Rect};
use crate::database::NoteId;

/// A coalesced position change for one note
#[derive(Debug, Clone, PartialEq)]
pub struct DragUpdate {
    pub note_id: NoteId,
    pub position: Point,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        note_id: NoteId,
        /// Grab point relative to the card's top-left corner
        offset: Point,
        /// Latest position not yet released to the board
        pending: Option<Point>,
    },
}

impl DragState {
    /// Arm dragging for `note_id` grabbed at `client` inside `card`.
    pub fn press(&mut self, note_id: &str, client: Point, card: Rect) {
        *self = DragState::Dragging {
            note_id: note_id.to_string(),
            offset: Point::new(client.x - card.left, client.y - card.top),
            pending: None,
        };
    }

    /// Record a cursor move. `board` is the bounding rect of the element
    /// whose coordinate system is the notes' `(x, y)`.
    ///
    /// Returns true when this move opened a new frame slot, i.e. the caller
    /// should schedule an animation frame.
    pub fn track(&mut self, client: Point, board: Rect) -> bool {
        match self {
            DragState::Idle => false,
            DragState::Dragging {
                offset, pending, ..
            } => {
                let position = Point::new(
                    (client.x - board.left - offset.x).max(0.0),
                    (client.y - board.top - offset.y).max(0.0),
                );
                pending.replace(position).is_none()
            }
        }
    }

    /// Release the latest tracked position, if any, for this frame.
    pub fn frame(&mut self) -> Option<DragUpdate> {
        match self {
            DragState::Idle => None,
            DragState::Dragging {
                note_id, pending, ..
            } => pending.take().map(|position| DragUpdate {
                note_id: note_id.clone(),
                position,
            }),
        }
    }

    /// End the drag, flushing a position that has not reached a frame yet.
    pub fn release(&mut self) -> Option<DragUpdate> {
        let update = self.frame();
        *self = DragState::Idle;
        update
    }

    pub fn dragging_note(&self) -> Option<&str> {
        match self {
            DragState::Dragging { note_id, .. } => Some(note_id),
            DragState::Idle => None,
        }
    }

    /// Whether document-level move/up listeners should be installed
    pub fn wants_document_listeners(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
