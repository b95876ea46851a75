//! Connect mode state machine
//!
//! ```text
//! Off --toggle--> On(None) --click a--> On(Some a) --click b != a--> Off (+ connection a -> b)
//!                                       On(Some a) --click a-------> On(Some a) (rejected)
//! On(_) --toggle--> Off
//! ```

use crate::database::NoteId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectMode {
    #[default]
    Off,
    On { first: Option<NoteId> },
}

/// Result of feeding a note click into the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectStep {
    /// Not in connect mode; the click is not a selection
    Ignored,
    FirstSelected(NoteId),
    /// Second click on the pending note; the selection is kept
    SameNote(NoteId),
    Completed { from: NoteId, to: NoteId },
}

impl ConnectMode {
    pub fn is_active(&self) -> bool {
        matches!(self, ConnectMode::On { .. })
    }

    /// The note selected as the first endpoint, if any
    pub fn pending(&self) -> Option<&str> {
        match self {
            ConnectMode::On { first: Some(id) } => Some(id),
            _ => None,
        }
    }

    /// Flip between Off and On; either direction clears the pending selection.
    pub fn toggle(&mut self) {
        *self = match self {
            ConnectMode::Off => ConnectMode::On { first: None },
            ConnectMode::On { .. } => ConnectMode::Off,
        };
    }

    pub fn click(&mut self, note_id: &str) -> ConnectStep {
        match self {
            ConnectMode::Off => ConnectStep::Ignored,
            ConnectMode::On { first: None } => {
                *self = ConnectMode::On {
                    first: Some(note_id.to_string()),
                };
                ConnectStep::FirstSelected(note_id.to_string())
            }
            ConnectMode::On { first: Some(first) } if first.as_str() == note_id => {
                ConnectStep::SameNote(note_id.to_string())
            }
            ConnectMode::On { first: Some(first) } => {
                let from = std::mem::take(first);
                *self = ConnectMode::Off;
                ConnectStep::Completed {
                    from,
                    to: note_id.to_string(),
                }
            }
        }
    }
}
