//! Investigation board: note cards, connection curves and the gestures
//! that move and link them.

pub mod connect;
pub mod curve;
pub mod drag;
pub mod editor;
pub mod geometry;
pub mod links;
pub mod note_card;
pub mod view;

pub use connect::{ConnectMode, ConnectStep};
pub use curve::CurveView;
pub use drag::DragState;
pub use editor::{EditorField, EditorView, NoteEditor};
pub use geometry::{Point, Rect};
pub use note_card::NoteCardView;
pub use view::{BoardScene, BoardView};
