//! Application configuration constants
//!
//! Central location for board geometry, rendering constants, validation
//! limits and the user-facing strings shared by the views.

// ===== Board Geometry =====

/// Width of a note card in board units
pub const NOTE_WIDTH: f64 = 200.0;
/// Height of a note card in board units
pub const NOTE_HEIGHT: f64 = 200.0;

/// Position given to freshly created notes
pub const DEFAULT_NOTE_X: f64 = 100.0;
pub const DEFAULT_NOTE_Y: f64 = 100.0;

/// Size of the rendered board canvas. Notes may be placed beyond it;
/// only the lower bound (0, 0) is enforced.
pub const BOARD_CANVAS_WIDTH: f64 = 3000.0;
pub const BOARD_CANVAS_HEIGHT: f64 = 3000.0;

/// Vertical sag of a connection per unit of horizontal span
pub const CONNECTION_SAG_FACTOR: f64 = 0.1;

// ===== Connection Strokes =====

/// Width of the invisible hit region along a connection
pub const CURVE_HIT_WIDTH: f64 = 25.0;
pub const CURVE_SHADOW_COLOR: &str = "rgba(0,0,0,0.4)";
pub const CURVE_SHADOW_OFFSET: f64 = 3.0;
pub const CURVE_SHADOW_WIDTH: f64 = 8.0;
pub const CURVE_SHADOW_WIDTH_HOVER: f64 = 10.0;
pub const CURVE_STROKE_WIDTH: f64 = 7.0;
pub const CURVE_STROKE_WIDTH_HOVER: f64 = 9.0;
pub const CURVE_DASH_PATTERN: &str = "12,6";
pub const CURVE_OPACITY: f64 = 0.9;

// ===== Note Card Presentation =====

pub const NOTE_BACKGROUND: &str = "#FEFF9C";
pub const NOTE_Z_INDEX: u32 = 10;
pub const NOTE_Z_INDEX_DRAGGING: u32 = 1000;
pub const NOTE_ROTATION_DEG: f64 = -1.0;
pub const NOTE_ROTATION_DRAGGING_DEG: f64 = 2.0;
pub const NOTE_SHADOW: &str = "0 8px 16px rgba(0,0,0,0.2)";
pub const NOTE_SHADOW_DRAGGING: &str = "0 20px 30px rgba(0,0,0,0.3)";
pub const NOTE_HOVER_SCALE: f64 = 1.05;
pub const NOTE_HOVER_SCALE_CONNECT: f64 = 1.10;
pub const NOTE_HIGHLIGHT_SCALE: f64 = 1.10;

/// Maximum number of text lines shown on a card
pub const NOTE_PREVIEW_MAX_LINES: usize = 4;
/// Maximum number of characters shown on a card
pub const NOTE_PREVIEW_MAX_CHARS: usize = 160;

pub const EMPTY_NOTE_PLACEHOLDER: &str = "Empty note...";
pub const DEFAULT_FILE_LABEL: &str = "File";

// ===== Directory =====

/// Display format for case creation dates (local time)
pub const DATE_DISPLAY_FORMAT: &str = "%d.%m.%Y";

// ===== Labels =====

pub const DIRECTORY_TITLE: &str = "My Notebook";
pub const DIRECTORY_SUBTITLE: &str = "Organize your ideas";
pub const DIRECTORY_EMPTY_TITLE: &str = "No cases yet";
pub const DIRECTORY_EMPTY_HINT: &str = "Create a new case to get started";
pub const BOARD_EMPTY_TITLE: &str = "No notes yet";
pub const BOARD_EMPTY_HINT: &str = "Click \"New Note\" to get started";
pub const CONNECT_BUTTON_LABEL: &str = "Connect Notes";
pub const CONNECT_BUTTON_LABEL_ACTIVE: &str = "Exit Connect Mode";
pub const EDITOR_TITLE: &str = "Edit Note";
pub const EDITOR_IMAGE_ERROR: &str = "Image could not be loaded";

// ===== Confirmations =====

pub const CONFIRM_DELETE_CONNECTION: &str = "Do you want to delete this connection?";
pub const CONFIRM_DELETE_NOTE: &str = "Are you sure you want to delete this note?";

// ===== Notifications =====

pub const TOAST_ERROR_TITLE: &str = "Error";
pub const TOAST_SUCCESS_TITLE: &str = "Success";
pub const TOAST_WARNING_TITLE: &str = "Warning";
pub const TOAST_DELETED_TITLE: &str = "Deleted";
pub const TOAST_EMPTY_CASE_NAME: &str = "Please enter a name";
pub const TOAST_CASE_CREATED: &str = "New case created";
pub const TOAST_CASE_DELETED: &str = "Case deleted";
pub const TOAST_FIRST_SELECTED_TITLE: &str = "First note selected";
pub const TOAST_FIRST_SELECTED: &str = "Now select the second note";
pub const TOAST_SAME_NOTE: &str = "You cannot select the same note";
pub const TOAST_CONNECTION_CREATED: &str = "Connection created";

// ===== Storage =====

/// Data directory used when none is given on the command line
pub const DEFAULT_DATA_DIR: &str = "corkboard-data";
/// SQLite database file inside the data directory
pub const DATABASE_FILE_NAME: &str = "corkboard.db";
