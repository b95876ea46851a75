//! Error types for the Corkboard application
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the front end.
//!
//! User mistakes (empty case name, connecting a note to itself) are not
//! errors: they surface as notifications and leave state untouched.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Case not found: {0}")]
    CaseNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Command requires the {expected} view")]
    WrongView { expected: &'static str },
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_display_string() {
        let err = AppError::NoteNotFound("n1".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Note not found: n1\"");
    }

    #[test]
    fn test_wrong_view_message() {
        let err = AppError::WrongView { expected: "board" };
        assert_eq!(err.to_string(), "Command requires the board view");
    }
}
