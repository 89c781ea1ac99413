//! Error types for the Jotpad core library.

use thiserror::Error;

use crate::NoteId;

/// All errors that can occur within the Jotpad core library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JotpadError {
    /// A note ID was requested that does not exist in the store.
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    /// A draft failed validation when trying to save it.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

/// Convenience alias that pins the error type to [`JotpadError`].
pub type Result<T> = std::result::Result<T, JotpadError>;

impl JotpadError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoteNotFound(_) => "Note no longer exists".to_string(),
            Self::ValidationFailed(msg) => msg.clone(),
        }
    }
}
