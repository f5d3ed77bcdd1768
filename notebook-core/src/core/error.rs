//! Error types for the Notebook core library.

use thiserror::Error;

/// All errors that can occur within the Notebook core library.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// Reading or writing a notebook file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A note index was requested that is not in the store.
    #[error("Note not found: {0}")]
    NoteNotFound(usize),
}

/// Convenience alias that pins the error type to [`NotebookError`].
pub type Result<T> = std::result::Result<T, NotebookError>;

impl NotebookError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File error: {e}"),
            Self::NoteNotFound(index) => format!("There is no note number {}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_converts() {
        let err: NotebookError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, NotebookError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_note_not_found_message_is_one_based() {
        let e = NotebookError::NoteNotFound(4);
        assert_eq!(e.to_string(), "Note not found: 4");
        assert_eq!(e.user_message(), "There is no note number 5");
    }
}
