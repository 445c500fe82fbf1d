//! Error types for the notes library.

use thiserror::Error;

/// All errors that can occur in the notes library.
///
/// Empty stores are not errors: read operations return sentinel strings
/// instead, so the only failure class is the filesystem itself.
#[derive(Error, Debug)]
pub enum NotesError {
    /// IO error while creating, reading, or appending to the notes file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for notes operations.
pub type NotesResult<T> = Result<T, NotesError>;
