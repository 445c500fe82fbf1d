//! Shared types and fixed strings for the notes library.

pub mod error;

pub use error::{NotesError, NotesResult};

/// Default notes file, relative to the working directory.
pub const DEFAULT_NOTES_FILE: &str = "MY_NOTES.txt";

/// Returned by `append` once the note is written.
pub const NOTE_SAVED: &str = "Note has been saved successfully!";

/// Returned by `read_all` and `summarize` when the store holds no text.
pub const NO_NOTE_FOUND: &str = "No note found!";

/// Returned by `read_latest` when the store has zero lines.
pub const NO_NOTES_FOUND: &str = "No notes found";
