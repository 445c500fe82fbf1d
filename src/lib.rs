//! User notes — an append-only plain-text note store.
//!
//! Notes are stored one per line in a single UTF-8 file. The store offers
//! append, read-all, read-latest and summarize accessors, and the
//! [`templates`] module builds the greeting and prompt strings served next to
//! them.

pub mod cli;
pub mod store;
pub mod templates;
pub mod types;

// Re-export commonly used types at the crate root
pub use store::NoteStore;
pub use templates::{greeting, greeting_prompt, summary_request, GreetingStyle};
pub use types::{
    NotesError, NotesResult, DEFAULT_NOTES_FILE, NOTE_SAVED, NO_NOTES_FOUND, NO_NOTE_FOUND,
};
