//! Server configuration.

pub mod loader;

pub use loader::{load_config, resolve_notes_path, ServerConfig, NOTES_FILE_ENV};
