//! MCP tools — how a model writes and reads notes.

pub mod add_note;
pub mod read_notes;
pub mod registry;

pub use registry::ToolRegistry;
