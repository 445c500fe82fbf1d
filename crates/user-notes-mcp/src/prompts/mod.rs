//! MCP prompts: note summary and greeting requests.

pub mod greet_user;
pub mod note_summary;
pub mod registry;

pub use registry::PromptRegistry;
