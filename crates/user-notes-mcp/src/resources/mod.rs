//! MCP resources: the latest note and the greeting template.

pub mod greeting;
pub mod latest_note;
pub mod registry;

pub use registry::ResourceRegistry;
