//! User Notes MCP Server — note taking for any MCP-compatible LLM client.
//!
//! Exposes the `user_notes` store as MCP tools (`addNote`, `readNotes`),
//! resources (`mynotes://local/latest`, `greeting://{name}`) and prompts
//! (`noteSummary`, `greet_user`) over JSON-RPC on stdio.

pub mod config;
pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod session;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::ServerConfig;
pub use protocol::ProtocolHandler;
pub use session::SessionManager;
pub use transport::StdioTransport;
