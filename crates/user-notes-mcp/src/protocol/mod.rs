//! JSON-RPC dispatch and MCP lifecycle.

pub mod handler;
pub mod negotiation;
pub mod validator;

pub use handler::ProtocolHandler;
