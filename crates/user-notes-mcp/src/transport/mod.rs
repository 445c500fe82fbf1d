//! Transports carrying JSON-RPC messages to and from the client.

pub mod framing;
pub mod stdio;

pub use stdio::StdioTransport;
