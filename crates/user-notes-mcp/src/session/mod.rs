//! Session management: note store ownership for the server process.

pub mod manager;

pub use manager::SessionManager;
