//! Command implementations for the `notes` binary.

pub mod commands;
