//! Configuration loading from file, environment, and CLI arguments.

use std::path::Path;

use serde::{Deserialize, Serialize};

use user_notes::DEFAULT_NOTES_FILE;

use crate::types::{McpError, McpResult};

/// Environment variable naming the notes file.
pub const NOTES_FILE_ENV: &str = "USER_NOTES_FILE";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path to the notes file.
    #[serde(default = "default_notes_path")]
    pub notes_path: String,
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_notes_path() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            notes_path: default_notes_path(),
            log_level: default_log_level(),
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> McpResult<ServerConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        McpError::Io(std::io::Error::other(format!(
            "Failed to read config file {}: {e}",
            path.display()
        )))
    })?;

    toml::from_str(&content)
        .map_err(|e| McpError::InternalError(format!("Failed to parse config: {e}")))
}

/// Resolve the notes file path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. USER_NOTES_FILE environment variable
/// 3. `notes_path` from the config file
/// 4. MY_NOTES.txt in the current directory
pub fn resolve_notes_path(explicit: Option<&str>, config: Option<&ServerConfig>) -> String {
    if let Some(path) = explicit {
        return path.to_string();
    }

    if let Ok(env_path) = std::env::var(NOTES_FILE_ENV) {
        if !env_path.trim().is_empty() {
            return env_path;
        }
    }

    config
        .map(|c| c.notes_path.clone())
        .unwrap_or_else(default_notes_path)
}
