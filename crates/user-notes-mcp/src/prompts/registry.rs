//! Prompt registration and expansion.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde_json::Value;

use crate::session::SessionManager;
use crate::types::{McpError, McpResult, PromptDefinition, PromptGetResult};

use super::{greet_user, note_summary};

/// Registry of all available MCP prompts.
pub struct PromptRegistry;

impl PromptRegistry {
    /// List all available prompt definitions.
    pub fn list_prompts() -> Vec<PromptDefinition> {
        vec![note_summary::definition(), greet_user::definition()]
    }

    /// Expand the named prompt with the given arguments.
    pub async fn get(
        name: &str,
        arguments: Option<Value>,
        session: &Arc<Mutex<SessionManager>>,
    ) -> McpResult<PromptGetResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            "noteSummary" => note_summary::expand(session).await,
            "greet_user" => greet_user::expand(args),
            _ => Err(McpError::PromptNotFound(name.to_string())),
        }
    }
}
