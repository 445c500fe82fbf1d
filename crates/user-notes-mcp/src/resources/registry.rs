//! Resource registration and URI routing.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::session::SessionManager;
use crate::types::{
    McpError, McpResult, ReadResourceResult, ResourceDefinition, ResourceTemplateDefinition,
};

use super::{greeting, latest_note};

/// Registry of all available MCP resources.
pub struct ResourceRegistry;

impl ResourceRegistry {
    /// List concrete resources.
    pub fn list_resources() -> Vec<ResourceDefinition> {
        vec![latest_note::definition()]
    }

    /// List parameterized resource templates.
    pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
        vec![greeting::template()]
    }

    /// Read the resource at `uri`.
    pub async fn read(
        uri: &str,
        session: &Arc<Mutex<SessionManager>>,
    ) -> McpResult<ReadResourceResult> {
        if uri == latest_note::URI {
            return latest_note::read(session).await;
        }

        if let Some(name) = greeting::parse_name(uri) {
            return Ok(greeting::read(uri, name));
        }

        Err(McpError::ResourceNotFound(uri.to_string()))
    }
}
