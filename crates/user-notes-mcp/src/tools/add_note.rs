//! Tool: addNote — Append a new note to the notes file.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
struct AddParams {
    message: String,
}

/// Return the tool definition for addNote.
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "addNote".to_string(),
        description: Some(
            "Append a new note to the user's notes file. Returns a confirmation once saved."
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "The note content to be added to the user's notes"
                }
            },
            "required": ["message"]
        }),
    }
}

/// Execute the addNote tool.
pub async fn execute(
    args: Value,
    session: &Arc<Mutex<SessionManager>>,
) -> McpResult<ToolCallResult> {
    let params: AddParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let mut session = session.lock().await;
    let confirmation = session.add_note(&params.message)?;

    Ok(ToolCallResult::text(confirmation))
}
