//! Tool: readNotes — Return every saved note.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

/// Return the tool definition for readNotes.
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "readNotes".to_string(),
        description: Some(
            "Read the user's notes file. Returns all notes saved so far, oldest first, \
             or a placeholder when there are none."
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

/// Execute the readNotes tool. Arguments are ignored.
pub async fn execute(
    _args: Value,
    session: &Arc<Mutex<SessionManager>>,
) -> McpResult<ToolCallResult> {
    let session = session.lock().await;
    let notes = session.store().read_all()?;

    Ok(ToolCallResult::text(notes))
}
