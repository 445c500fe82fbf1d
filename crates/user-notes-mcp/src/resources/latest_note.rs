//! Resource: mynotes://local/latest — the most recently added note.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::session::SessionManager;
use crate::types::{McpResult, ReadResourceResult, ResourceContent, ResourceDefinition};

/// URI of the latest-note resource.
pub const URI: &str = "mynotes://local/latest";

/// Return the resource definition.
pub fn definition() -> ResourceDefinition {
    ResourceDefinition {
        uri: URI.to_string(),
        name: "Latest note".to_string(),
        description: Some("The most recent note added, exactly as stored".to_string()),
        mime_type: Some("text/plain".to_string()),
    }
}

/// Read the last line of the notes file.
pub async fn read(session: &Arc<Mutex<SessionManager>>) -> McpResult<ReadResourceResult> {
    let session = session.lock().await;
    let latest = session.store().read_latest()?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContent::text(URI, latest)],
    })
}
