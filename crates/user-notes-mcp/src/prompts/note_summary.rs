//! Prompt: noteSummary — ask the model to summarize every note.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::session::SessionManager;
use crate::types::{McpResult, PromptDefinition, PromptGetResult, PromptMessage};

/// Return the prompt definition for noteSummary.
pub fn definition() -> PromptDefinition {
    PromptDefinition {
        name: "noteSummary".to_string(),
        description: Some(
            "Summarize the user's notes. Returns a placeholder when there are no notes."
                .to_string(),
        ),
        arguments: Vec::new(),
    }
}

/// Expand the noteSummary prompt from the current notes.
pub async fn expand(session: &Arc<Mutex<SessionManager>>) -> McpResult<PromptGetResult> {
    let session = session.lock().await;
    let text = session.store().summarize()?;

    Ok(PromptGetResult {
        description: Some("Summary of the user's notes".to_string()),
        messages: vec![PromptMessage::user(text)],
    })
}
