//! Prompt: greet_user — ask the model for a greeting in a given style.

use serde::Deserialize;
use serde_json::Value;

use user_notes::templates::{greeting_prompt, GreetingStyle};

use crate::types::{
    McpError, McpResult, PromptArgument, PromptDefinition, PromptGetResult, PromptMessage,
};

#[derive(Debug, Deserialize)]
struct GreetParams {
    name: String,
    #[serde(default)]
    style: Option<String>,
}

/// Return the prompt definition for greet_user.
pub fn definition() -> PromptDefinition {
    PromptDefinition {
        name: "greet_user".to_string(),
        description: Some("Generate a greeting prompt".to_string()),
        arguments: vec![
            PromptArgument {
                name: "name".to_string(),
                description: Some("Who the greeting is for".to_string()),
                required: true,
            },
            PromptArgument {
                name: "style".to_string(),
                description: Some(
                    "friendly (default), formal, or casual; anything else means friendly"
                        .to_string(),
                ),
                required: false,
            },
        ],
    }
}

/// Expand the greet_user prompt.
pub fn expand(args: Value) -> McpResult<PromptGetResult> {
    let params: GreetParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let style = match params.style.as_deref() {
        None => GreetingStyle::default(),
        Some(raw) => GreetingStyle::parse(raw).unwrap_or_else(|| {
            tracing::debug!("Unknown greeting style '{raw}', using friendly");
            GreetingStyle::Friendly
        }),
    };

    Ok(PromptGetResult {
        description: Some(format!("A {style} greeting")),
        messages: vec![PromptMessage::user(greeting_prompt(&params.name, style))],
    })
}
