//! Newline-delimited JSON framing.

use serde_json::Value;

use crate::types::{JsonRpcMessage, McpError, McpResult};

/// Parse one JSON-RPC message from a line of text.
///
/// Invalid JSON is a `ParseError`; valid JSON that is not a JSON-RPC message
/// is an `InvalidRequest`. Ids must be integers, strings or null; anything
/// else would otherwise be read as a notification and never answered.
pub fn parse_message(input: &str) -> McpResult<JsonRpcMessage> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| McpError::ParseError(e.to_string()))?;

    if let Some(id) = value.get("id") {
        if !(id.is_i64() || id.is_string() || id.is_null()) {
            return Err(McpError::InvalidRequest(format!("Unsupported id: {id}")));
        }
    }

    serde_json::from_value(value).map_err(|e| McpError::InvalidRequest(e.to_string()))
}

/// Serialize a message as a single line terminated by `\n`.
pub fn frame_message(message: &Value) -> McpResult<String> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}
