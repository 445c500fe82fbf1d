//! Resource template: greeting://{name} — a personalized greeting.

use user_notes::templates::greeting;

use crate::types::{ReadResourceResult, ResourceContent, ResourceTemplateDefinition};

/// Scheme prefix shared by every greeting URI.
pub const URI_PREFIX: &str = "greeting://";

/// Return the resource template definition.
pub fn template() -> ResourceTemplateDefinition {
    ResourceTemplateDefinition {
        uri_template: format!("{URI_PREFIX}{{name}}"),
        name: "Greeting".to_string(),
        description: Some("Get a personalized greeting".to_string()),
        mime_type: Some("text/plain".to_string()),
    }
}

/// Extract `{name}` from a greeting URI.
///
/// The name is one non-empty path segment, taken verbatim.
pub fn parse_name(uri: &str) -> Option<&str> {
    let name = uri.strip_prefix(URI_PREFIX)?;
    if name.is_empty() || name.contains('/') {
        return None;
    }
    Some(name)
}

/// Build the greeting for an already-parsed name.
pub fn read(uri: &str, name: &str) -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContent::text(uri, greeting(name))],
    }
}
