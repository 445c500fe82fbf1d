//! Greeting and prompt text builders.
//!
//! Names and note content are interpolated verbatim. Nothing here escapes or
//! sanitizes caller input, so the output must be treated as untrusted text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tone requested from the model when writing a greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreetingStyle {
    /// Warm, friendly tone.
    #[default]
    Friendly,
    /// Formal, professional tone.
    Formal,
    /// Casual, relaxed tone.
    Casual,
}

impl GreetingStyle {
    /// All recognized styles.
    pub const ALL: [GreetingStyle; 3] = [Self::Friendly, Self::Formal, Self::Casual];

    /// Parse a style name. Returns `None` for unrecognized names.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "friendly" => Some(Self::Friendly),
            "formal" => Some(Self::Formal),
            "casual" => Some(Self::Casual),
            _ => None,
        }
    }

    /// Parse a style name, falling back to [`GreetingStyle::Friendly`].
    pub fn from_name(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// The wire name of this style.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Formal => "formal",
            Self::Casual => "casual",
        }
    }

    /// Instruction text for this style.
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Friendly => "Please write a warm, friendly greeting",
            Self::Formal => "Please write a formal, professional greeting",
            Self::Casual => "Please write a casual, relaxed greeting",
        }
    }
}

impl fmt::Display for GreetingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A plain personalized greeting.
pub fn greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Prompt asking for a greeting to `name` in the given style.
pub fn greeting_prompt(name: &str, style: GreetingStyle) -> String {
    format!("{} for someone named {name}.", style.instruction())
}

/// Request text asking a model to summarize `content`.
///
/// The content is not summarized here; it is only embedded in the request.
pub fn summary_request(content: &str) -> String {
    format!(
        "Summarize the major points on these notes, and don't leave anything important out. Notes: {content}"
    )
}
