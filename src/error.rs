//! Structured error types for the rendering engine.
//!
//! Two variants cover the real error sources: JSON parsing and SVG
//! generation. Parse errors carry a hint derived from the serde error
//! category so CLI users get something actionable.

use thiserror::Error;

/// The unified error type returned by all public API functions.
#[derive(Debug, Error)]
pub enum SketchError {
    /// JSON input failed to parse as a valid wireframe document.
    #[error("failed to parse document: {source}{}", fmt_hint(.hint))]
    Parse {
        source: serde_json::Error,
        hint: String,
    },
    /// SVG generation failed.
    #[error("render error: {0}")]
    Render(String),
}

fn fmt_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  hint: {}", hint)
    }
}

impl From<serde_json::Error> for SketchError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "check for trailing commas, missing quotes, or unescaped characters".to_string()
            }
            serde_json::error::Category::Data => {
                "the JSON is valid but doesn't match the wireframe schema; check field names and types"
                    .to_string()
            }
            serde_json::error::Category::Eof => {
                "unexpected end of input, the JSON may be truncated".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        SketchError::Parse { source: e, hint }
    }
}
