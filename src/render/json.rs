//! JSON rendering for outline results.

use crate::error::{Error, Result};
use crate::model::OutlineResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize an outline result to JSON.
///
/// Non-ASCII text passes through unescaped; serde_json emits UTF-8 directly.
pub fn to_json(result: &OutlineResult, format: JsonFormat) -> Result<String> {
    let rendered = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(result),
        JsonFormat::Compact => serde_json::to_string(result),
    };

    rendered.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
