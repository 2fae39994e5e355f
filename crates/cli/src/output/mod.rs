//! Output formatting functions.

pub mod json;

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a value for output.
pub fn format_output(value: &Value, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => json::format_json(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(rendered)
}
