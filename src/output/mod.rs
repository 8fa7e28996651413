//! Output formatting for CLI results

use serde_json::Value;

use crate::cli::OutputFormat;
use solarz::error::Result;

pub mod json;

/// Render a vendor payload in the requested format.
pub fn format_value(data: &Value, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(data)?,
        OutputFormat::Json => json::format_json(data)?,
    };
    Ok(output)
}

/// Format and print a vendor payload to stdout
pub fn print(data: &Value, format: OutputFormat) -> Result<()> {
    println!("{}", format_value(data, format)?);
    Ok(())
}
