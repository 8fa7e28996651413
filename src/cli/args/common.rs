//! Common CLI types shared across commands

use solarz::client::Period;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - the vendor payload, indented
    #[default]
    Pretty,
    /// JSON format - payload wrapped with timestamp and version metadata
    Json,
}

/// clap value parser for `--period`
pub fn parse_period(value: &str) -> Result<Period, String> {
    value.parse::<Period>().map_err(|e| e.to_string())
}
