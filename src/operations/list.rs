//! Render the table of named exit codes

use core::str::FromStr;

use crate::codes::{self, CodeInfo};
use crate::error::CodedError;
use crate::exit_error;
use anyhow::Result;

/// Output format for the code table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Aligned plain-text columns
    Table,
    /// JSON array of objects
    Json,
}

impl FromStr for OutputFormat {
    type Err = CodedError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(exit_error!(
                codes::USAGE,
                "Invalid format: {s}. Use 'table' or 'json'"
            )),
        }
    }
}

/// Render every named exit code in `format`
///
/// # Errors
///
/// Returns an error if the table cannot be serialized to JSON.
#[inline]
pub fn render_codes(format: OutputFormat) -> Result<String> {
    render(&codes::ALL, format)
}

fn render(entries: &[CodeInfo], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_as_table(entries)),
        OutputFormat::Json => serde_json::to_string_pretty(entries)
            .map_err(|e| anyhow::anyhow!("Failed to serialize to JSON: {e}")),
    }
}

fn format_as_table(entries: &[CodeInfo]) -> String {
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);

    entries
        .iter()
        .map(|e| format!("{:>3}  {:<width$}  {}", e.code, e.name, e.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);

        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.code(), codes::USAGE);
        assert!(err.to_string().contains("Invalid format"));
    }

    #[test]
    fn test_table_rows() {
        let table = render_codes(OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), codes::ALL.len());
        assert!(lines[0].starts_with("  0  OK"));
        assert!(lines.iter().any(|l| l.starts_with(" 78  CONFIG")));
    }

    #[test]
    fn test_json_rows() {
        let json = render_codes(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["code"], 0);
        assert_eq!(value[13]["name"], "IOERR");
        assert_eq!(value[13]["code"], 74);
    }
}
