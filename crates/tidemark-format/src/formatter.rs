//! Output format abstraction.

use std::io::Write;
use thiserror::Error;
use tidemark_types::{Frame, Pair};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json, Self::Ndjson]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV read error.
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Trait for frame writers.
pub trait Formatter: Send + Sync {
    /// Writes a frame to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_frame<W: Write + Send>(&self, frame: &Frame, writer: W) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

/// Conventional file name for a pair's raw download, e.g. `EURUSD.csv`.
#[must_use]
pub fn raw_file_name(pair: &Pair, format: OutputFormat) -> String {
    format!("{}.{}", pair, format.extension())
}

/// Conventional file name for a pair's cleaned frame, e.g.
/// `EURUSD_clean.csv`.
#[must_use]
pub fn clean_file_name(pair: &Pair, format: OutputFormat) -> String {
    format!("{}_clean.{}", pair, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "jsonl".parse::<OutputFormat>().unwrap(),
            OutputFormat::Ndjson
        );
        assert!("parquet".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_file_names() {
        let pair = Pair::new("eurusd").unwrap();
        assert_eq!(raw_file_name(&pair, OutputFormat::Csv), "EURUSD.csv");
        assert_eq!(
            clean_file_name(&pair, OutputFormat::Json),
            "EURUSD_clean.json"
        );
    }
}
