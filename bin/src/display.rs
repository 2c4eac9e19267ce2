//! Display utilities and output formatting for the tidemark CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tidemark_lib::prelude::*;
use tidemark_lib::OutputFormat;

/// Output format for written frames.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        self.as_output_format().extension()
    }

    /// Converts to the library's format identifier.
    pub(crate) const fn as_output_format(&self) -> OutputFormat {
        match self {
            Self::Csv => OutputFormat::Csv,
            Self::Json => OutputFormat::Json,
            Self::Ndjson => OutputFormat::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Writes a frame to a file in the specified format.
pub(crate) fn write_frame(frame: &Frame, output: &Path, format: Format) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => CsvFormatter::new().write_frame(frame, writer)?,
        Format::Json => JsonFormatter::new().write_frame(frame, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_frame(frame, writer)?,
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` date argument.
pub(crate) fn parse_date(s: &str, which: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid {which} date: {s}"))
}
