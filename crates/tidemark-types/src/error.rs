//! Error types for tidemark.

use chrono::NaiveDate;
use thiserror::Error;

use crate::{FrameError, PairError};

/// Result type alias for tidemark operations.
pub type Result<T> = std::result::Result<T, TidemarkError>;

/// Errors that can occur across the download and cleaning pipeline.
#[derive(Error, Debug)]
pub enum TidemarkError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Provider CSV could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Frame construction failed.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// Invalid pair code.
    #[error(transparent)]
    Pair(#[from] PairError),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// A required column is missing from a frame's schema.
    #[error("Missing column: {column}")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// No data available for the requested pair and range.
    #[error("No data available for {pair} in requested range")]
    NoDataAvailable {
        /// The pair that had no data.
        pair: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
