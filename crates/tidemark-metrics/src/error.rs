//! Error types for derived-metric computation.

use thiserror::Error;

/// Errors raised by metric computations.
///
/// Data noise (null cells, empty frames) never raises; these errors mark
/// caller misconfiguration, such as asking for volatility on a column the
/// frame does not have.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    /// The requested column is absent from the frame's schema.
    #[error("Missing column: {column}")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// The rolling window size is zero.
    #[error("Rolling window must be at least 1")]
    InvalidWindow,
}
