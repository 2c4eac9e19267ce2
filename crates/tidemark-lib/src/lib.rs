//! Rust library for fetching, cleaning, and analyzing daily FX data.
//!
//! This is a facade crate that re-exports functionality from the tidemark
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use tidemark_lib::prelude::*;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pair = Pair::new("eurusd")?;
//!     let client = FetchClient::with_defaults()?;
//!
//!     let range = DateRange::new(
//!         chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
//!     )?;
//!
//!     let batches: Vec<_> = day_stream_resilient(&client, &pair, range)
//!         .collect()
//!         .await;
//!     let raw = concat_days(&batches);
//!
//!     let cleaned = clean_frame(&raw, &CleanOptions::default());
//!     println!("{} clean rows", cleaned.len());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tidemark-fx/tidemark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tidemark_types::*;

// Re-export the cleaning pipeline
pub use tidemark_clean::{
    CleanOptions, CleanOutput, CleanReport, DEFAULT_DATE_FORMAT, DEFAULT_NUMERIC_COLUMNS, PairMap,
    clean_all, clean_frame, coerce_numeric, compute_mid, concat_frames, drop_invalid, parse_dates,
    parse_timestamp, required_columns, sort_by_date,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use tidemark_fetch::{
    ClientConfig, CsvParseError, DayBatch, FetchClient, FetchError, concat_days, day_stream,
    day_stream_resilient, parse_daily_csv,
};

// Re-export metrics
#[cfg(feature = "metrics")]
pub use tidemark_metrics::{
    DEFAULT_WINDOW, MetricError, PairSeries, TRADING_DAYS_PER_YEAR, bid_ask_spread, daily_returns,
    frame_returns, frame_volatility, grouped_returns, grouped_spread, grouped_volatility,
    price_series, rolling_volatility,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use tidemark_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, clean_file_name,
    raw_file_name, read_csv_frame, read_csv_frame_with_columns,
};

/// Prelude module for convenient imports.
///
/// ```
/// use tidemark_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tidemark_types::{
        Cell, DateRange, DateRangeError, Frame, Pair, Result, TidemarkError,
    };

    pub use tidemark_clean::{CleanOptions, CleanOutput, PairMap, clean_all, clean_frame};

    #[cfg(feature = "fetch")]
    pub use tidemark_fetch::{
        ClientConfig, DayBatch, FetchClient, concat_days, day_stream, day_stream_resilient,
    };

    #[cfg(feature = "metrics")]
    pub use tidemark_metrics::{PairSeries, grouped_returns, grouped_volatility};

    #[cfg(feature = "format")]
    pub use tidemark_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
