//! HTTP client and daily data fetching for the tidemark FX pipeline.
//!
//! This crate provides the download side of the pipeline:
//!
//! - [`url::daily_csv_url`] - Constructs Dukascopy daily CSV URLs
//! - [`FetchClient`] - HTTP client with pooling and retries
//! - [`parse_daily_csv`] - Provider CSV parsing into raw frames
//! - [`day_stream`] - Async, order-preserving daily download stream

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tidemark-fx/tidemark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod parse;
mod stream;
pub mod url;

pub use client::{ClientConfig, FetchClient, FetchError};
pub use parse::{CsvParseError, parse_daily_csv};
pub use stream::{DayBatch, concat_days, day_stream, day_stream_resilient};
