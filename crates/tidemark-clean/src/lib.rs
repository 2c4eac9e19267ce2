//! Cleaning and normalization pipeline for tidemark FX data.
//!
//! This crate turns raw provider frames into canonical clean frames:
//!
//! - [`coerce_numeric`] / [`parse_dates`] - cell-level type coercion
//! - [`compute_mid`] / [`drop_invalid`] / [`sort_by_date`] - mid price and
//!   validity filtering
//! - [`clean_frame`] - the full per-pair pipeline as a pure function
//! - [`clean_all`] - multi-pair orchestration with optional concatenation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tidemark-fx/tidemark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coerce;
mod filter;
mod pair_map;
mod pipeline;

pub use coerce::{
    DEFAULT_DATE_FORMAT, DEFAULT_NUMERIC_COLUMNS, coerce_numeric, parse_dates, parse_timestamp,
};
pub use filter::{clean_frame, compute_mid, drop_invalid, required_columns, sort_by_date};
pub use pair_map::PairMap;
pub use pipeline::{CleanOptions, CleanOutput, CleanReport, clean_all, concat_frames};
