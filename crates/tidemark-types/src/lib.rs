//! Core types for the tidemark FX data pipeline.
//!
//! This crate provides the fundamental data structures used throughout
//! tidemark:
//!
//! - [`Cell`] - A single dynamically-typed table value
//! - [`Frame`] - A column-ordered in-memory table
//! - [`Pair`] - A validated FX pair identifier
//! - [`DateRange`] - A date range for daily data retrieval

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tidemark-fx/tidemark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
pub mod columns;
mod date_range;
mod error;
mod frame;
mod pair;

pub use cell::Cell;
pub use date_range::{DateRange, DayIterator};
pub use error::{DateRangeError, Result, TidemarkError};
pub use frame::{Frame, FrameError};
pub use pair::{Pair, PairError};
