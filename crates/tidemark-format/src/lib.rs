//! Frame readers and writers for the tidemark FX pipeline.
//!
//! - [`Formatter`] - output format abstraction
//! - [`CsvFormatter`] / [`JsonFormatter`] - concrete writers
//! - [`read_csv_frame`] / [`read_csv_frame_with_columns`] - CSV readers

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tidemark-fx/tidemark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use csv::{CsvFormatter, read_csv_frame, read_csv_frame_with_columns};
pub use formatter::{FormatError, Formatter, OutputFormat, clean_file_name, raw_file_name};
pub use json::{JsonFormatter, JsonStyle};
