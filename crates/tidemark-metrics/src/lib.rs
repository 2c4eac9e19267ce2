//! Derived return, volatility and spread series for tidemark FX data.
//!
//! The functions here consume cleaned frames (see `tidemark-clean`) and
//! produce numeric series aligned to the frame's row axis:
//!
//! - [`daily_returns`] / [`rolling_volatility`] - slice-level computations
//! - [`frame_returns`] / [`frame_volatility`] / [`bid_ask_spread`] -
//!   frame-level wrappers with fail-fast schema checks
//! - [`grouped_returns`] / [`grouped_volatility`] / [`grouped_spread`] -
//!   per-pair computations over a combined frame

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tidemark-fx/tidemark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod frame;
mod grouped;
mod series;

pub use error::MetricError;
pub use frame::{bid_ask_spread, frame_returns, frame_volatility, price_series};
pub use grouped::{PairSeries, grouped_returns, grouped_spread, grouped_volatility};
pub use series::{DEFAULT_WINDOW, TRADING_DAYS_PER_YEAR, daily_returns, rolling_volatility};
