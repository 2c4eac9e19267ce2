//! Canonical column names shared across the pipeline.
//!
//! Dukascopy daily files carry these columns in this order; the cleaning
//! pipeline and metrics refer to them by name.

/// Timestamp column.
pub const DATE: &str = "Date";
/// Bid price column.
pub const BID: &str = "Bid";
/// Ask price column.
pub const ASK: &str = "Ask";
/// Session low column.
pub const LOW: &str = "Low";
/// Session high column.
pub const HIGH: &str = "High";
/// Traded volume column.
pub const VOLUME: &str = "Volume";
/// Derived mid-price column, added by cleaning.
pub const MID: &str = "Mid";
/// Pair tag column, added by callers before combining frames.
pub const PAIR: &str = "Pair";

/// Column order of a raw provider daily file.
pub const PROVIDER: &[&str] = &[DATE, BID, ASK, LOW, HIGH, VOLUME];
