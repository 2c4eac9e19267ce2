//! Dukascopy daily CSV URL construction.

use chrono::{Datelike, NaiveDate};
use tidemark_types::Pair;

/// Base URL for the Dukascopy daily data feed.
pub const BASE_URL: &str = "https://www.dukascopy.com/datafeed";

/// Builds the URL for one pair's daily 1-minute CSV.
///
/// URL format: `{BASE_URL}/{PAIR}/{YEAR}/{MONTH}/{DAY}/1min.csv`, with
/// zero-padded, 1-indexed month and day (unlike the tick feed, which
/// zero-indexes months).
///
/// # Example
///
/// ```
/// use tidemark_fetch::url::daily_csv_url;
/// use tidemark_types::Pair;
/// use chrono::NaiveDate;
///
/// let pair = Pair::new("eurusd").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// assert_eq!(
///     daily_csv_url(&pair, date),
///     "https://www.dukascopy.com/datafeed/EURUSD/2025/08/01/1min.csv"
/// );
/// ```
#[must_use]
pub fn daily_csv_url(pair: &Pair, date: NaiveDate) -> String {
    format!(
        "{}/{}/{}/{:02}/{:02}/1min.csv",
        BASE_URL,
        pair,
        date.year(),
        date.month(),
        date.day()
    )
}
