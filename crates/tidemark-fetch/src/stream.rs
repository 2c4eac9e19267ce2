//! Streaming daily download pipeline.

use chrono::NaiveDate;
use futures::stream::{self, Stream, StreamExt};
use tidemark_types::{DateRange, Frame, Pair, TidemarkError};

use crate::{FetchClient, parse_daily_csv, url::daily_csv_url};

/// One day's downloaded frame for a pair.
#[derive(Debug, Clone)]
pub struct DayBatch {
    /// The calendar day this batch covers.
    pub date: NaiveDate,
    /// The day's raw frame; empty when the provider had no file.
    pub frame: Frame,
    /// Whether this day failed and was skipped (resilient stream only).
    pub had_error: bool,
}

impl DayBatch {
    /// Creates a day batch.
    #[must_use]
    pub const fn new(date: NaiveDate, frame: Frame) -> Self {
        Self {
            date,
            frame,
            had_error: false,
        }
    }

    /// Creates a batch that represents a skipped error.
    #[must_use]
    pub const fn skipped_error(date: NaiveDate) -> Self {
        Self {
            date,
            frame: Frame::new(),
            had_error: true,
        }
    }

    /// Returns true if the day produced no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// Returns true if this day failed and was skipped.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.had_error
    }
}

/// Creates an async stream of daily frames for a pair and date range.
///
/// Downloads run concurrently up to the client's configured concurrency,
/// but batches are yielded strictly in calendar order: a pair's daily
/// frames must concatenate chronologically, so ordered buffering is part
/// of the contract here, not an implementation detail.
pub fn day_stream<'a>(
    client: &'a FetchClient,
    pair: &'a Pair,
    range: DateRange,
) -> impl Stream<Item = Result<DayBatch, TidemarkError>> + 'a {
    let concurrency = client.config().concurrency;

    stream::iter(range.days())
        .map(move |date| {
            let url = daily_csv_url(pair, date);
            let client = client.clone();
            async move { fetch_day(&client, date, &url).await }
        })
        .buffered(concurrency)
}

/// Downloads and parses a single day.
async fn fetch_day(
    client: &FetchClient,
    date: NaiveDate,
    url: &str,
) -> Result<DayBatch, TidemarkError> {
    match client.download(url).await {
        Ok(Some(bytes)) => {
            let frame =
                parse_daily_csv(&bytes).map_err(|e| TidemarkError::Parse(e.to_string()))?;
            Ok(DayBatch::new(date, frame))
        }
        // No file for this day (weekend or holiday)
        Ok(None) => Ok(DayBatch::new(date, Frame::new())),
        Err(e) => Err(TidemarkError::Http(e.to_string())),
    }
}

/// Like [`day_stream`], but failed days become empty batches flagged
/// `had_error` instead of terminating the stream. Useful for long
/// backfills where one bad day should not abort the pair.
pub fn day_stream_resilient<'a>(
    client: &'a FetchClient,
    pair: &'a Pair,
    range: DateRange,
) -> impl Stream<Item = DayBatch> + 'a {
    let concurrency = client.config().concurrency;

    stream::iter(range.days())
        .map(move |date| {
            let url = daily_csv_url(pair, date);
            let client = client.clone();
            async move {
                fetch_day(&client, date, &url)
                    .await
                    .unwrap_or_else(|_| DayBatch::skipped_error(date))
            }
        })
        .buffered(concurrency)
}

/// Concatenates day batches into one raw frame for the pair.
///
/// Batches are assumed to arrive in stream order (chronological); empty
/// days contribute nothing. The provider schema is kept even when every
/// day was empty.
#[must_use]
pub fn concat_days(batches: &[DayBatch]) -> Frame {
    let frames: Vec<&Frame> = batches
        .iter()
        .filter(|b| !b.frame.is_empty())
        .map(|b| &b.frame)
        .collect();
    if frames.is_empty() {
        return empty_provider_frame();
    }
    tidemark_concat(&frames)
}

/// Row-wise concatenation of same-schema provider frames.
fn tidemark_concat(frames: &[&Frame]) -> Frame {
    let first = frames[0];
    let columns: Vec<(String, Vec<tidemark_types::Cell>)> = first
        .column_names()
        .map(|name| {
            let mut cells = Vec::new();
            for frame in frames {
                if let Some(source) = frame.column(name) {
                    cells.extend_from_slice(source);
                }
            }
            (name.to_string(), cells)
        })
        .collect();
    Frame::from_columns(columns).expect("uniform column lengths")
}

/// An empty frame carrying the provider schema.
fn empty_provider_frame() -> Frame {
    Frame::from_columns(
        tidemark_types::columns::PROVIDER
            .iter()
            .map(|&name| (name, Vec::new())),
    )
    .expect("uniform column lengths")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidemark_types::Cell;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
    }

    fn day_frame(bid: &str) -> Frame {
        Frame::from_columns([
            ("Date", vec![Cell::from("x")]),
            ("Bid", vec![Cell::from(bid)]),
            ("Ask", vec![Cell::from("9")]),
            ("Low", vec![Cell::Null]),
            ("High", vec![Cell::Null]),
            ("Volume", vec![Cell::Null]),
        ])
        .unwrap()
    }

    #[test]
    fn test_day_batch_states() {
        let empty = DayBatch::new(date(1), Frame::new());
        assert!(empty.is_empty());
        assert!(!empty.had_error());

        let skipped = DayBatch::skipped_error(date(2));
        assert!(skipped.is_empty());
        assert!(skipped.had_error());
    }

    #[test]
    fn test_concat_days_keeps_order() {
        let batches = vec![
            DayBatch::new(date(1), day_frame("1.0")),
            DayBatch::new(date(2), Frame::new()),
            DayBatch::new(date(3), day_frame("2.0")),
        ];
        let combined = concat_days(&batches);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined.cell(0, "Bid"), Some(&Cell::from("1.0")));
        assert_eq!(combined.cell(1, "Bid"), Some(&Cell::from("2.0")));
    }

    #[test]
    fn test_concat_days_all_empty_keeps_schema() {
        let batches = vec![DayBatch::new(date(1), Frame::new())];
        let combined = concat_days(&batches);
        assert!(combined.is_empty());
        assert!(combined.has_column("Date"));
        assert!(combined.has_column("Volume"));
    }
}
