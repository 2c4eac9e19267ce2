//! Per-pair metric computation over a combined frame.

use chrono::{DateTime, Utc};
use tidemark_types::Frame;

use crate::MetricError;
use crate::frame::{bid_ask_spread, frame_returns, frame_volatility};

/// One pair's derived series, aligned on its date axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PairSeries {
    /// Tag value from the pair column.
    pub pair: String,
    /// Dates of the group's rows, ascending.
    pub dates: Vec<Option<DateTime<Utc>>>,
    /// The computed series, aligned with `dates`.
    pub values: Vec<Option<f64>>,
}

/// Splits a combined frame into per-pair row index groups.
///
/// Groups appear in first-seen order of the tag value; rows with a null
/// tag belong to no group. Within each group the indices are re-sorted
/// ascending by date (stable), so windowed computations stay correct even
/// when the combined frame's global order interleaves pairs.
fn group_rows(
    frame: &Frame,
    pair_column: &str,
    date_column: &str,
) -> Result<Vec<(String, Vec<usize>)>, MetricError> {
    let tags = frame
        .column(pair_column)
        .ok_or_else(|| MetricError::MissingColumn {
            column: pair_column.to_string(),
        })?;
    let dates = frame
        .column(date_column)
        .ok_or_else(|| MetricError::MissingColumn {
            column: date_column.to_string(),
        })?;

    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for (row, tag) in tags.iter().enumerate() {
        if tag.is_null() {
            continue;
        }
        let key = tag.to_string();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, rows)) => rows.push(row),
            None => groups.push((key, vec![row])),
        }
    }

    for (_, rows) in &mut groups {
        rows.sort_by_key(|&row| dates[row].as_time());
    }
    Ok(groups)
}

/// Applies a frame-level metric to each pair group of a combined frame.
fn grouped_metric(
    frame: &Frame,
    pair_column: &str,
    date_column: &str,
    metric: impl Fn(&Frame) -> Result<Vec<Option<f64>>, MetricError>,
) -> Result<Vec<PairSeries>, MetricError> {
    group_rows(frame, pair_column, date_column)?
        .into_iter()
        .map(|(pair, rows)| {
            let group = frame.select_rows(&rows);
            let dates = group
                .column(date_column)
                .map(|cells| cells.iter().map(|c| c.as_time()).collect())
                .unwrap_or_default();
            let values = metric(&group)?;
            Ok(PairSeries {
                pair,
                dates,
                values,
            })
        })
        .collect()
}

/// Computes each pair's daily-return series from a combined frame.
///
/// # Errors
///
/// Returns [`MetricError::MissingColumn`] if the tag, date or price
/// column is absent.
pub fn grouped_returns(
    frame: &Frame,
    pair_column: &str,
    date_column: &str,
    price_column: &str,
) -> Result<Vec<PairSeries>, MetricError> {
    grouped_metric(frame, pair_column, date_column, |group| {
        frame_returns(group, price_column)
    })
}

/// Computes each pair's rolling annualized volatility from a combined
/// frame. The rolling window resets at every pair boundary; windows are
/// never blended across pairs.
///
/// # Errors
///
/// Returns [`MetricError::MissingColumn`] for an absent tag, date or
/// price column, and [`MetricError::InvalidWindow`] for a zero window.
pub fn grouped_volatility(
    frame: &Frame,
    pair_column: &str,
    date_column: &str,
    price_column: &str,
    window: usize,
) -> Result<Vec<PairSeries>, MetricError> {
    grouped_metric(frame, pair_column, date_column, |group| {
        frame_volatility(group, price_column, window)
    })
}

/// Computes each pair's bid-ask spread series from a combined frame.
///
/// # Errors
///
/// Returns [`MetricError::MissingColumn`] if the tag or date column is
/// absent. Missing quote columns yield all-null series, matching
/// [`bid_ask_spread`].
pub fn grouped_spread(
    frame: &Frame,
    pair_column: &str,
    date_column: &str,
) -> Result<Vec<PairSeries>, MetricError> {
    grouped_metric(frame, pair_column, date_column, |group| {
        Ok(bid_ask_spread(group))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Datelike, TimeZone};
    use tidemark_types::Cell;

    fn ts(day: u32) -> Cell {
        Cell::Time(Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap())
    }

    /// Combined frame with interleaved pairs and out-of-order dates
    /// inside the second group.
    fn combined() -> Frame {
        Frame::from_columns([
            (
                "Pair",
                vec![
                    Cell::from("EURUSD"),
                    Cell::from("USDCHF"),
                    Cell::from("EURUSD"),
                    Cell::from("USDCHF"),
                ],
            ),
            ("Date", vec![ts(1), ts(2), ts(2), ts(1)]),
            (
                "Mid",
                vec![
                    Cell::Num(1.00),
                    Cell::Num(0.92),
                    Cell::Num(1.10),
                    Cell::Num(0.90),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_grouped_returns_resort_by_date() {
        let series = grouped_returns(&combined(), "Pair", "Date", "Mid").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].pair, "EURUSD");
        assert_eq!(series[1].pair, "USDCHF");

        // EURUSD: 1.00 -> 1.10
        assert_relative_eq!(series[0].values[1].unwrap(), 0.10, epsilon = 1e-12);
        // USDCHF rows arrive date-reversed; after the in-group sort the
        // return is 0.90 -> 0.92, not the interleaved global order.
        assert_relative_eq!(
            series[1].values[1].unwrap(),
            0.92 / 0.90 - 1.0,
            epsilon = 1e-12
        );
        assert_eq!(series[1].dates[0].unwrap().day(), 1);
    }

    #[test]
    fn test_windows_never_cross_pairs() {
        let series = grouped_volatility(&combined(), "Pair", "Date", "Mid", 21).unwrap();
        // Each group has only two rows, hence a single return apiece:
        // sample stdev needs two observations, so every value is null.
        // A blended global pass would have produced values here.
        for group in &series {
            assert_eq!(group.values.len(), 2);
            assert!(group.values.iter().all(Option::is_none));
        }
    }

    #[test]
    fn test_grouped_spread() {
        let frame = Frame::from_columns([
            ("Pair", vec![Cell::from("EURUSD"), Cell::from("EURUSD")]),
            ("Date", vec![ts(1), ts(2)]),
            ("Bid", vec![Cell::Num(1.10), Cell::Num(1.11)]),
            ("Ask", vec![Cell::Num(1.12), Cell::Num(1.14)]),
        ])
        .unwrap();

        let series = grouped_spread(&frame, "Pair", "Date").unwrap();
        assert_relative_eq!(series[0].values[0].unwrap(), 0.02, epsilon = 1e-12);
        assert_relative_eq!(series[0].values[1].unwrap(), 0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_tag_column() {
        let frame = Frame::from_columns([("Mid", vec![Cell::Num(1.0)])]).unwrap();
        let err = grouped_returns(&frame, "Pair", "Date", "Mid").unwrap_err();
        assert_eq!(
            err,
            MetricError::MissingColumn {
                column: "Pair".to_string()
            }
        );
    }

    #[test]
    fn test_empty_combined_frame() {
        let frame = Frame::from_columns([
            ("Pair", Vec::new()),
            ("Date", Vec::new()),
            ("Mid", Vec::new()),
        ])
        .unwrap();
        let series = grouped_volatility(&frame, "Pair", "Date", "Mid", 21).unwrap();
        assert!(series.is_empty());
    }
}
