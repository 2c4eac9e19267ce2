//! Frame-level metric wrappers.

use tidemark_types::{Cell, Frame, columns};

use crate::series::{daily_returns, rolling_volatility};
use crate::MetricError;

/// Extracts a numeric series from a frame column, failing fast when the
/// column is absent.
///
/// A missing price column means the caller asked for metrics on a column
/// the frame never had - misconfiguration, not data noise - so this
/// raises [`MetricError::MissingColumn`] naming the column rather than
/// silently yielding an all-null series. Non-numeric cells inside an
/// existing column are data noise and become null.
pub fn price_series(frame: &Frame, column: &str) -> Result<Vec<Option<f64>>, MetricError> {
    frame
        .column(column)
        .map(|cells| cells.iter().map(Cell::as_num).collect())
        .ok_or_else(|| MetricError::MissingColumn {
            column: column.to_string(),
        })
}

/// Computes the daily-return series of a frame's price column.
///
/// # Errors
///
/// Returns [`MetricError::MissingColumn`] if the price column is absent.
pub fn frame_returns(frame: &Frame, price_column: &str) -> Result<Vec<Option<f64>>, MetricError> {
    Ok(daily_returns(&price_series(frame, price_column)?))
}

/// Computes the rolling annualized volatility of a frame's price column.
///
/// # Errors
///
/// Returns [`MetricError::MissingColumn`] if the price column is absent,
/// or [`MetricError::InvalidWindow`] for a zero window.
pub fn frame_volatility(
    frame: &Frame,
    price_column: &str,
    window: usize,
) -> Result<Vec<Option<f64>>, MetricError> {
    rolling_volatility(&price_series(frame, price_column)?, window)
}

/// Computes the elementwise bid-ask spread `Ask - Bid`.
///
/// When either column is absent from the schema the result is an
/// all-null series of the frame's length: schema absence here is data
/// shape (some sources carry no quotes), not caller misconfiguration.
#[must_use]
pub fn bid_ask_spread(frame: &Frame) -> Vec<Option<f64>> {
    let (Some(bids), Some(asks)) = (frame.column(columns::BID), frame.column(columns::ASK)) else {
        return vec![None; frame.len()];
    };

    bids.iter()
        .zip(asks)
        .map(|(bid, ask)| match (bid.as_num(), ask.as_num()) {
            (Some(b), Some(a)) => Some(a - b),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn clean_frame() -> Frame {
        Frame::from_columns([
            ("Bid", vec![Cell::Num(1.10), Cell::Num(1.11)]),
            ("Ask", vec![Cell::Num(1.12), Cell::Num(1.13)]),
            ("Mid", vec![Cell::Num(1.11), Cell::Num(1.12)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_frame_returns() {
        let returns = frame_returns(&clean_frame(), "Mid").unwrap();
        assert_eq!(returns[0], None);
        assert_relative_eq!(returns[1].unwrap(), 1.12 / 1.11 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_price_column_fails_fast() {
        let err = frame_returns(&clean_frame(), "Close").unwrap_err();
        assert_eq!(
            err,
            MetricError::MissingColumn {
                column: "Close".to_string()
            }
        );
        assert!(frame_volatility(&clean_frame(), "Close", 21).is_err());
    }

    #[test]
    fn test_spread() {
        let spreads = bid_ask_spread(&clean_frame());
        assert_relative_eq!(spreads[0].unwrap(), 0.02, epsilon = 1e-12);
        assert_relative_eq!(spreads[1].unwrap(), 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_spread_without_quote_columns() {
        let frame = Frame::from_columns([("Mid", vec![Cell::Num(1.0), Cell::Num(2.0)])]).unwrap();
        assert_eq!(bid_ask_spread(&frame), vec![None, None]);
    }

    #[test]
    fn test_price_series_nulls_for_noise() {
        let frame = Frame::from_columns([(
            "Mid",
            vec![Cell::Num(1.0), Cell::from("oops"), Cell::Null],
        )])
        .unwrap();
        assert_eq!(
            price_series(&frame, "Mid").unwrap(),
            vec![Some(1.0), None, None]
        );
    }
}
