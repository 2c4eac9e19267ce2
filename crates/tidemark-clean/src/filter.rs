//! Mid-price computation, validity filtering and chronological sorting.

use tidemark_types::{Cell, Frame, columns};

use crate::CleanOptions;
use crate::coerce::{coerce_numeric, parse_dates};

/// Returns a copy of `frame` with a `Mid` column when both `Bid` and
/// `Ask` exist in the schema.
///
/// `Mid` is the elementwise average, null when either side is null. If
/// either source column is absent the frame passes through without a
/// `Mid` column at all; its absence later marks bid/ask as not required.
#[must_use]
pub fn compute_mid(frame: &Frame) -> Frame {
    let (Some(bids), Some(asks)) = (frame.column(columns::BID), frame.column(columns::ASK)) else {
        return frame.clone();
    };

    let mids = bids
        .iter()
        .zip(asks)
        .map(|(bid, ask)| match (bid.as_num(), ask.as_num()) {
            (Some(b), Some(a)) => Cell::Num((b + a) / 2.0),
            _ => Cell::Null,
        })
        .collect();

    let mut out = frame.clone();
    out.set_column(columns::MID, mids).expect("column length kept");
    out
}

/// Returns the required-field set for a frame: `Date` always, `Bid` and
/// `Ask` each iff the schema contains them.
#[must_use]
pub fn required_columns(frame: &Frame) -> Vec<&'static str> {
    let mut required = vec![columns::DATE];
    if frame.has_column(columns::BID) {
        required.push(columns::BID);
    }
    if frame.has_column(columns::ASK) {
        required.push(columns::ASK);
    }
    required
}

/// Removes every row with a null in any required column, re-indexing the
/// survivors densely.
///
/// Malformed rows are dropped silently; a zero-row result is valid, not
/// an error. Callers wanting visibility use the row counts reported by
/// [`clean_all`](crate::clean_all).
#[must_use]
pub fn drop_invalid(frame: &Frame) -> Frame {
    let required = required_columns(frame);
    let keep: Vec<usize> = (0..frame.len())
        .filter(|&row| {
            required
                .iter()
                .all(|name| frame.cell(row, name).is_some_and(|c| !c.is_null()))
        })
        .collect();
    frame.select_rows(&keep)
}

/// Sorts rows ascending by the `Date` column, stably: rows with equal
/// timestamps keep their relative input order. Null dates (possible only
/// when used outside the full pipeline) sort first. A frame without a
/// `Date` column comes back unchanged.
#[must_use]
pub fn sort_by_date(frame: &Frame) -> Frame {
    let Some(dates) = frame.column(columns::DATE) else {
        return frame.clone();
    };

    let mut order: Vec<usize> = (0..frame.len()).collect();
    order.sort_by_key(|&row| dates[row].as_time());
    frame.select_rows(&order)
}

/// Runs the full cleaning pipeline on one raw frame.
///
/// Numeric coercion, mid-price computation, date parsing, required-field
/// filtering, then a stable chronological sort. Pure: the input frame is
/// never mutated, and per-cell failures surface as dropped rows rather
/// than errors.
#[must_use]
pub fn clean_frame(frame: &Frame, options: &CleanOptions) -> Frame {
    let numeric: Vec<&str> = options.numeric_columns.iter().map(String::as_str).collect();
    let coerced = coerce_numeric(frame, &numeric);
    let with_mid = compute_mid(&coerced);
    let dated = parse_dates(&with_mid, &options.date_column, &options.date_format);
    sort_by_date(&drop_invalid(&dated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tidemark_types::Cell;

    fn ts(min: u32) -> Cell {
        Cell::Time(Utc.with_ymd_and_hms(2025, 1, 1, 0, min, 0).unwrap())
    }

    #[test]
    fn test_compute_mid() {
        let frame = Frame::from_columns([
            ("Bid", vec![Cell::Num(1.10), Cell::Null]),
            ("Ask", vec![Cell::Num(1.12), Cell::Num(1.13)]),
        ])
        .unwrap();

        let out = compute_mid(&frame);
        let mids = out.column("Mid").unwrap();
        assert_eq!(mids[0], Cell::Num(1.11));
        assert!(mids[1].is_null());
    }

    #[test]
    fn test_mid_omitted_without_both_sides() {
        let frame = Frame::from_columns([("Bid", vec![Cell::Num(1.10)])]).unwrap();
        let out = compute_mid(&frame);
        assert!(!out.has_column("Mid"));
    }

    #[test]
    fn test_required_columns_follow_schema() {
        let both = Frame::from_columns([
            ("Date", vec![ts(0)]),
            ("Bid", vec![Cell::Num(1.0)]),
            ("Ask", vec![Cell::Num(1.0)]),
        ])
        .unwrap();
        assert_eq!(required_columns(&both), vec!["Date", "Bid", "Ask"]);

        let date_only = Frame::from_columns([("Date", vec![ts(0)])]).unwrap();
        assert_eq!(required_columns(&date_only), vec!["Date"]);
    }

    #[test]
    fn test_drop_invalid_keeps_nullable_extras() {
        let frame = Frame::from_columns([
            ("Date", vec![ts(0), ts(1), Cell::Null]),
            ("Bid", vec![Cell::Num(1.0), Cell::Null, Cell::Num(1.2)]),
            ("Ask", vec![Cell::Num(1.1), Cell::Num(1.1), Cell::Num(1.3)]),
            ("Volume", vec![Cell::Null, Cell::Num(5.0), Cell::Num(6.0)]),
        ])
        .unwrap();

        let out = drop_invalid(&frame);
        // Row 1 lost its bid, row 2 its date; only row 0 survives, and its
        // null volume does not drop it.
        assert_eq!(out.len(), 1);
        assert_eq!(out.cell(0, "Date"), Some(&ts(0)));
        assert!(out.cell(0, "Volume").unwrap().is_null());
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let frame = Frame::from_columns([
            ("Date", vec![ts(2), ts(1), ts(1), ts(0)]),
            (
                "Bid",
                vec![Cell::Num(4.0), Cell::Num(2.0), Cell::Num(3.0), Cell::Num(1.0)],
            ),
        ])
        .unwrap();

        let sorted = sort_by_date(&frame);
        let bids: Vec<_> = sorted.column("Bid").unwrap().to_vec();
        assert_eq!(
            bids,
            vec![Cell::Num(1.0), Cell::Num(2.0), Cell::Num(3.0), Cell::Num(4.0)]
        );
        assert_eq!(sort_by_date(&sorted), sorted);
    }

    #[test]
    fn test_clean_frame_concrete_scenario() {
        let frame = Frame::from_columns([
            (
                "Date",
                vec![
                    Cell::from("01.01.2025 00:00:00.000 UTC"),
                    Cell::from("01.01.2025 00:01:00.000 UTC"),
                ],
            ),
            ("Bid", vec![Cell::from("1.10"), Cell::from("1.11")]),
            ("Ask", vec![Cell::from("1.12"), Cell::from("1.13")]),
        ])
        .unwrap();

        let out = clean_frame(&frame, &CleanOptions::default());
        assert_eq!(out.len(), 2);
        assert_eq!(out.cell(0, "Mid"), Some(&Cell::Num(1.11)));
        assert_eq!(out.cell(1, "Mid"), Some(&Cell::Num(1.12)));
    }

    #[test]
    fn test_clean_frame_drops_unparseable_bid() {
        let frame = Frame::from_columns([
            (
                "Date",
                vec![
                    Cell::from("01.01.2025 00:00:00.000 UTC"),
                    Cell::from("01.01.2025 00:01:00.000 UTC"),
                ],
            ),
            ("Bid", vec![Cell::from("abc"), Cell::from("1.11")]),
            ("Ask", vec![Cell::from("1.12"), Cell::from("1.13")]),
        ])
        .unwrap();

        let out = clean_frame(&frame, &CleanOptions::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out.cell(0, "Bid"), Some(&Cell::Num(1.11)));
    }

    #[test]
    fn test_clean_frame_no_nulls_in_required() {
        let frame = Frame::from_columns([
            (
                "Date",
                vec![
                    Cell::from("02.01.2025 00:00:00.000 UTC"),
                    Cell::from("garbage"),
                    Cell::from("01.01.2025 00:00:00.000 UTC"),
                ],
            ),
            ("Bid", vec![Cell::from("1.2"), Cell::from("1.0"), Cell::from("x")]),
            ("Ask", vec![Cell::from("1.3"), Cell::from("1.1"), Cell::from("1.2")]),
        ])
        .unwrap();

        let out = clean_frame(&frame, &CleanOptions::default());
        for name in ["Date", "Bid", "Ask", "Mid"] {
            assert!(out.column(name).unwrap().iter().all(|c| !c.is_null()));
        }
    }

    #[test]
    fn test_clean_frame_idempotent() {
        let frame = Frame::from_columns([
            (
                "Date",
                vec![
                    Cell::from("02.01.2025 00:00:00.000 UTC"),
                    Cell::from("01.01.2025 00:00:00.000 UTC"),
                ],
            ),
            ("Bid", vec![Cell::from("1.2"), Cell::from("1.0")]),
            ("Ask", vec![Cell::from("1.3"), Cell::from("1.1")]),
        ])
        .unwrap();

        let options = CleanOptions::default();
        let once = clean_frame(&frame, &options);
        let twice = clean_frame(&once, &options);
        assert_eq!(twice, once);
    }
}
