//! Cell-level numeric coercion and date parsing.

use chrono::{DateTime, NaiveDateTime, Utc};
use tidemark_types::{Cell, Frame, columns};

/// Columns coerced to numeric by default.
pub const DEFAULT_NUMERIC_COLUMNS: &[&str] = &[
    columns::BID,
    columns::ASK,
    columns::HIGH,
    columns::LOW,
    columns::VOLUME,
];

/// Timestamp format of Dukascopy daily CSV files,
/// e.g. `01.01.2025 00:00:00.000 UTC`.
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S%.f UTC";

/// Parses a timestamp string with the given chrono format, returning
/// `None` on failure. The format is expected to pin the source to UTC.
#[must_use]
pub fn parse_timestamp(value: &str, format: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), format)
        .ok()
        .map(|dt| dt.and_utc())
}

/// Coerces a single cell to numeric. Strings that fail to parse, and any
/// non-numeric value, become null; a bad cell never fails the table.
fn coerce_cell(cell: &Cell) -> Cell {
    match cell {
        Cell::Num(n) => Cell::Num(*n),
        Cell::Str(s) => s.trim().parse::<f64>().map_or(Cell::Null, Cell::Num),
        Cell::Time(_) | Cell::Null => Cell::Null,
    }
}

/// Returns a copy of `frame` with the listed columns coerced to numeric.
///
/// Columns absent from the schema are ignored. Already-numeric cells pass
/// through unchanged. An empty frame comes back empty with the same
/// schema.
#[must_use]
pub fn coerce_numeric(frame: &Frame, numeric_columns: &[&str]) -> Frame {
    let mut out = frame.clone();
    for &name in numeric_columns {
        if let Some(cells) = frame.column(name) {
            let coerced = cells.iter().map(coerce_cell).collect();
            out.set_column(name, coerced).expect("column length kept");
        }
    }
    out
}

/// Returns a copy of `frame` with the date column parsed to timestamps.
///
/// Values that fail to parse become null. Cells that are already
/// timestamps pass through. If the column is absent from the schema it is
/// appended as all-null rather than treated as an error.
#[must_use]
pub fn parse_dates(frame: &Frame, date_column: &str, format: &str) -> Frame {
    let mut out = frame.clone();
    let parsed = match frame.column(date_column) {
        Some(cells) => cells
            .iter()
            .map(|cell| match cell {
                Cell::Time(t) => Cell::Time(*t),
                Cell::Str(s) => Cell::from(parse_timestamp(s, format)),
                Cell::Num(_) | Cell::Null => Cell::Null,
            })
            .collect(),
        None => vec![Cell::Null; frame.len()],
    };
    out.set_column(date_column, parsed)
        .expect("column length kept");
    out
}
