//! Provider CSV parsing into raw frames.

use thiserror::Error;
use tidemark_types::{Cell, Frame, columns};

/// Errors that can occur while parsing a provider CSV file.
#[derive(Error, Debug)]
pub enum CsvParseError {
    /// The CSV structure could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Parses one daily 1-minute CSV file into a raw frame.
///
/// Daily files are headerless with columns in the order
/// `Date, Bid, Ask, Low, High, Volume`. Every cell is kept as a string;
/// typing is the cleaning pipeline's job, so a malformed value here
/// cannot lose a row before the pipeline gets to account for it. Rows
/// shorter than the schema are padded with nulls, extra fields are
/// ignored, and blank lines are skipped.
///
/// # Errors
///
/// Returns an error only for structurally unreadable CSV (bad quoting,
/// invalid UTF-8).
pub fn parse_daily_csv(data: &[u8]) -> Result<Frame, CsvParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); columns::PROVIDER.len()];
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        for (i, column) in cells.iter_mut().enumerate() {
            let cell = record
                .get(i)
                .filter(|field| !field.is_empty())
                .map_or(Cell::Null, Cell::from);
            column.push(cell);
        }
    }

    let frame = Frame::from_columns(columns::PROVIDER.iter().copied().zip(cells))
        .expect("uniform column lengths");
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_daily_csv() {
        let data = b"01.01.2025 00:00:00.000 UTC,1.10,1.12,1.09,1.13,120\n\
                     01.01.2025 00:01:00.000 UTC,1.11,1.13,1.10,1.14,98\n";
        let frame = parse_daily_csv(data).unwrap();

        assert_eq!(frame.len(), 2);
        let names: Vec<_> = frame.column_names().collect();
        assert_eq!(names, vec!["Date", "Bid", "Ask", "Low", "High", "Volume"]);
        assert_eq!(frame.cell(1, "Bid"), Some(&Cell::from("1.11")));
        assert_eq!(
            frame.cell(0, "Date"),
            Some(&Cell::from("01.01.2025 00:00:00.000 UTC"))
        );
    }

    #[test]
    fn test_parse_empty_file() {
        let frame = parse_daily_csv(b"").unwrap();
        assert!(frame.is_empty());
        assert_eq!(frame.column_count(), 6);
    }

    #[test]
    fn test_parse_short_rows_padded() {
        let data = b"01.01.2025 00:00:00.000 UTC,1.10,1.12\n";
        let frame = parse_daily_csv(data).unwrap();
        assert_eq!(frame.len(), 1);
        assert!(frame.cell(0, "Volume").unwrap().is_null());
        assert_eq!(frame.cell(0, "Ask"), Some(&Cell::from("1.12")));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let data = b"01.01.2025 00:00:00.000 UTC,1.10,1.12,1.09,1.13,120\n\n";
        let frame = parse_daily_csv(data).unwrap();
        assert_eq!(frame.len(), 1);
    }
}
