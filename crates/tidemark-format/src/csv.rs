//! CSV frame writing and reading.

use std::io::{Read, Write};

use tidemark_types::{Cell, Frame};

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include the header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_frame<W: Write + Send>(&self, frame: &Frame, writer: W) -> Result<(), FormatError> {
        let mut csv_writer = ::csv::WriterBuilder::new()
            .delimiter(self.delimiter as u8)
            .from_writer(writer);

        if self.include_header {
            csv_writer.write_record(frame.column_names())?;
        }

        for row in 0..frame.len() {
            let cells = frame.row(row).unwrap_or_default();
            csv_writer.write_record(cells.iter().map(ToString::to_string))?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

/// Reads a CSV file with a header row into a frame.
///
/// Every cell comes back as a string ([`Cell::Str`]); empty fields become
/// null. Typing is left to the cleaning pipeline.
///
/// # Errors
///
/// Returns an error if the CSV is structurally unreadable.
pub fn read_csv_frame<R: Read>(reader: R) -> Result<Frame, FormatError> {
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(ToString::to_string)
        .collect();
    read_records(csv_reader, &headers)
}

/// Reads a headerless CSV file into a frame with the given column names.
///
/// # Errors
///
/// Returns an error if the CSV is structurally unreadable.
pub fn read_csv_frame_with_columns<R: Read>(
    reader: R,
    columns: &[&str],
) -> Result<Frame, FormatError> {
    let csv_reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = columns.iter().map(ToString::to_string).collect();
    read_records(csv_reader, &headers)
}

fn read_records<R: Read>(
    mut reader: ::csv::Reader<R>,
    headers: &[String],
) -> Result<Frame, FormatError> {
    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
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

    Ok(Frame::from_columns(headers.iter().cloned().zip(cells)).expect("uniform column lengths"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> Frame {
        Frame::from_columns([
            ("Date", vec![Cell::from("01.01.2025 00:00:00.000 UTC")]),
            ("Bid", vec![Cell::Num(1.1)]),
            ("Volume", vec![Cell::Null]),
        ])
        .unwrap()
    }

    #[test]
    fn test_csv_write() {
        let mut output = Cursor::new(Vec::new());
        CsvFormatter::new().write_frame(&sample(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("Date,Bid,Volume\n"));
        assert!(result.contains("01.01.2025 00:00:00.000 UTC,1.1,\n"));
    }

    #[test]
    fn test_csv_no_header() {
        let mut output = Cursor::new(Vec::new());
        CsvFormatter::new()
            .with_header(false)
            .write_frame(&sample(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("Date,Bid"));
    }

    #[test]
    fn test_tsv() {
        let mut output = Cursor::new(Vec::new());
        CsvFormatter::tsv().write_frame(&sample(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("Date\tBid\tVolume\n"));
    }

    #[test]
    fn test_read_with_header() {
        let data = "Date,Bid,Ask\n01.01.2025 00:00:00.000 UTC,1.10,1.12\n,,\n";
        let frame = read_csv_frame(Cursor::new(data)).unwrap();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.cell(0, "Bid"), Some(&Cell::from("1.10")));
    }

    #[test]
    fn test_read_headerless_with_columns() {
        let data = "01.01.2025 00:00:00.000 UTC,1.10,1.12\n";
        let frame =
            read_csv_frame_with_columns(Cursor::new(data), &["Date", "Bid", "Ask"]).unwrap();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.cell(0, "Ask"), Some(&Cell::from("1.12")));
    }

    #[test]
    fn test_fields_with_delimiter_are_quoted() {
        let frame = Frame::from_columns([
            ("Note", vec![Cell::from("hello, world"), Cell::from("say \"hi\"")]),
            ("Bid", vec![Cell::Num(1.1), Cell::Num(1.2)]),
        ])
        .unwrap();

        let mut output = Cursor::new(Vec::new());
        CsvFormatter::new().write_frame(&frame, &mut output).unwrap();
        let back = read_csv_frame(Cursor::new(output.into_inner())).unwrap();

        assert_eq!(back.len(), 2);
        assert_eq!(back.column_count(), 2);
        assert_eq!(back.cell(0, "Note"), Some(&Cell::from("hello, world")));
        assert_eq!(back.cell(1, "Note"), Some(&Cell::from("say \"hi\"")));
        assert_eq!(back.cell(0, "Bid"), Some(&Cell::from("1.1")));
    }

    #[test]
    fn test_write_read_round_trip() {
        let frame = Frame::from_columns([
            ("Pair", vec![Cell::from("EURUSD"), Cell::from("USDCHF")]),
            ("Bid", vec![Cell::Num(1.1), Cell::Num(0.9)]),
        ])
        .unwrap();

        let mut output = Cursor::new(Vec::new());
        CsvFormatter::new().write_frame(&frame, &mut output).unwrap();
        let back = read_csv_frame(Cursor::new(output.into_inner())).unwrap();

        assert_eq!(back.len(), 2);
        // cells come back as strings; typing is the pipeline's job
        assert_eq!(back.cell(1, "Bid"), Some(&Cell::from("0.9")));
    }
}
