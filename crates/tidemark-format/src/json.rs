//! JSON frame output.

use std::io::Write;

use serde_json::{Map, Value};
use tidemark_types::{Cell, Frame};

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter writing one object per row, keyed by column name.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (array style only).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }
}

/// Converts a frame row to a JSON object keyed by column name.
fn row_object(frame: &Frame, row: usize) -> Result<Map<String, Value>, FormatError> {
    let mut object = Map::new();
    for name in frame.column_names() {
        let cell = frame.cell(row, name).unwrap_or(&Cell::Null);
        object.insert(name.to_string(), serde_json::to_value(cell)?);
    }
    Ok(object)
}

impl Formatter for JsonFormatter {
    fn write_frame<W: Write + Send>(
        &self,
        frame: &Frame,
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                let rows: Vec<Map<String, Value>> = (0..frame.len())
                    .map(|row| row_object(frame, row))
                    .collect::<Result<_, _>>()?;
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, &rows)?;
                } else {
                    serde_json::to_writer(&mut writer, &rows)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for row in 0..frame.len() {
                    serde_json::to_writer(&mut writer, &row_object(frame, row)?)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
