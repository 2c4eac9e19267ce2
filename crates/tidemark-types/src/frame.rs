//! Column-ordered in-memory tables.

use thiserror::Error;

use crate::Cell;

/// Errors raised by [`Frame`] construction and mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// A column's length does not match the frame's row count.
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        column: String,
        /// Row count of the frame.
        expected: usize,
        /// Length of the rejected column.
        actual: usize,
    },
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    cells: Vec<Cell>,
}

/// A column-ordered in-memory table.
///
/// Every column has the same length; rows are implicitly indexed from zero.
/// Column insertion order is meaningful and preserved by all operations.
/// Transformations in the pipeline produce fresh frames rather than
/// mutating their inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    columns: Vec<Column>,
}

impl Frame {
    /// Creates an empty frame with no columns and no rows.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Builds a frame from `(name, cells)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] if the columns are not all
    /// the same length. A duplicate name replaces the earlier column.
    pub fn from_columns(
        columns: impl IntoIterator<Item = (impl Into<String>, Vec<Cell>)>,
    ) -> Result<Self, FrameError> {
        let mut frame = Self::new();
        for (name, cells) in columns {
            frame.set_column(name, cells)?;
        }
        Ok(frame)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Returns true if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Returns true if the frame has a column with the given name.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Returns the cells of the named column, if present.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.cells.as_slice())
    }

    /// Inserts or replaces a column.
    ///
    /// A new name is appended after the existing columns; an existing name
    /// is replaced in place, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] if the frame already has
    /// columns and `cells` has a different length.
    pub fn set_column(
        &mut self,
        name: impl Into<String>,
        cells: Vec<Cell>,
    ) -> Result<(), FrameError> {
        let name = name.into();
        if !self.columns.is_empty() && cells.len() != self.len() {
            return Err(FrameError::LengthMismatch {
                column: name,
                expected: self.len(),
                actual: cells.len(),
            });
        }
        if let Some(existing) = self.columns.iter_mut().find(|c| c.name == name) {
            existing.cells = cells;
        } else {
            self.columns.push(Column { name, cells });
        }
        Ok(())
    }

    /// Returns a copy of this frame with an extra column where every row
    /// holds the same cell. Useful for tagging per-pair frames before
    /// concatenation.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the constant column always matches the
    /// frame's length.
    pub fn with_constant(&self, name: impl Into<String>, cell: Cell) -> Result<Self, FrameError> {
        let mut out = self.clone();
        out.set_column(name, vec![cell; self.len()])?;
        Ok(out)
    }

    /// Returns the cell at `(row, column)`, if both exist.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        self.column(column)?.get(row)
    }

    /// Returns the cells of row `row` in column order, if the row exists.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Vec<&Cell>> {
        if row >= self.len() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.cells[row]).collect())
    }

    /// Builds a new frame containing the given rows, in the given order,
    /// densely re-indexed from zero. The same schema is kept even when
    /// `rows` is empty.
    ///
    /// Row indices must be in bounds; this is an internal contract of the
    /// cleaning pipeline.
    #[must_use]
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                cells: rows.iter().map(|&i| c.cells[i].clone()).collect(),
            })
            .collect();
        Self { columns }
    }
}
