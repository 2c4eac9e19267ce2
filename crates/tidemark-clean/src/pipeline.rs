//! Multi-pair cleaning orchestration and frame concatenation.

use tidemark_types::{Cell, Frame, Pair};

use crate::coerce::{DEFAULT_DATE_FORMAT, DEFAULT_NUMERIC_COLUMNS};
use crate::filter::clean_frame;
use crate::pair_map::PairMap;

/// Options recognized by the cleaning pipeline.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Columns coerced to numeric.
    pub numeric_columns: Vec<String>,
    /// Name of the timestamp column.
    pub date_column: String,
    /// Expected chrono format of raw timestamp strings.
    pub date_format: String,
    /// Whether to also produce a concatenated frame across pairs.
    pub combine: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            numeric_columns: DEFAULT_NUMERIC_COLUMNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            date_column: tidemark_types::columns::DATE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            combine: false,
        }
    }
}

/// Row accounting for one pair's cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    /// Rows in the raw frame.
    pub rows_in: usize,
    /// Rows surviving the filter.
    pub rows_out: usize,
}

impl CleanReport {
    /// Returns the number of rows dropped by the filter.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.rows_in - self.rows_out
    }
}

/// Result of a multi-pair cleaning run.
///
/// `combined` is `Some` exactly when combination was requested; an empty
/// input map still yields `Some(empty frame)` in that case. The absence
/// state and the zero-row state are observably distinct on purpose, since
/// callers branch on whether combination was requested at all.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutput {
    /// Cleaned frames, one per input pair, in input order.
    pub frames: PairMap,
    /// Concatenation of the cleaned frames, if requested.
    pub combined: Option<Frame>,
    /// Per-pair row accounting, in input order.
    pub reports: Vec<(Pair, CleanReport)>,
}

impl CleanOutput {
    /// Returns the cleaning report for a pair code, if the pair was part
    /// of the run.
    #[must_use]
    pub fn report(&self, code: &str) -> Option<&CleanReport> {
        self.reports
            .iter()
            .find(|(p, _)| p.as_str() == code)
            .map(|(_, r)| r)
    }
}

/// Cleans every pair's frame independently, optionally concatenating the
/// results.
///
/// A pair whose data is entirely bad yields an empty frame under its key;
/// it never aborts the batch, and an empty frame still contributes its
/// schema to the combined output. Dropped-row counts are surfaced through
/// [`CleanOutput::reports`] instead of being logged and lost.
#[must_use]
pub fn clean_all(data: &PairMap, options: &CleanOptions) -> CleanOutput {
    let mut frames = PairMap::new();
    let mut reports = Vec::with_capacity(data.len());

    for (pair, raw) in data.iter() {
        let cleaned = clean_frame(raw, options);
        reports.push((
            pair.clone(),
            CleanReport {
                rows_in: raw.len(),
                rows_out: cleaned.len(),
            },
        ));
        frames.insert(pair.clone(), cleaned);
    }

    let combined = options.combine.then(|| concat_frames(frames.frames()));

    CleanOutput {
        frames,
        combined,
        reports,
    }
}

/// Concatenates frames in iteration order with a dense row index.
///
/// Schema-preserving only: the output schema is the union of input column
/// names in first-seen order, cells missing from a contributing frame are
/// null, and no pair-tag column is invented. Callers wanting grouping
/// downstream tag each frame before concatenation (see
/// [`Frame::with_constant`]). No frames at all produce an empty frame
/// with no columns.
#[must_use]
pub fn concat_frames<'a>(frames: impl IntoIterator<Item = &'a Frame> + Clone) -> Frame {
    let mut schema: Vec<&str> = Vec::new();
    for frame in frames.clone() {
        for name in frame.column_names() {
            if !schema.contains(&name) {
                schema.push(name);
            }
        }
    }

    let mut columns: Vec<(String, Vec<Cell>)> =
        schema.iter().map(|&n| (n.to_string(), Vec::new())).collect();
    for frame in frames {
        for (name, cells) in &mut columns {
            match frame.column(name) {
                Some(source) => cells.extend_from_slice(source),
                None => cells.extend(std::iter::repeat_n(Cell::Null, frame.len())),
            }
        }
    }

    Frame::from_columns(columns).expect("uniform column lengths")
}
