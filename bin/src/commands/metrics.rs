//! Metrics command implementation.
//!
//! Reads a clean frame and writes derived return, volatility, and spread
//! series, grouped by pair when the frame carries a `Pair` column.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tidemark_lib::prelude::*;
use tidemark_lib::{
    PairSeries, bid_ask_spread, coerce_numeric, columns, frame_returns, frame_volatility,
    grouped_returns, grouped_spread, grouped_volatility, parse_dates, read_csv_frame,
};

use crate::display::{Format, write_frame};

/// Timestamp format used when a frame is round-tripped through CSV.
const ISO_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Computes metric series from a clean frame file.
pub(crate) fn metrics(
    input: &Path,
    price_col: &str,
    window: usize,
    output: Option<PathBuf>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let file =
        File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let frame =
        read_csv_frame(file).with_context(|| format!("Failed to read {}", input.display()))?;

    // CSV round-trips lose cell types; re-coerce before computing
    let frame = coerce_numeric(&frame, &[price_col, columns::BID, columns::ASK]);
    let frame = parse_dates(&frame, columns::DATE, ISO_DATE_FORMAT);

    let result = if frame.has_column(columns::PAIR) {
        let returns = grouped_returns(&frame, columns::PAIR, columns::DATE, price_col)?;
        let vols = grouped_volatility(&frame, columns::PAIR, columns::DATE, price_col, window)?;
        let spreads = grouped_spread(&frame, columns::PAIR, columns::DATE)?;
        grouped_result(&returns, &vols, &spreads)
    } else {
        let returns = frame_returns(&frame, price_col)?;
        let vols = frame_volatility(&frame, price_col, window)?;
        let spreads = bid_ask_spread(&frame);
        let dates = frame
            .column(columns::DATE)
            .map(|cells| cells.to_vec())
            .unwrap_or_else(|| vec![Cell::Null; frame.len()]);
        single_result(dates, &returns, &vols, &spreads)
    }?;

    let output = output.unwrap_or_else(|| default_output(input, format));
    write_frame(&result, &output, format)?;

    if !quiet {
        println!(
            "{} metric rows -> {}",
            result.len(),
            output.display()
        );
    }

    Ok(())
}

/// Builds the output frame for a pair-tagged input, one block per pair.
fn grouped_result(
    returns: &[PairSeries],
    vols: &[PairSeries],
    spreads: &[PairSeries],
) -> Result<Frame> {
    let mut pair_cells = Vec::new();
    let mut date_cells = Vec::new();
    let mut return_cells = Vec::new();
    let mut vol_cells = Vec::new();
    let mut spread_cells = Vec::new();

    for ((ret, vol), spread) in returns.iter().zip(vols).zip(spreads) {
        pair_cells.extend(std::iter::repeat_n(
            Cell::from(ret.pair.as_str()),
            ret.dates.len(),
        ));
        date_cells.extend(ret.dates.iter().map(|d| Cell::from(*d)));
        return_cells.extend(ret.values.iter().map(|v| Cell::from(*v)));
        vol_cells.extend(vol.values.iter().map(|v| Cell::from(*v)));
        spread_cells.extend(spread.values.iter().map(|v| Cell::from(*v)));
    }

    Frame::from_columns([
        (columns::PAIR, pair_cells),
        (columns::DATE, date_cells),
        ("Return", return_cells),
        ("Volatility", vol_cells),
        ("Spread", spread_cells),
    ])
    .context("Mismatched metric series lengths")
}

/// Builds the output frame for a single-pair input.
fn single_result(
    dates: Vec<Cell>,
    returns: &[Option<f64>],
    vols: &[Option<f64>],
    spreads: &[Option<f64>],
) -> Result<Frame> {
    Frame::from_columns([
        (columns::DATE, dates),
        (
            "Return",
            returns.iter().map(|v| Cell::from(*v)).collect(),
        ),
        (
            "Volatility",
            vols.iter().map(|v| Cell::from(*v)).collect(),
        ),
        ("Spread", spreads.iter().map(|v| Cell::from(*v)).collect()),
    ])
    .context("Mismatched metric series lengths")
}

/// Default output path: `<input stem>_metrics.<ext>` next to the input.
fn default_output(input: &Path, format: Format) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "metrics".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_metrics.{}", format.extension()))
}
