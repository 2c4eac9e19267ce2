//! Fetch command implementation.
//!
//! Downloads daily provider files for each requested pair and writes one
//! raw frame per pair. Raw output is always CSV: it is the interchange
//! format the clean command reads back.

use anyhow::{Context, Result};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tidemark_lib::prelude::*;
use tidemark_lib::{OutputFormat, raw_file_name};

use crate::display::{Format, parse_date, write_frame};

/// Downloads daily data for the given pairs over a date range.
pub(crate) async fn fetch(
    pair_codes: &[String],
    start_str: &str,
    end_str: Option<&str>,
    output_dir: &Path,
    concurrency: usize,
    quiet: bool,
) -> Result<()> {
    // Validate all pairs up front so a typo fails before any download
    let pairs = pair_codes
        .iter()
        .map(|code| Pair::new(code).with_context(|| format!("Invalid pair: {code}")))
        .collect::<Result<Vec<_>>>()?;

    let start = parse_date(start_str, "start")?;
    let end = match end_str {
        Some(s) => parse_date(s, "end")?,
        None => chrono::Utc::now().date_naive(),
    };
    let range = DateRange::new(start, end)?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let config = ClientConfig {
        concurrency,
        ..Default::default()
    };
    let client = FetchClient::new(config)?;

    for pair in &pairs {
        let progress = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(range.total_days() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} days ({percent}%) {msg}")
                    .expect("Invalid progress template")
                    .progress_chars("=>-"),
            );
            pb.set_message(format!("{pair} {start} -> {end}"));
            pb
        };

        // Resilient stream: failed days are skipped, not fatal
        let mut batches = Vec::with_capacity(range.total_days());
        let mut skipped_days = 0u64;
        let mut stream = day_stream_resilient(&client, pair, range);

        while let Some(batch) = stream.next().await {
            if batch.had_error() {
                skipped_days += 1;
            }
            batches.push(batch);
            progress.inc(1);
        }

        let raw = concat_days(&batches);
        let finish_msg = if skipped_days > 0 {
            format!(
                "{pair}: {} rows ({skipped_days} days skipped due to errors)",
                raw.len()
            )
        } else {
            format!("{pair}: {} rows", raw.len())
        };
        progress.finish_with_message(finish_msg);

        let output = output_dir.join(raw_file_name(pair, OutputFormat::Csv));
        write_frame(&raw, &output, Format::Csv)?;

        if !quiet {
            println!("Output written to: {}", output.display());
        }
    }

    Ok(())
}
