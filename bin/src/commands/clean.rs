//! Clean command implementation.
//!
//! Runs the cleaning pipeline over raw per-pair files and writes canonical
//! clean frames, optionally concatenated into one pair-tagged frame.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tidemark_lib::prelude::*;
use tidemark_lib::{CleanOptions, clean_file_name, concat_frames, read_csv_frame};

use crate::display::{Format, write_frame};

/// Cleans raw frames for the given pairs.
pub(crate) fn clean(
    pair_codes: &[String],
    input_dir: &Path,
    output_dir: &Path,
    combine: bool,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let mut raw = PairMap::new();
    for code in pair_codes {
        let pair = Pair::new(code).with_context(|| format!("Invalid pair: {code}"))?;
        let input = input_dir.join(format!("{pair}.csv"));
        let file =
            File::open(&input).with_context(|| format!("Failed to open {}", input.display()))?;
        let frame = read_csv_frame(file)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        raw.insert(pair, frame);
    }

    let options = CleanOptions::default();
    let output = clean_all(&raw, &options);

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    for (pair, frame) in output.frames.iter() {
        let path = output_dir.join(clean_file_name(pair, format.as_output_format()));
        write_frame(frame, &path, format)?;

        if !quiet {
            let dropped = output
                .report(pair.as_str())
                .map_or(0, tidemark_lib::CleanReport::dropped);
            println!(
                "{pair}: {} clean rows ({dropped} dropped) -> {}",
                frame.len(),
                path.display()
            );
        }
    }

    if combine {
        // Tag each frame with its pair before concatenating so rows stay
        // attributable in the combined output
        let tagged = output
            .frames
            .iter()
            .map(|(pair, frame)| {
                frame
                    .with_constant("Pair", Cell::from(pair.as_str()))
                    .with_context(|| format!("Failed to tag {pair}"))
            })
            .collect::<Result<Vec<_>>>()?;
        let combined = concat_frames(&tagged);

        let path = output_dir.join(format!("combined.{}", format.extension()));
        write_frame(&combined, &path, format)?;

        if !quiet {
            println!("{} combined rows -> {}", combined.len(), path.display());
        }
    }

    Ok(())
}
