//! tidemark CLI - daily FX data fetching, cleaning, and metrics.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "tidemark")]
#[command(about = "Daily FX data fetching, cleaning, and metrics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Download daily data for one or more pairs
    Fetch {
        /// Pair codes (e.g., eurusd usdchf)
        #[arg(required = true)]
        pairs: Vec<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        end: Option<String>,

        /// Output directory. Files named <PAIR>.csv
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Maximum concurrent day downloads per pair
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },

    /// Clean raw per-pair files into canonical frames
    Clean {
        /// Pair codes to clean (reads <PAIR>.csv from the input directory)
        #[arg(required = true)]
        pairs: Vec<String>,

        /// Directory holding the raw per-pair files
        #[arg(short, long, default_value = ".")]
        input_dir: PathBuf,

        /// Output directory. Files named <PAIR>_clean.<format>
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Also write a combined frame (combined.<format>) tagged by pair
        #[arg(short, long)]
        combine: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Compute return, volatility, and spread series from a clean frame
    Metrics {
        /// Input file (a clean frame, CSV with header)
        input: PathBuf,

        /// Price column to derive returns from
        #[arg(short, long, default_value = "Mid")]
        price_col: String,

        /// Rolling volatility window in rows
        #[arg(short, long, default_value = "21")]
        window: usize,

        /// Output file. Defaults to <input stem>_metrics.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Fetch {
            pairs,
            start,
            end,
            output_dir,
            concurrency,
        } => {
            commands::fetch::fetch(
                &pairs,
                &start,
                end.as_deref(),
                &output_dir,
                concurrency,
                cli.quiet,
            )
            .await
        }
        Commands::Clean {
            pairs,
            input_dir,
            output_dir,
            combine,
            format,
        } => commands::clean::clean(&pairs, &input_dir, &output_dir, combine, format, cli.quiet),
        Commands::Metrics {
            input,
            price_col,
            window,
            output,
            format,
        } => commands::metrics::metrics(&input, &price_col, window, output, format, cli.quiet),
    }
}
