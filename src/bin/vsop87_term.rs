//! VSOP87 Partial Sum Tool
//!
//! Sums the first block of a VSOP87 coefficient table at one instant and prints
//! the value. With no arguments it reads `VSOP87C.ven` from the working
//! directory, sums 685 records, and evaluates at t = 0.012970568104.
//!
//! Usage:
//!   cargo run --bin vsop87_term -- [--table VSOP87C.ven] [--terms 685] [--time 0.012970568104]

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use vsop87::{EvaluatorConfig, SeriesEvaluator};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// VSOP87 Partial Sum Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Evaluates one block of a VSOP87 coefficient table at a single instant",
    long_about = None
)]
struct Args {
    /// JSON configuration file (flags take precedence over its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Coefficient table to read
    #[arg(long)]
    table: Option<PathBuf>,

    /// Number of records to sum after the header line
    #[arg(long)]
    terms: Option<usize>,

    /// Time argument in Julian millennia from J2000.0
    #[arg(long, allow_negative_numbers = true)]
    time: Option<f64>,

    /// Log debugging information to stderr
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Merge the optional config file with command line overrides
fn build_config(args: &Args) -> Result<EvaluatorConfig> {
    let mut config = match &args.config {
        Some(path) => EvaluatorConfig::from_json_file(path)?,
        None => EvaluatorConfig::default(),
    };

    if let Some(table) = &args.table {
        config = config.with_table_path(table);
    }
    if let Some(terms) = args.terms {
        config = config.with_series_length(terms);
    }
    if let Some(t) = args.time {
        config = config.with_time_argument(t);
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = build_config(&args)?;
    tracing::debug!(?config, "Resolved configuration");

    let value = SeriesEvaluator::new(config).run()?;
    println!("{:?}", value);

    Ok(())
}
