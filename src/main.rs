use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pickup_times::{write_pickups, PickupExtractor};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Print `<hour> <minute>` for the pickup time of the first rows of a
/// gzip-compressed CSV file
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Gzip-compressed CSV file with a header row
    input: PathBuf,

    /// Maximum number of pairs to print
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    limit: u64,
}

fn main() -> Result<()> {
    // stdout carries the pairs, so logs go to stderr
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let limit = usize::try_from(args.limit).context("limit does not fit in memory size")?;

    let pickups = PickupExtractor::open(&args.input, limit)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let summary = write_pickups(pickups, io::stdout().lock())
        .with_context(|| format!("extracting pickup times from {}", args.input.display()))?;

    info!(
        emitted = summary.emitted,
        skipped = summary.skipped,
        limit_reached = summary.limit_reached,
        "done"
    );
    Ok(())
}
