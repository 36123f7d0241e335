use anyhow::{Context, Result};
use clap::Parser;
use csv_combiner::{logging, Combiner, DEFAULT_CHUNK_SIZE};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Combine CSV files into one CSV on standard output, adding a `filename`
/// column that names each row's source file.
#[derive(Parser, Debug)]
#[command(name = "csv-combiner", version)]
struct Args {
    /// CSV files to combine, in output order
    files: Vec<PathBuf>,

    /// Maximum rows read from a file at a time
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: NonZeroUsize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let mut combiner = Combiner::new(args.files, args.chunk_size);
    combiner.combine().context("Failed to combine CSV files")?;
    combiner.print().context("Failed to write combined CSV")?;

    Ok(())
}
