//! Command-line driver for the MixColumns batch benchmark.

#![forbid(unsafe_code)]

mod report;
mod sweep;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use mixcol_runtime::{BatchProcessor, ParallelProcessor, SequentialProcessor};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::sweep::{SweepConfig, DEFAULT_SIZES};

/// Times AES MixColumns over batches of random 4×4 byte matrices.
#[derive(Parser)]
#[command(name = "mixcol-bench", version, author, about)]
struct Cli {
    /// Data sizes to sweep, in bytes (16 bytes per matrix).
    #[arg(long, value_name = "BYTES", value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<usize>,
    /// Directory receiving the dump files.
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,
    /// Optional RNG seed for reproducible matrices.
    #[arg(long)]
    seed: Option<u64>,
    /// How matrices are scheduled.
    #[arg(long, value_enum, default_value_t = Mode::Parallel)]
    mode: Mode,
    /// Worker threads for parallel mode (defaults to available parallelism).
    #[arg(long)]
    threads: Option<usize>,
    /// Skip writing the initial matrices.
    #[arg(long, default_value_t = false)]
    no_initial_dump: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// One rayon task per matrix range.
    Parallel,
    /// Single thread, batch order.
    Sequential,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let processor = build_processor(cli.mode, cli.threads)?;
    let config = SweepConfig {
        sizes: cli.sizes,
        out_dir: cli.out_dir,
        initial_dump: !cli.no_initial_dump,
    };
    log::debug!("sweep config: {config:?}");
    sweep::run(&config, processor.as_ref(), seeded_rng(cli.seed))?;
    Ok(())
}

fn init_logging() {
    let env = Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .format_module_path(false)
        .try_init();
}

fn build_processor(mode: Mode, threads: Option<usize>) -> Result<Box<dyn BatchProcessor>> {
    match mode {
        Mode::Sequential => {
            if let Some(n) = threads {
                log::warn!("--threads {n} has no effect in sequential mode");
            }
            Ok(Box::new(SequentialProcessor))
        }
        Mode::Parallel => {
            let processor = match threads {
                Some(n) => ParallelProcessor::with_threads(n).context("build worker pool")?,
                None => ParallelProcessor::new(),
            };
            log::debug!("parallel processor with {} threads", processor.threads());
            Ok(Box::new(processor))
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
