//! Size sweep: generate, dump, process, and report each data size in turn.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use mixcol_batch::{BatchGenerator, MatrixBatch};
use mixcol_runtime::{BatchProcessor, TimingSummary};
use rand::RngCore;

use crate::report::{self, ArtifactPaths};

/// Data sizes swept when none are given: 1 MiB, 10 MiB, 100 MiB.
pub const DEFAULT_SIZES: [usize; 3] = [1024 * 1024, 10 * 1024 * 1024, 100 * 1024 * 1024];

/// Settings for one sweep run.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub sizes: Vec<usize>,
    pub out_dir: PathBuf,
    pub initial_dump: bool,
}

/// Outcome of one successfully processed size.
#[derive(Clone, Debug)]
pub struct SizeReport {
    pub size_bytes: usize,
    pub matrices: usize,
    pub summary: TimingSummary,
    pub wall: Duration,
}

/// Runs every configured size. A failing size is logged and skipped; the
/// returned error lists every size that failed.
pub fn run<R: RngCore>(
    config: &SweepConfig,
    processor: &dyn BatchProcessor,
    rng: R,
) -> Result<Vec<SizeReport>> {
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("create output directory {}", config.out_dir.display()))?;

    let mut generator = BatchGenerator::new(rng);
    let mut reports = Vec::with_capacity(config.sizes.len());
    let mut failed = Vec::new();
    for &size in &config.sizes {
        match run_size(config, processor, &mut generator, size) {
            Ok(report) => {
                log_report(&report);
                reports.push(report);
            }
            Err(err) => {
                log::error!("size {size} B aborted: {err:#}");
                failed.push(size);
            }
        }
    }

    if !failed.is_empty() {
        bail!(
            "{} of {} sizes failed: {:?}",
            failed.len(),
            config.sizes.len(),
            failed
        );
    }
    Ok(reports)
}

fn run_size<R: RngCore>(
    config: &SweepConfig,
    processor: &dyn BatchProcessor,
    generator: &mut BatchGenerator<R>,
    size_bytes: usize,
) -> Result<SizeReport> {
    let paths = ArtifactPaths::for_size(&config.out_dir, size_bytes);
    let batch = generator.generate_for_size(size_bytes);
    log::info!(
        "size {size_bytes} B: {} matrices, {} processor",
        batch.len(),
        processor.name()
    );

    // An aborted size keeps none of its files, complete or not.
    let result = dump_and_process(config, processor, &batch, &paths, size_bytes);
    if result.is_err() {
        paths.remove_files();
    }
    result
}

fn dump_and_process(
    config: &SweepConfig,
    processor: &dyn BatchProcessor,
    batch: &MatrixBatch,
    paths: &ArtifactPaths,
    size_bytes: usize,
) -> Result<SizeReport> {
    if config.initial_dump {
        report::write_file(&paths.initial, |out| report::write_initial(out, batch))?;
    }

    let started = std::time::Instant::now();
    let output = processor.process(batch);
    let wall = started.elapsed();

    report::write_file(&paths.results, |out| {
        report::write_results(out, &output.transformed)
    })?;
    report::write_file(&paths.timings, |out| {
        report::write_timings(out, &output.timings)
    })?;

    Ok(SizeReport {
        size_bytes,
        matrices: batch.len(),
        summary: output.summary(),
        wall,
    })
}

fn log_report(report: &SizeReport) {
    let summary = &report.summary;
    log::info!(
        "size {} B: {} matrices in {:?} wall, per matrix mean {:?} min {:?} max {:?}",
        report.size_bytes,
        report.matrices,
        report.wall,
        summary.mean(),
        summary.min,
        summary.max
    );
}
