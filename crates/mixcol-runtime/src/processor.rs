//! Batch processors applying MixColumns to every matrix with per-matrix timing.

use std::hint::black_box;
use std::time::Instant;

use mixcol_batch::MatrixBatch;
use mixcol_core::{mix_columns, Matrix};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::timing::{TimingRecord, TimingSummary};

/// Smallest number of matrices a rayon job is split down to.
const MIN_SPLIT: usize = 256;

/// Transformed matrices and timings for one batch.
///
/// Slot `i` of both vectors belongs to the matrix with 1-based index `i + 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchOutput {
    /// Matrices after MixColumns, in batch order.
    pub transformed: Vec<Matrix>,
    /// Elapsed transform time per matrix, in batch order.
    pub timings: Vec<TimingRecord>,
}

impl BatchOutput {
    /// Returns true if nothing was processed.
    pub fn is_empty(&self) -> bool {
        self.transformed.is_empty()
    }

    /// Aggregates the timing records.
    pub fn summary(&self) -> TimingSummary {
        TimingSummary::from_records(&self.timings)
    }
}

/// Applies MixColumns to every matrix of a batch.
pub trait BatchProcessor {
    /// Processes the whole batch. The batch itself is never modified.
    fn process(&self, batch: &MatrixBatch) -> BatchOutput;

    /// Short label used in logs.
    fn name(&self) -> &'static str;
}

/// Transforms a private copy of `matrix`, timing only the transform.
#[inline]
pub fn process_matrix(index: usize, matrix: &Matrix) -> (Matrix, TimingRecord) {
    let mut state = *matrix;
    let start = Instant::now();
    mix_columns(black_box(&mut state));
    let elapsed = start.elapsed();
    (state, TimingRecord::new(index, elapsed))
}

/// Processes matrices one after another on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialProcessor;

impl BatchProcessor for SequentialProcessor {
    fn process(&self, batch: &MatrixBatch) -> BatchOutput {
        let (transformed, timings) = batch
            .iter()
            .enumerate()
            .map(|(i, matrix)| process_matrix(i + 1, matrix))
            .unzip();
        BatchOutput {
            transformed,
            timings,
        }
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

/// Processes matrices in parallel on a rayon pool.
///
/// Work is split at matrix granularity only; the four columns of a matrix are
/// always transformed by the same worker.
#[derive(Debug, Default)]
pub struct ParallelProcessor {
    pool: Option<ThreadPool>,
}

impl ParallelProcessor {
    /// Creates a processor running on rayon's global pool.
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Creates a processor with a dedicated pool of `threads` workers
    /// (0 lets rayon pick from available parallelism).
    pub fn with_threads(threads: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("mixcol-worker-{i}"))
            .build()?;
        Ok(Self { pool: Some(pool) })
    }

    /// Number of worker threads that will process batches.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl BatchProcessor for ParallelProcessor {
    fn process(&self, batch: &MatrixBatch) -> BatchOutput {
        log::debug!(
            "processing {} matrices on {} threads",
            batch.len(),
            self.threads()
        );
        match &self.pool {
            Some(pool) => pool.install(|| process_into_slots(batch)),
            None => process_into_slots(batch),
        }
    }

    fn name(&self) -> &'static str {
        "parallel"
    }
}

/// Every worker writes only the output slots matching its input positions.
fn process_into_slots(batch: &MatrixBatch) -> BatchOutput {
    let mut transformed = vec![Matrix::zero(); batch.len()];
    let mut timings = vec![TimingRecord::default(); batch.len()];
    transformed
        .par_iter_mut()
        .zip(timings.par_iter_mut())
        .zip(batch.as_slice().par_iter())
        .enumerate()
        .with_min_len(MIN_SPLIT)
        .for_each(|(i, ((out, timing), matrix))| {
            let (state, record) = process_matrix(i + 1, matrix);
            *out = state;
            *timing = record;
        });
    BatchOutput {
        transformed,
        timings,
    }
}
