//! Timed MixColumns processing of matrix batches.
//!
//! Processors take a batch by shared reference and return transformed matrices
//! alongside one [`TimingRecord`] per matrix. The parallel processor gives each
//! worker exclusive output slots, so results need no locking and come back in
//! batch order.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod processor;
mod timing;

pub use processor::{
    process_matrix, BatchOutput, BatchProcessor, ParallelProcessor, SequentialProcessor,
};
pub use timing::{TimingRecord, TimingSummary};
