//! Synthetic matrix batches for the MixColumns benchmark.
//!
//! A batch is the unit of work handed to a processor. Batches are built once
//! per data size from an explicitly passed RNG and never mutated afterwards.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod batch;
mod generator;

pub use batch::{matrix_count, MatrixBatch};
pub use generator::BatchGenerator;
