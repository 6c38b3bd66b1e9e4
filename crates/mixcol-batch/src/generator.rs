//! Random batch generation.

use mixcol_core::{Matrix, MATRIX_BYTES};
use rand::RngCore;

use crate::batch::{matrix_count, MatrixBatch};

/// Batch generator parametrized by an RNG.
///
/// The generator owns the RNG for its lifetime, so successive batches drawn
/// from one seeded generator are reproducible as a sequence.
pub struct BatchGenerator<R: RngCore> {
    rng: R,
}

impl<R: RngCore> BatchGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates `count` matrices of uniformly random bytes.
    pub fn generate(&mut self, count: usize) -> MatrixBatch {
        let mut matrices = Vec::with_capacity(count);
        for _ in 0..count {
            let mut bytes = [0u8; MATRIX_BYTES];
            self.rng.fill_bytes(&mut bytes);
            matrices.push(Matrix::from_bytes(bytes));
        }
        MatrixBatch::from_matrices(matrices)
    }

    /// Generates as many matrices as fit in `size_bytes`.
    pub fn generate_for_size(&mut self, size_bytes: usize) -> MatrixBatch {
        self.generate(matrix_count(size_bytes))
    }
}
