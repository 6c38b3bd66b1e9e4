//! Ordered collections of independent matrices.

use mixcol_core::{Matrix, MATRIX_BYTES};

/// Number of whole matrices that fit in `size_bytes` of data.
#[inline]
pub const fn matrix_count(size_bytes: usize) -> usize {
    size_bytes / MATRIX_BYTES
}

/// An ordered, immutable batch of matrices.
///
/// Matrices are addressed by 1-based index in reports and timing records;
/// [`MatrixBatch::as_slice`] exposes the 0-based storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatrixBatch {
    matrices: Vec<Matrix>,
}

impl MatrixBatch {
    /// Wraps an existing list of matrices.
    pub fn from_matrices(matrices: Vec<Matrix>) -> Self {
        Self { matrices }
    }

    /// Builds a batch of `count` matrices with every cell set to `byte`.
    pub fn filled(count: usize, byte: u8) -> Self {
        Self {
            matrices: vec![Matrix::filled(byte); count],
        }
    }

    /// Number of matrices in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Returns true if the batch holds no matrices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Total payload size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.matrices.len() * MATRIX_BYTES
    }

    /// Borrows the matrices in batch order.
    #[inline]
    pub fn as_slice(&self) -> &[Matrix] {
        &self.matrices
    }

    /// Iterates over the matrices in batch order.
    pub fn iter(&self) -> std::slice::Iter<'_, Matrix> {
        self.matrices.iter()
    }
}

impl<'a> IntoIterator for &'a MatrixBatch {
    type Item = &'a Matrix;
    type IntoIter = std::slice::Iter<'a, Matrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
