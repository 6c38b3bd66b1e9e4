//! Column and matrix representations.

/// Number of bytes in a [`Matrix`].
pub const MATRIX_BYTES: usize = 16;

/// One 4-byte column of a matrix.
pub type Column = [u8; 4];

/// XORs two columns element-wise.
#[inline]
pub fn xor_columns(lhs: &Column, rhs: &Column) -> Column {
    let mut out = *lhs;
    for (d, r) in out.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
    out
}

/// 4×4 byte matrix shaped like an AES state, stored row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: [[u8; 4]; 4],
}

impl Matrix {
    /// Returns the all-zero matrix.
    pub const fn zero() -> Self {
        Self { rows: [[0u8; 4]; 4] }
    }

    /// Returns a matrix with every cell set to `byte`.
    pub const fn filled(byte: u8) -> Self {
        Self {
            rows: [[byte; 4]; 4],
        }
    }

    /// Builds a matrix from 16 bytes in row-major order.
    pub fn from_bytes(bytes: [u8; MATRIX_BYTES]) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (row, chunk) in rows.iter_mut().zip(bytes.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        Self { rows }
    }

    /// Returns the 16 bytes in row-major order.
    pub fn to_bytes(&self) -> [u8; MATRIX_BYTES] {
        let mut out = [0u8; MATRIX_BYTES];
        for (chunk, row) in out.chunks_exact_mut(4).zip(self.rows.iter()) {
            chunk.copy_from_slice(row);
        }
        out
    }

    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[[u8; 4]; 4] {
        &self.rows
    }

    /// Reads column `col` (0..4) top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> Column {
        [
            self.rows[0][col],
            self.rows[1][col],
            self.rows[2][col],
            self.rows[3][col],
        ]
    }

    /// Writes column `col` (0..4) top to bottom.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: &Column) {
        for (row, &byte) in self.rows.iter_mut().zip(column.iter()) {
            row[col] = byte;
        }
    }
}
