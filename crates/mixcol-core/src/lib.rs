//! GF(2^8) arithmetic and the AES MixColumns step, isolated for benchmarking.
//!
//! This crate provides:
//! - Field multiplication and `xtime` under the AES polynomial.
//! - `MixColumns` and its inverse on single columns and on 4×4 matrices.
//! - Fixed-size column and matrix value types.
//!
//! It is not an AES cipher: there is no key schedule and no other round step.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod gf256;
mod mix;
mod state;

pub use crate::mix::{inv_mix_column, inv_mix_columns, mix_column, mix_columns};
pub use crate::state::{xor_columns, Column, Matrix, MATRIX_BYTES};
