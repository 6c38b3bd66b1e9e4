//! The MixColumns linear map and its inverse.

use crate::gf256::{mul, xtime};
use crate::state::{Column, Matrix};

/// Applies the `{2, 3, 1, 1}` circulant to a single column.
#[inline]
pub fn mix_column(column: Column) -> Column {
    let a = column;
    let b = [xtime(a[0]), xtime(a[1]), xtime(a[2]), xtime(a[3])];
    [
        b[0] ^ a[1] ^ b[1] ^ a[2] ^ a[3],
        b[1] ^ a[2] ^ b[2] ^ a[3] ^ a[0],
        b[2] ^ a[3] ^ b[3] ^ a[0] ^ a[1],
        b[3] ^ a[0] ^ b[0] ^ a[1] ^ a[2],
    ]
}

/// Applies the `{0e, 0b, 0d, 09}` circulant, undoing [`mix_column`].
#[inline]
pub fn inv_mix_column(column: Column) -> Column {
    let [a0, a1, a2, a3] = column;
    [
        mul(a0, 0x0e) ^ mul(a1, 0x0b) ^ mul(a2, 0x0d) ^ mul(a3, 0x09),
        mul(a0, 0x09) ^ mul(a1, 0x0e) ^ mul(a2, 0x0b) ^ mul(a3, 0x0d),
        mul(a0, 0x0d) ^ mul(a1, 0x09) ^ mul(a2, 0x0e) ^ mul(a3, 0x0b),
        mul(a0, 0x0b) ^ mul(a1, 0x0d) ^ mul(a2, 0x09) ^ mul(a3, 0x0e),
    ]
}

/// MixColumns over all four columns of the matrix.
#[inline]
pub fn mix_columns(state: &mut Matrix) {
    for col in 0..4 {
        let column = mix_column(state.column(col));
        state.set_column(col, &column);
    }
}

/// Inverse MixColumns over all four columns of the matrix.
#[inline]
pub fn inv_mix_columns(state: &mut Matrix) {
    for col in 0..4 {
        let column = inv_mix_column(state.column(col));
        state.set_column(col, &column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::xor_columns;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn mix_column_by_mul(column: Column) -> Column {
        let [a0, a1, a2, a3] = column;
        [
            mul(a0, 2) ^ mul(a1, 3) ^ a2 ^ a3,
            a0 ^ mul(a1, 2) ^ mul(a2, 3) ^ a3,
            a0 ^ a1 ^ mul(a2, 2) ^ mul(a3, 3),
            mul(a0, 3) ^ a1 ^ a2 ^ mul(a3, 2),
        ]
    }

    fn random_column(rng: &mut impl RngCore) -> Column {
        rng.next_u32().to_le_bytes()
    }

    #[test]
    fn aes_test_vectors() {
        assert_eq!(mix_column([0xdb, 0x13, 0x53, 0x45]), [0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(mix_column([0xf2, 0x0a, 0x22, 0x5c]), [0x9f, 0xdc, 0x58, 0x9d]);
        assert_eq!(mix_column([0x01, 0x01, 0x01, 0x01]), [0x01, 0x01, 0x01, 0x01]);
        assert_eq!(mix_column([0xc6, 0xc6, 0xc6, 0xc6]), [0xc6, 0xc6, 0xc6, 0xc6]);
    }

    #[test]
    fn zero_column_stays_zero() {
        assert_eq!(mix_column([0; 4]), [0; 4]);
    }

    #[test]
    fn xtime_form_agrees_with_generic_multiply() {
        for x in 0u8..=255 {
            for y in 0u8..=255 {
                for column in [[x, y, 0, 0], [0, 0, x, y], [x, 0, y, 0]] {
                    assert_eq!(mix_column(column), mix_column_by_mul(column));
                }
            }
        }
    }

    #[test]
    fn mix_column_is_linear() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..10_000 {
            let c1 = random_column(&mut rng);
            let c2 = random_column(&mut rng);
            assert_eq!(
                mix_column(xor_columns(&c1, &c2)),
                xor_columns(&mix_column(c1), &mix_column(c2))
            );
        }
    }

    #[test]
    fn inverse_recovers_column() {
        let mut rng = ChaCha20Rng::from_seed([8u8; 32]);
        for _ in 0..10_000 {
            let column = random_column(&mut rng);
            assert_eq!(inv_mix_column(mix_column(column)), column);
            assert_eq!(mix_column(inv_mix_column(column)), column);
        }
    }

    #[test]
    fn mix_columns_transforms_each_column_independently() {
        let mut state = Matrix::zero();
        state.set_column(1, &[0xdb, 0x13, 0x53, 0x45]);
        mix_columns(&mut state);
        assert_eq!(state.column(0), [0; 4]);
        assert_eq!(state.column(1), [0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(state.column(2), [0; 4]);
        assert_eq!(state.column(3), [0; 4]);
    }

    #[test]
    fn mix_columns_round_trip_random_matrices() {
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        for _ in 0..1_000 {
            let mut bytes = [0u8; 16];
            rng.fill_bytes(&mut bytes);
            let original = Matrix::from_bytes(bytes);
            let mut state = original;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);
        }
    }
}
