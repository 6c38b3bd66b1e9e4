//! Arithmetic in GF(2^8) under the AES reduction polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reduction polynomial (0x11B with the x^8 term dropped).
///
/// XORed into a product whenever a left shift carries out of bit 7.
pub const REDUCTION: u8 = 0x1b;

/// Multiplies a field element by `x` (i.e. by 2).
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements with the double-and-add method.
///
/// Stops as soon as every set bit of `b` has been consumed.
#[inline]
pub fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    product
}
