//! Exact-integer fast path.
//!
//! Strict optimization: short-circuits the shortest-decimal search for
//! mantissas that are already exact integers small enough to fit the
//! 53-bit mantissa plus implicit bit, and that round-trip trivially.

#![doc(hidden)]

use crate::decimal::FloatingDecimal64;

const MANTISSA_BITS: u32 = 52;
const BIAS: i32 = 1023;

/// Returns `(d, true)` when `(mant, exp)` is an exact small integer, else
/// `(_, false)` and the shortest-decimal core (`crate::shortest`) must be
/// used instead.
#[inline]
pub fn float64_to_decimal_exact_int(mant: u64, exp: u64) -> (FloatingDecimal64, bool) {
    let e = exp as i32 - BIAS;
    if e > MANTISSA_BITS as i32 {
        return (FloatingDecimal64 { mantissa: 0, exponent: 0 }, false);
    }
    let shift = MANTISSA_BITS as i32 - e;
    if shift >= 64 || shift < 0 {
        return (FloatingDecimal64 { mantissa: 0, exponent: 0 }, false);
    }
    let full = mant | (1u64 << MANTISSA_BITS);
    let m = full >> shift;
    if (m << shift) != full {
        // Lower bits were discarded: not an exact integer.
        return (FloatingDecimal64 { mantissa: 0, exponent: 0 }, false);
    }

    let mut mantissa = m;
    let mut exponent = 0i32;
    while mantissa % 10 == 0 {
        mantissa /= 10;
        exponent += 1;
    }
    (FloatingDecimal64 { mantissa, exponent }, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_point_zero_is_exact() {
        // 1.0 == mantissa field 0, biased exponent 1023.
        let (d, ok) = float64_to_decimal_exact_int(0, 1023);
        assert!(ok);
        assert_eq!(d.mantissa, 1);
        assert_eq!(d.exponent, 0);
    }

    #[test]
    fn three_is_exact_with_stripped_zero() {
        // 3.0 == mantissa field 0x8000000000000, biased exponent 1024.
        let (d, ok) = float64_to_decimal_exact_int(0x8000000000000, 1024);
        assert!(ok);
        assert_eq!(d.mantissa, 3);
        assert_eq!(d.exponent, 0);
    }

    #[test]
    fn large_exact_power_of_ten() {
        // 1e15 fits exactly within the 53-bit mantissa.
        let value = 1_000_000_000_000_000f64;
        let bits = value.to_bits();
        let mant = bits & ((1u64 << 52) - 1);
        let exp = (bits >> 52) & 0x7ff;
        let (d, ok) = float64_to_decimal_exact_int(mant, exp);
        assert!(ok);
        assert_eq!(d.mantissa, 1);
        assert_eq!(d.exponent, 15);
    }

    #[test]
    fn pi_is_not_exact() {
        let value = core::f64::consts::PI;
        let bits = value.to_bits();
        let mant = bits & ((1u64 << 52) - 1);
        let exp = (bits >> 52) & 0x7ff;
        let (_, ok) = float64_to_decimal_exact_int(mant, exp);
        assert!(!ok);
    }

    #[test]
    fn fraction_with_nonzero_low_bits_is_not_exact() {
        // 0.5 has e < 0, so shift would be negative: not an exact integer.
        let value = 0.5f64;
        let bits = value.to_bits();
        let mant = bits & ((1u64 << 52) - 1);
        let exp = (bits >> 52) & 0x7ff;
        let (_, ok) = float64_to_decimal_exact_int(mant, exp);
        assert!(!ok);
    }
}
