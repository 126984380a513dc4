//! Small numeric helpers shared by the table lookups and the shortest-decimal core.
//!
//! `pow5bits`, `log10_pow2` and `log10_pow5` are multiply-and-shift
//! approximations of `ceil(e * log2(5))`, `floor(e * log10(2))` and
//! `floor(e * log10(5))` respectively. Each is only ever called with
//! exponents bounded well inside the range the chosen constants were
//! checked against (`|e| <= 1650`), which is the same range the binary64
//! shortest-decimal algorithm itself operates over.

#![doc(hidden)]

/// Number of decimal digits in `v`.
///
/// # Preconditions
/// `v < 10^17`; the shortest-decimal core never produces a wider mantissa.
#[inline]
pub(crate) fn decimal_length17(v: u64) -> u32 {
    debug_assert!(v < 100_000_000_000_000_000);
    if v >= 10_000_000_000_000_000 {
        17
    } else if v >= 1_000_000_000_000_000 {
        16
    } else if v >= 100_000_000_000_000 {
        15
    } else if v >= 10_000_000_000_000 {
        14
    } else if v >= 1_000_000_000_000 {
        13
    } else if v >= 100_000_000_000 {
        12
    } else if v >= 10_000_000_000 {
        11
    } else if v >= 1_000_000_000 {
        10
    } else if v >= 100_000_000 {
        9
    } else if v >= 10_000_000 {
        8
    } else if v >= 1_000_000 {
        7
    } else if v >= 100_000 {
        6
    } else if v >= 10_000 {
        5
    } else if v >= 1_000 {
        4
    } else if v >= 100 {
        3
    } else if v >= 10 {
        2
    } else {
        1
    }
}

/// `floor(e * log10(2))`, valid for `0 <= e <= 1650`.
#[inline]
pub(crate) fn log10_pow2(e: i32) -> u32 {
    debug_assert!((0..=1650).contains(&e));
    ((e as u64).wrapping_mul(78913) >> 18) as u32
}

/// `floor(e * log10(5))`, valid for `0 <= e <= 2620`.
#[inline]
pub(crate) fn log10_pow5(e: i32) -> u32 {
    debug_assert!((0..=2620).contains(&e));
    ((e as u64).wrapping_mul(732923) >> 20) as u32
}

/// Number of bits needed to represent `5^e`, i.e. `ceil(e * log2(5))`.
///
/// `e` is always non-negative here: it indexes one of the two power-of-five
/// tables, never the signed binary exponent directly.
#[inline]
pub(crate) fn pow5bits(e: i32) -> i32 {
    debug_assert!((0..=3528).contains(&e));
    (((e as u32).wrapping_mul(1217359) >> 19) + 1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_length17_boundaries() {
        assert_eq!(decimal_length17(0), 1);
        assert_eq!(decimal_length17(9), 1);
        assert_eq!(decimal_length17(10), 2);
        assert_eq!(decimal_length17(99), 2);
        assert_eq!(decimal_length17(100), 3);
        assert_eq!(decimal_length17(9_999_999_999_999_999), 16);
        assert_eq!(decimal_length17(10_000_000_000_000_000), 17);
        assert_eq!(decimal_length17(99_999_999_999_999_999), 17);
    }

    #[test]
    fn pow5bits_matches_exact_bit_length() {
        // Cross-check against the exact bit length of 5^e for a sample of
        // exponents, including ones near the table boundaries used by
        // `crate::shortest`.
        for &e in &[0i32, 1, 2, 3, 21, 22, 63, 64, 127, 128, 300, 325] {
            let mut exact: u128 = 1;
            for _ in 0..e {
                exact *= 5;
            }
            let bits = 128 - exact.leading_zeros() as i32;
            assert_eq!(pow5bits(e), bits, "pow5bits({e})");
        }
    }

    #[test]
    fn log10_pow2_matches_float_reference() {
        for e in 0..64 {
            let expected = ((e as f64) * 2f64.log10()).floor() as u32;
            assert_eq!(log10_pow2(e), expected, "log10_pow2({e})");
        }
    }

    #[test]
    fn log10_pow5_matches_float_reference() {
        for e in 0..64 {
            let expected = ((e as f64) * 5f64.log10()).floor() as u32;
            assert_eq!(log10_pow5(e), expected, "log10_pow5({e})");
        }
    }
}
