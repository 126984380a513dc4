//! End-to-end scenarios from the shortest-decimal specification:
//! `(mantissa_field, biased_exponent, sign) -> formatted output`.

use shortest_f64::{append, float64_to_decimal, float64_to_decimal_exact_int};

fn to_string(mant: u64, exp: u64, negative: bool) -> String {
    let (d, exact) = float64_to_decimal_exact_int(mant, exp);
    let d = if exact { d } else { float64_to_decimal(mant, exp) };
    let mut buf = Vec::new();
    append(d, &mut buf, negative);
    String::from_utf8(buf).unwrap()
}

#[test]
fn one_point_zero() {
    assert_eq!(to_string(0, 1023, false), "1e+00");
}

#[test]
fn three_point_zero() {
    assert_eq!(to_string(0x8000000000000, 1024, false), "3e+00");
}

#[test]
fn pi() {
    assert_eq!(to_string(0x921fb54442d18, 1024, false), "3.141592653589793e+00");
}

#[test]
fn smallest_positive_subnormal() {
    assert_eq!(to_string(1, 0, false), "5e-324");
}

#[test]
fn largest_finite() {
    assert_eq!(
        to_string(0xfffffffffffff, 2046, false),
        "1.7976931348623157e+308"
    );
}

#[test]
fn negative_one() {
    assert_eq!(to_string(0, 1023, true), "-1e+00");
}

#[test]
fn exact_int_fast_path_is_used_for_integers() {
    let (d, exact) = float64_to_decimal_exact_int(0, 1023);
    assert!(exact);
    assert_eq!(d.mantissa, 1);
    assert_eq!(d.exponent, 0);
}

#[test]
fn exact_int_fast_path_declines_non_integers() {
    let bits = core::f64::consts::PI.to_bits();
    let mant = bits & ((1u64 << 52) - 1);
    let exp = (bits >> 52) & 0x7ff;
    let (_, exact) = float64_to_decimal_exact_int(mant, exp);
    assert!(!exact);
}

#[test]
fn round_trip_over_named_boundary_values() {
    let boundaries: &[f64] = &[
        f64::MIN_POSITIVE,         // smallest normal
        f64::from_bits(1),         // smallest positive subnormal
        f64::from_bits(0x000fffffffffffff), // largest subnormal
        f64::MAX,                  // largest finite
        1.0,
        2.0,
        0.1,
        100_000_000_000_000_000_000.0, // 1e20
        1.0e22,                    // largest exactly representable power of ten
    ];
    for &value in boundaries {
        let bits = value.to_bits();
        let mant = bits & ((1u64 << 52) - 1);
        let exp = (bits >> 52) & 0x7ff;
        let s = to_string(mant, exp, false);
        assert_eq!(s.parse::<f64>().unwrap(), value, "round-trip of {value} via {s}");
    }
}

#[test]
fn formatter_idempotence() {
    // Formatting, parsing, and reformatting yields byte-identical output.
    let values: &[f64] = &[1.0, 3.14, 1e100, 5e-324, 1.7976931348623157e308];
    for &value in values {
        let bits = value.to_bits();
        let mant = bits & ((1u64 << 52) - 1);
        let exp = (bits >> 52) & 0x7ff;
        let once = to_string(mant, exp, false);
        let reparsed = once.parse::<f64>().unwrap();
        let bits2 = reparsed.to_bits();
        let mant2 = bits2 & ((1u64 << 52) - 1);
        let exp2 = (bits2 >> 52) & 0x7ff;
        let twice = to_string(mant2, exp2, false);
        assert_eq!(once, twice);
    }
}
