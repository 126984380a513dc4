//! Differential smoke test against the `ryu` crate.
//!
//! Draws random finite `f64` bit patterns and checks that this crate
//! computes the same shortest decimal `(mantissa, exponent)` pair as
//! `ryu::Buffer::format_finite`'s output reduces to. `ryu` is free to pick
//! its own textual layout (plain decimal vs. scientific); since both crates
//! implement the same uniqueness property (there is exactly one shortest
//! round-tripping decimal), reducing both sides to a bare digit string and
//! power of ten makes this a real cross-check of the algorithm rather than
//! of formatting conventions.
//!
//! Grounded directly on the teacher's own `rng-tests/smoke.rs`, which used
//! `ryu` the other way around (as a generator to re-parse); here it serves
//! as the oracle for the generator.

extern crate rand_core;
extern crate rand_xorshift;
extern crate ryu;
extern crate shortest_f64;

use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;
use shortest_f64::{float64_to_decimal, float64_to_decimal_exact_int};

/// Reduce a `ryu`-formatted string (plain or scientific, no sign) to the
/// `(mantissa, exponent)` pair with no trailing zeros in the mantissa.
fn reduce(s: &str) -> (u64, i32) {
    let (digits_part, exp_part) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], s[i + 1..].parse::<i32>().expect("exponent digits")),
        None => (s, 0),
    };
    let (int_part, frac_part) = match digits_part.find('.') {
        Some(i) => (&digits_part[..i], &digits_part[i + 1..]),
        None => (digits_part, ""),
    };
    let mut combined = String::with_capacity(int_part.len() + frac_part.len());
    combined.push_str(int_part);
    combined.push_str(frac_part);
    let mut value: u128 = combined.parse().expect("decimal digits");
    let mut exponent = exp_part - frac_part.len() as i32;
    while value != 0 && value % 10 == 0 {
        value /= 10;
        exponent += 1;
    }
    (value as u64, exponent)
}

fn ours(value: f64) -> (u64, i32) {
    let bits = value.to_bits();
    let mant = bits & ((1u64 << 52) - 1);
    let exp = (bits >> 52) & 0x7ff;
    let (d, exact) = float64_to_decimal_exact_int(mant, exp);
    let d = if exact { d } else { float64_to_decimal(mant, exp) };
    (d.mantissa, d.exponent)
}

pub fn main() {
    let mut rng = XorShiftRng::from_seed([0; 16]);
    let mut oracle = ryu::Buffer::new();
    let mut checked = 0u64;
    while checked < 1_000_000 {
        let input = f64::from_bits(rng.next_u64()).abs();
        if !input.is_finite() || input == 0.0 {
            continue;
        }
        let expected = reduce(oracle.format_finite(input));
        let got = ours(input);
        assert_eq!(got, expected, "input bits = {:#018x}", input.to_bits());
        checked += 1;
    }
    println!("checked {checked} random finite values against ryu");
}
