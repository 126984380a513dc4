//! Shortest round-trip binary64-to-decimal conversion core (Ryu).
//!
//! Given an already-unpacked, finite, non-zero, non-special binary64 value
//! (sign handled by the caller; mantissa/exponent fields passed in raw),
//! produces the shortest decimal mantissa/exponent pair that round-trips
//! back to the exact original value under round-to-nearest-even, and
//! formats that pair as a scientific-notation byte sequence.
//!
//! This crate does not unpack IEEE-754 bit patterns, dispatch on
//! zero/subnormal/infinity/NaN, or implement the 32-bit companion
//! algorithm — those are the host's job. See [`exact_int`] for the
//! exact-integer fast path and [`shortest`] for the general algorithm.

#![cfg_attr(not(feature = "std"), no_std)]

/// Facade around the core features, so the rest of the crate can write
/// `crate::lib::*` and stay agnostic over `std`/`core`.
pub(crate) mod lib {
    #[cfg(feature = "std")]
    pub(crate) use std::*;

    #[cfg(not(feature = "std"))]
    pub(crate) use core::*;
}

// MODULES
mod common;
mod decimal;
mod exact_int;
mod mulshift;
mod shortest;
mod tables;

// API
pub use self::decimal::{append, DecimalSink, FloatingDecimal64};
pub use self::exact_int::float64_to_decimal_exact_int;
pub use self::shortest::float64_to_decimal;
