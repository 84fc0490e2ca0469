//! # bbp-math
//!
//! Bounded arithmetic for Bailey–Borwein–Plouffe digit extraction.
//!
//! This crate provides:
//! - [`PowerTable`]: deterministic power-of-two table driving `16^n mod k`
//!   by left-to-right binary exponentiation (integer-only, no overflow)
//! - [`Fraction`]: a floating accumulator kept modulo 1 after every addition
//! - [`to_hex_digits`] / [`to_radix_digits`]: fraction → digit string expansion
//!
//! No concurrency lives here; every function is pure and safe to call from
//! any number of threads.

pub mod fraction;
pub mod modpow;
pub mod radix;

pub use fraction::Fraction;
pub use modpow::{mod_pow16, MathError, PowerTable};
pub use radix::{to_binary_digits, to_hex_digits, to_radix_digits};
