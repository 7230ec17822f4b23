// src/fixed/math.rs
//
// Raw-integer Q16.16 primitives. These are the operations the assembly
// kernel performs on plain 32-bit registers; the operator impls on
// `Fixed`/`ComplexFixed` do the same thing with types attached.

use super::types::{ComplexQ16, Q16_16};

/// Scale factor of the Q16.16 format (2^16).
pub const SCALE: i32 = 1 << super::types::FRAC_BITS;

/// Truncates `x * 2^16` toward zero. Out of range values wrap.
#[inline]
pub fn to_fixed(x: f64) -> i32 {
    Q16_16::from_f64(x).to_bits()
}

/// `v / 2^16`, exact.
#[inline]
pub fn to_real(v: i32) -> f64 {
    Q16_16::from_bits(v).to_f64()
}

/// 64-bit product shifted right by 16; the low bits are discarded.
#[inline]
pub fn multiply(a: i32, b: i32) -> i32 {
    (Q16_16::from_bits(a) * Q16_16::from_bits(b)).to_bits()
}

/// `(a_re + i·a_im)(b_re + i·b_im)` with four truncating multiplies.
#[inline]
pub fn complex_multiply(a_re: i32, a_im: i32, b_re: i32, b_im: i32) -> (i32, i32) {
    (ComplexQ16::from_bits(a_re, a_im) * ComplexQ16::from_bits(b_re, b_im)).to_bits()
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
