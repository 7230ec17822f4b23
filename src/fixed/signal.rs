// src/fixed/signal.rs

use alloc::vec::Vec;
use core::f64::consts::PI;

use super::types::{ComplexFixed, ComplexQ16};
use crate::common::sin_cos;

/// Complex exponential at `bin / n` cycles per sample, sampled `n` times:
/// `cos(2π·bin·t/n) + i·sin(2π·bin·t/n)`, each component truncated to Q16.16.
///
/// The forward transform of this signal has all its energy in `bin`.
pub fn complex_tone(n: usize, bin: usize) -> Vec<ComplexQ16> {
    (0..n)
        .map(|t| {
            let angle = 2.0 * PI * (bin as f64) * (t as f64) / (n as f64);
            let (sin, cos) = sin_cos(angle);
            ComplexQ16::from_f64(cos, sin)
        })
        .collect()
}

/// Splits complex samples into raw (real, imaginary) sequences.
pub fn split<const FRAC: u32>(samples: &[ComplexFixed<FRAC>]) -> (Vec<i32>, Vec<i32>) {
    samples.iter().map(|c| c.to_bits()).unzip()
}

/// Zips raw (real, imaginary) sequences into complex samples.
/// The result is as long as the shorter input.
pub fn join<const FRAC: u32>(real: &[i32], imag: &[i32]) -> Vec<ComplexFixed<FRAC>> {
    real.iter()
        .zip(imag)
        .map(|(&re, &im)| ComplexFixed::from_bits(re, im))
        .collect()
}
