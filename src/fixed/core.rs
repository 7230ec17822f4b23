// src/fixed/core.rs

use super::types::{ComplexFixed, Fixed};
use crate::common::sin_cos;
use core::f64::consts::PI;

/// Computes the rotation factors (Twiddle Factors) for an FFT of size N.
///
/// All N entries are produced, entry k being `exp(-2πik/N)` converted with
/// the same truncating conversion as the signal samples.
pub(crate) fn precompute_twiddles<const FRAC: u32>(twiddles: &mut [ComplexFixed<FRAC>], n: usize) {
    for (k, slot) in twiddles.iter_mut().enumerate().take(n) {
        let angle = -2.0 * PI * (k as f64) / (n as f64);
        let (sin, cos) = sin_cos(angle);
        *slot = ComplexFixed::new(Fixed::from_f64(cos), Fixed::from_f64(sin));
    }
}

/// Fills the bit-reversal table.
pub(crate) fn precompute_bitrev(bitrev: &mut [usize], n: usize) {
    bitrev[0] = 0;
    let mut j = 0;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        bitrev[i] = j;
    }
}

/// In-place bit-reversal reordering by swapping each pair once.
pub(crate) fn bitrev_permute<T>(buffer: &mut [T], bitrev: &[usize]) {
    for i in 1..buffer.len().saturating_sub(1) {
        let j = bitrev[i];
        if i < j {
            buffer.swap(i, j);
        }
    }
}

/// Butterfly stages of the radix-2 Decimation-in-Time FFT.
///
/// `buffer` must already be in bit-reversed order. For every stage the span
/// `m` doubles; butterfly `j` of a block reads twiddle `(j * n) / m` from a
/// full-length table. Sums and differences wrap, nothing is rescaled.
pub(crate) fn radix_2_dit_butterflies<const FRAC: u32>(
    buffer: &mut [ComplexFixed<FRAC>],
    twiddles: &[ComplexFixed<FRAC>],
) {
    let n = buffer.len();
    let mut half_m = 1;

    while half_m < n {
        let m = half_m << 1;
        log::trace!("butterfly stage: span {} of {}", m, n);

        for k in (0..n).step_by(m) {
            for j in 0..half_m {
                let w = twiddles[(j * n) / m];

                let even_idx = k + j;
                let odd_idx = even_idx + half_m;
                let even = buffer[even_idx];

                // Butterfly: t = odd * w
                let t = buffer[odd_idx] * w;

                buffer[even_idx] = even + t;
                buffer[odd_idx] = even - t;
            }
        }
        half_m = m;
    }
}

/// Radix-2 Decimation-in-Time FFT core for fixed-point complex numbers.
///
/// # Arguments
/// - `buffer`: Input/output buffer of complex fixed-point numbers
/// - `twiddles`: Precomputed N-entry twiddle table
/// - `bitrev`: Precomputed bit-reversal indices
pub(crate) fn radix_2_dit_fft_core<const FRAC: u32>(
    buffer: &mut [ComplexFixed<FRAC>],
    twiddles: &[ComplexFixed<FRAC>],
    bitrev: &[usize],
) {
    // 1. Bit-reverse permutation
    bitrev_permute(buffer, bitrev);

    // 2. Butterfly stages
    radix_2_dit_butterflies(buffer, twiddles);
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
