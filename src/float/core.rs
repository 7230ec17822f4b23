// src/float/core.rs

use crate::common::sin_cos;
use crate::fixed::BitReversal;
use core::f64::consts::PI;
use num_complex::Complex64;

/// Computes the rotation factors (Twiddle Factors) for an FFT of size N.
pub(crate) fn precompute_twiddles(twiddles: &mut [Complex64], n: usize) {
    // Only N/2 factors are needed for Radix-2
    for j in 0..(n / 2) {
        let angle = -2.0 * PI * (j as f64) / (n as f64);
        let (sin, cos) = sin_cos(angle);
        twiddles[j] = Complex64::new(cos, sin);
    }
}

/// Unscaled forward radix-2 DIT FFT in double precision.
/// `buffer` must be as long as `bitrev`.
pub(crate) fn radix_2_dit_fft_core(buffer: &mut [Complex64], twiddles: &[Complex64], bitrev: &BitReversal) {
    let n = buffer.len();

    // 1. Bit-reverse
    bitrev.permute_in_place(buffer);

    // 2. Butterfly
    let mut stride = 1;
    let mut tw_index = n >> 1;

    while stride < n {
        let jmax = n - stride;

        for j in (0..jmax).step_by(stride << 1) {
            for i in 0..stride {
                let w = twiddles[i * tw_index];

                let index = j + i;
                let a = buffer[index];
                let t = buffer[index + stride] * w;

                buffer[index] = a + t;
                buffer[index + stride] = a - t;
            }
        }
        stride <<= 1;
        tw_index >>= 1;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
