use alloc::vec;
use alloc::vec::Vec;

use super::core::{precompute_twiddles, radix_2_dit_fft_core};
use crate::common::{FftError, FftProcess, SizeError};
use crate::fixed::BitReversal;
use crate::fixed::types::ComplexFixed;
use num_complex::Complex64;

/// Double precision FFT with owned tables.
///
/// Twiddles are not quantized, so the difference between this and the
/// fixed-point engine on the same input is the fixed-point error.
#[derive(Clone, Debug)]
pub struct ReferenceFft {
    twiddles: Vec<Complex64>,
    bitrev: BitReversal,
}

impl ReferenceFft {
    pub fn new(n: usize) -> Result<Self, FftError> {
        let bitrev = BitReversal::new(n)?;
        let mut twiddles = vec![Complex64::default(); n / 2];
        precompute_twiddles(&mut twiddles, n);
        Ok(Self { twiddles, bitrev })
    }

    pub fn len(&self) -> usize {
        self.bitrev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bitrev.is_empty()
    }

    /// Executes the FFT in-place.
    pub fn process(&self, buffer: &mut [Complex64]) -> Result<(), FftError> {
        if buffer.len() != self.len() {
            return Err(FftError::InvalidSize(SizeError::LengthMismatch {
                n: self.len(),
                real_len: buffer.len(),
                imag_len: buffer.len(),
            }));
        }

        radix_2_dit_fft_core(buffer, &self.twiddles, &self.bitrev);
        Ok(())
    }

    /// Transforms the exact real values of fixed-point samples.
    pub fn process_fixed<const FRAC: u32>(&self, input: &[ComplexFixed<FRAC>]) -> Result<Vec<Complex64>, FftError> {
        let mut buffer: Vec<Complex64> = input
            .iter()
            .map(|c| {
                let (re, im) = c.to_f64();
                Complex64::new(re, im)
            })
            .collect();
        self.process(&mut buffer)?;
        Ok(buffer)
    }
}

impl FftProcess<Complex64> for ReferenceFft {
    fn process(&self, buffer: &mut [Complex64]) -> Result<(), FftError> {
        ReferenceFft::process(self, buffer)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
