use alloc::vec;
use alloc::vec::Vec;

use super::bitrev::BitReversal;
use super::core::{radix_2_dit_butterflies, radix_2_dit_fft_core};
use super::twiddle::TwiddleTable;
use super::types::{ComplexFixed, ComplexQ16, FRAC_BITS};
use crate::common::{FftError, FftProcess, SizeError, check_power_of_two};

/// Fixed-point FFT engine bound to a caller-owned twiddle table.
///
/// The table is only read, so one table can drive any number of engines,
/// on any number of threads. The bit-reversal table is owned per engine.
pub struct CplxFft<'a, const FRAC: u32 = FRAC_BITS> {
    twiddles: &'a TwiddleTable<FRAC>,
    bitrev: BitReversal,
}

impl<'a, const FRAC: u32> CplxFft<'a, FRAC> {
    /// Builds an engine for the size the table was generated for.
    pub fn new(twiddles: &'a TwiddleTable<FRAC>) -> Result<Self, FftError> {
        let bitrev = BitReversal::new(twiddles.n())?;
        Ok(Self { twiddles, bitrev })
    }

    /// FFT size.
    pub fn len(&self) -> usize {
        self.twiddles.n()
    }

    pub fn is_empty(&self) -> bool {
        self.twiddles.is_empty()
    }

    /// Executes the FFT in-place. Output is in natural bin order.
    pub fn process(&self, buffer: &mut [ComplexFixed<FRAC>]) -> Result<(), FftError> {
        let n = self.len();
        if buffer.len() != n {
            return Err(FftError::InvalidSize(SizeError::LengthMismatch {
                n,
                real_len: buffer.len(),
                imag_len: buffer.len(),
            }));
        }

        log::debug!("fixed-point FFT: n = {}, {} stages", n, self.bitrev.width());
        radix_2_dit_fft_core(buffer, self.twiddles.as_slice(), self.bitrev.as_slice());
        Ok(())
    }
}

impl<'a, const FRAC: u32> FftProcess<ComplexFixed<FRAC>> for CplxFft<'a, FRAC> {
    fn process(&self, buffer: &mut [ComplexFixed<FRAC>]) -> Result<(), FftError> {
        CplxFft::process(self, buffer)
    }
}

/// Q16.16 transform of separate real/imaginary sequences of length `n`.
///
/// Generates the twiddle table for `n`; use [`transform_with`] to reuse one.
pub fn transform(real_in: &[i32], imag_in: &[i32], n: usize) -> Result<(Vec<i32>, Vec<i32>), FftError> {
    check_lengths(real_in, imag_in, n)?;
    let table = TwiddleTable::generate(n)?;
    run(&table, real_in, imag_in)
}

/// Same as [`transform`], driven by a caller-supplied, read-only table.
///
/// The table must have been generated for `n`.
pub fn transform_with(
    real_in: &[i32],
    imag_in: &[i32],
    n: usize,
    table: &TwiddleTable,
) -> Result<(Vec<i32>, Vec<i32>), FftError> {
    check_lengths(real_in, imag_in, n)?;
    run(table, real_in, imag_in)
}

fn check_lengths(real_in: &[i32], imag_in: &[i32], n: usize) -> Result<(), FftError> {
    check_power_of_two(n)?;
    if real_in.len() != n || imag_in.len() != n {
        return Err(FftError::InvalidSize(SizeError::LengthMismatch {
            n,
            real_len: real_in.len(),
            imag_len: imag_in.len(),
        }));
    }
    Ok(())
}

fn run(table: &TwiddleTable, real_in: &[i32], imag_in: &[i32]) -> Result<(Vec<i32>, Vec<i32>), FftError> {
    let n = real_in.len();
    if table.n() != n {
        return Err(FftError::InvalidSize(SizeError::TableMismatch {
            n,
            table_len: table.n(),
        }));
    }
    let bitrev = BitReversal::new(n)?;
    log::debug!("fixed-point FFT: n = {}, {} stages", n, bitrev.width());

    // Working buffer filled in bit-reversed order: y[rev(i)] = x[i]
    let mut y = vec![ComplexQ16::ZERO; n];
    for (i, (&re, &im)) in real_in.iter().zip(imag_in).enumerate() {
        y[bitrev.index(i)] = ComplexQ16::from_bits(re, im);
    }

    radix_2_dit_butterflies(&mut y, table.as_slice());

    Ok(y.iter().map(|c| c.to_bits()).unzip())
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
