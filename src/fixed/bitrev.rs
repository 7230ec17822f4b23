// src/fixed/bitrev.rs

use alloc::vec;
use alloc::vec::Vec;

use super::core::{bitrev_permute, precompute_bitrev};
use crate::common::{FftError, check_power_of_two};

/// Reverses the low `width` bits of `i`. Bits above `width` are ignored.
#[inline]
pub fn reverse_bits(i: usize, width: u32) -> usize {
    if width == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS - width)
}

/// Number of butterfly stages for an FFT of size `n`.
pub fn log2_size(n: usize) -> Result<u32, FftError> {
    check_power_of_two(n)?;
    Ok(n.trailing_zeros())
}

/// Precomputed decimation-in-time input permutation for one size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitReversal {
    table: Vec<usize>,
    width: u32,
}

impl BitReversal {
    pub fn new(n: usize) -> Result<Self, FftError> {
        let width = log2_size(n)?;
        let mut table = vec![0; n];
        precompute_bitrev(&mut table, n);
        Ok(Self { table, width })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// log2 of the permutation length.
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn index(&self, i: usize) -> usize {
        self.table[i]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }

    /// Out-of-place relabelling: `out[rev(i)] = input[i]`.
    ///
    /// # Panics
    /// If `input.len()` differs from the permutation length.
    pub fn permute<T: Copy>(&self, input: &[T]) -> Vec<T> {
        assert_eq!(input.len(), self.len(), "permutation length mismatch");
        let mut out = input.to_vec();
        for (i, &value) in input.iter().enumerate() {
            out[self.table[i]] = value;
        }
        out
    }

    /// In-place reordering, swapping each pair `(i, rev(i))` with `i < rev(i)`
    /// exactly once so no index is processed twice.
    ///
    /// # Panics
    /// If `buffer.len()` differs from the permutation length.
    pub fn permute_in_place<T>(&self, buffer: &mut [T]) {
        assert_eq!(buffer.len(), self.len(), "permutation length mismatch");
        bitrev_permute(buffer, &self.table);
    }
}
