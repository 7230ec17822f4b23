// src/fixed/twiddle.rs

use alloc::vec;
use alloc::vec::Vec;

use super::core::precompute_twiddles;
use super::types::{ComplexFixed, FRAC_BITS};
use crate::common::{FftError, check_power_of_two};

/// Immutable table of the N twiddle factors `exp(-2πik/N)` for one FFT size.
///
/// The full N entries are stored. The butterflies never read past N/2, but
/// the assembly kernel preloads the full-length table and the emitter
/// serializes it as is, so both sides agree entry for entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwiddleTable<const FRAC: u32 = FRAC_BITS> {
    factors: Vec<ComplexFixed<FRAC>>,
}

impl<const FRAC: u32> TwiddleTable<FRAC> {
    /// Generates the table for size `n`, which must be a positive power of two.
    pub fn generate(n: usize) -> Result<Self, FftError> {
        check_power_of_two(n)?;
        let mut factors = vec![ComplexFixed::ZERO; n];
        precompute_twiddles(&mut factors, n);
        log::debug!("generated {}-entry twiddle table (Q{})", n, FRAC);
        Ok(Self { factors })
    }

    /// The FFT size this table was generated for.
    pub fn n(&self) -> usize {
        self.factors.len()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Twiddle `W_N^k` for any `k`; indices wrap modulo N since `W^(k+N) = W^k`.
    #[inline]
    pub fn get(&self, k: usize) -> ComplexFixed<FRAC> {
        self.factors[k & (self.factors.len() - 1)]
    }

    pub fn as_slice(&self) -> &[ComplexFixed<FRAC>] {
        &self.factors
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ComplexFixed<FRAC>> {
        self.factors.iter()
    }
}

impl<'a, const FRAC: u32> IntoIterator for &'a TwiddleTable<FRAC> {
    type Item = &'a ComplexFixed<FRAC>;
    type IntoIter = core::slice::Iter<'a, ComplexFixed<FRAC>>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.iter()
    }
}

#[cfg(feature = "std")]
pub use cache::TwiddleCache;

#[cfg(feature = "std")]
mod cache {
    use super::TwiddleTable;
    use crate::common::FftError;
    use crate::fixed::types::FRAC_BITS;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex, PoisonError};

    /// Shared, build-once cache of twiddle tables keyed by FFT size.
    ///
    /// A table is generated while the lock is held and only then published,
    /// so readers never see a partially built table. Published tables are
    /// immutable and handed out as `Arc`s.
    #[derive(Debug, Default)]
    pub struct TwiddleCache<const FRAC: u32 = FRAC_BITS> {
        tables: Mutex<HashMap<usize, Arc<TwiddleTable<FRAC>>>>,
    }

    impl<const FRAC: u32> TwiddleCache<FRAC> {
        pub fn new() -> Self {
            Self {
                tables: Mutex::new(HashMap::new()),
            }
        }

        pub fn get_or_generate(&self, n: usize) -> Result<Arc<TwiddleTable<FRAC>>, FftError> {
            // Tables are only inserted fully built, a poisoned lock still holds valid data.
            let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(table) = tables.get(&n) {
                return Ok(Arc::clone(table));
            }
            let table = Arc::new(TwiddleTable::generate(n)?);
            tables.insert(n, Arc::clone(&table));
            Ok(table)
        }

        /// Number of distinct sizes cached so far.
        pub fn len(&self) -> usize {
            self.tables.lock().unwrap_or_else(PoisonError::into_inner).len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
