// src/fixed/types/fixed.rs

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Generic fixed-point structure based on the number of fractional bits (FRAC).
/// The internal value is stored as a signed 32-bit integer.
///
/// Every operation wraps on overflow, exactly like the 32-bit registers of
/// the hardware this type models. Nothing saturates.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Fixed<const FRAC: u32>(i32);

impl<const FRAC: u32> Fixed<FRAC> {
    pub const ZERO: Self = Self(0);

    /// Scale factor 2^FRAC as a float.
    const SCALE: f64 = (1u64 << FRAC) as f64;

    /// Creates a Fixed from the raw integer value (without shift).
    #[inline]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Creates a Fixed from an integer, applying the necessary shift.
    /// E.g.: Fixed::<16>::from_int(1) will result in internal value 65536.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self(value.wrapping_shl(FRAC))
    }

    /// Converts an f64 to Fixed, truncating toward zero.
    ///
    /// The scaled value is first truncated into 64 bits and then narrowed to
    /// 32 bits with two's complement wraparound, matching a C `(int)` cast of
    /// an in-range double on the target toolchain.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self((value * Self::SCALE) as i64 as i32)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    /// Lossless conversion back to a float: raw / 2^FRAC.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE
    }
}

impl<const FRAC: u32> Add for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl<const FRAC: u32> AddAssign for Fixed<FRAC> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const FRAC: u32> Sub for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl<const FRAC: u32> SubAssign for Fixed<FRAC> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const FRAC: u32> Neg for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

impl<const FRAC: u32> Mul for Fixed<FRAC> {
    type Output = Self;

    /// Full 64-bit product, then an arithmetic shift right by FRAC.
    /// The low FRAC bits are discarded (no rounding offset) and the result
    /// is narrowed back to 32 bits with wraparound.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let product = self.0 as i64 * rhs.0 as i64;
        Self((product >> FRAC) as i32)
    }
}

impl<const FRAC: u32> fmt::Display for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl<const FRAC: u32> fmt::Debug for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In Debug, show both the decimal value and the raw value in parentheses
        write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
    }
}
