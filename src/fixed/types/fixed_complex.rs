use super::fixed::Fixed;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComplexFixed<const FRAC: u32> {
    pub re: Fixed<FRAC>,
    pub im: Fixed<FRAC>,
}

impl<const FRAC: u32> ComplexFixed<FRAC> {
    pub const ZERO: Self = Self { re: Fixed::ZERO, im: Fixed::ZERO };

    pub const fn new(re: Fixed<FRAC>, im: Fixed<FRAC>) -> Self {
        Self { re, im }
    }

    /// Builds a value from raw (real, imaginary) bit patterns.
    #[inline]
    pub const fn from_bits(re: i32, im: i32) -> Self {
        Self::new(Fixed::from_bits(re), Fixed::from_bits(im))
    }

    #[inline]
    pub fn from_f64(re: f64, im: f64) -> Self {
        Self::new(Fixed::from_f64(re), Fixed::from_f64(im))
    }

    #[inline]
    pub const fn to_bits(self) -> (i32, i32) {
        (self.re.to_bits(), self.im.to_bits())
    }

    #[inline]
    pub fn to_f64(self) -> (f64, f64) {
        (self.re.to_f64(), self.im.to_f64())
    }
}

use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

impl<const FRAC: u32> Add for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        ComplexFixed {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<const FRAC: u32> AddAssign for ComplexFixed<FRAC> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<const FRAC: u32> Sub for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        ComplexFixed {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<const FRAC: u32> SubAssign for ComplexFixed<FRAC> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

// Four truncating real multiplies; only the products are truncated,
// the final add/sub runs at full 32-bit width.
impl<const FRAC: u32> Mul for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        // (ac - bd)
        let re = (self.re * rhs.re) - (self.im * rhs.im);
        // (ad + bc)
        let im = (self.re * rhs.im) + (self.im * rhs.re);

        ComplexFixed { re, im }
    }
}
