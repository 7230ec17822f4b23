#![no_std]

//! Bit-exact Q16.16 fixed-point FFT reference model.
//!
//! The [`fixed`] module reproduces the arithmetic of the hardware under test
//! (truncating conversion, multiply-then-shift, wrapping adds). The [`float`]
//! module is a plain floating point FFT used as an oracle, and [`emit`],
//! [`trace`] and [`results`] cover the data exchanged with the hardware side.

extern crate alloc;

// Enables the standard library for tests and the `std` feature,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod emit;
pub mod fixed;
pub mod float;
pub mod results;
pub mod trace;

pub use common::{FftError, FftProcess, SizeError};
pub use fixed::{ComplexFixed, CplxFft, Fixed, Q16_16, TwiddleTable, transform, transform_with};
