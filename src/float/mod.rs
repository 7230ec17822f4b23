//! Floating point radix-2 FFT used as the comparison oracle for the
//! fixed-point model.

pub mod complex;
mod core;

pub use crate::common::{FftError, FftProcess};
pub use complex::ReferenceFft;
pub use num_complex::Complex64;
