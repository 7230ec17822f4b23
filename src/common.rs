// src/common.rs

use core::fmt;

/// The ways a transform size can be rejected.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SizeError {
    NotPowerOfTwo { n: usize },
    LengthMismatch { n: usize, real_len: usize, imag_len: usize },
    TableMismatch { n: usize, table_len: usize },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    InvalidSize(SizeError),
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeError::NotPowerOfTwo { n } => {
                write!(f, "size {} is not a positive power of 2", n)
            }
            SizeError::LengthMismatch { n, real_len, imag_len } => write!(
                f,
                "buffer lengths (real {}, imag {}) do not match FFT size {}",
                real_len, imag_len, n
            ),
            SizeError::TableMismatch { n, table_len } => write!(
                f,
                "twiddle table built for size {} cannot drive an FFT of size {}",
                table_len, n
            ),
        }
    }
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidSize(reason) => write!(f, "invalid size: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Checks that `n` is a positive power of two.
pub(crate) fn check_power_of_two(n: usize) -> Result<(), FftError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::InvalidSize(SizeError::NotPowerOfTwo { n }))
    }
}

/// In-place forward transform over a buffer of `T`.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T]) -> Result<(), FftError>;
}

/// Helper for sin/cos that works with or without std.
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}
