pub mod types;
mod core;
pub mod bitrev;
pub mod complex;
pub mod math;
pub mod signal;
pub mod twiddle;

pub use bitrev::{BitReversal, reverse_bits};
pub use complex::{CplxFft, transform, transform_with};
pub use twiddle::TwiddleTable;
#[cfg(feature = "std")]
pub use twiddle::TwiddleCache;
pub use types::{ComplexFixed, ComplexQ16, FRAC_BITS, Fixed, Q16_16};
