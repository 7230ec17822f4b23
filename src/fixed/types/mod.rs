mod fixed;
mod fixed_complex;

pub use fixed::Fixed;
pub use fixed_complex::ComplexFixed;

/// Fractional bits of the Q16.16 format used by the hardware under test.
pub const FRAC_BITS: u32 = 16;

/// Q16.16: 16 integer bits, 16 fractional bits, scale 2^16.
#[allow(non_camel_case_types)]
pub type Q16_16 = Fixed<FRAC_BITS>;

/// Complex Q16.16 value.
pub type ComplexQ16 = ComplexFixed<FRAC_BITS>;
