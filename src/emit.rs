// src/emit.rs
//
// Assembly data sections for the hardware kernel's twiddle tables.

use alloc::string::String;
use core::f64::consts::PI;
use core::fmt::Write;

use crate::common::sin_cos;
use crate::fixed::TwiddleTable;

/// Which component of the twiddle table to serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwiddlePart {
    /// `cos(2πk/N)`, label `twiddle_real`.
    Real,
    /// `-sin(2πk/N)`, label `twiddle_imag`.
    Imag,
}

impl TwiddlePart {
    pub fn label(self) -> &'static str {
        match self {
            TwiddlePart::Real => "twiddle_real",
            TwiddlePart::Imag => "twiddle_imag",
        }
    }

    /// Conventional output file name for this part.
    pub fn file_name(self) -> &'static str {
        match self {
            TwiddlePart::Real => "twiddle_real.s",
            TwiddlePart::Imag => "twiddle_imag.s",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            TwiddlePart::Real => "real part",
            TwiddlePart::Imag => "imaginary part",
        }
    }
}

/// How each `.word` operand is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordFormat {
    /// Signed decimal, right-aligned to six columns.
    #[default]
    Decimal,
    /// Two's complement bit pattern as `0x%08x`.
    Hex,
}

/// Serializes one component of `table` as an assembly `.data` section.
///
/// Values are taken from the table itself, so the hardware preloads exactly
/// the constants the reference model multiplies with. `-sin(2πk/N)` and
/// `sin(-2πk/N)` are the same double, hence the same truncated word.
pub fn emit_twiddle_asm(table: &TwiddleTable, part: TwiddlePart, format: WordFormat) -> String {
    let n = table.n();
    let mut out = String::with_capacity(64 * (n + 8));

    // Writing into a String cannot fail.
    let _ = writeln!(out, "# Twiddle factor table ({}) for {}-point FFT", part.describe(), n);
    let _ = writeln!(out, "# Generated by fixfft");
    let _ = writeln!(out, "# Using Q16.16 fixed-point format");
    let _ = writeln!(out, ".section .data");
    let _ = writeln!(out, ".align 4");
    let _ = writeln!(out, "{}:", part.label());

    for (k, w) in table.iter().enumerate() {
        let angle = 2.0 * PI * (k as f64) / (n as f64);
        let (sin, cos) = sin_cos(angle);
        let (word, exact, what) = match part {
            TwiddlePart::Real => (w.re.to_bits(), cos, "cos"),
            TwiddlePart::Imag => (w.im.to_bits(), -sin, "-sin"),
        };

        let _ = match format {
            WordFormat::Decimal => write!(out, "    .word {:6}", word),
            WordFormat::Hex => write!(out, "    .word 0x{:08x}", word as u32),
        };
        let _ = writeln!(out, "  # W_{}^{}: {}(2π*{}/{}) = {:.6}", n, k, what, k, n, exact);
    }

    out
}
