// src/results.rs
//
// Text format of a reference run: a three line `#` header followed by one
// `index,real,imag` line per bin, values as raw Q16.16 integers.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::fixed::ComplexQ16;

/// Bin indices at or above this are treated as malformed. Far beyond any
/// FFT the hardware runs, and bounds the allocation to 64 Ki bins.
pub const MAX_BINS: usize = 1 << 16;

pub fn write_results(bins: &[ComplexQ16]) -> String {
    let n = bins.len();
    let mut out = String::with_capacity(32 * (n + 3));

    // Writing into a String cannot fail.
    let _ = writeln!(out, "# {}-point FFT Results (Q16.16 fixed-point)", n);
    let _ = writeln!(out, "# Format: Index, Real, Imag");
    let _ = writeln!(out, "# FFT Size: {}", n);
    for (i, bin) in bins.iter().enumerate() {
        let (re, im) = bin.to_bits();
        let _ = writeln!(out, "{},{},{}", i, re, im);
    }
    out
}

/// Reads a results file back. Comment, blank and malformed lines are
/// skipped; bins are placed by their index and missing bins are zero.
pub fn parse_results(text: &str) -> Vec<ComplexQ16> {
    let mut entries: Vec<(usize, ComplexQ16)> = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line).filter(|(i, _)| *i < MAX_BINS) {
            Some(entry) => entries.push(entry),
            None => log::debug!("skipping malformed results line {:?}", line),
        }
    }

    let len = entries.iter().map(|&(i, _)| i + 1).max().unwrap_or(0);
    let mut bins = vec![ComplexQ16::ZERO; len];
    for (index, value) in entries {
        bins[index] = value;
    }
    bins
}

fn parse_line(line: &str) -> Option<(usize, ComplexQ16)> {
    let mut fields = line.split(',').map(str::trim);
    let index = fields.next()?.parse().ok()?;
    let re = fields.next()?.parse().ok()?;
    let im = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((index, ComplexQ16::from_bits(re, im)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_write_format() {
        let bins = [ComplexQ16::from_bits(67_108_864, 0), ComplexQ16::from_bits(-3, 12)];
        assert_eq!(
            write_results(&bins),
            "# 2-point FFT Results (Q16.16 fixed-point)\n\
             # Format: Index, Real, Imag\n\
             # FFT Size: 2\n\
             0,67108864,0\n\
             1,-3,12\n"
        );
    }

    #[test]
    fn test_parse_written_results() {
        let bins: Vec<ComplexQ16> = (0..16).map(|i| ComplexQ16::from_bits(i * 1000 - 7, -i)).collect();
        assert_eq!(parse_results(&write_results(&bins)), bins);
    }

    #[test]
    fn test_parse_skips_garbage() {
        let text = "# header\n\n0,1,2\nnot,a,line\n2, 5 , -6\n3,1\n4,1,2,3\n99999999,1,1\n";
        let bins = parse_results(text);
        assert_eq!(bins.len(), 3);
        assert_eq!(bins[0].to_bits(), (1, 2));
        assert_eq!(bins[1], ComplexQ16::ZERO);
        assert_eq!(bins[2].to_bits(), (5, -6));
    }

    #[test]
    fn test_parse_rejects_huge_index() {
        let text = "0,7,8\n16777215,0,0\n65536,1,1\n";
        let bins = parse_results(text);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].to_bits(), (7, 8));

        let last = format!("{},1,2\n", MAX_BINS - 1);
        let bins = parse_results(&last);
        assert_eq!(bins.len(), MAX_BINS);
        assert_eq!(bins[MAX_BINS - 1].to_bits(), (1, 2));
    }

    #[test]
    fn test_parse_nothing() {
        assert!(parse_results("").is_empty());
        assert!(parse_results("# only a header\n").is_empty());
    }
}
