// src/trace.rs
//
// Decoding of hardware execution traces and comparison against the model.
// Missing or malformed trace data is never an error: callers get an empty
// result and decide what "no data" means for them.

use alloc::vec::Vec;
use num_complex::Complex32;

use crate::fixed::ComplexQ16;

/// Byte/word layout of a binary register dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordOrder {
    /// Plain little-endian 32-bit words.
    #[default]
    LittleEndian,
    /// Each 32-bit word stored big-endian.
    ByteReversed,
    /// Little-endian words, but each group of `lanes` words is stored in
    /// reverse order (vector register dumps, highest lane first).
    LaneReversed { lanes: usize },
}

/// Decodes a binary dump into 32-bit words.
///
/// Trailing bytes that do not form a full word are dropped. With
/// [`WordOrder::LaneReversed`], a trailing partial group is kept as is.
pub fn decode_words(bytes: &[u8], order: WordOrder) -> Vec<i32> {
    let rem = bytes.len() % 4;
    if rem != 0 {
        log::warn!("dump size {} bytes is not a multiple of 4, ignoring {} trailing bytes", bytes.len(), rem);
    }

    let chunks = bytes.chunks_exact(4).map(|c| [c[0], c[1], c[2], c[3]]);
    let mut words: Vec<i32> = match order {
        WordOrder::ByteReversed => chunks.map(i32::from_be_bytes).collect(),
        _ => chunks.map(i32::from_le_bytes).collect(),
    };

    if let WordOrder::LaneReversed { lanes } = order {
        if lanes > 1 {
            words.chunks_exact_mut(lanes).for_each(|group| group.reverse());
        }
    }

    if words.is_empty() {
        log::debug!("no data found in {}-byte dump", bytes.len());
    }
    words
}

/// Decodes a dump of interleaved (real, imaginary) words.
/// An unpaired trailing word is dropped.
pub fn decode_complex(bytes: &[u8], order: WordOrder) -> Vec<ComplexQ16> {
    pair_words(&decode_words(bytes, order))
}

/// Decodes a binary dump of IEEE-754 single precision words.
///
/// Byte and lane layout follow `order` exactly as in [`decode_words`]; only
/// the interpretation of each 32-bit pattern differs.
pub fn decode_f32_words(bytes: &[u8], order: WordOrder) -> Vec<f32> {
    decode_words(bytes, order)
        .into_iter()
        .map(|w| f32::from_bits(w as u32))
        .collect()
}

/// Decodes a dump of interleaved (real, imaginary) float32 words.
/// An unpaired trailing word is dropped.
pub fn decode_f32_complex(bytes: &[u8], order: WordOrder) -> Vec<Complex32> {
    let words = decode_f32_words(bytes, order);
    if words.len() % 2 != 0 {
        log::warn!("odd number of words ({}), dropping the last one", words.len());
    }
    words
        .chunks_exact(2)
        .map(|pair| Complex32::new(pair[0], pair[1]))
        .collect()
}

/// Encodes complex values as interleaved words, the inverse of [`decode_complex`].
pub fn encode_complex(values: &[ComplexQ16], order: WordOrder) -> Vec<u8> {
    let mut words: Vec<i32> = values.iter().flat_map(|c| [c.re.to_bits(), c.im.to_bits()]).collect();
    if let WordOrder::LaneReversed { lanes } = order {
        if lanes > 1 {
            words.chunks_exact_mut(lanes).for_each(|group| group.reverse());
        }
    }
    words
        .iter()
        .flat_map(|w| match order {
            WordOrder::ByteReversed => w.to_be_bytes(),
            _ => w.to_le_bytes(),
        })
        .collect()
}

/// Groups a flat word sequence into (real, imaginary) pairs.
pub fn pair_words(words: &[i32]) -> Vec<ComplexQ16> {
    if words.len() % 2 != 0 {
        log::warn!("odd number of words ({}), dropping the last one", words.len());
    }
    words
        .chunks_exact(2)
        .map(|pair| ComplexQ16::from_bits(pair[0], pair[1]))
        .collect()
}

/// Which tokens of a log line are read as hex words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexSyntax {
    /// Only `0x`-prefixed tokens with 1 to 8 hex digits.
    #[default]
    Prefixed,
    /// Also bare tokens of exactly 8 hex digits. Decimal counters of that
    /// width are indistinguishable from data and will be picked up too.
    PrefixedOrBare,
}

/// Collects 32-bit hex words from every line of `text` that contains `marker`.
///
/// Punctuation around tokens is ignored. An empty marker matches every line.
pub fn extract_hex_words(text: &str, marker: &str, syntax: HexSyntax) -> Vec<i32> {
    let words: Vec<i32> = text
        .lines()
        .filter(|line| line.contains(marker))
        .map(|line| match line.find(marker) {
            Some(at) if !marker.is_empty() => &line[at + marker.len()..],
            _ => line,
        })
        .flat_map(|rest| {
            rest.split(|c: char| c.is_whitespace() || matches!(c, ',' | ':' | ';' | '=' | '[' | ']' | '(' | ')'))
                .filter_map(move |token| parse_hex_word(token, syntax))
        })
        .collect();

    if words.is_empty() {
        log::debug!("no data found for marker {:?}", marker);
    }
    words
}

fn parse_hex_word(token: &str, syntax: HexSyntax) -> Option<i32> {
    let digits = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(d) if (1..=8).contains(&d.len()) => d,
        Some(_) => return None,
        None if syntax == HexSyntax::PrefixedOrBare && token.len() == 8 => token,
        None => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(|w| w as i32)
}

/// One bin whose difference exceeded the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinMismatch {
    pub bin: usize,
    pub expected: ComplexQ16,
    pub observed: ComplexQ16,
    /// Largest of the absolute real and imaginary differences, in LSBs.
    pub error: u32,
}

/// Outcome of aligning a trace with the model output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Comparison {
    /// Number of bins present in both sequences.
    pub compared: usize,
    pub expected_len: usize,
    pub observed_len: usize,
    /// Largest per-bin error seen, in LSBs.
    pub max_error: u32,
    pub mismatches: Vec<BinMismatch>,
}

impl Comparison {
    /// True if at least one bin was compared, lengths agree and every bin
    /// is within tolerance.
    pub fn matches(&self) -> bool {
        self.compared > 0 && self.expected_len == self.observed_len && self.mismatches.is_empty()
    }
}

/// Compares bin by bin over the common prefix of both sequences.
/// Errors are computed in 64 bits so that wrapped values are not hidden.
pub fn compare(expected: &[ComplexQ16], observed: &[ComplexQ16], tolerance: u32) -> Comparison {
    let mut result = Comparison {
        compared: expected.len().min(observed.len()),
        expected_len: expected.len(),
        observed_len: observed.len(),
        ..Comparison::default()
    };

    for (bin, (&e, &o)) in expected.iter().zip(observed).enumerate() {
        let d_re = (e.re.to_bits() as i64 - o.re.to_bits() as i64).unsigned_abs();
        let d_im = (e.im.to_bits() as i64 - o.im.to_bits() as i64).unsigned_abs();
        let error = d_re.max(d_im).min(u32::MAX as u64) as u32;
        result.max_error = result.max_error.max(error);
        if error > tolerance {
            result.mismatches.push(BinMismatch { bin, expected: e, observed: o, error });
        }
    }

    if result.expected_len != result.observed_len {
        log::warn!(
            "trace length {} differs from model length {}",
            result.observed_len,
            result.expected_len
        );
    }
    result
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
