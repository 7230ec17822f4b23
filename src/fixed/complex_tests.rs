use super::*;
use crate::fixed::signal::{join, split};
use proptest::prelude::*;
use std::vec;

fn zeros(n: usize) -> Vec<i32> {
    vec![0; n]
}

#[test]
fn test_transform_rejects_non_power_of_two() {
    for n in [0, 3, 1000] {
        assert_eq!(
            transform(&zeros(n), &zeros(n), n),
            Err(FftError::InvalidSize(SizeError::NotPowerOfTwo { n }))
        );
    }
}

#[test]
fn test_transform_accepts_power_of_two() {
    for n in [1, 2, 4, 1024] {
        let (re, im) = transform(&zeros(n), &zeros(n), n).unwrap();
        assert_eq!(re.len(), n);
        assert_eq!(im.len(), n);
    }
}

#[test]
fn test_transform_rejects_length_mismatch() {
    assert_eq!(
        transform(&zeros(8), &zeros(4), 8),
        Err(FftError::InvalidSize(SizeError::LengthMismatch {
            n: 8,
            real_len: 8,
            imag_len: 4
        }))
    );
    assert!(transform(&zeros(4), &zeros(4), 8).is_err());
}

#[test]
fn test_transform_with_rejects_foreign_table() {
    let table = TwiddleTable::generate(16).unwrap();
    assert_eq!(
        transform_with(&zeros(8), &zeros(8), 8, &table),
        Err(FftError::InvalidSize(SizeError::TableMismatch { n: 8, table_len: 16 }))
    );
}

#[test]
fn test_transform_with_matches_transform() {
    let n = 32;
    let table = TwiddleTable::generate(n).unwrap();
    let re: Vec<i32> = (0..n as i32).map(|i| (i - 7) * 4099).collect();
    let im: Vec<i32> = (0..n as i32).map(|i| (i * i) * 211 - 30_000).collect();
    assert_eq!(transform_with(&re, &im, n, &table), transform(&re, &im, n));
}

#[test]
fn test_single_point_is_identity() {
    assert_eq!(transform(&[12_345], &[-6], 1), Ok((vec![12_345], vec![-6])));
}

#[test]
fn test_two_point_sum_and_difference() {
    let (re, im) = transform(&[3 << 16, 1 << 16], &[0, 1 << 15], 2).unwrap();
    assert_eq!(re, [4 << 16, 2 << 16]);
    assert_eq!(im, [1 << 15, -(1 << 15)]);
}

#[test]
fn test_engine_rejects_wrong_buffer() {
    let table: TwiddleTable = TwiddleTable::generate(8).unwrap();
    let fft = CplxFft::new(&table).unwrap();
    assert_eq!(fft.len(), 8);
    let mut buffer = vec![ComplexQ16::ZERO; 4];
    assert!(fft.process(&mut buffer).is_err());
}

#[test]
fn test_engine_through_trait_object() {
    let table: TwiddleTable = TwiddleTable::generate(4).unwrap();
    let fft = CplxFft::new(&table).unwrap();
    let engine: &dyn FftProcess<ComplexQ16> = &fft;

    let mut buffer = vec![
        ComplexQ16::from_bits(1 << 16, 0),
        ComplexQ16::from_bits(2 << 16, 0),
        ComplexQ16::from_bits(3 << 16, 0),
        ComplexQ16::from_bits(4 << 16, 0),
    ];
    engine.process(&mut buffer).unwrap();
    let (re, im) = split(&buffer);
    assert_eq!(re, [10 << 16, -2 << 16, -2 << 16, -2 << 16]);
    assert_eq!(im, [0, 2 << 16, 0, -2 << 16]);
}

proptest! {
    #[test]
    fn prop_in_place_matches_out_of_place(
        width in 0u32..=8,
        ref re in proptest::collection::vec(-(1i32 << 20)..(1 << 20), 256),
        ref im in proptest::collection::vec(-(1i32 << 20)..(1 << 20), 256),
    ) {
        let n = 1usize << width;
        let (re, im) = (&re[..n], &im[..n]);

        let table: TwiddleTable = TwiddleTable::generate(n).unwrap();
        let fft = CplxFft::new(&table).unwrap();
        let mut buffer: Vec<ComplexQ16> = join(re, im);
        fft.process(&mut buffer).unwrap();

        let expected = transform(re, im, n).unwrap();
        prop_assert_eq!(split(&buffer), expected);
    }
}
