use super::*;
use proptest::prelude::*;

const LSB: f64 = 1.0 / 65536.0;

#[test]
fn test_to_fixed_known_values() {
    assert_eq!(to_fixed(1.0), 65536);
    assert_eq!(to_fixed(-1.0), -65536);
    assert_eq!(to_fixed(0.5), 32768);
    assert_eq!(to_fixed(0.0), 0);
    // cos(2π·160/1024) = 0.555570..., truncated in both directions
    assert_eq!(to_fixed(0.555_570_233_019_602_2), 36409);
    assert_eq!(to_fixed(-0.555_570_233_019_602_2), -36409);
}

#[test]
fn test_to_real_is_exact() {
    assert_eq!(to_real(65536), 1.0);
    assert_eq!(to_real(-32768), -0.5);
    assert_eq!(to_real(1), LSB);
    assert_eq!(to_real(i32::MIN), -32768.0);
}

#[test]
fn test_multiply_identity_and_zero() {
    assert_eq!(multiply(123_456, SCALE), 123_456);
    assert_eq!(multiply(-123_456, SCALE), -123_456);
    assert_eq!(multiply(123_456, 0), 0);
}

#[test]
fn test_multiply_uses_wide_intermediate() {
    // 100.0 * 200.0: the 32-bit product would overflow before the shift
    let a = to_fixed(100.0);
    let b = to_fixed(200.0);
    assert_eq!(multiply(a, b), to_fixed(20_000.0));
}

#[test]
fn test_complex_multiply_matches_component_formula() {
    let (a_re, a_im) = (to_fixed(0.75), to_fixed(-1.25));
    let (b_re, b_im) = (to_fixed(0.707_106_781), to_fixed(-0.707_106_781));
    let (re, im) = complex_multiply(a_re, a_im, b_re, b_im);
    assert_eq!(re, multiply(a_re, b_re) - multiply(a_im, b_im));
    assert_eq!(im, multiply(a_re, b_im) + multiply(a_im, b_re));
}

#[test]
fn test_complex_multiply_outer_sum_wraps() {
    // Both products are i32::MAX; their sum wraps to -2.
    let big = i32::MAX;
    let (re, im) = complex_multiply(big, big, SCALE, SCALE);
    assert_eq!(re, 0);
    assert_eq!(im, -2);
}

proptest! {
    #[test]
    fn prop_round_trip_within_one_lsb(x in -32767.0f64..32767.0) {
        let back = to_real(to_fixed(x));
        prop_assert!((back - x).abs() < LSB);
        // Truncation toward zero never grows the magnitude.
        prop_assert!(back.abs() <= x.abs());
    }

    #[test]
    fn prop_multiply_is_floor_of_exact_product(a in -(1i32 << 24)..(1i32 << 24), b in -(1i32 << 22)..(1i32 << 22)) {
        let exact = a as i64 * b as i64;
        prop_assert_eq!(multiply(a, b) as i64, exact.div_euclid(1 << 16));
    }

    #[test]
    fn prop_multiply_truncates_nonnegative_toward_zero(a in 0i32..(1 << 24), b in 0i32..(1 << 22)) {
        let exact = a as i64 * b as i64;
        let got = (multiply(a, b) as i64) << 16;
        prop_assert!(got <= exact);
        prop_assert!(exact - got < 1 << 16);
    }

    #[test]
    fn prop_multiply_approximates_real_product(a in -100.0f64..100.0, b in -100.0f64..100.0) {
        let got = to_real(multiply(to_fixed(a), to_fixed(b)));
        let bound = (a.abs() + b.abs() + 2.0) * LSB;
        prop_assert!((got - a * b).abs() <= bound, "{} * {} = {}, got {}", a, b, a * b, got);
    }
}
