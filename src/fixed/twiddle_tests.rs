use super::*;
use crate::common::SizeError;

#[test]
fn test_generate_rejects_non_power_of_two() {
    for n in [0, 3, 6, 1000] {
        assert_eq!(
            TwiddleTable::<16>::generate(n),
            Err(FftError::InvalidSize(SizeError::NotPowerOfTwo { n }))
        );
    }
}

#[test]
fn test_generate_is_deterministic() {
    for n in [1, 2, 8, 1024] {
        let a = TwiddleTable::<16>::generate(n).unwrap();
        let b = TwiddleTable::<16>::generate(n).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), n);
        assert_eq!(a.n(), n);
    }
}

// Same trig routines as the library only when std is enabled.
#[cfg(feature = "std")]
#[test]
fn test_entries_follow_truncating_conversion() {
    use crate::fixed::math::to_fixed;

    let n = 1024;
    let table = TwiddleTable::<16>::generate(n).unwrap();
    for (k, w) in table.iter().enumerate() {
        let angle = -2.0 * core::f64::consts::PI * k as f64 / n as f64;
        assert_eq!(w.to_bits(), (to_fixed(angle.cos()), to_fixed(angle.sin())), "k = {}", k);
    }
}

#[test]
fn test_quarter_points_are_exact() {
    let table = TwiddleTable::<16>::generate(1024).unwrap();
    assert_eq!(table.get(0).to_bits(), (65536, 0));
    assert_eq!(table.get(256).to_bits(), (0, -65536));
    assert_eq!(table.get(512).to_bits(), (-65536, 0));
    assert_eq!(table.get(768).to_bits(), (0, 65536));
}

#[test]
fn test_get_wraps_modulo_n() {
    let table = TwiddleTable::<16>::generate(16).unwrap();
    for k in 0..16 {
        assert_eq!(table.get(k + 16), table.get(k));
        assert_eq!(table.get(k + 48), table.as_slice()[k]);
    }
}

#[test]
fn test_second_half_is_negated_first_half() {
    // W^(k + N/2) = -W^k; truncation toward zero is symmetric, so the
    // fixed-point entries agree up to one LSB of float noise.
    let n = 256;
    let table = TwiddleTable::<16>::generate(n).unwrap();
    for k in 0..n / 2 {
        let (re, im) = table.get(k).to_bits();
        let (re2, im2) = table.get(k + n / 2).to_bits();
        assert!((re + re2).abs() <= 1, "k = {}", k);
        assert!((im + im2).abs() <= 1, "k = {}", k);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_cache_publishes_one_table_per_size() {
    let cache = TwiddleCache::<16>::new();
    assert!(cache.is_empty());

    let a = cache.get_or_generate(64).unwrap();
    let b = cache.get_or_generate(64).unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    assert_eq!(*a, TwiddleTable::<16>::generate(64).unwrap());

    cache.get_or_generate(128).unwrap();
    assert_eq!(cache.len(), 2);

    assert!(cache.get_or_generate(100).is_err());
    assert_eq!(cache.len(), 2);
}

#[cfg(feature = "std")]
#[test]
fn test_cache_shared_across_threads() {
    let cache = std::sync::Arc::new(TwiddleCache::<16>::new());
    let handles: std::vec::Vec<_> = (0..4)
        .map(|_| {
            let cache = std::sync::Arc::clone(&cache);
            std::thread::spawn(move || cache.get_or_generate(512).unwrap())
        })
        .collect();

    let tables: std::vec::Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for t in &tables[1..] {
        assert!(std::sync::Arc::ptr_eq(&tables[0], t));
    }
}
