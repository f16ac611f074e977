//! Tests for the rotating sentinel

use numeric_testkit::InitialValue;
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn test_basic() {
    let sentinel = InitialValue::new();
    let mut last = sentinel.next();
    for _ in 0..1000 {
        let val = sentinel.next();
        assert!(val >= 1);
        assert_ne!(last, val);
        last = val;
    }
}

#[test]
fn test_fill_detects_zeroing_assumption() {
    // Adds into its output instead of overwriting it.
    fn scale_buggy(input: &[f64], output: &mut [f64]) {
        for (out, &x) in output.iter_mut().zip(input) {
            *out += 2.0 * x;
        }
    }

    let sentinel = InitialValue::new();
    let input = [1.0, 2.0, 3.0];

    let mut first = vec![0.0; 3];
    sentinel.fill(&mut first);
    scale_buggy(&input, &mut first);

    let mut second = vec![0.0; 3];
    sentinel.fill(&mut second);
    scale_buggy(&input, &mut second);

    assert_ne!(first, second, "sentinel should expose the zeroing assumption");
}

#[test]
fn test_shared_across_threads() {
    let sentinel = Arc::new(InitialValue::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sentinel = Arc::clone(&sentinel);
            thread::spawn(move || (0..255).map(|_| sentinel.next()).collect::<Vec<_>>())
        })
        .collect();

    let mut counts = [0usize; 256];
    for handle in handles {
        for v in handle.join().unwrap() {
            counts[v as usize] += 1;
        }
    }

    // 4 * 255 draws cover the rotation exactly four times
    assert_eq!(counts[0], 0);
    assert!(counts[1..].iter().all(|&c| c == 4));
}

#[test]
fn test_full_rotation_is_a_permutation() {
    let sentinel = InitialValue::new();
    let seen: HashSet<u8> = (0..255).map(|_| sentinel.next()).collect();
    assert_eq!(seen.len(), 255);
    assert!(!seen.contains(&0));
}

proptest! {
    #[test]
    fn prop_never_zero_never_repeats(skip in 0usize..2000) {
        let sentinel = InitialValue::new();
        for _ in 0..skip {
            sentinel.next();
        }
        let a = sentinel.next();
        let b = sentinel.next();
        prop_assert!(a != 0 && b != 0);
        prop_assert_ne!(a, b);
    }
}
