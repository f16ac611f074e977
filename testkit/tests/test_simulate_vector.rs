//! Tests for simulate_vector
//!
//! Determinism is sacred: same seed and parameters MUST give the same vector.

use numeric_testkit::{fingerprint_values, simulate_vector, SimulationError, SimulationParameters};
use proptest::prelude::*;

fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    values
}

#[test]
fn test_dense_defaults() {
    let params = SimulationParameters::<f64>::default();
    let res = simulate_vector(100, &params).unwrap();

    assert_eq!(res.len(), 100);
    for &x in &res {
        assert!((-10.0..10.0).contains(&x), "value {} out of [-10, 10)", x);
    }

    // confirm that not all values are identical
    let res = sorted(res);
    assert_ne!(res.first(), res.last());
}

#[test]
fn test_dense_custom_bounds() {
    let params = SimulationParameters::<f64> {
        lower: 1.0,
        upper: 6.6,
        seed: 42,
        ..Default::default()
    };
    let res = simulate_vector(100, &params).unwrap();

    assert_eq!(res.len(), 100);
    for &x in &res {
        assert!(x >= 1.0 && x < 6.6, "value {} out of [1, 6.6)", x);
    }
    let res = sorted(res);
    assert_ne!(res.first(), res.last());
}

#[test]
fn test_respects_seed() {
    let mut params = SimulationParameters::<f64> {
        seed: 1,
        ..Default::default()
    };
    let res = simulate_vector(100, &params).unwrap();
    let res1 = simulate_vector(100, &params).unwrap();
    assert_eq!(res, res1);

    params.seed = 2;
    let res2 = simulate_vector(100, &params).unwrap();
    assert_ne!(res, res2);
}

#[test]
fn test_dense_unsigned() {
    let params = SimulationParameters::<u8>::default();
    assert_eq!(params.lower, 0);

    let mut res = simulate_vector(100, &params).unwrap();
    assert_eq!(res.len(), 100);
    for &x in &res {
        assert!(x < 10, "value {} not below 10", x);
    }

    res.sort();
    assert_ne!(res.first(), res.last());
}

#[test]
fn test_signed_integers_cover_negative_range() {
    let params = SimulationParameters::<i32>::default();
    let res = simulate_vector(500, &params).unwrap();

    assert!(res.iter().all(|&x| (-10..10).contains(&x)));
    assert!(res.iter().any(|&x| x < 0));
    assert!(res.contains(&-10), "inclusive lower bound never drawn");
    assert!(!res.contains(&10), "exclusive upper bound was drawn");
}

#[test]
fn test_sparse() {
    let params = SimulationParameters::<f64> {
        density: 0.1,
        ..Default::default()
    };
    let res = simulate_vector(1000, &params).unwrap();
    assert_eq!(res.len(), 1000);

    let num_nonzero = res.iter().filter(|&&x| x != 0.0).count();
    // should be around 100
    assert!(num_nonzero < 200, "too many non-zeros: {}", num_nonzero);
    assert!(num_nonzero > 0);
}

#[test]
fn test_full_density_draws_every_slot() {
    // Bounds exclude zero, so any zero would be an undrawn slot.
    let params = SimulationParameters::<f64> {
        lower: 1.0,
        upper: 2.0,
        ..Default::default()
    };
    let res = simulate_vector(1000, &params).unwrap();
    assert!(res.iter().all(|&x| x != 0.0));
}

#[test]
fn test_zero_density_is_all_zero() {
    let params = SimulationParameters::<f32> {
        density: 0.0,
        ..Default::default()
    };
    let res = simulate_vector(1000, &params).unwrap();
    assert!(res.iter().all(|&x| x == 0.0));
}

#[test]
fn test_f32_bounds() {
    let params = SimulationParameters::<f32> {
        lower: -0.5,
        upper: 0.5,
        ..Default::default()
    };
    let res = simulate_vector(1000, &params).unwrap();
    assert!(res.iter().all(|&x| (-0.5..0.5).contains(&x)));
}

#[test]
fn test_invalid_density() {
    let params = SimulationParameters::<f64> {
        density: -0.1,
        ..Default::default()
    };
    assert_eq!(
        simulate_vector(10, &params),
        Err(SimulationError::InvalidDensity(-0.1))
    );
}

#[test]
fn test_from_json_fixture() {
    let params = SimulationParameters::<f64>::from_json(
        r#"{ "density": 0.5, "lower": 1.0, "upper": 6.6, "seed": 42 }"#,
    )
    .unwrap();
    assert_eq!(params.density, 0.5);
    assert_eq!(params.seed, 42);

    let res = simulate_vector(50, &params).unwrap();
    assert!(res.iter().all(|&x| x == 0.0 || (1.0..6.6).contains(&x)));
}

#[test]
fn test_parameters_round_trip_through_json() {
    let params = SimulationParameters::<i16> {
        density: 0.25,
        lower: -3,
        upper: 7,
        seed: 99,
    };
    let json = serde_json::to_string(&params).unwrap();
    assert_eq!(SimulationParameters::<i16>::from_json(&json).unwrap(), params);
}

#[test]
fn test_fingerprint_tracks_seed() {
    let a = SimulationParameters::<f64> {
        seed: 10,
        ..Default::default()
    };
    let b = SimulationParameters::<f64> {
        seed: 11,
        ..Default::default()
    };

    let fa = fingerprint_values(&simulate_vector(64, &a).unwrap());
    let fa_again = fingerprint_values(&simulate_vector(64, &a).unwrap());
    let fb = fingerprint_values(&simulate_vector(64, &b).unwrap());

    assert_eq!(fa, fa_again);
    assert_ne!(fa, fb);
}

proptest! {
    #[test]
    fn prop_same_seed_same_output(seed in any::<u64>(), length in 0usize..200, density in 0.0f64..=1.0) {
        let params = SimulationParameters::<f64> { density, seed, ..Default::default() };
        let first = simulate_vector(length, &params).unwrap();
        let second = simulate_vector(length, &params).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_values_within_bounds(seed in any::<u64>(), lower in -100i64..100, width in 1i64..50) {
        let params = SimulationParameters::<i64> {
            lower,
            upper: lower + width,
            seed,
            ..Default::default()
        };
        let res = simulate_vector(100, &params).unwrap();
        prop_assert!(res.iter().all(|&x| x >= lower && x < lower + width));
    }

    #[test]
    fn prop_distinct_seeds_differ(seed in any::<u64>()) {
        let a = SimulationParameters::<f64> { seed, ..Default::default() };
        let b = SimulationParameters::<f64> { seed: seed.wrapping_add(1), ..Default::default() };
        prop_assert_ne!(simulate_vector(10, &a).unwrap(), simulate_vector(10, &b).unwrap());
    }
}
