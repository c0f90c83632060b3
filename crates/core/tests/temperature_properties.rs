//! Property checks for normalization, equality, ordering and arithmetic
//! across all four scales, using seeded random samples.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ctor::ctor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use temperature_core::normalizer::{from_canonical, to_canonical};
use temperature_core::{Scale, Temperature};

#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Same physical temperature written on each scale: (C, F, K, R)
const EQUIVALENTS: [[f64; 4]; 4] = [
    [0.0, 32.0, 273.15, 491.67],
    [100.0, 212.0, 373.15, 671.67],
    [-40.0, -40.0, 233.15, 419.67],
    [37.0, 98.6, 310.15, 558.27],
];

fn sample(rng: &mut StdRng) -> (f64, Scale) {
    let scale = Scale::ALL[rng.random_range(0..Scale::ALL.len())];
    (rng.random_range(-1000.0..1000.0), scale)
}

#[test]
fn test_roundtrip_within_rounding_tolerance() {
    let mut rng = StdRng::seed_from_u64(0x7E3F);
    for _ in 0..1000 {
        let (value, scale) = sample(&mut rng);
        let back = from_canonical(to_canonical(value, scale), scale);
        assert_abs_diff_eq!(back, value, epsilon = 1e-3);

        let t = Temperature::with_scale(value, scale);
        assert_abs_diff_eq!(t.value(), value, epsilon = 1e-3);
        assert_eq!(t.scale(), scale);
    }
}

#[test]
fn test_equivalent_readings_are_equal() {
    for row in EQUIVALENTS {
        let temps: Vec<Temperature> = Scale::ALL
            .iter()
            .zip(row)
            .map(|(&scale, value)| Temperature::with_scale(value, scale))
            .collect();
        for pair in temps.windows(2) {
            assert_eq!(pair[0], pair[1], "{} vs {}", pair[0], pair[1]);
            assert_eq!(pair[0].compare(&pair[1]), 0);
        }
    }
}

#[test]
fn test_default_reads_freezing_point_on_every_scale() {
    let t = Temperature::default();
    assert_eq!(t.value(), 0.0);
    assert_eq!(t.scale(), Scale::Celsius);
    for (scale, expected) in Scale::ALL.into_iter().zip(EQUIVALENTS[0]) {
        assert_relative_eq!(t.value_in(scale), expected);
    }
}

#[test]
fn test_ordering_matches_canonical_values() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let (va, sa) = sample(&mut rng);
        let (vb, sb) = sample(&mut rng);
        let a = Temperature::with_scale(va, sa);
        let b = Temperature::with_scale(vb, sb);
        assert_eq!(a < b, a.canonical() < b.canonical());
        assert_eq!(a == b, a.canonical() == b.canonical());
        assert_eq!(a.compare(&b), -b.compare(&a));
    }
}

#[test]
fn test_mixed_scale_ordering() {
    let rankine = Temperature::with_scale(56.0, Scale::Rankine);
    let kelvin = Temperature::with_scale(78.0, Scale::Kelvin);
    assert_eq!(rankine < kelvin, 56.0 < 78.0);

    let mut temps = vec![
        Temperature::with_scale(100.0, Scale::Fahrenheit),
        Temperature::with_scale(0.0, Scale::Kelvin),
        Temperature::new(20.0),
        Temperature::with_scale(600.0, Scale::Rankine),
    ];
    temps.sort();
    let celsius: Vec<f64> = temps.iter().map(Temperature::as_celsius).collect();
    assert!(celsius.windows(2).all(|w| w[0] <= w[1]), "{celsius:?}");
    assert_eq!(temps[0].scale(), Scale::Kelvin);
}

#[test]
fn test_hash_agrees_with_equality() {
    for row in EQUIVALENTS {
        let set: FxHashSet<Temperature> = Scale::ALL
            .iter()
            .zip(row)
            .map(|(&scale, value)| Temperature::with_scale(value, scale))
            .collect();
        assert_eq!(set.len(), 1);
    }

    let distinct: FxHashSet<Temperature> = (0..10).map(|i| Temperature::new(f64::from(i))).collect();
    assert_eq!(distinct.len(), 10);
}

#[test]
fn test_arithmetic_ignores_operand_scales() {
    let a = Temperature::with_scale(56.0, Scale::Fahrenheit);
    let b = Temperature::with_scale(78.0, Scale::Rankine);

    let sum = a + b;
    assert_eq!(sum.scale(), Scale::Celsius);
    assert_relative_eq!(sum.value(), 134.0, max_relative = 1e-4);

    // Not the physical sum of the two readings
    assert!((sum.as_celsius() - (a.as_celsius() + b.as_celsius())).abs() > 1.0);
}

#[test]
fn test_change_scale_pair() {
    let mut rescaled = Temperature::new(25.0);
    rescaled.change_scale(Scale::Fahrenheit);
    assert_eq!(rescaled.value(), 25.0);
    assert_relative_eq!(rescaled.as_celsius(), -3.8889, max_relative = 1e-4);

    let mut replaced = Temperature::new(25.0);
    replaced.change_scale_with_value(77.0, Scale::Fahrenheit);
    assert_eq!(replaced.value(), 77.0);
    assert_eq!(replaced, Temperature::new(25.0));
}
