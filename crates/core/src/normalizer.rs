//! Conversion between a scale reading and the canonical Celsius value.
//!
//! Every conversion rounds its own result to [`DECIMAL_PLACES`] using
//! round-half-away-from-zero. Rounding is never accumulated across calls:
//! `from_canonical(to_canonical(v, s), s)` rounds twice, once per call.
//!
//! | Scale      | To Celsius           | From Celsius          |
//! |------------|----------------------|-----------------------|
//! | Celsius    | v                    | c                     |
//! | Fahrenheit | (v - 32) × 5/9       | c × 9/5 + 32          |
//! | Kelvin     | v - 273.15           | c + 273.15            |
//! | Rankine    | (v - 491.67) × 5/9   | (c + 273.15) × 9/5    |

use crate::core_types::Scale;

/// Number of decimal places kept in canonical and displayed values.
pub const DECIMAL_PLACES: i32 = 4;

/// 10^[`DECIMAL_PLACES`]
const ROUNDING_SCALE: f64 = 10_000.0;

/// Beyond this magnitude an f64 has no fractional digits left to round, and
/// scaling by [`ROUNDING_SCALE`] could overflow.
const ROUNDING_LIMIT: f64 = 1e16;

/// Celsius to Kelvin conversion offset (0°C = 273.15 K)
const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

/// Water freezing point in Fahrenheit
const FAHRENHEIT_FREEZING: f64 = 32.0;

/// Absolute zero in Rankine
const RANKINE_ABSOLUTE_ZERO_OFFSET: f64 = 491.67;

/// Fahrenheit/Rankine degree to Celsius degree.
#[cfg(not(feature = "legacy-factor"))]
const FIVE_NINTHS: f64 = 5.0 / 9.0;

/// Truncated factor used by legacy data sets.
#[cfg(feature = "legacy-factor")]
const FIVE_NINTHS: f64 = 0.555555555;

/// Celsius degree to Fahrenheit/Rankine degree.
const NINE_FIFTHS: f64 = 1.8;

/// Round to [`DECIMAL_PLACES`] decimals, ties away from zero.
///
/// Negative zero comes back as positive zero so that rendered text and hashes
/// do not depend on the sign of an empty quantity. Non-finite values pass
/// through untouched.
#[inline]
pub fn round_half_away(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    // f64::round already breaks ties away from zero
    (value * ROUNDING_SCALE).round() / ROUNDING_SCALE + 0.0
}

/// Convert a reading in `scale` to rounded Celsius.
#[inline]
pub fn to_canonical(value: f64, scale: Scale) -> f64 {
    let celsius = match scale {
        Scale::Celsius => value,
        Scale::Fahrenheit => (value - FAHRENHEIT_FREEZING) * FIVE_NINTHS,
        Scale::Kelvin => value - CELSIUS_KELVIN_OFFSET,
        Scale::Rankine => (value - RANKINE_ABSOLUTE_ZERO_OFFSET) * FIVE_NINTHS,
    };
    round_half_away(celsius)
}

/// Express a canonical Celsius value in `scale`, rounded.
#[inline]
pub fn from_canonical(canonical: f64, scale: Scale) -> f64 {
    let value = match scale {
        Scale::Celsius => canonical,
        Scale::Fahrenheit => canonical * NINE_FIFTHS + FAHRENHEIT_FREEZING,
        Scale::Kelvin => canonical + CELSIUS_KELVIN_OFFSET,
        Scale::Rankine => (canonical + CELSIUS_KELVIN_OFFSET) * NINE_FIFTHS,
    };
    round_half_away(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rounds_ties_away_from_zero() {
        // 0.03125 is exact in binary, so the scaled value is exactly 312.5
        assert_eq!(round_half_away(0.03125), 0.0313);
        assert_eq!(round_half_away(-0.03125), -0.0313);
        assert_eq!(round_half_away(1.23444), 1.2344);
    }

    #[test]
    fn test_round_normalizes_negative_zero() {
        let rounded = round_half_away(-0.00001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_round_leaves_huge_values_alone() {
        assert_eq!(round_half_away(f64::MAX), f64::MAX);
        assert_eq!(round_half_away(1.5e17), 1.5e17);
    }

    #[test]
    fn test_fixed_points() {
        assert_eq!(to_canonical(32.0, Scale::Fahrenheit), 0.0);
        assert_eq!(to_canonical(273.15, Scale::Kelvin), 0.0);
        assert_eq!(to_canonical(491.67, Scale::Rankine), 0.0);
        assert_eq!(to_canonical(212.0, Scale::Fahrenheit), 100.0);

        assert_eq!(from_canonical(0.0, Scale::Fahrenheit), 32.0);
        assert_eq!(from_canonical(0.0, Scale::Kelvin), 273.15);
        assert_eq!(from_canonical(0.0, Scale::Rankine), 491.67);
        assert_eq!(from_canonical(-273.15, Scale::Rankine), 0.0);
    }

    #[test]
    fn test_fahrenheit_minus_forty_is_celsius_minus_forty() {
        assert_eq!(to_canonical(-40.0, Scale::Fahrenheit), -40.0);
        assert_eq!(from_canonical(-40.0, Scale::Fahrenheit), -40.0);
    }

    #[test]
    fn test_roundtrip_every_scale() {
        for scale in Scale::ALL {
            for value in [-459.67, -40.0, 0.0, 37.5, 76.56104, 1000.125] {
                let back = from_canonical(to_canonical(value, scale), scale);
                assert_abs_diff_eq!(back, value, epsilon = 1e-3);
            }
        }
    }

    // Run with `cargo test -p temperature-core --features legacy-factor`
    #[cfg(feature = "legacy-factor")]
    #[test]
    fn test_legacy_factor_reference_outputs() {
        assert_eq!(to_canonical(76.56104, Scale::Fahrenheit), 24.7561);
        // The truncated factor drops the last digit a million degrees out
        assert_eq!(to_canonical(1000032.0, Scale::Fahrenheit), 555555.555);
        assert_eq!(to_canonical(1000491.67, Scale::Rankine), 555555.555);
        assert_eq!(to_canonical(0.0, Scale::Rankine), -273.15);
    }

    #[cfg(not(feature = "legacy-factor"))]
    #[test]
    fn test_rational_factor_outputs() {
        assert_eq!(to_canonical(1000032.0, Scale::Fahrenheit), 555555.5556);
        assert_eq!(to_canonical(1000491.67, Scale::Rankine), 555555.5556);
    }

    #[test]
    fn test_results_carry_at_most_four_decimals() {
        let c = to_canonical(76.56104, Scale::Fahrenheit);
        assert_eq!(c, 24.7561);
        assert_eq!(round_half_away(c), c);
    }
}
