//! Scale-tagged temperature value with canonical Celsius storage.
//!
//! # Design
//! - The stored quantity is always Celsius, rounded to four decimals
//!   (see [`crate::normalizer`]); the [`Scale`] tag only decides how the
//!   value is read back and rendered
//! - Equality, ordering and hashing look at the canonical value alone, so
//!   the same physical temperature compares equal in any scale
//! - No implicit numeric coercions: construct with [`Temperature::new`] /
//!   [`Temperature::with_scale`] and read with explicit accessors
//! - Arithmetic operators work on *displayed* values and always produce a
//!   Celsius-tagged result
//!
//! NaN and infinite inputs are outside the supported domain. The infallible
//! constructors accept them without complaint and the results of comparing or
//! formatting such values are unspecified; use [`Temperature::try_new`] to
//! reject them up front.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::trace;

use super::Scale;
use crate::error::TemperatureError;
use crate::normalizer::{from_canonical, round_half_away, to_canonical};

/// A temperature reading tagged with the scale it is displayed in.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTemperature"))]
pub struct Temperature {
    /// Celsius, rounded to four decimals
    canonical: f64,
    scale: Scale,
}

/// Field layout as serialized; deserialization re-quantizes the canonical
/// value so stored data cannot bypass the rounding invariant.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawTemperature {
    canonical: f64,
    scale: Scale,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTemperature> for Temperature {
    type Error = TemperatureError;

    fn try_from(raw: RawTemperature) -> Result<Self, Self::Error> {
        if !raw.canonical.is_finite() {
            return Err(TemperatureError::invalid_argument(raw.canonical));
        }
        Ok(Temperature {
            canonical: round_half_away(raw.canonical),
            scale: raw.scale,
        })
    }
}

impl Temperature {
    /// Smallest value a temperature can carry.
    pub const MIN_VALUE: f64 = f64::MIN;

    /// Largest value a temperature can carry.
    pub const MAX_VALUE: f64 = f64::MAX;

    /// Create a Celsius temperature.
    #[inline]
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self::with_scale(value, Scale::Celsius)
    }

    /// Create a zero reading on `scale` (0 °F, 0 K, ...).
    #[inline]
    #[must_use]
    pub fn from_scale(scale: Scale) -> Self {
        Self::with_scale(0.0, scale)
    }

    /// Create a temperature from a reading on `scale`.
    #[inline]
    #[must_use]
    pub fn with_scale(value: f64, scale: Scale) -> Self {
        Temperature {
            canonical: to_canonical(value, scale),
            scale,
        }
    }

    /// Create a temperature, rejecting values that are not finite numbers.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// when `value` is NaN or infinite.
    pub fn try_new(value: f64, scale: Scale) -> Result<Self, TemperatureError> {
        if !value.is_finite() {
            return Err(TemperatureError::invalid_argument(value));
        }
        Ok(Self::with_scale(value, scale))
    }

    /// Value expressed in the current scale.
    #[inline]
    pub fn value(&self) -> f64 {
        from_canonical(self.canonical, self.scale)
    }

    /// Replace the value, keeping the scale. `value` is read in the current scale.
    #[inline]
    pub fn set_value(&mut self, value: f64) {
        self.canonical = to_canonical(value, self.scale);
    }

    /// Current display scale.
    #[inline]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Stored Celsius value.
    #[inline]
    pub fn canonical(&self) -> f64 {
        self.canonical
    }

    /// Value expressed in `scale`, independent of the current tag.
    #[inline]
    pub fn value_in(&self, scale: Scale) -> f64 {
        from_canonical(self.canonical, scale)
    }

    /// Value expressed in Celsius, whatever the current scale.
    #[inline]
    pub fn as_celsius(&self) -> f64 {
        self.value_in(Scale::Celsius)
    }

    /// Value expressed in Fahrenheit, whatever the current scale.
    #[inline]
    pub fn as_fahrenheit(&self) -> f64 {
        self.value_in(Scale::Fahrenheit)
    }

    /// Value expressed in Kelvin, whatever the current scale.
    #[inline]
    pub fn as_kelvin(&self) -> f64 {
        self.value_in(Scale::Kelvin)
    }

    /// Value expressed in Rankine, whatever the current scale.
    #[inline]
    pub fn as_rankine(&self) -> f64 {
        self.value_in(Scale::Rankine)
    }

    /// Re-tag with `scale`, re-reading the stored number as a raw value on it.
    ///
    /// The current canonical (Celsius) number is treated as if it had been
    /// measured on `scale` and normalized again. This re-scales the number;
    /// it does **not** preserve the physical temperature. To move to another
    /// scale while keeping the physical quantity, read [`Self::value_in`] and
    /// pass it to [`Self::change_scale_with_value`].
    ///
    /// ```
    /// use temperature_core::{Scale, Temperature};
    ///
    /// let mut t = Temperature::new(100.0);
    /// t.change_scale(Scale::Kelvin);
    /// assert_eq!(t.value(), 100.0);
    /// assert_eq!(t.as_celsius(), -173.15);
    /// ```
    pub fn change_scale(&mut self, scale: Scale) {
        let raw = self.canonical;
        trace!(from = %self.scale, to = %scale, raw, "re-scaling temperature");
        self.scale = scale;
        self.canonical = to_canonical(raw, scale);
    }

    /// Discard the current reading and store `value` measured on `scale`.
    pub fn change_scale_with_value(&mut self, value: f64, scale: Scale) {
        trace!(from = %self.scale, to = %scale, value, "replacing temperature");
        self.scale = scale;
        self.canonical = to_canonical(value, scale);
    }

    /// Three-way comparison of canonical values: -1, 0 or +1.
    pub fn compare(&self, other: &Temperature) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Unary plus: a Celsius temperature holding this reading's displayed value.
    #[must_use]
    pub fn identity(self) -> Temperature {
        Temperature::new(self.value())
    }

    /// Displayed value as `f64`.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.value()
    }

    /// Displayed value truncated toward zero, saturating at the `i64` bounds.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.value() as i64
    }
}

impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Temperature {}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Temperature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.total_cmp(&other.canonical)
    }
}

// Hash the canonical value so equal temperatures hash equally in any scale.
// Canonical values never hold -0.0, so bit patterns agree with `Eq`.
impl Hash for Temperature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.to_bits().hash(state);
    }
}

// Arithmetic reads displayed values and builds a Celsius result, whatever
// the operand scales: 56 °F + 78 °R = 134 °C.

impl Neg for Temperature {
    type Output = Temperature;
    fn neg(self) -> Temperature {
        Temperature::new(-self.value())
    }
}

impl Add for Temperature {
    type Output = Temperature;
    fn add(self, rhs: Temperature) -> Temperature {
        Temperature::new(self.value() + rhs.value())
    }
}

impl Sub for Temperature {
    type Output = Temperature;
    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature::new(self.value() - rhs.value())
    }
}

impl Mul for Temperature {
    type Output = Temperature;
    fn mul(self, rhs: Temperature) -> Temperature {
        Temperature::new(self.value() * rhs.value())
    }
}

impl Div for Temperature {
    type Output = Temperature;
    fn div(self, rhs: Temperature) -> Temperature {
        Temperature::new(self.value() / rhs.value())
    }
}

impl TryFrom<Temperature> for bool {
    type Error = TemperatureError;
    fn try_from(_: Temperature) -> Result<bool, TemperatureError> {
        Err(TemperatureError::conversion_unsupported("bool"))
    }
}

impl TryFrom<Temperature> for char {
    type Error = TemperatureError;
    fn try_from(_: Temperature) -> Result<char, TemperatureError> {
        Err(TemperatureError::conversion_unsupported("char"))
    }
}

// Integer readings go through `as_i64`.
impl TryFrom<Temperature> for u8 {
    type Error = TemperatureError;
    fn try_from(_: Temperature) -> Result<u8, TemperatureError> {
        Err(TemperatureError::conversion_unsupported("u8"))
    }
}
