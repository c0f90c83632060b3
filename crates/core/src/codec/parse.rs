//! Reading temperatures from text such as `"76.56104"`, `"76.56104F"` or
//! `"76.56104 °K"`.
//!
//! Parsing is two-step. The input is first scanned (case-insensitively) for
//! any scale marker: the degree mark or one of `C F K R`. Only if a marker is
//! present is a suffix stripped, and the scale is then taken from the *last*
//! character of the input regardless of where the marker was found. Only the
//! upper-case letters `C F K R` select a scale there, so `"10c"` and `"inf"`
//! pass the scan but fail on their last character. A marker somewhere in the
//! middle still makes the last character decide, and an unrecognized last
//! character is an error rather than a no-match.

use std::str::FromStr;

use tracing::debug;

use super::format::DEGREE_MARK;
use crate::core_types::{Scale, Temperature};
use crate::error::TemperatureError;

/// Characters whose presence means the input carries a scale suffix.
const SCALE_MARKERS: [char; 5] = [DEGREE_MARK, 'C', 'F', 'K', 'R'];

fn has_scale_marker(input: &str) -> bool {
    input
        .chars()
        .any(|c| SCALE_MARKERS.contains(&c.to_ascii_uppercase()))
}

/// Split `input` into its numeric part and scale.
fn split_scale(input: &str) -> Result<(&str, Scale), TemperatureError> {
    if !has_scale_marker(input) {
        return Ok((input, Scale::Celsius));
    }

    let mut chars = input.chars();
    let Some(last) = chars.next_back() else {
        return Ok((input, Scale::Celsius));
    };
    let Some(scale) = Scale::from_symbol(last) else {
        debug!(input, symbol = %last, "unknown temperature scale");
        return Err(TemperatureError::unknown_scale(last));
    };

    let number = chars.as_str();
    let number = number.strip_suffix(DEGREE_MARK).unwrap_or(number);
    Ok((number.trim(), scale))
}

impl Temperature {
    /// Parse a temperature, returning `Ok(None)` when the text is not a number.
    ///
    /// Surrounding whitespace is ignored. Without a scale suffix the number is
    /// read as Celsius. The trailing scale letter must be upper case.
    ///
    /// ```
    /// use temperature_core::{Scale, Temperature};
    ///
    /// let t = Temperature::try_parse("76.56104 °F").unwrap().unwrap();
    /// assert_eq!(t.scale(), Scale::Fahrenheit);
    /// assert_eq!(t.as_celsius(), 24.7561);
    ///
    /// assert!(Temperature::try_parse("hot").unwrap().is_none());
    /// ```
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnknownScale`](crate::ErrorKind::UnknownScale)
    /// when a scale marker is present but the last character is not a scale
    /// letter, e.g. `"12C5"`, `"40°"` or `"10c"`.
    pub fn try_parse(input: &str) -> Result<Option<Temperature>, TemperatureError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let (number, scale) = split_scale(input)?;
        match number.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(Temperature::with_scale(value, scale))),
            _ => {
                debug!(input, number, "temperature text did not parse");
                Ok(None)
            }
        }
    }
}

impl FromStr for Temperature {
    type Err = TemperatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Temperature::try_parse(s)?.ok_or_else(|| TemperatureError::unparsable(s))
    }
}
