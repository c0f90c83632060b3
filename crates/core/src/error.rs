//! Error type shared by construction, parsing and formatting.
//!
//! Every failure is local and synchronous: a value type has no transient state
//! to recover, so callers get the error back immediately with a message that
//! names the offending input.

use std::fmt;

/// Category of a [`TemperatureError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A constructor or setter received a value that is not a usable number
    /// (NaN, infinite, or text that does not parse as a temperature).
    InvalidArgument,

    /// A format-mode token other than `S`, `SD`, `N`, `SN` or `SDN`.
    InvalidFormat,

    /// Parsing found a scale marker but the trailing character is not a known
    /// scale letter.
    UnknownScale,

    /// A conversion the temperature type explicitly declines to provide.
    ConversionUnsupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::InvalidFormat => "invalid format",
            ErrorKind::UnknownScale => "unknown scale",
            ErrorKind::ConversionUnsupported => "conversion unsupported",
        };
        f.write_str(name)
    }
}

/// Error returned by fallible temperature operations.
///
/// Wraps an [`ErrorKind`] together with a human-readable message. Use the
/// named constructors rather than building the struct by hand so messages
/// stay uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureError {
    kind: ErrorKind,
    msg: String,
}

impl TemperatureError {
    /// Value handed to a constructor was not a finite number.
    pub fn invalid_argument(value: f64) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            msg: format!("Value is not a number: {value}"),
        }
    }

    /// Text could not be read as a temperature.
    pub fn unparsable(input: &str) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            msg: format!("'{input}' is not a valid temperature"),
        }
    }

    /// Unrecognized format-mode token.
    pub fn invalid_format(mode: &str) -> Self {
        Self {
            kind: ErrorKind::InvalidFormat,
            msg: format!("Invalid format parameter: {mode}"),
        }
    }

    /// Trailing character after a detected scale marker is not `C`, `F`, `K` or `R`.
    pub fn unknown_scale(symbol: char) -> Self {
        Self {
            kind: ErrorKind::UnknownScale,
            msg: format!("Temperature scale unknown: '{symbol}'"),
        }
    }

    /// Conversion into `target` is not supported.
    ///
    /// # Arguments
    /// * `target` - Name of the requested representation (e.g. `"bool"`, `"char"`)
    pub fn conversion_unsupported(target: &str) -> Self {
        Self {
            kind: ErrorKind::ConversionUnsupported,
            msg: format!("Temperature cannot be converted to {target}"),
        }
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message.
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for TemperatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl std::error::Error for TemperatureError {}
