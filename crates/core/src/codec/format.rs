//! Locale-free text rendering of temperatures.
//!
//! The displayed value is always written with exactly four decimals and a
//! `.` separator. The [`FormatMode`] only controls the scale suffix:
//!
//! | Mode | Example       |
//! |------|---------------|
//! | N    | `76.5610`     |
//! | S    | `76.5610 K`   |
//! | SD   | `76.5610 °K`  |
//! | SN   | `76.5610K`    |
//! | SDN  | `76.5610°K`   |

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::core_types::Temperature;
use crate::error::TemperatureError;

/// Degree mark used by the `SD` and `SDN` modes.
pub const DEGREE_MARK: char = '°';

/// Which scale suffix to append when rendering a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatMode {
    /// `N`: number only
    Number,
    /// `S`: space and scale letter
    Symbol,
    /// `SD`: space, degree mark and scale letter
    #[default]
    SymbolDegree,
    /// `SN`: scale letter, no space
    SymbolNoSpace,
    /// `SDN`: degree mark and scale letter, no space
    SymbolDegreeNoSpace,
}

impl FormatMode {
    /// Every mode, in declaration order.
    pub const ALL: [FormatMode; 5] = [
        FormatMode::Number,
        FormatMode::Symbol,
        FormatMode::SymbolDegree,
        FormatMode::SymbolNoSpace,
        FormatMode::SymbolDegreeNoSpace,
    ];

    /// Token accepted by [`FormatMode::from_str`].
    pub const fn token(self) -> &'static str {
        match self {
            FormatMode::Number => "N",
            FormatMode::Symbol => "S",
            FormatMode::SymbolDegree => "SD",
            FormatMode::SymbolNoSpace => "SN",
            FormatMode::SymbolDegreeNoSpace => "SDN",
        }
    }

    fn has_space(self) -> bool {
        matches!(self, FormatMode::Symbol | FormatMode::SymbolDegree)
    }

    fn has_degree_mark(self) -> bool {
        matches!(
            self,
            FormatMode::SymbolDegree | FormatMode::SymbolDegreeNoSpace
        )
    }
}

impl FromStr for FormatMode {
    type Err = TemperatureError;

    /// Tokens are matched exactly; `"sd"` is not `"SD"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatMode::ALL
            .into_iter()
            .find(|mode| mode.token() == s)
            .ok_or_else(|| TemperatureError::invalid_format(s))
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A temperature paired with the mode it renders under.
///
/// Returned by [`Temperature::display`]; implements [`fmt::Display`] so it can
/// be used directly in `format!` and `write!` without an intermediate string.
#[derive(Debug, Clone, Copy)]
pub struct Formatted {
    temperature: Temperature,
    mode: FormatMode,
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, &self.temperature, self.mode)
    }
}

fn render(f: &mut fmt::Formatter<'_>, temperature: &Temperature, mode: FormatMode) -> fmt::Result {
    write!(f, "{:.4}", temperature.value())?;
    if mode == FormatMode::Number {
        return Ok(());
    }
    if mode.has_space() {
        f.write_char(' ')?;
    }
    if mode.has_degree_mark() {
        f.write_char(DEGREE_MARK)?;
    }
    f.write_char(temperature.scale().symbol())
}

impl Temperature {
    /// [`fmt::Display`] adapter rendering under `mode`.
    pub fn display(self, mode: FormatMode) -> Formatted {
        Formatted {
            temperature: self,
            mode,
        }
    }

    /// Render the displayed value under `mode`.
    ///
    /// ```
    /// use temperature_core::{FormatMode, Scale, Temperature};
    ///
    /// let t = Temperature::with_scale(76.56104, Scale::Kelvin);
    /// assert_eq!(t.format(FormatMode::SymbolDegree), "76.5610 °K");
    /// assert_eq!(t.format(FormatMode::Number), "76.5610");
    /// ```
    pub fn format(&self, mode: FormatMode) -> String {
        self.display(mode).to_string()
    }

    /// Render using a mode token (`S`, `SD`, `N`, `SN` or `SDN`).
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidFormat`](crate::ErrorKind::InvalidFormat)
    /// naming `mode` when it is not one of the tokens above.
    pub fn to_string_with(self, mode: &str) -> Result<String, TemperatureError> {
        Ok(self.format(mode.parse()?))
    }

    /// Default rendering (`SD`).
    pub fn as_string(&self) -> String {
        self.format(FormatMode::default())
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self, FormatMode::default())
    }
}
