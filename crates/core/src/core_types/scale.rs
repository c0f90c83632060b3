//! Temperature scales understood by [`Temperature`](super::Temperature).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit under which a displayed temperature value is interpreted.
///
/// The set is closed: Delisle, Newton, Réaumur and Rømer are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scale {
    /// Degrees Celsius, also the canonical storage scale.
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
    /// Degrees Rankine
    Rankine,
}

impl Scale {
    /// Every scale, in declaration order.
    pub const ALL: [Scale; 4] = [
        Scale::Celsius,
        Scale::Fahrenheit,
        Scale::Kelvin,
        Scale::Rankine,
    ];

    /// Single upper-case letter used in text form (`C`, `F`, `K`, `R`).
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Scale::Celsius => 'C',
            Scale::Fahrenheit => 'F',
            Scale::Kelvin => 'K',
            Scale::Rankine => 'R',
        }
    }

    /// Look up a scale by its upper-case letter. `'c'` is not `'C'`.
    pub fn from_symbol(symbol: char) -> Option<Scale> {
        match symbol {
            'C' => Some(Scale::Celsius),
            'F' => Some(Scale::Fahrenheit),
            'K' => Some(Scale::Kelvin),
            'R' => Some(Scale::Rankine),
            _ => None,
        }
    }

    /// Full name of the scale.
    pub const fn name(self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Kelvin => "Kelvin",
            Scale::Rankine => "Rankine",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
