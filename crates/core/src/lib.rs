//! Temperature Value Library
//!
//! A temperature reading tagged with one of four scales (Celsius, Fahrenheit,
//! Kelvin, Rankine), stored internally as Celsius rounded to four decimals.
//!
//! ## Components
//!
//! - [`normalizer`]: scale formulas and round-half-away-from-zero quantizing
//! - [`Temperature`]: the value type, with scale-independent equality,
//!   ordering and hashing plus displayed-value arithmetic
//! - [`codec`]: parsing (`"76.56104 °F"`) and locale-free formatting under the
//!   `S`, `SD`, `N`, `SN` and `SDN` modes
//!
//! ```
//! use temperature_core::{FormatMode, Scale, Temperature};
//!
//! let boiling = Temperature::with_scale(212.0, Scale::Fahrenheit);
//! assert_eq!(boiling, Temperature::new(100.0));
//! assert_eq!(boiling.as_kelvin(), 373.15);
//! assert_eq!(boiling.format(FormatMode::SymbolDegreeNoSpace), "212.0000°F");
//! ```

pub mod codec;
pub mod core_types;
pub mod error;
pub mod normalizer;

pub use codec::FormatMode;
pub use core_types::{Scale, Temperature};
pub use error::{ErrorKind, TemperatureError};
