//! Text codec: parsing and formatting of temperatures.

pub mod format;
pub mod parse;

pub use format::{FormatMode, Formatted, DEGREE_MARK};
