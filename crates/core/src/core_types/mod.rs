//! Core types

pub mod scale;
pub mod temperature;

pub use scale::Scale;
pub use temperature::Temperature;
