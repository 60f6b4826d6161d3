//! # Decimal codec
//!
//! Conversion between integers and their base ten representation, and decimal output of
//! fixed-point numbers.
pub use format::{fixed_to_decimal_string, to_decimal_string};
pub use parse::{parse_z, Parse};

mod format;
mod parse;
