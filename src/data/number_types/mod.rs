//! # Number types
//!
//! Integers are the foundation; fixed-point and real numbers are built from them.
pub mod digit;
pub mod integer;
pub mod rational;
pub mod real;
pub mod sign;
pub mod traits;
