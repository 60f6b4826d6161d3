//! # realpack
//!
//! Exact arithmetic on arbitrary precision integers, stored as sequences of machine word digits.
//! On top of the integers, quotients can be expanded into fixed-point numbers and real numbers
//! can be approximated to any precision.
//!
//! The digit width is a type parameter, `u64` by default:
//!
//! ```
//! use realpack::Z;
//!
//! let a: Z = "-11".parse().unwrap();
//! let b = Z::from(7);
//! let (quotient, remainder) = a.div_rem_floor(&b).unwrap();
//! assert_eq!(quotient.to_string(), "-2");
//! assert_eq!(remainder.to_string(), "3");
//! ```
pub use data::number_types::digit::Digit;
pub use data::number_types::integer::signed::{add_z, div_z, mul_z, pow_z, sub_z};
pub use data::number_types::integer::Z;
pub use data::number_types::rational::{frac, FixedPoint};
pub use data::number_types::sign::Sign;
pub use data::number_types::traits::NegAssign;
pub use error::{Error, ParseError};

pub mod data;
pub mod error;
pub mod io;
