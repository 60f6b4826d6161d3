//! # Errors
//!
//! Arithmetic errors are deterministic: an operation either succeeds with a normalized value or
//! fails without modifying its inputs.
use thiserror::Error;

/// Any failure of an integer, fixed-point or real operation.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A division (short or long, signed or unsigned) with a zero divisor.
    #[error("divided by zero")]
    DivideByZero,
    /// Malformed decimal input.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A decimal string could not be read as a number.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("{description}")]
pub struct ParseError {
    description: String,
}

impl ParseError {
    /// Create a new `ParseError` with a human readable reason.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }

    /// Create a new `ParseError` about a specific byte position in the input.
    pub fn at(position: usize, description: impl AsRef<str>) -> Self {
        Self::new(format!("{} (at position {})", description.as_ref(), position))
    }

    /// Reason this error was created.
    pub fn description(&self) -> &str {
        &self.description
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
