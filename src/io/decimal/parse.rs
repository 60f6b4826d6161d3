//! # Reading decimal integers
//!
//! Accepted input is `ws* sign? ws* digit+ ws*`, where `sign` is `+` or `-` and `ws` is a space,
//! tab, vertical tab or form feed.
use std::str::FromStr;

use tracing::debug;

use crate::data::number_types::digit::{Digit, Digits};
use crate::data::number_types::integer::unsigned::mul_add_digit;
use crate::data::number_types::integer::Z;
use crate::data::number_types::sign::Sign;
use crate::error::{ParseError, ParseResult};

/// Values that can be read from text.
pub trait Parse: Sized {
    fn parse(text: &str) -> ParseResult<Self>;
}

impl<D: Digit> Parse for Z<D> {
    fn parse(text: &str) -> ParseResult<Self> {
        parse_z(text)
    }
}

impl<D: Digit> FromStr for Z<D> {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_z(text)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum State {
    /// Leading whitespace, expecting a sign or the first digit.
    Sign,
    /// After the sign, expecting whitespace or the first digit.
    Gap,
    Digits,
    /// Trailing whitespace.
    Done,
}

fn is_whitespace(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\x0B' | '\x0C')
}

fn reject(text: &str, error: ParseError) -> ParseError {
    debug!(input = text, %error, "rejected decimal input");
    error
}

/// Read a decimal integer.
///
/// # Errors
///
/// If the text is empty, contains only a sign or contains any character not allowed by the
/// grammar. The error names the position of the first offending character.
pub fn parse_z<D: Digit>(text: &str) -> ParseResult<Z<D>> {
    let mut state = State::Sign;
    let mut sign = Sign::NonNegative;
    let mut start = 0;
    let mut end = text.len();

    for (position, character) in text.char_indices() {
        state = match (state, character) {
            (State::Sign, c) if is_whitespace(c) => State::Sign,
            (State::Sign, '+') => State::Gap,
            (State::Sign, '-') => {
                sign = Sign::Negative;
                State::Gap
            },
            (State::Gap, c) if is_whitespace(c) => State::Gap,
            (State::Sign | State::Gap, '0'..='9') => {
                start = position;
                State::Digits
            },
            (State::Digits, '0'..='9') => State::Digits,
            (State::Digits, c) if is_whitespace(c) => {
                end = position;
                State::Done
            },
            (State::Done, c) if is_whitespace(c) => State::Done,
            (_, c) => return Err(reject(
                text,
                ParseError::at(position, format!("unexpected character {:?}", c)),
            )),
        };
    }

    match state {
        State::Sign | State::Gap => Err(reject(
            text,
            ParseError::at(text.len(), "expected a decimal digit"),
        )),
        State::Digits | State::Done => {
            Ok(Z::from_parts(accumulate(&text[start..end]), sign))
        },
    }
}

/// Fold ASCII decimal digits into a magnitude, a group of digits at a time.
fn accumulate<D: Digit>(decimal: &str) -> Digits<D> {
    let ten = D::from_u128_truncating(10);

    let mut digits = Digits::new();
    for group in decimal.as_bytes().chunks(D::DECIMAL_GROUP as usize) {
        let (multiplier, addend) = group.iter()
            .fold((D::one(), D::zero()), |(multiplier, addend), &byte| {
                let value = D::from_u128_truncating((byte - b'0') as u128);
                (multiplier * ten, addend * ten + value)
            });
        mul_add_digit(&mut digits, multiplier, addend);
    }

    digits
}
