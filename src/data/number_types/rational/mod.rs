//! # Fixed-point rational numbers
//!
//! A quotient of two integers, expanded to a fixed number of fractional digits. Used to present
//! the result of a division with more precision than the integer quotient offers.
use tracing::debug;

use crate::data::number_types::digit::{Digit, Digits};
use crate::data::number_types::integer::unsigned::{div_n, shift_n, Towards};
use crate::data::number_types::integer::Z;
use crate::error::Error;

/// The value `coefficient / base^negative_exponent`, where `base` is `2^D::BITS`.
///
/// The lowest `negative_exponent` digits of the coefficient's magnitude are the fraction, the
/// remaining digits the integer part.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct FixedPoint<D: Digit = u64> {
    coefficient: Z<D>,
    negative_exponent: usize,
}

impl<D: Digit> FixedPoint<D> {
    pub fn new(coefficient: Z<D>, negative_exponent: usize) -> Self {
        Self { coefficient, negative_exponent }
    }

    pub fn coefficient(&self) -> &Z<D> {
        &self.coefficient
    }

    /// Number of fractional digits.
    pub fn negative_exponent(&self) -> usize {
        self.negative_exponent
    }

    /// Number of decimal fraction digits that the binary fraction fully resolves.
    pub fn decimal_precision(&self) -> usize {
        let bits = self.negative_exponent * D::BITS as usize;
        (bits as f64 * std::f64::consts::LOG10_2).floor() as usize
    }
}

/// Expand `u / v` to `n` fractional digits.
///
/// The result is truncated towards zero: it differs less than `base^-n` from the exact value.
///
/// # Arguments
///
/// * `u`: Dividend.
/// * `v`: Divisor.
/// * `n`: Number of fractional digits of the result.
///
/// # Errors
///
/// If `v` is zero.
pub fn frac<D: Digit>(u: &Z<D>, v: &Z<D>, n: usize) -> Result<FixedPoint<D>, Error> {
    let (quotient, mut remainder) = div_n(u.digits(), v.digits())?;
    shift_n(&mut remainder, n, Towards::MostSignificant);
    let (fraction, _) = div_n(&remainder, v.digits())?;
    debug_assert!(fraction.len() <= n);

    let mut digits: Digits<D> = fraction;
    digits.resize(n, D::zero());
    digits.extend(quotient);
    let coefficient = Z::from_parts(digits, u.sign() * v.sign());

    debug!(
        fractional_digits = n,
        coefficient_digits = coefficient.digits().len(),
        "expanded quotient to fixed point",
    );

    Ok(FixedPoint { coefficient, negative_exponent: n })
}
