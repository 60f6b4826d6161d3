//! # Signed arithmetic
//!
//! Combines the magnitude operations with sign logic. Division rounds the quotient towards
//! negative infinity, such that the remainder always has the sign of the divisor.
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use num::{CheckedDiv, Zero};

use crate::data::number_types::digit::Digit;
use crate::data::number_types::integer::unsigned::{
    add_n, bit_shift, cmp_n, div_n, mul_n, normalize, pow_n, shift_n, sub_n, Towards,
};
use crate::data::number_types::integer::Z;
use crate::data::number_types::sign::Sign;
use crate::data::number_types::traits::NegAssign;
use crate::error::Error;

/// `lhs + (sign * rhs_digits)`
fn add_signed<D: Digit>(lhs: &Z<D>, rhs_digits: &[D], rhs_sign: Sign) -> Z<D> {
    if lhs.sign == rhs_sign {
        Z::from_parts(add_n(&lhs.digits, rhs_digits), lhs.sign)
    } else {
        match cmp_n(&lhs.digits, rhs_digits) {
            Ordering::Less => Z::from_parts(sub_n(rhs_digits, &lhs.digits), rhs_sign),
            Ordering::Equal | Ordering::Greater => {
                Z::from_parts(sub_n(&lhs.digits, rhs_digits), lhs.sign)
            },
        }
    }
}

/// Sum of two integers.
///
/// When the signs differ, the smaller magnitude is subtracted from the larger one and the result
/// takes the sign of the operand with the larger magnitude.
pub fn add_z<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Z<D> {
    add_signed(lhs, &rhs.digits, rhs.sign)
}

/// Difference of two integers.
pub fn sub_z<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Z<D> {
    if rhs.is_zero() {
        lhs.clone()
    } else {
        add_signed(lhs, &rhs.digits, -rhs.sign)
    }
}

/// Product of two integers.
pub fn mul_z<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Z<D> {
    Z::from_parts(mul_n(&lhs.digits, &rhs.digits), lhs.sign * rhs.sign)
}

/// Floor division.
///
/// # Return value
///
/// Quotient `q` and remainder `r` such that `lhs == rhs * q + r`, where `r` is zero or has the
/// same sign as `rhs`.
///
/// # Errors
///
/// If `rhs` is zero.
pub fn div_z<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Result<(Z<D>, Z<D>), Error> {
    let (quotient, remainder) = div_n(&lhs.digits, &rhs.digits)?;
    let quotient_sign = lhs.sign * rhs.sign;

    if quotient_sign.is_negative() && !remainder.is_empty() {
        // Truncation rounded towards zero, move one further down
        let quotient = add_n(&quotient, &[D::one()]);
        let remainder = sub_n(&rhs.digits, &remainder);
        Ok((Z::from_parts(quotient, Sign::Negative), Z::from_parts(remainder, rhs.sign)))
    } else {
        Ok((Z::from_parts(quotient, quotient_sign), Z::from_parts(remainder, rhs.sign)))
    }
}

/// Raise an integer to a power.
///
/// The exponent zero gives one, also for a zero base.
pub fn pow_z<D: Digit>(base: &Z<D>, exponent: u32) -> Z<D> {
    let sign = if exponent % 2 == 1 { base.sign } else { Sign::NonNegative };
    Z::from_parts(pow_n(&base.digits, exponent as usize), sign)
}

impl<D: Digit> Z<D> {
    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self { digits: self.digits.clone(), sign: Sign::NonNegative }
    }

    /// Raise to a power, see [`pow_z`].
    pub fn pow(&self, exponent: u32) -> Self {
        pow_z(self, exponent)
    }

    /// Floor division with remainder, see [`div_z`].
    pub fn div_rem_floor(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        div_z(self, rhs)
    }

    /// Bit `index` of the magnitude, counting from the least significant bit.
    pub fn bit(&self, index: usize) -> bool {
        let digit = self.digit(index / D::BITS as usize);
        (digit >> (index % D::BITS as usize)) & D::one() == D::one()
    }

    /// Multiply by `2^exponent` in place.
    pub fn mul_2exp_assign(&mut self, exponent: usize) {
        if self.is_zero() {
            return;
        }

        let whole_digits = exponent / D::BITS as usize;
        let bits = exponent % D::BITS as usize;
        let carry = bit_shift(&mut self.digits, bits as i32);
        if !carry.is_zero() {
            self.digits.push(carry);
        }
        shift_n(&mut self.digits, whole_digits, Towards::MostSignificant);
    }

    /// `self * 2^exponent`
    pub fn mul_2exp(&self, exponent: usize) -> Self {
        let mut result = self.clone();
        result.mul_2exp_assign(exponent);
        result
    }

    /// Divide by `2^exponent` in place, rounding to nearest.
    ///
    /// Ties round away from zero: the magnitude is rounded up when the highest discarded bit is
    /// set.
    pub fn round_div_2exp_assign(&mut self, exponent: usize) {
        if exponent == 0 || self.is_zero() {
            return;
        }

        let round_up = self.bit(exponent - 1);
        let whole_digits = exponent / D::BITS as usize;
        let bits = exponent % D::BITS as usize;
        shift_n(&mut self.digits, whole_digits, Towards::LeastSignificant);
        bit_shift(&mut self.digits, -(bits as i32));
        normalize(&mut self.digits);
        if round_up {
            self.digits = add_n(&self.digits, &[D::one()]);
        }
        if self.digits.is_empty() {
            self.sign = Sign::NonNegative;
        }
    }

    /// `self / 2^exponent`, rounded to nearest with ties away from zero.
    pub fn round_div_2exp(&self, exponent: usize) -> Self {
        let mut result = self.clone();
        result.round_div_2exp_assign(exponent);
        result
    }
}

impl<D: Digit> NegAssign for Z<D> {
    fn neg_assign(&mut self) {
        if !self.digits.is_empty() {
            self.sign = -self.sign;
        }
    }
}

impl<D: Digit> Neg for Z<D> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.neg_assign();
        self
    }
}

impl<D: Digit> Neg for &Z<D> {
    type Output = Z<D>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

/// # Panics
///
/// If `rhs` is zero, like the primitive integers. Use [`div_z`] to handle that case.
fn floor_quotient<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Z<D> {
    match div_z(lhs, rhs) {
        Ok((quotient, _)) => quotient,
        Err(error) => panic!("attempt to divide: {}", error),
    }
}

/// # Panics
///
/// If `rhs` is zero, like the primitive integers. Use [`div_z`] to handle that case.
fn floor_remainder<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Z<D> {
    match div_z(lhs, rhs) {
        Ok((_, remainder)) => remainder,
        Err(error) => panic!("attempt to calculate the remainder: {}", error),
    }
}

macro_rules! binary_operator {
    ($trait:ident, $method:ident, $function:ident) => {
        impl<D: Digit> $trait<&Z<D>> for &Z<D> {
            type Output = Z<D>;

            fn $method(self, rhs: &Z<D>) -> Self::Output {
                $function(self, rhs)
            }
        }

        impl<D: Digit> $trait<Z<D>> for Z<D> {
            type Output = Z<D>;

            fn $method(self, rhs: Z<D>) -> Self::Output {
                $function(&self, &rhs)
            }
        }

        impl<D: Digit> $trait<&Z<D>> for Z<D> {
            type Output = Z<D>;

            fn $method(self, rhs: &Z<D>) -> Self::Output {
                $function(&self, rhs)
            }
        }

        impl<D: Digit> $trait<Z<D>> for &Z<D> {
            type Output = Z<D>;

            fn $method(self, rhs: Z<D>) -> Self::Output {
                $function(self, &rhs)
            }
        }
    }
}

binary_operator!(Add, add, add_z);
binary_operator!(Sub, sub, sub_z);
binary_operator!(Mul, mul, mul_z);
binary_operator!(Div, div, floor_quotient);
binary_operator!(Rem, rem, floor_remainder);

macro_rules! assign_operator {
    ($trait:ident, $method:ident, $function:ident) => {
        impl<D: Digit> $trait<&Z<D>> for Z<D> {
            fn $method(&mut self, rhs: &Z<D>) {
                *self = $function(self, rhs);
            }
        }

        impl<D: Digit> $trait<Z<D>> for Z<D> {
            fn $method(&mut self, rhs: Z<D>) {
                *self = $function(self, &rhs);
            }
        }
    }
}

assign_operator!(AddAssign, add_assign, add_z);
assign_operator!(SubAssign, sub_assign, sub_z);
assign_operator!(MulAssign, mul_assign, mul_z);

impl<D: Digit> CheckedDiv for Z<D> {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        div_z(self, v).ok().map(|(quotient, _)| quotient)
    }
}
