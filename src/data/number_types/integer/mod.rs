//! # Integers
//!
//! Arbitrary precision signed integers in sign-magnitude representation.
use std::cmp::Ordering;
use std::convert::TryFrom;

use num::{One, ToPrimitive, Zero};
use smallvec::smallvec;

use crate::data::number_types::digit::{Digit, Digits};
use crate::data::number_types::integer::unsigned::{cmp_n, digit_n, normalize, shift_n, Towards};
use crate::data::number_types::sign::Sign;

pub mod signed;
pub mod unsigned;

/// A big integer.
///
/// The magnitude is stored in `D` digits, least significant digit first, always normalized: there
/// are no most significant zero digits and the value zero has no digits at all. Zero is never
/// negative.
#[derive(Eq, PartialEq, Clone, Debug, Hash, Default)]
pub struct Z<D: Digit = u64> {
    digits: Digits<D>,
    sign: Sign,
}

impl<D: Digit> Z<D> {
    /// Create a new integer from a magnitude and a sign.
    ///
    /// The digits don't need to be normalized, and the sign is ignored when the value is zero.
    pub fn from_parts(mut digits: Digits<D>, sign: Sign) -> Self {
        normalize(&mut digits);
        let sign = if digits.is_empty() { Sign::NonNegative } else { sign };

        Self { digits, sign }
    }

    /// Create a new non negative integer from a magnitude.
    pub fn from_magnitude(digits: Digits<D>) -> Self {
        Self::from_parts(digits, Sign::NonNegative)
    }

    fn from_u128(mut magnitude: u128, sign: Sign) -> Self {
        let mut digits = Digits::new();
        while magnitude > 0 {
            digits.push(D::from_u128_truncating(magnitude));
            magnitude >>= D::BITS;
        }

        Self::from_parts(digits, sign)
    }

    /// Digits of the magnitude, least significant digit first.
    pub fn digits(&self) -> &[D] {
        &self.digits
    }

    /// Split into normalized magnitude and sign.
    pub fn into_parts(self) -> (Digits<D>, Sign) {
        (self.digits, self.sign)
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// The `n`-th digit of the magnitude, zero beyond the most significant digit.
    pub fn digit(&self, n: usize) -> D {
        digit_n(&self.digits, n)
    }

    /// Compare absolute values.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        cmp_n(&self.digits, &other.digits)
    }

    /// Shift the magnitude in place by a whole number of digits.
    ///
    /// See [`unsigned::shift_n`].
    pub fn shift_digits(&mut self, offset: usize, towards: Towards) {
        shift_n(&mut self.digits, offset, towards);
        if self.digits.is_empty() {
            self.sign = Sign::NonNegative;
        }
    }

    /// Number of significant bits of the magnitude.
    pub fn bits(&self) -> usize {
        match self.digits.last() {
            None => 0,
            Some(top) => {
                self.digits.len() * D::BITS as usize - top.leading_zeros() as usize
            },
        }
    }

    fn magnitude_u128(&self) -> Option<u128> {
        if self.bits() > 128 {
            return None;
        }

        Some(self.digits.iter().rev().fold(0, |total, digit| (total << D::BITS) | digit.as_u128()))
    }
}

impl<D: Digit> PartialOrd for Z<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Digit> Ord for Z<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::NonNegative, Sign::NonNegative) => self.cmp_magnitude(other),
            (Sign::Negative, Sign::Negative) => self.cmp_magnitude(other).reverse(),
            (left, right) => left.cmp(&right),
        }
    }
}

impl<D: Digit> Zero for Z<D> {
    fn zero() -> Self {
        Self { digits: Digits::new(), sign: Sign::NonNegative }
    }

    fn set_zero(&mut self) {
        self.digits.clear();
        self.sign = Sign::NonNegative;
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl<D: Digit> One for Z<D> {
    fn one() -> Self {
        Self { digits: smallvec![D::one()], sign: Sign::NonNegative }
    }

    fn set_one(&mut self) {
        self.digits.clear();
        self.digits.push(D::one());
        self.sign = Sign::NonNegative;
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::NonNegative && self.digits[..] == [D::one()]
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl<D: Digit> From<$t> for Z<D> {
                fn from(value: $t) -> Self {
                    Self::from_u128(value as u128, Sign::NonNegative)
                }
            }
        )*
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(
            impl<D: Digit> From<$t> for Z<D> {
                fn from(value: $t) -> Self {
                    Self::from_u128(value.unsigned_abs() as u128, Sign::from_negative(value < 0))
                }
            }
        )*
    }
}

from_unsigned!(u8, u16, u32, u64, u128, usize);
from_signed!(i8, i16, i32, i64, i128, isize);

impl<D: Digit> ToPrimitive for Z<D> {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|value| i64::try_from(value).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|value| u64::try_from(value).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        match self.sign {
            Sign::NonNegative => i128::try_from(magnitude).ok(),
            Sign::Negative => if magnitude <= i128::MIN.unsigned_abs() {
                Some((magnitude as i128).wrapping_neg())
            } else {
                None
            },
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match self.sign {
            Sign::NonNegative => self.magnitude_u128(),
            Sign::Negative => None,
        }
    }

    /// Approximate `f64` value, infinite when out of range.
    ///
    /// Digits are folded in from the most significant one, so every step rounds to nearest. The
    /// result can be above or below the exact value in magnitude.
    fn to_f64(&self) -> Option<f64> {
        let radix = 2_f64.powi(D::BITS as i32);
        let magnitude = self.digits.iter().rev()
            .fold(0_f64, |total, digit| total * radix + digit.as_u128() as f64);

        Some(match self.sign {
            Sign::NonNegative => magnitude,
            Sign::Negative => -magnitude,
        })
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use num::{One, ToPrimitive, Zero};
    use smallvec::smallvec;

    use crate::data::number_types::integer::unsigned::Towards;
    use crate::data::number_types::integer::Z;
    use crate::data::number_types::sign::Sign;

    #[test]
    fn is_zero() {
        assert!(Z::<u32>::zero().is_zero());
        assert!(Z::<u32>::from(0).is_zero());
        assert!(!Z::<u32>::from(1_u32).is_zero());
        assert!(!Z::<u32>::from(-2).is_zero());
    }

    #[test]
    fn identity() {
        let one = Z::<u32>::one();
        assert!(!one.is_zero());
        assert!(one.is_one());
        assert_eq!(one, Z::from(1_u32));
    }

    #[test]
    fn from_unsigned() {
        let zero = Z::<u32>::from(0_u32);
        assert!(zero.digits().is_empty());
        assert_eq!(zero.sign(), Sign::NonNegative);

        let one = Z::<u32>::from(1_u32);
        assert_eq!(one.sign(), Sign::NonNegative);
        assert_eq!(one.digits(), &[1]);

        assert_eq!(Z::<u8>::from(257_u32).digits(), &[1, 1]);
        assert_eq!(Z::<u32>::from(4294967296_u64).digits(), &[0, 1]);
        assert_eq!(Z::<u32>::from(943988731981237123_u64).digits(), &[297175939, 219789504]);
        assert_eq!(Z::<u64>::from(u128::MAX).digits(), &[u64::MAX, u64::MAX]);
    }

    #[test]
    fn from_signed() {
        let zero = Z::<u32>::from(0);
        assert!(zero.digits().is_empty());
        assert!(!zero.is_negative());

        let minus_one = Z::<u32>::from(-1);
        assert!(minus_one.is_negative());
        assert_eq!(minus_one.digits(), &[1]);

        let number = Z::<u8>::from(-257);
        assert!(number.is_negative());
        assert_eq!(number.digits(), &[1, 1]);

        let number = Z::<u32>::from(-4294967297_i64);
        assert!(number.is_negative());
        assert_eq!(number.digits(), &[1, 1]);

        let number = Z::<u16>::from(i128::MIN);
        assert!(number.is_negative());
        assert_eq!(number.bits(), 128);
    }

    #[test]
    fn from_parts() {
        let zero = Z::<u8>::from_parts(smallvec![0, 0, 0], Sign::Negative);
        assert!(zero.is_zero());
        assert_eq!(zero.sign(), Sign::NonNegative);

        let number = Z::<u8>::from_parts(smallvec![57, 48, 0, 0], Sign::Negative);
        assert_eq!(number, Z::from(-(48 * 256 + 57)));
        assert_eq!(number.digits().len(), 2);
    }

    #[test]
    fn ordering() {
        let values = [-70000, -300, -1, 0, 1, 2, 255, 256, 70000];
        for (i, &a) in values.iter().enumerate() {
            for (j, &b) in values.iter().enumerate() {
                assert_eq!(Z::<u8>::from(a).cmp(&Z::from(b)), i.cmp(&j));
            }
        }

        assert_eq!(Z::<u8>::from(-300).cmp_magnitude(&Z::from(1)), Ordering::Greater);
        assert_eq!(Z::<u8>::from(-300).cmp_magnitude(&Z::from(300)), Ordering::Equal);
    }

    #[test]
    fn shift_digits() {
        let mut number = Z::<u8>::from(-1);
        number.shift_digits(2, Towards::MostSignificant);
        assert_eq!(number, Z::from(-65536));
        number.shift_digits(3, Towards::LeastSignificant);
        assert!(number.is_zero());
        assert!(!number.is_negative());
    }

    #[test]
    fn digit() {
        let number = Z::<u8>::from(41312);
        assert_eq!(number.digit(0), 0x60);
        assert_eq!(number.digit(1), 0xa1);
        assert_eq!(number.digit(2), 0);
        assert_eq!(Z::<u8>::zero().digit(100), 0);
    }

    #[test]
    fn bits() {
        assert_eq!(Z::<u8>::zero().bits(), 0);
        assert_eq!(Z::<u8>::one().bits(), 1);
        assert_eq!(Z::<u8>::from(256).bits(), 9);
        assert_eq!(Z::<u64>::from(u64::MAX).bits(), 64);
    }

    #[test]
    fn to_primitive() {
        assert_eq!(Z::<u8>::from(-12345).to_i64(), Some(-12345));
        assert_eq!(Z::<u8>::from(-12345).to_u64(), None);
        assert_eq!(Z::<u16>::from(i128::MIN).to_i128(), Some(i128::MIN));
        assert_eq!(Z::<u16>::from(i128::MIN).to_i64(), None);
        assert_eq!(Z::<u32>::from(u128::MAX).to_u128(), Some(u128::MAX));
        assert_eq!(Z::<u32>::from(u128::MAX).to_i128(), None);
        assert_eq!(Z::<u64>::from(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(Z::<u8>::zero().to_u8(), Some(0));
        assert_eq!(Z::<u8>::from(-3).to_f64(), Some(-3.0));
        assert_eq!(Z::<u32>::from(1_u64 << 40).to_f64(), Some(1099511627776.0));
    }

    #[test]
    fn to_f64_rounding() {
        // 2^64 - 1 needs more bits than an f64 has and rounds up to 2^64
        assert_eq!(Z::<u8>::from(u64::MAX).to_f64(), Some(18446744073709551616.0));
        assert_eq!(Z::<u16>::from(-(u64::MAX as i128)).to_f64(), Some(-18446744073709551616.0));
        assert_eq!(Z::<u64>::from(u128::MAX).to_f64(), Some(u128::MAX as f64));

        let huge = Z::<u64>::one().mul_2exp(2000);
        assert_eq!(huge.to_f64(), Some(f64::INFINITY));
        assert_eq!((-huge).to_f64(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn from_magnitude() {
        let value = Z::<u8>::from_magnitude(smallvec![1, 1, 0]);
        assert_eq!(value, Z::from(257));
        assert_eq!(value.sign(), Sign::NonNegative);
        assert_eq!(value.digits(), &[1, 1]);

        assert!(Z::<u16>::from_magnitude(smallvec![0, 0]).is_zero());
        assert!(Z::<u16>::from_magnitude(smallvec![]).is_zero());
    }

    #[test]
    fn into_parts() {
        let (digits, sign) = Z::<u8>::from(-257).into_parts();
        assert_eq!(digits.as_slice(), &[1, 1]);
        assert_eq!(sign, Sign::Negative);

        let (digits, sign) = Z::<u32>::zero().into_parts();
        assert!(digits.is_empty());
        assert_eq!(sign, Sign::NonNegative);

        let value = Z::<u16>::from(-70000);
        let (digits, sign) = value.clone().into_parts();
        assert_eq!(Z::from_parts(digits, sign), value);
    }
}
