//! # Writing decimal numbers
use std::fmt;

use crate::data::number_types::digit::{Digit, Digits};
use crate::data::number_types::integer::unsigned::{mul_n, normalize, pow_n, shift_n, Towards};
use crate::data::number_types::integer::Z;
use crate::data::number_types::rational::FixedPoint;

/// Decimal representation of a magnitude, without sign.
///
/// Repeatedly divides by the largest power of ten that fits in a digit; every remainder is a group
/// of decimal digits.
fn magnitude_to_decimal<D: Digit>(digits: &[D]) -> String {
    let mut rest: Digits<D> = digits.into();
    normalize(&mut rest);

    let mut groups = Vec::new();
    while !rest.is_empty() {
        let mut remainder = D::zero();
        for digit in rest.iter_mut().rev() {
            let (quotient, next) = D::div_wide(remainder, *digit, D::DECIMAL_GROUP_BASE);
            *digit = quotient;
            remainder = next;
        }
        normalize(&mut rest);
        groups.push(remainder);
    }

    match groups.split_last() {
        None => "0".to_string(),
        Some((most_significant, rest)) => {
            let width = D::DECIMAL_GROUP as usize;
            let mut text = most_significant.to_string();
            text.reserve(rest.len() * width);
            for group in rest.iter().rev() {
                text.push_str(&format!("{:0width$}", group, width = width));
            }
            text
        },
    }
}

/// Decimal representation of an integer, with a leading `-` if it is negative.
pub fn to_decimal_string<D: Digit>(value: &Z<D>) -> String {
    value.to_string()
}

/// Decimal representation of a fixed-point number.
///
/// # Arguments
///
/// * `value`: Number to write.
/// * `precision`: Exact number of decimal digits after the point. The fraction is truncated, not
/// rounded. No point is written when this is zero.
pub fn fixed_to_decimal_string<D: Digit>(value: &FixedPoint<D>, precision: usize) -> String {
    let (sign, body) = fixed_to_unsigned_decimal(value, precision);
    if sign { format!("-{}", body) } else { body }
}

/// Returns whether the value is negative, and the decimal text of its absolute value.
fn fixed_to_unsigned_decimal<D: Digit>(value: &FixedPoint<D>, precision: usize) -> (bool, String) {
    let digits = value.coefficient().digits();
    let split = value.negative_exponent().min(digits.len());
    let (fraction, integer) = digits.split_at(split);

    let mut text = magnitude_to_decimal(integer);
    if precision > 0 {
        let mut fraction: Digits<D> = fraction.into();
        normalize(&mut fraction);
        let ten = Z::<D>::from(10_u8);
        let mut scaled = mul_n(&fraction, &pow_n(ten.digits(), precision));
        shift_n(&mut scaled, value.negative_exponent(), Towards::LeastSignificant);

        let decimals = if scaled.is_empty() { String::new() } else { magnitude_to_decimal(&scaled) };
        debug_assert!(decimals.len() <= precision);
        text.push('.');
        text.push_str(&"0".repeat(precision - decimals.len()));
        text.push_str(&decimals);
    }

    (value.coefficient().is_negative(), text)
}

impl<D: Digit> fmt::Display for Z<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &magnitude_to_decimal(self.digits()))
    }
}

/// Uses the formatter precision as the number of decimals, defaulting to
/// [`FixedPoint::decimal_precision`].
impl<D: Digit> fmt::Display for FixedPoint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or_else(|| self.decimal_precision());
        let (negative, body) = fixed_to_unsigned_decimal(self, precision);
        f.pad_integral(!negative, "", &body)
    }
}

#[cfg(test)]
mod test {
    use num::Zero;

    use crate::data::number_types::integer::Z;
    use crate::data::number_types::rational::FixedPoint;
    use crate::io::decimal::format::{fixed_to_decimal_string, magnitude_to_decimal, to_decimal_string};

    #[test]
    fn zero() {
        assert_eq!(to_decimal_string(&Z::<u8>::zero()), "0");
        assert_eq!(to_decimal_string(&Z::<u64>::from(0)), "0");
        assert_eq!(magnitude_to_decimal::<u16>(&[0, 0]), "0");
    }

    #[test]
    fn group_padding() {
        assert_eq!(Z::<u8>::from(100).to_string(), "100");
        assert_eq!(Z::<u8>::from(10001).to_string(), "10001");
        assert_eq!(Z::<u16>::from(1_0000_0007).to_string(), "100000007");
        assert_eq!(Z::<u32>::from(1_000_000_000_000_000_000_u64).to_string(), "1000000000000000000");
        assert_eq!(Z::<u64>::from(u128::MAX).to_string(), "340282366920938463463374607431768211455");
        assert_eq!(Z::<u64>::from(i128::MIN).to_string(), i128::MIN.to_string());
    }

    #[test]
    fn signs() {
        assert_eq!(Z::<u32>::from(-123).to_string(), "-123");
        assert_eq!(Z::<u32>::from(123).to_string(), "123");
    }

    #[test]
    fn formatter_flags() {
        assert_eq!(format!("{:>6}", Z::<u8>::from(-42)), "   -42");
        assert_eq!(format!("{:06}", Z::<u8>::from(-42)), "-00042");
        assert_eq!(format!("{:+}", Z::<u8>::from(42)), "+42");
    }

    #[test]
    fn round_trip() {
        for text in &["0", "-1", "255", "256", "-65535", "12345678901234567890123456789012345678901234567890"] {
            assert_eq!(text.parse::<Z<u8>>().unwrap().to_string(), *text);
            assert_eq!(text.parse::<Z<u16>>().unwrap().to_string(), *text);
            assert_eq!(text.parse::<Z<u32>>().unwrap().to_string(), *text);
            assert_eq!(text.parse::<Z<u64>>().unwrap().to_string(), *text);
        }
    }

    #[test]
    fn fixed_point() {
        // 4 + 1/4
        let value = FixedPoint::new(Z::<u8>::from(4 * 256 + 64), 1);
        assert_eq!(fixed_to_decimal_string(&value, 0), "4");
        assert_eq!(fixed_to_decimal_string(&value, 1), "4.2");
        assert_eq!(fixed_to_decimal_string(&value, 4), "4.2500");
        assert_eq!(value.to_string(), "4.25");

        // -(1/256)
        let value = FixedPoint::new(Z::<u8>::from(-1), 1);
        assert_eq!(fixed_to_decimal_string(&value, 10), "-0.0039062500");
        assert_eq!(fixed_to_decimal_string(&value, 2), "-0.00");

        // Fraction digits beyond the coefficient's length
        let value = FixedPoint::new(Z::<u8>::from(128), 3);
        assert_eq!(fixed_to_decimal_string(&value, 8), "0.00000762");

        assert_eq!(fixed_to_decimal_string(&FixedPoint::new(Z::<u16>::zero(), 2), 3), "0.000");
        assert_eq!(format!("{:>8.2}", FixedPoint::new(Z::<u8>::from(-384), 1)), "   -1.50");
    }

    #[test]
    fn fixed_point_long_precision() {
        // 1/256 has eight significant decimals, the rest is padding
        let value = FixedPoint::new(Z::<u8>::from(1), 1);
        let text = fixed_to_decimal_string(&value, 300);
        assert_eq!(text.len(), 302);
        assert!(text.starts_with("0.00390625"));
        assert!(text[10..].bytes().all(|byte| byte == b'0'));
    }
}
