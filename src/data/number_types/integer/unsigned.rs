//! # Magnitudes
//!
//! Arithmetic on unsigned digit sequences, ignoring any sign.
//!
//! Digit sequences are stored least significant digit first. Unless documented otherwise, inputs
//! are expected in normalized form (no most significant zero digits, the empty sequence being
//! zero) and all results are normalized.
use std::cmp::Ordering;
use std::iter;

use itertools::{EitherOrBoth, Itertools};
use num::{One, Zero};
use smallvec::smallvec;
use tracing::trace;

use crate::data::number_types::digit::{Digit, Digits};
use crate::error::Error;

/// Direction of a whole-digit shift.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Towards {
    /// Multiply by a power of the radix.
    MostSignificant,
    /// Divide by a power of the radix, discarding the lowest digits.
    LeastSignificant,
}

/// Whether all digits are zero.
///
/// Also accepts sequences that are not normalized.
pub fn is_zero_n<D: Digit>(digits: &[D]) -> bool {
    digits.iter().all(|digit| digit.is_zero())
}

/// Whether the sequence has no most significant zero digits.
pub fn is_normalized<D: Digit>(digits: &[D]) -> bool {
    digits.last().map_or(true, |digit| !digit.is_zero())
}

/// Compare two magnitudes.
///
/// A longer normalized sequence is always larger; sequences of equal length compare from the most
/// significant digit down.
pub fn cmp_n<D: Digit>(a: &[D], b: &[D]) -> Ordering {
    debug_assert!(is_normalized(a));
    debug_assert!(is_normalized(b));

    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}

/// Remove redundant most significant zero digits.
pub fn normalize<D: Digit>(digits: &mut Digits<D>) {
    let length = digits.iter()
        .rposition(|digit| !digit.is_zero())
        .map_or(0, |index| index + 1);
    digits.truncate(length);
}

/// The `n`-th digit, counting from the least significant digit at index 0.
///
/// Digits beyond the length of the sequence are zero.
pub fn digit_n<D: Digit>(digits: &[D], n: usize) -> D {
    digits.get(n).copied().unwrap_or_else(D::zero)
}

/// Shift by a whole number of digits.
///
/// Shifting towards the most significant digit multiplies by `radix^offset`. Shifting towards the
/// least significant digit discards the `offset` lowest digits, leaving zero if there are not more
/// than that.
pub fn shift_n<D: Digit>(digits: &mut Digits<D>, offset: usize, towards: Towards) {
    match towards {
        Towards::MostSignificant => if !digits.is_empty() {
            digits.insert_many(0, iter::repeat(D::zero()).take(offset));
        },
        Towards::LeastSignificant => if offset < digits.len() {
            digits.drain(..offset);
        } else {
            digits.clear();
        },
    }
}

/// Shift in place by less than the width of a single digit.
///
/// # Arguments
///
/// * `digits`: Sequence to shift, doesn't need to be normalized.
/// * `offset`: Number of bits, positive shifts towards the most significant digit.
///
/// # Return value
///
/// The bits shifted out of the sequence. When shifting left, these form a new most significant
/// digit that the caller should append if the value should be preserved. When shifting right, they
/// are the discarded low bits, aligned at the top of the digit.
pub fn bit_shift<D: Digit>(digits: &mut [D], offset: i32) -> D {
    debug_assert!(offset.unsigned_abs() < D::BITS);

    let shift = offset.unsigned_abs() as usize;
    let back = D::BITS as usize - shift;
    let mut carry = D::zero();
    match offset.cmp(&0) {
        Ordering::Greater => for digit in digits.iter_mut() {
            let shifted = (*digit << shift) | carry;
            carry = *digit >> back;
            *digit = shifted;
        },
        Ordering::Less => for digit in digits.iter_mut().rev() {
            let shifted = (*digit >> shift) | carry;
            carry = *digit << back;
            *digit = shifted;
        },
        Ordering::Equal => {},
    }

    carry
}

/// Sum of two magnitudes.
pub fn add_n<D: Digit>(a: &[D], b: &[D]) -> Digits<D> {
    let mut carry = false;
    let mut sum = a.iter().zip_longest(b)
        .map(|pair| {
            let (x, y) = match pair {
                EitherOrBoth::Both(&x, &y) => (x, y),
                EitherOrBoth::Left(&x) | EitherOrBoth::Right(&x) => (x, D::zero()),
            };
            let (digit, next) = x.add_carry(y, carry);
            carry = next;
            digit
        })
        .collect::<Digits<D>>();

    if carry {
        sum.push(D::one());
    }

    sum
}

/// Difference of two magnitudes.
///
/// The caller guarantees that `a >= b`.
pub fn sub_n<D: Digit>(a: &[D], b: &[D]) -> Digits<D> {
    debug_assert_ne!(cmp_n(a, b), Ordering::Less);

    let mut borrow = false;
    let mut difference = a.iter().zip_longest(b)
        .map(|pair| {
            let (x, y) = match pair {
                EitherOrBoth::Both(&x, &y) => (x, y),
                EitherOrBoth::Left(&x) => (x, D::zero()),
                EitherOrBoth::Right(_) => unreachable!("Minuend is at least as long as subtrahend"),
            };
            let (digit, next) = x.sub_borrow(y, borrow);
            borrow = next;
            digit
        })
        .collect::<Digits<D>>();
    debug_assert!(!borrow);

    normalize(&mut difference);
    difference
}

/// Product of two magnitudes.
///
/// Grade school long multiplication. Every partial product is computed in the wide type, where
/// `digit * digit + digit + digit` can't overflow.
pub fn mul_n<D: Digit>(a: &[D], b: &[D]) -> Digits<D> {
    if a.is_empty() || b.is_empty() {
        return Digits::new();
    }

    let mut product: Digits<D> = smallvec![D::zero(); a.len() + b.len()];
    for (j, &y) in b.iter().enumerate() {
        if y.is_zero() {
            continue;
        }

        let mut carry = D::zero();
        for (i, &x) in a.iter().enumerate() {
            let (low, high) = x.mul_wide(y);
            let (low, first) = low.add_carry(carry, false);
            let (low, second) = low.add_carry(product[i + j], false);
            product[i + j] = low;
            // `high <= radix - 2`, so adding both carries stays within a digit
            carry = high + if first { D::one() } else { D::zero() } + if second { D::one() } else { D::zero() };
        }
        product[j + a.len()] = carry;
    }

    normalize(&mut product);
    product
}

/// Compute `digits * multiplier + addend` in place.
///
/// Used to accumulate values digit group by digit group, e.g. when reading decimal strings.
pub fn mul_add_digit<D: Digit>(digits: &mut Digits<D>, multiplier: D, addend: D) {
    let mut carry = addend;
    for digit in digits.iter_mut() {
        let (low, high) = digit.mul_wide(multiplier);
        let (low, overflow) = low.add_carry(carry, false);
        *digit = low;
        carry = if overflow { high + D::one() } else { high };
    }

    if !carry.is_zero() {
        digits.push(carry);
    }
    normalize(digits);
}

/// Divide by a single digit.
///
/// Works from the most significant digit down, dividing a two digit value consisting of the
/// running remainder and the next digit at every step.
///
/// # Return value
///
/// Quotient and remainder.
///
/// # Errors
///
/// If the divisor is zero.
pub fn div_short_n<D: Digit>(u: &[D], v: D) -> Result<(Digits<D>, D), Error> {
    if v.is_zero() {
        return Err(Error::DivideByZero);
    }

    let mut quotient: Digits<D> = smallvec![D::zero(); u.len()];
    let mut remainder = D::zero();
    for j in (0..u.len()).rev() {
        let (digit, next) = D::div_wide(remainder, u[j], v);
        quotient[j] = digit;
        remainder = next;
    }

    normalize(&mut quotient);
    Ok((quotient, remainder))
}

/// Divide two magnitudes.
///
/// Single digit divisors use short division, longer divisors Algorithm D from The Art of Computer
/// Programming, volume 2, section 4.3.1.
///
/// # Return value
///
/// Quotient and remainder.
///
/// # Errors
///
/// If the divisor is zero.
pub fn div_n<D: Digit>(u: &[D], v: &[D]) -> Result<(Digits<D>, Digits<D>), Error> {
    if is_zero_n(v) {
        return Err(Error::DivideByZero);
    }
    if u.is_empty() {
        return Ok((Digits::new(), Digits::new()));
    }

    match cmp_n(u, v) {
        Ordering::Less => Ok((Digits::new(), Digits::from_slice(u))),
        Ordering::Equal => Ok((smallvec![D::one()], Digits::new())),
        Ordering::Greater if v.len() == 1 => {
            let (quotient, remainder) = div_short_n(u, v[0])?;
            let mut remainder: Digits<D> = smallvec![remainder];
            normalize(&mut remainder);
            Ok((quotient, remainder))
        },
        Ordering::Greater => Ok(div_long(u, v)),
    }
}

/// Algorithm D, for `u > v` and `v` at least two digits long.
fn div_long<D: Digit>(u: &[D], v: &[D]) -> (Digits<D>, Digits<D>) {
    let n = v.len();
    let m = u.len() - n;
    debug_assert!(n >= 2);

    // D1: normalize, such that the top bit of the divisor is set
    let shift = v[n - 1].leading_zeros() as i32;
    let mut v = Digits::from_slice(v);
    let overflow = bit_shift(&mut v, shift);
    debug_assert!(overflow.is_zero());
    let mut u = Digits::from_slice(u);
    let overflow = bit_shift(&mut u, shift);
    u.push(overflow);

    let radix = D::Wide::one() << D::BITS as usize;
    let v_top = D::Wide::from(v[n - 1]);
    let v_next = D::Wide::from(v[n - 2]);

    let mut quotient: Digits<D> = smallvec![D::zero(); m + 1];
    // D2, D7: loop over the quotient digits from the most significant one down
    for j in (0..=m).rev() {
        // D3: estimate the quotient digit from the top two digits, it is at most two too large
        let numerator = D::join(u[j + n], u[j + n - 1]);
        let mut q_hat = numerator / v_top;
        let mut r_hat = numerator % v_top;
        while q_hat >= radix
            || q_hat * v_next > (r_hat << D::BITS as usize) + D::Wide::from(u[j + n - 2]) {
            q_hat = q_hat - D::Wide::one();
            r_hat = r_hat + v_top;
            if r_hat >= radix {
                break;
            }
        }
        debug_assert!(q_hat < radix);

        // D4: multiply and subtract
        let mut carry = D::Wide::zero();
        let mut borrow = false;
        for i in 0..n {
            let product = q_hat * D::Wide::from(v[i]) + carry;
            carry = product >> D::BITS as usize;
            let (difference, next) = u[i + j].sub_borrow(D::truncate(product), borrow);
            u[i + j] = difference;
            borrow = next;
        }
        let (difference, negative) = u[j + n].sub_borrow(D::truncate(carry), borrow);
        u[j + n] = difference;

        let mut q_digit = D::truncate(q_hat);
        // D5, D6: the estimate was one too large, add the divisor back once
        if negative {
            trace!(position = j, "quotient digit estimate too large, adding divisor back");
            q_digit = q_digit - D::one();
            let mut carry = false;
            for i in 0..n {
                let (sum, next) = u[i + j].add_carry(v[i], carry);
                u[i + j] = sum;
                carry = next;
            }
            // The carry out of the top digit cancels the borrow of the subtraction
            u[j + n] = u[j + n].add_carry(D::zero(), carry).0;
        }
        quotient[j] = q_digit;
    }

    // D8: unnormalize the remainder
    u.truncate(n);
    bit_shift(&mut u, -shift);
    normalize(&mut u);
    normalize(&mut quotient);

    (quotient, u)
}

/// Raise a magnitude to a power, by repeated squaring.
///
/// Any number to the power zero, including zero itself, is one.
pub fn pow_n<D: Digit>(base: &[D], mut exponent: usize) -> Digits<D> {
    let mut result: Digits<D> = smallvec![D::one()];
    let mut square = Digits::from_slice(base);
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_n(&result, &square);
        }
        exponent >>= 1;
        if exponent > 0 {
            square = mul_n(&square, &square);
        }
    }

    result
}
