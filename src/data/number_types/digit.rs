//! # Digits
//!
//! A magnitude is stored as a sequence of fixed width unsigned digits, least significant digit
//! first. All arithmetic is generic over the width of such a digit; every width names a type twice
//! as wide that holds any product of two digits, or a two digit dividend.
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num::{PrimInt, Unsigned};
use smallvec::SmallVec;

/// Storage of a magnitude, least significant digit first.
///
/// Most numbers in practice fit in a few digits, those are kept inline.
pub type Digits<D> = SmallVec<[D; 4]>;

/// An unsigned integer that can act as a single digit of a big integer.
///
/// The radix of a digit sequence is `2^BITS`.
pub trait Digit: PrimInt + Unsigned + Default + Debug + Display + Hash + 'static {
    /// Unsigned integer type of twice the width.
    type Wide: PrimInt + Unsigned + From<Self> + Debug;

    /// Width of the digit in bits.
    const BITS: u32;
    /// Largest `k` such that `10^k` fits in a single digit.
    ///
    /// Decimal conversion works with groups of this many decimal digits at a time.
    const DECIMAL_GROUP: u32;
    /// `10^DECIMAL_GROUP`
    const DECIMAL_GROUP_BASE: Self;

    /// Keep only the lowest `BITS` bits.
    fn truncate(wide: Self::Wide) -> Self;
    /// Keep only the lowest `BITS` bits.
    fn from_u128_truncating(value: u128) -> Self;
    /// Lossless widening to the widest primitive.
    fn as_u128(self) -> u128;

    /// Add with an incoming carry, returning the sum digit and the outgoing carry.
    fn add_carry(self, rhs: Self, carry: bool) -> (Self, bool);
    /// Subtract with an incoming borrow, returning the difference digit and the outgoing borrow.
    fn sub_borrow(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// `(high << BITS) | low`
    fn join(high: Self, low: Self) -> Self::Wide {
        (Self::Wide::from(high) << Self::BITS as usize) | Self::Wide::from(low)
    }

    /// Full product of two digits.
    ///
    /// # Return value
    ///
    /// The `(low, high)` digits of the product.
    fn mul_wide(self, rhs: Self) -> (Self, Self) {
        let product = Self::Wide::from(self) * Self::Wide::from(rhs);
        (Self::truncate(product), Self::truncate(product >> Self::BITS as usize))
    }

    /// Divide the two digit number `(high, low)` by a single digit.
    ///
    /// The caller guarantees that `high < divisor`, such that the quotient fits in a single digit,
    /// and that the divisor is not zero.
    ///
    /// # Return value
    ///
    /// Quotient and remainder.
    fn div_wide(high: Self, low: Self, divisor: Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero());
        debug_assert!(high < divisor);

        let dividend = Self::join(high, low);
        let divisor = Self::Wide::from(divisor);
        (Self::truncate(dividend / divisor), Self::truncate(dividend % divisor))
    }
}

macro_rules! digit {
    ($t:ty, $w:ty, $group:expr) => {
        impl Digit for $t {
            type Wide = $w;

            const BITS: u32 = (std::mem::size_of::<$t>() * 8) as u32;
            const DECIMAL_GROUP: u32 = $group;
            const DECIMAL_GROUP_BASE: Self = (10 as $t).pow($group);

            #[inline]
            fn truncate(wide: Self::Wide) -> Self {
                wide as $t
            }

            #[inline]
            fn from_u128_truncating(value: u128) -> Self {
                value as $t
            }

            #[inline]
            fn as_u128(self) -> u128 {
                self as u128
            }

            #[inline]
            fn add_carry(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (sum, first) = self.overflowing_add(rhs);
                let (sum, second) = sum.overflowing_add(carry as $t);
                (sum, first || second)
            }

            #[inline]
            fn sub_borrow(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (difference, first) = self.overflowing_sub(rhs);
                let (difference, second) = difference.overflowing_sub(borrow as $t);
                (difference, first || second)
            }
        }
    }
}

digit!(u8, u16, 2);
digit!(u16, u32, 4);
digit!(u32, u64, 9);
digit!(u64, u128, 19);
