use std::cmp::Ordering;
use std::ops::{Mul, Neg};

/// Sign of an integer.
///
/// Zero is non negative; there is no separate variant for it, because a negative zero should never
/// be constructed and a third variant creates many match arms that should never be reached.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// `x >= 0`
    NonNegative,
    /// `x < 0`
    Negative,
}

impl Sign {
    /// Whether `x < 0`.
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    /// Sign of a value, given whether it is negative.
    pub fn from_negative(negative: bool) -> Self {
        if negative { Sign::Negative } else { Sign::NonNegative }
    }
}

impl Default for Sign {
    fn default() -> Self {
        Sign::NonNegative
    }
}

impl PartialOrd for Sign {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sign {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Sign::NonNegative, Sign::NonNegative) | (Sign::Negative, Sign::Negative) => Ordering::Equal,
            (Sign::NonNegative, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::NonNegative) => Ordering::Less,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::NonNegative, Sign::NonNegative) => Sign::NonNegative,
            (Sign::NonNegative, Sign::Negative) => Sign::Negative,
            (Sign::Negative, Sign::NonNegative) => Sign::Negative,
            (Sign::Negative, Sign::Negative) => Sign::NonNegative,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        }
    }
}
