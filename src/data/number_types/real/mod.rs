//! # Real numbers
//!
//! A real number is represented by a procedure that approximates it to any requested precision:
//! given a number of bits `n`, it produces an integer `x` such that `x / 2^n` is close to the
//! value. Expressions combine such procedures, requesting a little more precision from their
//! operands than they need themselves.
use std::fmt;
use std::rc::Rc;

use num::{FromPrimitive, ToPrimitive};
use tracing::trace;

use crate::data::number_types::digit::Digit;
use crate::data::number_types::integer::signed::div_z;
use crate::data::number_types::integer::Z;
use crate::error::Error;

pub use lazy::Lazy;

pub mod lazy;

/// Approximation of a real number at a given precision.
pub type Approximation<D> = Lazy<'static, Result<Z<D>, Error>>;

/// Produces approximations of a real number.
///
/// Cheap to clone, clones share the same procedure.
pub struct Evaluator<D: Digit = u64> {
    procedure: Rc<dyn Fn(usize) -> Approximation<D>>,
}

impl<D: Digit> Evaluator<D> {
    pub fn new(procedure: impl Fn(usize) -> Approximation<D> + 'static) -> Self {
        Self { procedure: Rc::new(procedure) }
    }

    /// Approximate with `n` bits after the binary point.
    ///
    /// Nothing is computed until the result is forced.
    pub fn evaluate(&self, n: usize) -> Approximation<D> {
        (self.procedure)(n)
    }
}

impl<D: Digit> Clone for Evaluator<D> {
    fn clone(&self) -> Self {
        Self { procedure: Rc::clone(&self.procedure) }
    }
}

impl<D: Digit> fmt::Debug for Evaluator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Evaluator")
    }
}

/// The rational number `p / q`, or the integer `p` without `q`.
///
/// Approximations are rounded down.
///
/// # Errors
///
/// Forcing an approximation fails if `q` is zero.
pub fn expr_q<D: Digit>(p: Z<D>, q: Option<Z<D>>) -> Evaluator<D> {
    Evaluator::new(move |n| {
        let (p, q) = (p.clone(), q.clone());
        Lazy::new(move || {
            trace!(precision = n, "approximating rational");
            let scaled = p.mul_2exp(n);
            match q {
                None => Ok(scaled),
                Some(q) => div_z(&scaled, &q).map(|(quotient, _)| quotient),
            }
        })
    })
}

/// Sum of two real numbers.
///
/// Both operands are approximated with two extra bits, the sum is rounded back to the requested
/// precision.
pub fn expr_add<D: Digit>(lhs: Evaluator<D>, rhs: Evaluator<D>) -> Evaluator<D> {
    Evaluator::new(move |n| {
        let rhs = rhs.clone();
        lhs.evaluate(n + 2).and_then(move |x| match x {
            Ok(x) => rhs.evaluate(n + 2).map(move |y| {
                trace!(precision = n, "rounding sum");
                y.map(|y| (x + y).round_div_2exp(2))
            }),
            Err(error) => Lazy::ready(Err(error)),
        })
    })
}

pub fn expr_neg<D: Digit>(operand: Evaluator<D>) -> Evaluator<D> {
    Evaluator::new(move |n| operand.evaluate(n).map(|x| x.map(|x| -x)))
}

/// Round a real number to the nearest integer, evaluating it with `n` bits of precision.
///
/// # Return value
///
/// `None` inside the result if the integer doesn't fit in `N`.
pub fn to_int<N, D>(evaluator: &Evaluator<D>, n: usize) -> Lazy<'static, Result<Option<N>, Error>>
where
    N: FromPrimitive + 'static,
    D: Digit,
{
    evaluator.evaluate(n).map(move |x| x.map(|x| {
        let rounded = x.round_div_2exp(n);
        if rounded.is_negative() {
            rounded.to_i128().and_then(N::from_i128)
        } else {
            rounded.to_u128().and_then(N::from_u128)
        }
    }))
}

/// Convert a real number to a float, evaluating it with `n` bits of precision.
///
/// # Return value
///
/// `None` inside the result if the value is not finite as an `f64`.
pub fn to_double<D: Digit>(
    evaluator: &Evaluator<D>,
    n: usize,
) -> Lazy<'static, Result<Option<f64>, Error>> {
    evaluator.evaluate(n).map(move |x| x.map(|x| scaled_to_f64(&x, n)))
}

/// `value / 2^exponent` as a float.
fn scaled_to_f64<D: Digit>(value: &Z<D>, exponent: usize) -> Option<f64> {
    // Keep a few more bits than the mantissa holds before converting
    let excess = value.bits().saturating_sub(64);
    let mantissa = value.round_div_2exp(excess).to_f64()?;
    // Beyond this range the result is zero or infinite anyway
    let shift = (excess as i64 - exponent as i64).clamp(-2000, 2000) as i32;
    let result = mantissa * 2_f64.powi(shift);

    if result.is_finite() { Some(result) } else { None }
}
