use std::{
    fmt::Display,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_traits::{One, Zero};

mod bigfloat;

pub use bigfloat::{big, BigFloat, BIGFLOAT_PRECISION};

/// Scalar type used for the states, parameters and times of a problem.
///
/// Implemented for `f64` and for the arbitrary-precision [BigFloat]. Arithmetic is by value so that
/// the same equations can be written once for both; for `f64` the clones are free.
pub trait Scalar:
    nalgebra::Scalar
    + Display
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Human readable name of the type, reported in problem summaries.
    const NAME: &'static str;

    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(value: f64) -> Self;
    fn to_f64(&self) -> f64;
    fn sqrt(&self) -> Self;
    fn exp(&self) -> Self;
    fn is_finite(&self) -> bool;

    /// `self^(3/2)`, the distance term of the gravitational problems.
    fn pow3_2(&self) -> Self {
        self.clone() * self.sqrt()
    }
}

impl Scalar for f64 {
    const NAME: &'static str = "f64";

    fn zero() -> Self {
        <f64 as Zero>::zero()
    }
    fn one() -> Self {
        <f64 as One>::one()
    }
    fn from_f64(value: f64) -> Self {
        value
    }
    fn to_f64(&self) -> f64 {
        *self
    }
    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }
    fn exp(&self) -> Self {
        f64::exp(*self)
    }
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_scalar() {
        assert_eq!(<f64 as Scalar>::zero(), 0.0);
        assert_eq!(<f64 as Scalar>::one(), 1.0);
        assert_eq!(Scalar::sqrt(&4.0_f64), 2.0);
        assert_eq!(Scalar::pow3_2(&4.0_f64), 8.0);
        assert!(!Scalar::is_finite(&f64::NAN));
    }
}
