use dashu_float::{ops::SquareRoot, round::mode::HalfEven, FBig};

use super::Scalar;

/// Arbitrary-precision binary float used by the problems that are sensitive to rounding.
pub type BigFloat = FBig<HalfEven, 2>;

/// Number of significand bits carried by every [BigFloat] created in this crate.
///
/// The precision of an arithmetic result is the larger of its operands', so starting every
/// constant at this precision keeps the whole computation at it.
pub const BIGFLOAT_PRECISION: usize = 256;

/// Widen an `f64` to a [BigFloat] at [BIGFLOAT_PRECISION] bits.
///
/// The value is exactly the binary value of the `f64`, so `big(0.1)` is not one tenth.
pub fn big(value: f64) -> BigFloat {
    BigFloat::try_from(value)
        .expect("only finite f64 values can be widened to a BigFloat")
        .with_precision(BIGFLOAT_PRECISION)
        .value()
}

impl Scalar for BigFloat {
    const NAME: &'static str = "BigFloat";

    fn zero() -> Self {
        big(0.0)
    }
    fn one() -> Self {
        big(1.0)
    }
    fn from_f64(value: f64) -> Self {
        big(value)
    }
    fn to_f64(&self) -> f64 {
        BigFloat::to_f64(self).value()
    }
    fn sqrt(&self) -> Self {
        SquareRoot::sqrt(self)
    }
    fn exp(&self) -> Self {
        BigFloat::exp(self)
    }
    /// Only the infinities are non-finite; values beyond the range of `f64` are not.
    fn is_finite(&self) -> bool {
        self.repr().is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_is_exact_widening() {
        let x = big(0.5);
        assert_eq!(x.precision(), BIGFLOAT_PRECISION);
        assert_eq!(Scalar::to_f64(&x), 0.5);
        let v = -2.00158510637908252240537862224;
        assert_eq!(Scalar::to_f64(&big(v)), v);
    }

    #[test]
    fn test_bigfloat_arithmetic() {
        let two = big(2.0);
        let four = two.clone() * two.clone();
        assert_eq!(Scalar::sqrt(&four), two);
        assert_eq!(Scalar::pow3_2(&four), big(8.0));
        assert_eq!(Scalar::exp(&<BigFloat as Scalar>::zero()), <BigFloat as Scalar>::one());
        assert!(Scalar::is_finite(&four));
    }

    #[test]
    fn test_bigfloat_carries_more_digits_than_f64() {
        let third = big(1.0) / big(3.0);
        let back = third.clone() * big(3.0);
        let err = Scalar::to_f64(&(back - big(1.0))).abs();
        assert!(err < 1e-70);
    }

    #[test]
    fn test_bigfloat_sqrt() {
        let two = big(2.0);
        let root = Scalar::sqrt(&two);
        assert_eq!(root.precision(), BIGFLOAT_PRECISION);
        let err = Scalar::to_f64(&(root.clone() * root - two)).abs();
        assert!(err < 1e-70);
    }

    #[test]
    fn test_bigfloat_is_finite_beyond_f64_range() {
        let huge = big(f64::MAX) * big(4.0);
        assert!(huge > big(f64::MAX));
        assert!(Scalar::is_finite(&huge));
        assert!(!Scalar::is_finite(&BigFloat::INFINITY));
        assert!(!Scalar::is_finite(&BigFloat::NEG_INFINITY));
    }
}
