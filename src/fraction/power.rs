use tracing::{debug, instrument};

use crate::algorithms::int_bisect::exact_root;
use crate::algorithms::sqr_mul::pow_int;
use crate::error::FractionError;
use crate::primitive_int::PrimitiveInt;
use super::Fraction;

impl<T: PrimitiveInt> Fraction<T> {

    ///
    /// Computes `self^exponent`, raising numerator and denominator separately.
    /// A negative sign survives only odd exponents.
    ///
    pub fn pow(self, exponent: u32) -> Result<Self, FractionError> {
        Self::from_parts(
            pow_int(self.numerator, exponent).ok_or(FractionError::Overflow)?,
            pow_int(self.denominator, exponent).ok_or(FractionError::Overflow)?,
            self.sign.pow(exponent)
        )
    }

    ///
    /// Computes the `degree`-th root of this fraction, if it is again a fraction, i.e. if
    /// both numerator and denominator are perfect `degree`-th powers.
    ///
    /// Irrational roots are not approximated, but rejected with [`FractionError::NonIntegerRoot`].
    /// Note that this depends on the representation: `8/2` has no square root, but its
    /// simplification `4/1` has.
    ///
    /// # Example
    /// ```rust
    /// # use exact_fraction::fraction::*;
    /// # use exact_fraction::error::*;
    /// let x = Fraction::<i64>::new(4, 9).unwrap();
    /// assert_eq!(Fraction::new(2, 3).unwrap(), x.nth_root(2).unwrap());
    /// let y = Fraction::<i64>::new(-8, 27).unwrap();
    /// assert_eq!(Fraction::new(-2, 3).unwrap(), y.nth_root(3).unwrap());
    /// assert_eq!(Err(FractionError::EvenRootOfNegative), y.nth_root(2));
    /// ```
    ///
    #[instrument(skip_all, level = "trace")]
    pub fn nth_root(self, degree: u32) -> Result<Self, FractionError> {
        if degree == 0 {
            return Err(FractionError::ZeroRootDegree);
        }
        if self.sign.is_negative() && degree % 2 == 0 {
            debug!(degree, "even root of negative fraction");
            return Err(FractionError::EvenRootOfNegative);
        }
        match (exact_root(self.numerator, degree), exact_root(self.denominator, degree)) {
            (Some(numerator), Some(denominator)) => Self::from_parts(numerator, denominator, self.sign),
            _ => {
                debug!(degree, "numerator or denominator is not a perfect power");
                Err(FractionError::NonIntegerRoot)
            }
        }
    }
}

#[cfg(test)]
use super::Sign;

#[cfg(test)]
fn frac(numerator: i64, denominator: i64) -> Fraction<i64> {
    Fraction::new(numerator, denominator).unwrap()
}

#[test]
fn test_pow() {
    let p = frac(2, 3).pow(2).unwrap();
    assert!((p.evaluate() - 4. / 9.).abs() <= 1e-9);
    assert_eq!("4/9", p.as_integer_ratio_string());

    assert_eq!(Sign::Positive, frac(-2, 3).pow(2).unwrap().sign());
    assert_eq!(Sign::Negative, frac(-2, 3).pow(3).unwrap().sign());
    assert_eq!("-8/27", frac(-2, 3).pow(3).unwrap().as_integer_ratio_string());
    assert_eq!("1/1", frac(-2, 3).pow(0).unwrap().as_integer_ratio_string());
    assert_eq!("0/243", frac(0, 3).pow(5).unwrap().as_integer_ratio_string());
    assert_eq!(Fraction::zero(), frac(0, 3).pow(5).unwrap());
    assert_eq!(Err(FractionError::Overflow), frac(2, 3).pow(64));
}

#[test]
fn test_nth_root() {
    let r = frac(4, 9).nth_root(2).unwrap();
    assert!((r.evaluate() - 2. / 3.).abs() <= 1e-9);
    assert_eq!(2, r.numerator());
    assert_eq!(3, r.denominator());

    assert_eq!(Err(FractionError::EvenRootOfNegative), frac(-1, 4).nth_root(2));
    assert_eq!(Err(FractionError::NonIntegerRoot), frac(2, 9).nth_root(2));
    assert_eq!(Err(FractionError::NonIntegerRoot), frac(4, 8).nth_root(2));
    assert_eq!(Err(FractionError::ZeroRootDegree), frac(4, 9).nth_root(0));
    assert_eq!(frac(-1, 2), frac(-1, 8).nth_root(3).unwrap());
    assert_eq!(frac(4, 9), frac(4, 9).nth_root(1).unwrap());
    assert_eq!(frac(0, 1), frac(0, 4).nth_root(2).unwrap());
    assert_eq!(Err(FractionError::NonIntegerRoot), frac(0, 5).nth_root(2));
}

#[test]
fn test_nth_root_large() {
    let root = 3_037_000_499i64;
    let square = frac(root * root, 1);
    assert_eq!(frac(root, 1), square.nth_root(2).unwrap());
    // the neighbour of a large square is not a square, even though floating point cannot tell
    let neighbour = frac(root * root + 1, 1);
    assert_eq!(Err(FractionError::NonIntegerRoot), neighbour.nth_root(2));
}

#[test]
fn test_pow_then_root() {
    for f in super::generic_tests::random_fractions::<i64>(4, 1000, 100) {
        for degree in 1..=5 {
            let power = f.pow(degree).unwrap();
            let root = power.nth_root(degree);
            if f.is_negative() && degree % 2 == 0 {
                assert_eq!(Ok(f.abs()), root);
            } else {
                assert_eq!(Ok(f), root);
            }
        }
    }
}
