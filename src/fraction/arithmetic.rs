use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::FractionError;
use crate::primitive_int::PrimitiveInt;
use super::{Fraction, Sign};

fn checked<T>(value: Option<T>) -> Result<T, FractionError> {
    value.ok_or(FractionError::Overflow)
}

impl<T: PrimitiveInt> Fraction<T> {

    ///
    /// Computes `self * other`. The result is not reduced.
    ///
    pub fn multiply(self, other: Self) -> Result<Self, FractionError> {
        Self::from_parts(
            checked(self.numerator.checked_mul(other.numerator))?,
            checked(self.denominator.checked_mul(other.denominator))?,
            self.sign * other.sign
        )
    }

    pub fn multiply_integer(self, value: T) -> Result<Self, FractionError> {
        self.multiply(Self::from_int(value)?)
    }

    ///
    /// Computes `self + other` by cross-multiplication, i.e. the denominator of the
    /// result is the product of the two denominators. The result is not reduced.
    ///
    /// # Example
    /// ```rust
    /// # use exact_fraction::fraction::*;
    /// let a = Fraction::<i64>::new(1, 6).unwrap();
    /// let b = Fraction::<i64>::new(1, 3).unwrap();
    /// assert_eq!("9/18", a.add(b).unwrap().as_integer_ratio_string());
    /// ```
    ///
    pub fn add(self, other: Self) -> Result<Self, FractionError> {
        let lhs = self.sign.apply(checked(self.numerator.checked_mul(other.denominator))?);
        let rhs = other.sign.apply(checked(other.numerator.checked_mul(self.denominator))?);
        let combined = checked(lhs.checked_add(rhs))?;
        let denominator = checked(self.denominator.checked_mul(other.denominator))?;
        let sign = if combined.is_neg() { Sign::Negative } else { Sign::Positive };
        Self::from_parts(checked(combined.checked_abs())?, denominator, sign)
    }

    pub fn add_integer(self, value: T) -> Result<Self, FractionError> {
        self.add(Self::from_int(value)?)
    }

    pub fn subtract(self, other: Self) -> Result<Self, FractionError> {
        self.add(other.negate())
    }

    pub fn subtract_integer(self, value: T) -> Result<Self, FractionError> {
        self.subtract(Self::from_int(value)?)
    }

    ///
    /// Computes `self / other`. The result is not reduced.
    ///
    /// Fails with [`FractionError::DivisionByZero`] if `other` is zero.
    ///
    pub fn divide(self, other: Self) -> Result<Self, FractionError> {
        if other.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Self::from_parts(
            checked(self.numerator.checked_mul(other.denominator))?,
            checked(self.denominator.checked_mul(other.numerator))?,
            self.sign * other.sign
        )
    }

    pub fn divide_by_integer(self, value: T) -> Result<Self, FractionError> {
        if value.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        self.divide(Self::from_int(value)?)
    }
}

macro_rules! impl_operator {
    ($trait:ident, $fn:ident, $method:ident, $name:literal) => {
        impl<T: PrimitiveInt> $trait for Fraction<T> {
            type Output = Fraction<T>;

            ///
            /// # Panics
            ///
            #[doc = concat!("Panics if the ", $name, " fails, see [`Fraction::", stringify!($method), "()`].")]
            ///
            fn $fn(self, rhs: Fraction<T>) -> Fraction<T> {
                match Fraction::$method(self, rhs) {
                    Ok(result) => result,
                    Err(e) => panic!("fraction {} failed: {}", $name, e)
                }
            }
        }
    };
}

impl_operator!{ Add, add, add, "addition" }
impl_operator!{ Sub, sub, subtract, "subtraction" }
impl_operator!{ Mul, mul, multiply, "multiplication" }
impl_operator!{ Div, div, divide, "division" }

impl<T: PrimitiveInt> Neg for Fraction<T> {
    type Output = Fraction<T>;

    fn neg(self) -> Fraction<T> {
        self.negate()
    }
}

#[cfg(test)]
fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9
}

#[cfg(test)]
fn frac(numerator: i64, denominator: i64) -> Fraction<i64> {
    Fraction::new(numerator, denominator).unwrap()
}

#[test]
fn test_multiply() {
    let product = frac(1, 2).multiply(frac(3, 4)).unwrap();
    assert!(almost_equal(0.375, product.evaluate()));
    assert_eq!("3/8", product.to_canonical_string());

    let product = frac(-1, 2).multiply(frac(3, -4)).unwrap();
    assert_eq!(Sign::Positive, product.sign());
    let product = frac(-1, 2).multiply(frac(3, 4)).unwrap();
    assert_eq!(Sign::Negative, product.sign());
    let product = frac(-1, 2).multiply(Fraction::zero()).unwrap();
    assert_eq!(Sign::Positive, product.sign());

    assert!(almost_equal(-1.5, frac(-1, 2).multiply_integer(3).unwrap().evaluate()));
}

#[test]
fn test_add() {
    let sum = frac(1, 2).add(frac(-3, 4)).unwrap();
    assert!(almost_equal(-0.25, sum.evaluate()));
    assert_eq!(-2, sum.numerator());
    assert_eq!(8, sum.denominator());
    assert_eq!("-1/4", sum.simplify().to_canonical_string());

    let sum = frac(-1, 2).add(frac(1, 2)).unwrap();
    assert!(sum.is_zero());
    assert_eq!(Sign::Positive, sum.sign());

    let sum = frac(-1, 3).add(frac(-1, 6)).unwrap();
    assert!(almost_equal(-0.5, sum.evaluate()));
}

#[test]
fn test_add_subtract_integer() {
    let x = frac(3, 2).add_integer(1).unwrap();
    assert!(almost_equal(2.5, x.evaluate()));
    let x = x.subtract_integer(1).unwrap();
    assert!(almost_equal(1.5, x.evaluate()));
    assert_eq!(Err(FractionError::Overflow), frac(3, 2).add_integer(i64::MIN));
}

#[test]
fn test_subtract() {
    assert!(almost_equal(1.25, frac(1, 2).subtract(frac(-3, 4)).unwrap().evaluate()));
    assert!(almost_equal(-0.25, frac(1, 2).subtract(frac(3, 4)).unwrap().evaluate()));
    assert!(frac(5, 7).subtract(frac(10, 14)).unwrap().is_zero());
}

#[test]
fn test_divide() {
    let quotient = frac(3, 4).divide(frac(2, 3)).unwrap();
    assert!(almost_equal(1.125, quotient.evaluate()));
    assert_eq!("9/8", quotient.as_integer_ratio_string());

    let quotient = frac(3, 4).divide(frac(-2, 3)).unwrap();
    assert!(almost_equal(-1.125, quotient.evaluate()));

    assert_eq!(Err(FractionError::DivisionByZero), frac(3, 4).divide(Fraction::zero()));
    assert_eq!(Err(FractionError::DivisionByZero), frac(3, 4).divide_by_integer(0));
    assert!(almost_equal(-0.375, frac(3, 4).divide_by_integer(-2).unwrap().evaluate()));
}

#[test]
fn test_overflow() {
    let big = frac(i64::MAX, 1);
    assert_eq!(Err(FractionError::Overflow), big.add(frac(1, 1)));
    assert_eq!(Err(FractionError::Overflow), big.multiply(frac(2, 1)));
    assert_eq!(Err(FractionError::Overflow), frac(1, i64::MAX).add(frac(1, 2)));
    assert_eq!(Ok(frac(0, 1)), big.subtract(big));
    assert_eq!(Err(FractionError::Overflow), Fraction::<i8>::new(100, 1).unwrap().add(Fraction::new(-100, 1).unwrap().negate()));
}

#[test]
fn test_chaining() {
    let result = frac(1, 2).multiply(frac(2, 3))
        .and_then(|x| x.add(frac(1, 6)))
        .and_then(|x| x.divide_by_integer(2))
        .unwrap();
    assert_eq!(frac(1, 4), result);
}

#[test]
fn test_operators() {
    assert_eq!(frac(5, 4), frac(1, 2) + frac(3, 4));
    assert_eq!(frac(-1, 4), frac(1, 2) - frac(3, 4));
    assert_eq!(frac(3, 8), frac(1, 2) * frac(3, 4));
    assert_eq!(frac(2, 3), frac(1, 2) / frac(3, 4));
    assert_eq!(frac(-1, 2), -frac(1, 2));
}

#[test]
#[should_panic(expected = "fraction division failed: division by zero")]
fn test_operator_division_by_zero() {
    let _ = frac(1, 2) / Fraction::zero();
}
