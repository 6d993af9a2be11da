use std::fmt::{Display, Formatter};

use crate::primitive_int::PrimitiveInt;
use super::Fraction;

impl<T: PrimitiveInt> Fraction<T> {

    ///
    /// Formats the fraction as a mixed number, e.g. `"2 1/3"`, `"-1/4"` or `"5"`.
    /// This is the same as the [`Display`] implementation.
    ///
    /// The fraction is not reduced first, so `2/4` is formatted as `"2/4"`. Call
    /// [`Fraction::simplify()`] first if necessary.
    ///
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    ///
    /// Formats the fraction as `"[-]numerator/denominator"`, without reducing it and without
    /// extracting the whole part.
    ///
    pub fn as_integer_ratio_string(&self) -> String {
        let sign = if self.sign.is_negative() { "-" } else { "" };
        format!("{}{}/{}", sign, self.numerator, self.denominator)
    }
}

impl<T: PrimitiveInt> Display for Fraction<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (whole, remainder) = if self.numerator >= self.denominator {
            (self.numerator / self.denominator, self.numerator % self.denominator)
        } else {
            (T::zero(), self.numerator)
        };
        if self.sign.is_negative() {
            write!(f, "-")?;
        }
        if remainder.is_zero() {
            write!(f, "{}", whole)
        } else if whole.is_zero() {
            write!(f, "{}/{}", remainder, self.denominator)
        } else {
            write!(f, "{} {}/{}", whole, remainder, self.denominator)
        }
    }
}

#[cfg(test)]
fn frac(numerator: i64, denominator: i64) -> Fraction<i64> {
    Fraction::new(numerator, denominator).unwrap()
}

#[test]
fn test_canonical_string() {
    assert_eq!("1/2", frac(2, 4).simplify().to_canonical_string());
    assert_eq!("2/4", frac(2, 4).to_canonical_string());
    assert_eq!("2 1/3", frac(7, 3).to_canonical_string());
    assert_eq!("-2", frac(-4, 2).to_canonical_string());
    assert_eq!("-2 1/3", frac(7, -3).to_canonical_string());
    assert_eq!("-1/4", frac(-1, 4).to_canonical_string());
    assert_eq!("0", frac(0, 4).to_canonical_string());
    assert_eq!("0", frac(0, -4).to_canonical_string());
    assert_eq!("1", frac(5, 5).to_canonical_string());
    assert_eq!("9223372036854775807", frac(i64::MAX, 1).to_canonical_string());
    assert_eq!("3/8", format!("{}", frac(3, 8)));
}

#[test]
fn test_as_integer_ratio_string() {
    assert_eq!("5/6", frac(5, 6).as_integer_ratio_string());
    assert_eq!("10/12", frac(10, 12).as_integer_ratio_string());
    assert_eq!("7/3", frac(7, 3).as_integer_ratio_string());
    assert_eq!("-4/2", frac(-4, 2).as_integer_ratio_string());
    assert_eq!("0/3", frac(0, -3).as_integer_ratio_string());
}
