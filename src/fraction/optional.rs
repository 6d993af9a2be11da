use crate::primitive_int::PrimitiveInt;
use super::Fraction;

///
/// Operations on a fraction that may be absent, i.e. on `Option<Fraction<T>>`.
///
/// A value of `None` plays the role of an invalid fraction: it formats as `"NaN"`,
/// evaluates to `f64::NAN`, and every arithmetic operation involving it gives `None`
/// again. An operation that fails (e.g. a division by zero) also gives `None`, so
/// long computations can be chained without checking each step.
///
/// # Example
/// ```rust
/// # use exact_fraction::fraction::*;
/// # use exact_fraction::fraction::optional::*;
/// let x = Fraction::<i64>::new(1, 2).ok();
/// let y = Fraction::<i64>::new(1, 0).ok();
/// assert_eq!("3/4", x.multiply(Fraction::new(3, 2).ok()).to_canonical_string());
/// assert_eq!("NaN", x.add(y).multiply(x).to_canonical_string());
/// assert!(y.evaluate().is_nan());
/// ```
///
pub trait OptionalFraction<T: PrimitiveInt>: Sized {

    fn evaluate(&self) -> f64;
    fn to_canonical_string(&self) -> String;
    fn as_integer_ratio_string(&self) -> String;
    fn numerator(&self) -> Option<T>;
    fn denominator(&self) -> Option<T>;
    fn simplify(self) -> Self;
    fn multiply(self, other: Self) -> Self;
    fn add(self, other: Self) -> Self;
    fn subtract(self, other: Self) -> Self;
    fn divide(self, other: Self) -> Self;
}

impl<T: PrimitiveInt> OptionalFraction<T> for Option<Fraction<T>> {

    fn evaluate(&self) -> f64 {
        self.as_ref().map(Fraction::evaluate).unwrap_or(f64::NAN)
    }

    fn to_canonical_string(&self) -> String {
        self.as_ref().map(Fraction::to_canonical_string).unwrap_or_else(|| "NaN".to_owned())
    }

    fn as_integer_ratio_string(&self) -> String {
        self.as_ref().map(Fraction::as_integer_ratio_string).unwrap_or_else(|| "NaN".to_owned())
    }

    fn numerator(&self) -> Option<T> {
        self.as_ref().map(Fraction::numerator)
    }

    fn denominator(&self) -> Option<T> {
        self.as_ref().map(Fraction::denominator)
    }

    fn simplify(self) -> Self {
        self.map(Fraction::simplify)
    }

    fn multiply(self, other: Self) -> Self {
        self?.multiply(other?).ok()
    }

    fn add(self, other: Self) -> Self {
        self?.add(other?).ok()
    }

    fn subtract(self, other: Self) -> Self {
        self?.subtract(other?).ok()
    }

    fn divide(self, other: Self) -> Self {
        self?.divide(other?).ok()
    }
}

#[test]
fn test_invalid_fraction() {
    let invalid: Option<Fraction<i64>> = None;
    let valid = Fraction::<i64>::new(5, 6).ok();

    assert!(invalid.simplify().is_none());
    assert!(invalid.evaluate().is_nan());
    assert_eq!("NaN", invalid.to_canonical_string());
    assert_eq!("NaN", invalid.as_integer_ratio_string());
    assert_eq!(None, invalid.numerator());
    assert_eq!(None, invalid.denominator());

    assert!(invalid.multiply(valid).is_none());
    assert!(invalid.add(valid).is_none());
    assert!(invalid.subtract(valid).is_none());
    assert!(invalid.divide(valid).is_none());
    assert!(valid.multiply(invalid).is_none());
    assert!(valid.add(invalid).is_none());
    assert!(valid.divide(invalid).is_none());
}

#[test]
fn test_valid_fraction() {
    let valid = Fraction::<i64>::new(-5, 6).ok();
    assert_eq!(Some(-5), valid.numerator());
    assert_eq!(Some(6), valid.denominator());
    assert_eq!("-5/6", valid.as_integer_ratio_string());
    assert_eq!("-5/6", valid.to_canonical_string());
    assert!((valid.evaluate() + 5. / 6.).abs() <= 1e-9);

    let zero = Fraction::<i64>::zero();
    assert!(valid.divide(Some(zero)).is_none());
    assert_eq!(Some(Fraction::new(-1, 1).unwrap()), valid.add(Fraction::new(-1, 6).ok()).simplify());
}
