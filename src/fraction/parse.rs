use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::error::{FractionError, ParseFractionError};
use crate::primitive_int::PrimitiveInt;
use super::Fraction;

///
/// An optionally signed integer or float, the latter with or without leading digits,
/// and with an optional exponent.
///
const NUMBER_PATTERN: &str = r"[+\-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+\-]?[0-9]+)?";

///
/// ASCII whitespace only, unlike `\s`, which also matches e.g. non-breaking spaces.
///
const WHITESPACE: &str = r"[\t\n\x0C\r ]";

static FRACTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{ws}*({num}){ws}*/{ws}*({num}){ws}*$",
        ws = WHITESPACE,
        num = NUMBER_PATTERN
    )).unwrap()
});

fn parse_int<T: PrimitiveInt>(literal: &str) -> Result<T, ParseFractionError> {
    literal.parse::<T>().map_err(|source| ParseFractionError::Int { literal: literal.to_owned(), source })
}

fn parse_float(literal: &str) -> Result<f64, ParseFractionError> {
    let value = literal.parse::<f64>().map_err(|source| ParseFractionError::Float { literal: literal.to_owned(), source })?;
    if !value.is_finite() {
        return Err(ParseFractionError::FloatOutOfRange(literal.to_owned()));
    }
    return Ok(value);
}

impl<T: PrimitiveInt> Fraction<T> {

    ///
    /// Parses a fraction `a / b`, where `a` and `b` are integers or floats, each with an
    /// optional sign, and floats possibly in scientific notation. Whitespace around the
    /// numbers is ignored.
    ///
    /// If both numbers are integers, the result is exactly `a/b` as given. Otherwise, both
    /// numbers are converted as by [`Fraction::from_number()`], divided and the result
    /// is simplified.
    ///
    /// # Example
    /// ```rust
    /// # use exact_fraction::fraction::*;
    /// let x = Fraction::<i64>::from_string(" -6 / 8 ").unwrap();
    /// assert_eq!("-6/8", x.as_integer_ratio_string());
    /// let y = Fraction::<i64>::from_string("1.5/.5e1").unwrap();
    /// assert_eq!("3/10", y.as_integer_ratio_string());
    /// assert!(Fraction::<i64>::from_string("1/2/3").is_err());
    /// ```
    ///
    pub fn from_string(text: &str) -> Result<Self, FractionError> {
        let captures = FRACTION_REGEX.captures(text)
            .ok_or_else(|| ParseFractionError::InvalidFormat(text.to_owned()))?;
        let (numerator, denominator) = (&captures[1], &captures[2]);

        let is_integer = |literal: &str| !literal.contains(['.', 'e', 'E']);
        if is_integer(numerator) && is_integer(denominator) {
            trace!(numerator, denominator, "parsing fraction of integers");
            return Self::new(parse_int(numerator)?, parse_int(denominator)?);
        }

        trace!(numerator, denominator, "parsing fraction of floats");
        let numerator = Self::from_number(parse_float(numerator)?)?;
        let denominator = Self::from_number(parse_float(denominator)?)?;
        return Ok(numerator.divide(denominator)?.simplify());
    }
}

impl<T: PrimitiveInt> FromStr for Fraction<T> {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

#[cfg(test)]
fn frac(numerator: i64, denominator: i64) -> Fraction<i64> {
    Fraction::new(numerator, denominator).unwrap()
}

#[test]
fn test_parse_integers() {
    let f = Fraction::<i64>::from_string("-3/4").unwrap();
    assert!((f.evaluate() + 0.75).abs() <= 1e-9);
    assert_eq!("-3/4", f.as_integer_ratio_string());

    assert_eq!("4/6", Fraction::<i64>::from_string("4/6").unwrap().as_integer_ratio_string());
    assert_eq!("-3/4", Fraction::<i64>::from_string("3/-4").unwrap().as_integer_ratio_string());
    assert_eq!("3/4", Fraction::<i64>::from_string("\t+3 /\n+4  ").unwrap().as_integer_ratio_string());
    assert_eq!("0/4", Fraction::<i64>::from_string("-0/4").unwrap().as_integer_ratio_string());
    assert_eq!(Ok(frac(2, 3)), "4/6".parse::<Fraction<i64>>());
}

#[test]
fn test_parse_floats() {
    let f = Fraction::<i64>::from_string("1.5 / 0.5").unwrap();
    assert!((f.evaluate() - 3.).abs() <= 1e-9);
    assert_eq!("3/1", f.as_integer_ratio_string());

    assert_eq!("1/4", Fraction::<i64>::from_string(".25/1").unwrap().as_integer_ratio_string());
    assert_eq!("2/1", Fraction::<i64>::from_string("2./1").unwrap().as_integer_ratio_string());
    assert_eq!("-100/3", Fraction::<i64>::from_string("1e2/-3").unwrap().as_integer_ratio_string());
    assert_eq!("1/400", Fraction::<i64>::from_string("2.5E-3 / 1").unwrap().as_integer_ratio_string());
    assert_eq!("3/10", Fraction::<i64>::from_string("1.5/.5e1").unwrap().as_integer_ratio_string());
}

#[test]
fn test_parse_errors() {
    for text in ["", "1", "1/", "/2", "1/2/3", "a/b", "1 2/3", "1..5/2", "1/2x", "e5/1", "- 1/2", "１/2"] {
        match Fraction::<i64>::from_string(text) {
            Err(FractionError::Parse(ParseFractionError::InvalidFormat(input))) => assert_eq!(text, input),
            other => panic!("expected format error for {:?}, got {:?}", text, other)
        }
    }
    assert_eq!(Err(FractionError::DivisionByZero), Fraction::<i64>::from_string("1/0"));
    assert_eq!(Err(FractionError::DivisionByZero), Fraction::<i64>::from_string("1.5/0.0"));
    assert!(matches!(
        Fraction::<i8>::from_string("300/1"),
        Err(FractionError::Parse(ParseFractionError::Int { .. }))
    ));
    assert_eq!(
        Err(FractionError::Parse(ParseFractionError::FloatOutOfRange("1e400".to_owned()))),
        Fraction::<i64>::from_string("1e400/1.0")
    );
    assert_eq!(
        Err(FractionError::Parse(ParseFractionError::FloatOutOfRange("-2e308".to_owned()))),
        Fraction::<i64>::from_string("1.5/-2e308")
    );
    assert_eq!(Err(FractionError::Overflow), Fraction::<i64>::from_string("1e30/1.0"));
}

#[test]
fn test_parse_only_ascii_whitespace() {
    assert_eq!("1/2", Fraction::<i64>::from_string("\x0C1 /\r2\n").unwrap().as_integer_ratio_string());
    for text in ["1\u{00A0}/2", "\u{2003}1/2", "1/2\u{3000}", "1/\u{0085}2", "1\x0B/2"] {
        assert_eq!(
            Err(FractionError::Parse(ParseFractionError::InvalidFormat(text.to_owned()))),
            Fraction::<i64>::from_string(text)
        );
    }
}
