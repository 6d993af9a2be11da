use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

///
/// Errors that can occur when constructing or computing with a [`crate::fraction::Fraction`].
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// A denominator (or divisor) was zero
    #[error("division by zero")]
    DivisionByZero,
    #[error(transparent)]
    Parse(#[from] ParseFractionError),
    #[error("the even nth-root of a negative number does not exist")]
    EvenRootOfNegative,
    #[error("the nth-root of this fraction does not yield a valid fraction")]
    NonIntegerRoot,
    #[error("the degree of a root must be positive")]
    ZeroRootDegree,
    /// The numerator or denominator left the range of the underlying integer type
    #[error("integer overflow during fraction arithmetic")]
    Overflow,
    #[error("cannot represent a non-finite float as a fraction")]
    NonFinite
}

///
/// Errors produced while parsing a textual fraction like `"-3 / 4"` or `"1.5e2/.5"`.
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFractionError {
    #[error("invalid fraction format: {0:?}")]
    InvalidFormat(String),
    #[error("invalid integer literal {literal:?}: {source}")]
    Int {
        literal: String,
        #[source]
        source: ParseIntError
    },
    #[error("invalid float literal {literal:?}: {source}")]
    Float {
        literal: String,
        #[source]
        source: ParseFloatError
    },
    #[error("float literal {0:?} is out of range")]
    FloatOutOfRange(String)
}

#[test]
fn test_error_messages() {
    assert_eq!("division by zero", FractionError::DivisionByZero.to_string());
    let parse_error = FractionError::from(ParseFractionError::InvalidFormat("1//2".to_owned()));
    assert_eq!("invalid fraction format: \"1//2\"", parse_error.to_string());
    let int_error = ParseFractionError::Int { literal: "99999999999".to_owned(), source: "99999999999".parse::<i32>().unwrap_err() };
    assert!(int_error.to_string().starts_with("invalid integer literal \"99999999999\""));
}

#[test]
fn test_float_out_of_range_message() {
    let error = FractionError::from(ParseFractionError::FloatOutOfRange("1e400".to_owned()));
    assert_eq!("float literal \"1e400\" is out of range", error.to_string());
}
