#![doc = include_str!("../Readme.md")]

///
/// The error types of this crate.
///
pub mod error;
///
/// Contains the trait [`number::SignedNumber`] for the native signed numeric types,
/// and some helpers like rounding.
///
pub mod number;
///
/// Contains the trait [`primitive_int::PrimitiveInt`] for the native signed integers
/// that can be used as numerator and denominator of fractions.
///
pub mod primitive_int;
pub mod algorithms;
///
/// Contains [`fraction::Fraction`], an exact rational number.
///
pub mod fraction;
///
/// Serialization and deserialization of fractions with `serde`.
///
pub mod serialization;
///
/// Contains [`vector::Vector`], a vector of native numbers with element-wise operations.
///
pub mod vector;

pub use error::{FractionError, ParseFractionError};
pub use fraction::{Fraction, IntoFraction, Sign};
pub use fraction::optional::OptionalFraction;
pub use vector::Vector;
