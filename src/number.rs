use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

///
/// Trait for the native signed numeric types, i.e. the signed integers `i8` to `i128`
/// and the floating point types `f32` and `f64`.
///
/// This is the element bound of [`crate::vector::Vector`] and of the generic helpers
/// in this module.
///
pub trait SignedNumber: Copy + PartialEq + PartialOrd + Debug + Display
    + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> + Neg<Output = Self>
    + AddAssign + SubAssign + MulAssign + DivAssign
{
    fn zero() -> Self;
    fn one() -> Self;

    ///
    /// Returns the closest `f64` to this value. For large 64- or 128-bit integers,
    /// this is not exact.
    ///
    fn to_f64(self) -> f64;

    ///
    /// Converts from `f64`, rounding towards zero (and saturating) for integer types.
    ///
    fn from_f64(value: f64) -> Self;

    fn is_float() -> bool;
}

///
/// The floating point types `f32` and `f64`.
///
pub trait PrimitiveFloat: SignedNumber {

    fn is_finite(self) -> bool;
}

macro_rules! impl_signed_number_int {
    ($($t:ty),*) => {
        $(
            impl SignedNumber for $t {
                fn zero() -> Self { 0 }
                fn one() -> Self { 1 }
                fn to_f64(self) -> f64 { self as f64 }
                fn from_f64(value: f64) -> Self { value as $t }
                fn is_float() -> bool { false }
            }
        )*
    };
}

macro_rules! impl_signed_number_float {
    ($($t:ty),*) => {
        $(
            impl SignedNumber for $t {
                fn zero() -> Self { 0. }
                fn one() -> Self { 1. }
                fn to_f64(self) -> f64 { self as f64 }
                fn from_f64(value: f64) -> Self { value as $t }
                fn is_float() -> bool { true }
            }

            impl PrimitiveFloat for $t {
                fn is_finite(self) -> bool { <$t>::is_finite(self) }
            }
        )*
    };
}

impl_signed_number_int!{ i8, i16, i32, i64, i128 }
impl_signed_number_float!{ f32, f64 }

///
/// Returns the absolute value of the given number.
///
/// For integers, `abs(T::MIN)` overflows exactly as `-T::MIN` does.
///
pub fn abs<T: SignedNumber>(value: T) -> T {
    if value < T::zero() {
        return -value;
    }
    return value;
}

///
/// Rounds the given float to the given number of decimal places, with ties
/// rounded away from zero.
///
/// # Example
/// ```rust
/// # use exact_fraction::number::*;
/// assert_eq!(3.14, round(3.14159, 2));
/// assert_eq!(-2., round(-1.5, 0));
/// ```
///
pub fn round<F: PrimitiveFloat>(value: F, decimal_places: u32) -> F {
    let scale = 10f64.powi(decimal_places as i32);
    return F::from_f64((value.to_f64() * scale).round() / scale);
}

///
/// Checks whether the given float is finite and has no fractional part.
///
pub fn is_integer<F: PrimitiveFloat>(value: F) -> bool {
    if !value.is_finite() {
        return false;
    }
    let value = value.to_f64();
    return value == value.trunc();
}

#[test]
fn test_abs() {
    assert_eq!(3, abs(-3i64));
    assert_eq!(3, abs(3i8));
    assert_eq!(0, abs(0i128));
    assert_eq!(2.5, abs(-2.5f64));
    assert_eq!(0.25, abs(0.25f32));
}

#[test]
fn test_round() {
    assert_eq!(1.23, round(1.2345f64, 2));
    assert_eq!(1.235, round(1.2346f64, 3));
    assert_eq!(3., round(2.5f64, 0));
    assert_eq!(-0.5, round(-0.49f64, 1));
    assert_eq!(10., round(9.99f32, 1));
}

#[test]
fn test_is_integer() {
    assert!(is_integer(3.0f64));
    assert!(is_integer(-7.0f32));
    assert!(is_integer(0.0f64));
    assert!(!is_integer(0.5f64));
    assert!(!is_integer(f64::NAN));
    assert!(!is_integer(f64::INFINITY));
    assert!(!is_integer(f32::NEG_INFINITY));
}
