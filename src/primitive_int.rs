use std::hash::Hash;
use std::num::ParseIntError;
use std::ops::Rem;
use std::str::FromStr;

use crate::number::SignedNumber;

///
/// Trait for the native signed integer types `i8`, `i16`, `i32`, `i64` and `i128`,
/// which can be used to store numerator and denominator of a [`crate::fraction::Fraction`].
///
/// All arithmetic used by fractions goes through the checked operations of this trait,
/// so that leaving the range of the type is reported instead of wrapping.
///
pub trait PrimitiveInt: SignedNumber + Rem<Output = Self> + Eq + Ord + Hash + Send + Sync + 'static
    + FromStr<Err = ParseIntError> + TryFrom<i128> + Into<i128>
{
    fn max_value() -> Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_abs(self) -> Option<Self>;

    fn is_neg(self) -> bool {
        self < Self::zero()
    }

    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    ///
    /// Converts an `i128` into this type, returning `None` if it does not fit.
    ///
    fn from_i128(value: i128) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

macro_rules! impl_primitive_int {
    ($($t:ty),*) => {
        $(
            impl PrimitiveInt for $t {
                fn max_value() -> Self { <$t>::MAX }
                fn checked_add(self, rhs: Self) -> Option<Self> { <$t>::checked_add(self, rhs) }
                fn checked_mul(self, rhs: Self) -> Option<Self> { <$t>::checked_mul(self, rhs) }
                fn checked_abs(self) -> Option<Self> { <$t>::checked_abs(self) }
            }
        )*
    };
}

impl_primitive_int!{ i8, i16, i32, i64, i128 }

#[test]
fn test_checked_ops() {
    assert_eq!(Some(127), PrimitiveInt::checked_add(100i8, 27));
    assert_eq!(None, PrimitiveInt::checked_add(100i8, 28));
    assert_eq!(None, PrimitiveInt::checked_mul(i64::MAX, 2));
    assert_eq!(None, PrimitiveInt::checked_abs(i32::MIN));
    assert_eq!(Some(i32::MAX), PrimitiveInt::checked_abs(-i32::MAX));
}

#[test]
fn test_from_i128() {
    assert_eq!(Some(-128i8), i8::from_i128(-128));
    assert_eq!(None, i8::from_i128(128));
    assert_eq!(Some(i128::MIN), i128::from_i128(i128::MIN));
    assert!((-1i32).is_neg());
    assert!(!0i32.is_neg());
}

#[cfg(test)]
fn remainder_of<T: PrimitiveInt>(a: T, b: T) -> T {
    a % b
}

#[test]
fn test_remainder() {
    assert_eq!(2, remainder_of(17i8, 5));
    assert_eq!(-2, remainder_of(-17i64, 5));
    assert_eq!(0, remainder_of(i128::MAX, 1));
}
