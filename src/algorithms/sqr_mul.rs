use tracing::instrument;

use crate::primitive_int::PrimitiveInt;

///
/// Computes `base^power` by square-and-multiply, given the operations of the
/// underlying monoid as closures. Both closures may fail (e.g. on overflow), in
/// which case the whole computation fails.
///
/// The bits of `power` are processed from the most significant one downwards, so
/// no square is computed that is not needed for the result.
///
pub fn generic_abs_square_and_multiply<T, U, F, H>(base: U, power: u32, mut square: F, mut multiply_base: H, identity: T) -> Option<T>
    where F: FnMut(T) -> Option<T>,
        H: FnMut(&U, T) -> Option<T>
{
    if power == 0 {
        return Some(identity);
    } else if power == 1 {
        return multiply_base(&base, identity);
    }

    let mut result = identity;
    let highest_set_bit = u32::BITS - power.leading_zeros() - 1;
    for i in (0..=highest_set_bit).rev() {
        if (power >> i) & 1 == 1 {
            result = multiply_base(&base, square(result)?)?;
        } else {
            result = square(result)?;
        }
    }
    return Some(result);
}

///
/// Computes `base^exponent`, or `None` if the result does not fit into `T`.
///
/// As usual, `0^0 = 1`.
///
/// # Example
/// ```rust
/// # use exact_fraction::algorithms::sqr_mul::*;
/// assert_eq!(Some(1024), pow_int(2i64, 10));
/// assert_eq!(Some(-27), pow_int(-3i64, 3));
/// assert_eq!(None, pow_int(2i64, 63));
/// ```
///
#[instrument(skip_all, level = "trace")]
pub fn pow_int<T: PrimitiveInt>(base: T, exponent: u32) -> Option<T> {
    generic_abs_square_and_multiply(
        base,
        exponent,
        |x| x.checked_mul(x),
        |b, x| x.checked_mul(*b),
        T::one()
    )
}

#[test]
fn test_generic_pow() {
    assert_eq!(Some(3 * 3), generic_abs_square_and_multiply(3i64, 2, |a: i64| Some(a * a), |a, b| Some(*a * b), 1));
    assert_eq!(Some(3 * 3 * 3 * 3 * 3), generic_abs_square_and_multiply(3i64, 5, |a: i64| Some(a * a), |a, b| Some(*a * b), 1));
    assert_eq!(Some("aaaaaaa".to_owned()), generic_abs_square_and_multiply("a", 7, |s: String| Some(s.repeat(2)), |a, b| Some(b + *a), String::new()));
}

#[test]
fn test_pow_int() {
    assert_eq!(Some(1), pow_int(5i64, 0));
    assert_eq!(Some(1), pow_int(0i64, 0));
    assert_eq!(Some(0), pow_int(0i64, 3));
    assert_eq!(Some(5), pow_int(5i64, 1));
    assert_eq!(Some(1), pow_int(-1i64, 100));
    assert_eq!(Some(-1), pow_int(-1i64, 101));
    assert_eq!(Some(1 << 62), pow_int(2i64, 62));
    assert_eq!(None, pow_int(2i64, 63));
    assert_eq!(Some(i64::MIN), pow_int(-2i64, 63));
    assert_eq!(Some(3i128.pow(80)), pow_int(3i128, 80));
    assert_eq!(None, pow_int(3i8, 5));
}
