use tracing::instrument;

use crate::primitive_int::PrimitiveInt;

///
/// Finds the greatest common divisor of `a` and `b`, using the Euclidean algorithm.
///
/// We have `gcd(0, b) = b`, `gcd(a, 0) = a` and in particular `gcd(0, 0) = 0`. The
/// result is only guaranteed to be non-negative if both inputs are non-negative,
/// otherwise it is a greatest common divisor up to sign.
///
/// # Example
/// ```rust
/// # use exact_fraction::algorithms::eea::*;
/// assert_eq!(3, gcd(15i64, 6));
/// assert_eq!(7, gcd(0i64, 7));
/// assert_eq!(0, gcd(0i64, 0));
/// ```
///
#[instrument(skip_all, level = "trace")]
pub fn gcd<T: PrimitiveInt>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);

    // invariant: `gcd(a, b) = gcd(original_a, original_b)`
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    return a;
}

///
/// Computes the least common multiple of two non-negative integers, or `None` if
/// it does not fit into `T`. The lcm of zero and any value is zero.
///
pub fn lcm<T: PrimitiveInt>(a: T, b: T) -> Option<T> {
    if a.is_zero() || b.is_zero() {
        return Some(T::zero());
    }
    (a / gcd(a, b)).checked_mul(b)
}

#[test]
fn test_gcd() {
    assert_eq!(3, gcd(15i64, 6));
    assert_eq!(3, gcd(6i64, 15));

    assert_eq!(7, gcd(0i64, 7));
    assert_eq!(7, gcd(7i64, 0));
    assert_eq!(0, gcd(0i64, 0));

    assert_eq!(1, gcd(9i64, 1));
    assert_eq!(1, gcd(1i64, 9));

    assert_eq!(1, gcd(13i32, 300));
    assert_eq!(1, gcd(300i32, 13));

    assert_eq!(3, gcd(-15i64, 6).abs());
    assert_eq!(3, gcd(6i64, -15).abs());
    assert_eq!(3, gcd(-6i64, -15).abs());

    assert_eq!(1 << 62, gcd(1i128 << 100, 1 << 62));
}

#[test]
fn test_lcm() {
    assert_eq!(Some(12), lcm(4i64, 6));
    assert_eq!(Some(0), lcm(0i64, 6));
    assert_eq!(Some(7), lcm(7i64, 7));
    assert_eq!(None, lcm(i8::MAX, 2));
}
