use tracing::instrument;

use crate::algorithms::sqr_mul::pow_int;
use crate::primitive_int::PrimitiveInt;

///
/// Finds some integer `left <= n < right` such that `is_above(n)` is false and
/// `is_above(n + 1)` is true, given that `is_above(left)` is false and `is_above(right)`
/// is true.
///
/// If `is_above` describes `f(x) > 0` for a continuous function `f`, this means that
/// the function finds `floor(x)` for some root `x` of `f` between `left` and `right`.
///
#[stability::unstable(feature = "enable")]
pub fn bisect_floor<T, F>(left: T, right: T, mut is_above: F) -> T
    where T: PrimitiveInt, F: FnMut(&T) -> bool
{
    assert!(left < right);
    let mut l = left;
    let mut r = right;
    debug_assert!(!is_above(&l));
    debug_assert!(is_above(&r));
    let two = T::one() + T::one();
    loop {
        // `r - l` does not overflow as long as both are non-negative
        let mid = l + (r - l) / two;

        if mid == l || mid == r {
            return l;
        } else if is_above(&mid) {
            r = mid;
        } else {
            l = mid;
        }
    }
}

///
/// Given a non-decreasing predicate `is_above` on the non-negative integers that eventually
/// becomes true and is false at zero, finds the integer `n >= 0` such that `is_above(n)`
/// is false and `is_above(n + 1)` is true.
///
/// The search starts at `approx`, and terminates in `O(log|approx - solution|)` steps.
///
#[stability::unstable(feature = "enable")]
pub fn find_root_floor<T, F>(approx: T, mut is_above: F) -> T
    where T: PrimitiveInt, F: FnMut(&T) -> bool
{
    assert!(!approx.is_neg());
    let two = T::one() + T::one();
    let double = |step: T| step.checked_mul(two).unwrap_or(T::max_value());

    let mut left = approx;
    let mut step = T::one();
    while is_above(&left) {
        left = if left > step { left - step } else { T::zero() };
        step = double(step);
    }
    step = T::one();
    let mut right = approx;
    while !is_above(&right) {
        right = right.checked_add(step).unwrap_or(T::max_value());
        step = double(step);
    }
    if left == right {
        return left;
    }
    return bisect_floor(left, right, is_above);
}

///
/// Computes the largest integer `x` such that `x^root <= n`, where `n` is a non-negative
/// integer.
///
/// Powers are evaluated with overflow checks, and a power that does not fit into `T` is
/// treated as larger than `n`. Hence, unlike a naive implementation, this works for every
/// `n` up to `T::MAX`.
/// ```rust
/// # use exact_fraction::algorithms::int_bisect::*;
/// assert_eq!(2, root_floor(1i64 << 62, 62));
/// assert_eq!(3_037_000_499, root_floor(i64::MAX, 2));
/// ```
///
/// # Panics
///
/// Panics if `root == 0` or `n < 0`.
///
#[instrument(skip_all, level = "trace")]
pub fn root_floor<T: PrimitiveInt>(n: T, root: u32) -> T {
    assert!(root > 0);
    assert!(!n.is_neg());
    if root == 1 || n.is_zero() {
        return n;
    }
    let approx = n.to_f64().powf(1. / root as f64);
    let approx = T::from_i128(approx as i128).unwrap_or(T::zero());
    return find_root_floor(approx, |x| pow_int(*x, root).map(|power| power > n).unwrap_or(true));
}

///
/// Returns the integer `x >= 0` with `x^root = n`, if it exists.
///
/// # Example
/// ```rust
/// # use exact_fraction::algorithms::int_bisect::*;
/// assert_eq!(Some(3), exact_root(27i64, 3));
/// assert_eq!(None, exact_root(28i64, 3));
/// ```
///
pub fn exact_root<T: PrimitiveInt>(n: T, root: u32) -> Option<T> {
    if n.is_neg() || root == 0 {
        return None;
    }
    let result = root_floor(n, root);
    if pow_int(result, root) == Some(n) {
        return Some(result);
    } else {
        return None;
    }
}

///
/// Checks whether `value^(1/degree)` is within `1e-5` of an integer, computed in floating
/// point arithmetic.
///
/// This is an approximate test, and for large values it can both accept values that
/// are not perfect powers and reject values that are. Use [`exact_root()`] when the
/// answer has to be correct.
///
pub fn is_nth_root_integer<T: PrimitiveInt>(value: T, degree: u32) -> bool {
    let nth_root = value.to_f64().powf(1. / degree as f64);
    let nth_root_rounded = nth_root.round();
    return (nth_root - nth_root_rounded).abs() <= 0.00001;
}

#[test]
fn test_bisect_floor() {
    assert_eq!(0, bisect_floor(0i64, 10, |x| *x != 0));
    assert_eq!(9, bisect_floor(0i64, 10, |x| *x == 10));
    assert_eq!(4, bisect_floor(0i64, 100, |x| *x * *x > 20));
}

#[test]
fn test_find_root_floor() {
    assert_eq!(4, find_root_floor(0i64, |x| *x * *x > 20));
    assert_eq!(4, find_root_floor(50i64, |x| *x * *x > 20));
    assert_eq!(4, find_root_floor(4i64, |x| *x * *x > 20));
    assert_eq!(i8::MAX - 1, find_root_floor(100i8, |x| *x == i8::MAX));
}

#[test]
fn test_root_floor() {
    assert_eq!(4, root_floor(16i64, 2));
    assert_eq!(3, root_floor(27i64, 3));
    assert_eq!(4, root_floor(17i64, 2));
    assert_eq!(3, root_floor(28i64, 3));
    assert_eq!(4, root_floor(24i64, 2));
    assert_eq!(3, root_floor(63i64, 3));
    assert_eq!(5, root_floor(5i64.pow(25), 25));
    assert_eq!(4, root_floor(5i64.pow(25), 26));
    assert_eq!(4, root_floor(5i64.pow(25), 27));
    assert_eq!(4, root_floor(5i64.pow(25), 28));
    assert_eq!(26, root_floor(26i128.pow(26), 26));
    assert_eq!(1, root_floor(i64::MAX, 63));
    assert_eq!(11, root_floor(127i8, 2));
    assert_eq!(0, root_floor(0i64, 7));
    assert_eq!(1, root_floor(1i64, 7));
}

#[test]
fn test_exact_root() {
    assert_eq!(Some(2), exact_root(4i64, 2));
    assert_eq!(Some(3), exact_root(9i64, 2));
    assert_eq!(None, exact_root(8i64, 2));
    assert_eq!(Some(0), exact_root(0i64, 5));
    assert_eq!(Some(3_037_000_499), exact_root(3_037_000_499i64 * 3_037_000_499, 2));
    assert_eq!(None, exact_root(3_037_000_499i64 * 3_037_000_499 + 1, 2));
    assert_eq!(None, exact_root(-4i64, 2));
    assert_eq!(None, exact_root(4i64, 0));
}

#[test]
fn test_is_nth_root_integer() {
    assert!(is_nth_root_integer(4i64, 2));
    assert!(is_nth_root_integer(27i64, 3));
    assert!(is_nth_root_integer(1i64, 17));
    assert!(!is_nth_root_integer(2i64, 2));
    assert!(!is_nth_root_integer(10i64, 3));
    // the floating point test cannot distinguish neighbours of large squares
    assert!(is_nth_root_integer(3_037_000_499i64 * 3_037_000_499 + 1, 2));
}
