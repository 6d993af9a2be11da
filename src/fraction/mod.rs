use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Mul;

use crate::algorithms::eea::gcd;
use crate::algorithms::sqr_mul::pow_int;
use crate::error::FractionError;
use crate::number::PrimitiveFloat;
use crate::primitive_int::PrimitiveInt;

///
/// Addition, subtraction, multiplication and division of fractions, both as
/// checked methods and as operators.
///
pub mod arithmetic;
///
/// Integer powers and exact roots of fractions.
///
pub mod power;
///
/// Formatting of fractions, as mixed numbers or as integer ratios.
///
pub mod format;
///
/// Parsing fractions like `"-3/4"` or `"1.5 / .5e1"`.
///
pub mod parse;
///
/// Contains [`optional::OptionalFraction`], which lets `Option<Fraction<T>>` be used
/// as a fraction that may be invalid.
///
pub mod optional;

///
/// The sign of a [`Fraction`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative
}

impl Sign {

    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    pub fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive
        }
    }

    pub fn pow(self, exponent: u32) -> Sign {
        if exponent % 2 == 1 { self } else { Sign::Positive }
    }

    fn apply<T: PrimitiveInt>(self, value: T) -> T {
        match self {
            Sign::Positive => value,
            Sign::Negative => -value
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    ///
    /// The sign of the product of two values with signs `self` and `rhs`.
    ///
    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs { Sign::Positive } else { Sign::Negative }
    }
}

///
/// An exact rational number `p/q`, stored as the non-negative magnitudes of numerator
/// and denominator together with a separate [`Sign`].
///
/// The following invariants hold for every value of this type:
///  - numerator and denominator are non-negative, and the denominator is never zero
///  - the sign is the only source of the sign of the value, and zero is always [`Sign::Positive`]
///
/// Fractions are not automatically reduced, e.g. `2/4` stays `2/4` until [`Fraction::simplify()`]
/// is called. However, comparisons work on the value, so `2/4 == 1/2`.
///
/// All operations are pure and return new values. Whenever a magnitude does not fit into
/// `T` anymore, the operation fails with [`FractionError::Overflow`].
///
/// # Example
/// ```rust
/// # use exact_fraction::fraction::*;
/// let a = Fraction::<i64>::new(1, 2).unwrap();
/// let b = Fraction::new(-3, 4).unwrap();
/// let sum = a.add(b).unwrap();
/// assert_eq!("-2/8", sum.to_canonical_string());
/// assert_eq!("-1/4", sum.simplify().to_canonical_string());
/// ```
///
#[derive(Debug, Clone, Copy)]
pub struct Fraction<T: PrimitiveInt = i64> {
    numerator: T,
    denominator: T,
    sign: Sign
}

///
/// Types that can be converted into a [`Fraction`], i.e. all native integers and floats.
///
pub trait IntoFraction<T: PrimitiveInt> {

    fn into_fraction(self) -> Result<Fraction<T>, FractionError>;
}

macro_rules! impl_into_fraction_int {
    ($($t:ty),*) => {
        $(
            impl<T: PrimitiveInt> IntoFraction<T> for $t {
                fn into_fraction(self) -> Result<Fraction<T>, FractionError> {
                    let value = T::from_i128(i128::from(self)).ok_or(FractionError::Overflow)?;
                    Fraction::from_int(value)
                }
            }
        )*
    };
}

impl_into_fraction_int!{ i8, i16, i32, i64, i128, u8, u16, u32, u64 }

impl<T: PrimitiveInt> IntoFraction<T> for f64 {

    fn into_fraction(self) -> Result<Fraction<T>, FractionError> {
        Fraction::from_float(self)
    }
}

impl<T: PrimitiveInt> IntoFraction<T> for f32 {

    fn into_fraction(self) -> Result<Fraction<T>, FractionError> {
        Fraction::from_float(self)
    }
}

impl<T: PrimitiveInt> Fraction<T> {

    ///
    /// Creates the fraction `numerator / denominator`.
    ///
    /// Fails with [`FractionError::DivisionByZero`] if the denominator is zero, and with
    /// [`FractionError::Overflow`] if one of the values is `T::MIN`, whose magnitude cannot
    /// be stored.
    ///
    pub fn new(numerator: T, denominator: T) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        let sign = if numerator.is_neg() != denominator.is_neg() { Sign::Negative } else { Sign::Positive };
        return Self::from_parts(
            numerator.checked_abs().ok_or(FractionError::Overflow)?,
            denominator.checked_abs().ok_or(FractionError::Overflow)?,
            sign
        );
    }

    ///
    /// Creates a fraction from magnitudes and a sign, normalizing the sign of zero.
    ///
    pub(crate) fn from_parts(numerator: T, denominator: T, sign: Sign) -> Result<Self, FractionError> {
        debug_assert!(!numerator.is_neg());
        debug_assert!(!denominator.is_neg());
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        let sign = if numerator.is_zero() { Sign::Positive } else { sign };
        return Ok(Fraction { numerator, denominator, sign });
    }

    pub fn from_int(value: T) -> Result<Self, FractionError> {
        Self::new(value, T::one())
    }

    ///
    /// Converts an integer or a float into a fraction.
    ///
    /// Floats are converted exactly as written in their shortest decimal representation,
    /// not as the underlying binary value, and the result is not reduced.
    /// ```rust
    /// # use exact_fraction::fraction::*;
    /// let x = Fraction::<i64>::from_number(0.125).unwrap();
    /// assert_eq!("125/1000", x.as_integer_ratio_string());
    /// assert_eq!("1/8", x.simplify().as_integer_ratio_string());
    /// let y = Fraction::<i64>::from_number(-7).unwrap();
    /// assert_eq!("-7/1", y.as_integer_ratio_string());
    /// ```
    ///
    pub fn from_number<N: IntoFraction<T>>(value: N) -> Result<Self, FractionError> {
        value.into_fraction()
    }

    fn from_float<F: PrimitiveFloat>(value: F) -> Result<Self, FractionError> {
        if !value.is_finite() {
            return Err(FractionError::NonFinite);
        }
        if value == F::zero() {
            return Ok(Self::zero());
        }
        // `Display` of floats gives the shortest representation that round-trips, without exponent
        let text = value.to_string();
        let decimal_places = match text.find('.') {
            Some(index) => text.len() - index - 1,
            None => 0
        };
        let digits = text.replacen('.', "", 1).parse::<i128>().map_err(|_| FractionError::Overflow)?;
        let numerator = T::from_i128(digits).ok_or(FractionError::Overflow)?;
        let decimal_places = u32::try_from(decimal_places).map_err(|_| FractionError::Overflow)?;
        let ten = T::from_i128(10).ok_or(FractionError::Overflow)?;
        let denominator = pow_int(ten, decimal_places).ok_or(FractionError::Overflow)?;
        return Self::new(numerator, denominator);
    }

    pub fn zero() -> Self {
        Fraction { numerator: T::zero(), denominator: T::one(), sign: Sign::Positive }
    }

    pub fn one() -> Self {
        Fraction { numerator: T::one(), denominator: T::one(), sign: Sign::Positive }
    }

    ///
    /// The numerator, carrying the sign of the fraction.
    ///
    pub fn numerator(&self) -> T {
        self.sign.apply(self.numerator)
    }

    ///
    /// The denominator, which is always positive.
    ///
    pub fn denominator(&self) -> T {
        self.denominator
    }

    pub fn abs_numerator(&self) -> T {
        self.numerator
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    ///
    /// Returns `-self`. This never overflows, since only the sign changes.
    ///
    pub fn negate(self) -> Self {
        let sign = if self.is_zero() { Sign::Positive } else { self.sign.flip() };
        Fraction { sign, ..self }
    }

    pub fn abs(self) -> Self {
        Fraction { sign: Sign::Positive, ..self }
    }

    ///
    /// Returns `1/self`, or [`FractionError::DivisionByZero`] if `self` is zero.
    ///
    pub fn reciprocal(self) -> Result<Self, FractionError> {
        Self::from_parts(self.denominator, self.numerator, self.sign)
    }

    ///
    /// Divides numerator and denominator by their greatest common divisor.
    ///
    /// The sign is not changed, and simplifying twice gives the same result
    /// as simplifying once.
    ///
    pub fn simplify(self) -> Self {
        let gcd = gcd(self.numerator, self.denominator);
        if gcd.is_zero() {
            return self;
        }
        Fraction {
            numerator: self.numerator / gcd,
            denominator: self.denominator / gcd,
            sign: self.sign
        }
    }

    ///
    /// Returns the closest `f64` to the value of this fraction.
    ///
    pub fn evaluate(&self) -> f64 {
        let value = self.numerator.to_f64() / self.denominator.to_f64();
        if self.sign.is_negative() && !self.numerator.is_zero() {
            return -value;
        }
        return value;
    }
}

///
/// Compares `a/b` and `c/d` for non-negative `a, c` and positive `b, d`, by comparing the
/// continued fraction expansions. In contrast to comparing `a * d` and `b * c`, this
/// cannot overflow.
///
fn cmp_magnitude<T: PrimitiveInt>(a: T, b: T, c: T, d: T) -> Ordering {
    let (mut a, mut b, mut c, mut d) = (a, b, c, d);
    loop {
        let (lhs_quo, rhs_quo) = (a / b, c / d);
        if lhs_quo != rhs_quo {
            return lhs_quo.cmp(&rhs_quo);
        }
        let (lhs_rem, rhs_rem) = (a % b, c % d);
        match (lhs_rem.is_zero(), rhs_rem.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            // `lhs_rem/b < rhs_rem/d` if and only if `d/rhs_rem < b/lhs_rem`
            (false, false) => (a, b, c, d) = (d, rhs_rem, b, lhs_rem)
        }
    }
}

impl<T: PrimitiveInt> PartialEq for Fraction<T> {

    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: PrimitiveInt> Eq for Fraction<T> {}

impl<T: PrimitiveInt> PartialOrd for Fraction<T> {

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PrimitiveInt> Ord for Fraction<T> {

    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => cmp_magnitude(self.numerator, self.denominator, other.numerator, other.denominator),
            (Sign::Negative, Sign::Negative) => cmp_magnitude(other.numerator, other.denominator, self.numerator, self.denominator)
        }
    }
}

impl<T: PrimitiveInt> Hash for Fraction<T> {

    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.simplify();
        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
        reduced.sign.hash(state);
    }
}

impl<T: PrimitiveInt> Default for Fraction<T> {

    fn default() -> Self {
        Self::zero()
    }
}

impl<T: PrimitiveInt> From<Fraction<T>> for f64 {

    fn from(value: Fraction<T>) -> Self {
        value.evaluate()
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    ///
    /// Returns `count` random fractions with numerator in `-bound..=bound` and denominator
    /// in `1..=bound`, using a fixed seed.
    ///
    pub fn random_fractions<T: PrimitiveInt>(seed: u64, bound: i64, count: usize) -> impl Iterator<Item = Fraction<T>> {
        assert!(bound > 0);
        let mut rng = oorandom::Rand64::new(seed as u128);
        (0..count).map(move |_| {
            let numerator = rng.rand_range(0..(2 * bound as u64 + 1)) as i128 - bound as i128;
            let denominator = rng.rand_range(0..(bound as u64)) as i128 + 1;
            Fraction::new(T::from_i128(numerator).unwrap(), T::from_i128(denominator).unwrap()).unwrap()
        })
    }

    ///
    /// Checks the basic laws of fraction arithmetic on all pairs of the given elements.
    /// Operations that overflow are skipped.
    ///
    pub fn test_fraction_axioms<T: PrimitiveInt, I: Iterator<Item = Fraction<T>>>(edge_case_elements: I) {
        let elements = edge_case_elements.collect::<Vec<_>>();
        let zero = Fraction::<T>::zero();
        let one = Fraction::<T>::one();

        for a in &elements {
            assert!(!a.denominator().is_zero());
            assert!(!a.abs_numerator().is_neg());
            assert!(!a.is_zero() || !a.is_negative());

            let reduced = a.simplify();
            assert_eq!(*a, reduced);
            assert_eq!(reduced.as_integer_ratio_string(), reduced.simplify().as_integer_ratio_string());
            assert_eq!(a.sign(), reduced.sign());

            assert_eq!(Ok(*a), a.add(zero));
            assert_eq!(Ok(*a), a.multiply(one));
            assert_eq!(Ok(zero), a.subtract(*a));
            assert_eq!(*a, a.negate().negate());
            assert_eq!(Ok(*a), Fraction::from_string(&a.as_integer_ratio_string()));

            if !a.is_zero() {
                assert_eq!(Ok(one), a.divide(*a).map(Fraction::simplify));
            } else {
                assert_eq!(Err(FractionError::DivisionByZero), one.divide(*a));
            }
        }

        for a in &elements {
            for b in &elements {
                if let (Ok(ab), Ok(ba)) = (a.add(*b), b.add(*a)) {
                    assert_eq!(ab, ba);
                    assert!((ab.evaluate() - (a.evaluate() + b.evaluate())).abs() <= 1e-9 * (1. + ab.evaluate().abs()));
                }
                if let (Ok(ab), Ok(ba)) = (a.multiply(*b), b.multiply(*a)) {
                    assert_eq!(ab, ba);
                    assert_eq!(ab.is_negative(), !ab.is_zero() && (a.is_negative() != b.is_negative()));
                }
                if let Ok(difference) = a.subtract(*b) {
                    assert_eq!(a.cmp(b), difference.cmp(&zero));
                }
                if let Ok(quotient) = a.divide(*b) {
                    if let Ok(product) = quotient.multiply(*b) {
                        assert_eq!(*a, product);
                    }
                }
                if a.evaluate() != b.evaluate() {
                    assert_eq!(a.evaluate().partial_cmp(&b.evaluate()), Some(a.cmp(b)));
                }
            }
        }
    }
}

#[cfg(test)]
fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9
}

#[test]
fn test_new_and_accessors() {
    let f = Fraction::<i64>::new(3, 4).unwrap();
    assert_eq!(3, f.numerator());
    assert_eq!(4, f.denominator());
    assert_eq!(Sign::Positive, f.sign());

    let f = Fraction::<i64>::new(3, -4).unwrap();
    assert_eq!(-3, f.numerator());
    assert_eq!(3, f.abs_numerator());
    assert_eq!(4, f.denominator());

    let f = Fraction::<i64>::new(-3, -4).unwrap();
    assert_eq!(3, f.numerator());
    assert!(!f.is_negative());

    assert_eq!(Err(FractionError::DivisionByZero), Fraction::<i64>::new(1, 0));
    assert_eq!(Err(FractionError::DivisionByZero), Fraction::<i64>::new(0, 0));
    assert_eq!(Err(FractionError::Overflow), Fraction::<i64>::new(i64::MIN, 1));
    assert_eq!(Err(FractionError::Overflow), Fraction::<i8>::new(1, -128));
    assert!(Fraction::<i64>::new(i64::MAX, -i64::MAX).is_ok());
}

#[test]
fn test_zero_is_positive() {
    let f = Fraction::<i64>::new(0, -5).unwrap();
    assert_eq!(Sign::Positive, f.sign());
    assert_eq!(0, f.numerator());
    assert_eq!(Sign::Positive, f.negate().sign());
    assert_eq!(Fraction::zero(), f);
    assert_eq!(Fraction::<i64>::default(), f);
}

#[test]
fn test_evaluate() {
    for (n, d) in [(1, 2), (-1, 2), (1, -2), (7, 3), (0, 9), (-22, 7), (i64::MAX, 3)] {
        assert!(almost_equal(n as f64 / d as f64, Fraction::<i64>::new(n, d).unwrap().evaluate()));
    }
    assert_eq!(0.75, f64::from(Fraction::<i32>::new(3, 4).unwrap()));
}

#[test]
fn test_from_number() {
    assert!(almost_equal(5., Fraction::<i64>::from_number(5).unwrap().evaluate()));
    assert!(almost_equal(0.125, Fraction::<i64>::from_number(0.125).unwrap().evaluate()));

    let f = Fraction::<i64>::from_number(0.125).unwrap();
    assert_eq!(125, f.numerator());
    assert_eq!(1000, f.denominator());

    let f = Fraction::<i64>::from_number(-2.5f32).unwrap();
    assert_eq!(-25, f.numerator());
    assert_eq!(10, f.denominator());

    let f = Fraction::<i64>::from_number(0.1).unwrap();
    assert_eq!(1, f.numerator());
    assert_eq!(10, f.denominator());

    let f = Fraction::<i64>::from_number(3.0).unwrap();
    assert_eq!(3, f.numerator());
    assert_eq!(1, f.denominator());

    let f = Fraction::<i64>::from_number(-0.0).unwrap();
    assert_eq!(Fraction::zero(), f);
    assert_eq!(1, f.denominator());

    assert_eq!(Ok(Fraction::<i8>::new(100, 1).unwrap()), Fraction::from_number(100u64));
    assert_eq!(Err(FractionError::Overflow), Fraction::<i8>::from_number(200u64));
    assert_eq!(Err(FractionError::Overflow), Fraction::<i64>::from_number(1e300));
    assert_eq!(Err(FractionError::Overflow), Fraction::<i16>::from_number(0.00001));
    assert_eq!(Err(FractionError::NonFinite), Fraction::<i64>::from_number(f64::NAN));
    assert_eq!(Err(FractionError::NonFinite), Fraction::<i64>::from_number(f64::NEG_INFINITY));
}

#[test]
fn test_simplify() {
    let f = Fraction::<i64>::new(2, 4).unwrap().simplify();
    assert_eq!(1, f.numerator());
    assert_eq!(2, f.denominator());

    let f = Fraction::<i64>::new(-12, 18).unwrap().simplify();
    assert_eq!(-2, f.numerator());
    assert_eq!(3, f.denominator());

    let f = Fraction::<i64>::new(0, 18).unwrap().simplify();
    assert_eq!(0, f.numerator());
    assert_eq!(1, f.denominator());

    for f in generic_tests::random_fractions::<i64>(1, 1000, 200) {
        let once = f.simplify();
        let twice = once.simplify();
        assert_eq!(once.numerator(), twice.numerator());
        assert_eq!(once.denominator(), twice.denominator());
        assert_eq!(f.sign(), once.sign());
    }
}

#[test]
fn test_reciprocal_negate_abs() {
    let f = Fraction::<i64>::new(-2, 5).unwrap();
    assert_eq!(Fraction::new(-5, 2).unwrap(), f.reciprocal().unwrap());
    assert_eq!(Fraction::new(2, 5).unwrap(), f.negate());
    assert_eq!(Fraction::new(2, 5).unwrap(), f.abs());
    assert_eq!(Err(FractionError::DivisionByZero), Fraction::<i64>::zero().reciprocal());
}

#[test]
fn test_ordering() {
    let a = Fraction::<i64>::new(1, 3).unwrap();
    let b = Fraction::<i64>::new(1, 2).unwrap();
    let c = Fraction::<i64>::new(-1, 2).unwrap();
    let d = Fraction::<i64>::new(-2, 3).unwrap();
    assert!(a < b);
    assert!(c < a);
    assert!(d < c);
    assert!(Fraction::<i64>::zero() > c);
    assert_eq!(Fraction::new(2, 4).unwrap(), b);
    assert_eq!(Fraction::new(-4, 8).unwrap(), c);

    // cross-multiplication would overflow here
    let big = Fraction::<i64>::new(i64::MAX, i64::MAX - 1).unwrap();
    let bigger = Fraction::<i64>::new(i64::MAX - 1, i64::MAX - 2).unwrap();
    assert!(big < bigger);
    assert_eq!(big, big);

    let mut sorted = vec![b, d, a, c, Fraction::zero()];
    sorted.sort();
    assert_eq!(vec![d, c, Fraction::zero(), a, b], sorted);
}

#[test]
fn test_hash_consistent_with_eq() {
    use std::collections::HashSet;
    let set: HashSet<Fraction<i64>> = [(1, 2), (2, 4), (-3, -6), (0, 1), (0, -7), (-1, 2)].into_iter()
        .map(|(n, d)| Fraction::new(n, d).unwrap())
        .collect();
    assert_eq!(3, set.len());
}

#[test]
fn test_fraction_axioms() {
    let edge_cases = [(0, 1), (1, 1), (-1, 1), (1, 2), (-3, 4), (7, 3), (-22, 7), (5, 6), (100, 3)]
        .into_iter()
        .map(|(n, d)| Fraction::<i64>::new(n, d).unwrap());
    generic_tests::test_fraction_axioms(edge_cases);
    generic_tests::test_fraction_axioms(generic_tests::random_fractions::<i64>(2, 50, 30));
    generic_tests::test_fraction_axioms(generic_tests::random_fractions::<i16>(3, 100, 30));
}
