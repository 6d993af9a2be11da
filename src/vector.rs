use std::ops::{Index, IndexMut};

use crate::number::{round, SignedNumber};

///
/// A vector of numbers that supports element-wise arithmetic.
///
/// The arithmetic operations work in place and return `&mut Self`, so they can be chained.
/// Use [`Clone::clone()`] first if the original vector is still needed.
///
/// # Example
/// ```rust
/// # use exact_fraction::vector::*;
/// let mut v = Vector::new([1, 2, 3, 4]);
/// v.add(&Vector::new([10, 10]), 1).scale(2);
/// assert_eq!(&[2, 24, 26, 8], v.as_slice());
/// ```
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector<T: SignedNumber> {
    elements: Vec<T>
}

impl<T: SignedNumber> Vector<T> {

    pub fn new<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Vector { elements: elements.into_iter().collect() }
    }

    ///
    /// Returns a vector with `count` entries that are all equal to `value`.
    ///
    pub fn from_value(value: T, count: usize) -> Self {
        Vector { elements: vec![value; count] }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    ///
    /// Applies `op` to `self[i + offset]` and `other[i]`, for all `i` such that both
    /// entries exist.
    ///
    fn operation<F>(&mut self, other: &Vector<T>, offset: usize, mut op: F) -> &mut Self
        where F: FnMut(&mut T, T)
    {
        if offset < self.len() {
            for (lhs, rhs) in self.elements[offset..].iter_mut().zip(other.elements.iter()) {
                op(lhs, *rhs);
            }
        }
        return self;
    }

    ///
    /// Adds `other` element-wise to this vector, where `other` is shifted by `offset`
    /// positions. Entries of `other` that have no counterpart in `self` are ignored.
    ///
    pub fn add(&mut self, other: &Vector<T>, offset: usize) -> &mut Self {
        self.operation(other, offset, |lhs, rhs| *lhs += rhs)
    }

    ///
    /// Subtracts `other` element-wise, see [`Vector::add()`].
    ///
    pub fn subtract(&mut self, other: &Vector<T>, offset: usize) -> &mut Self {
        self.operation(other, offset, |lhs, rhs| *lhs -= rhs)
    }

    ///
    /// Multiplies element-wise by `other`, see [`Vector::add()`].
    ///
    pub fn multiply(&mut self, other: &Vector<T>, offset: usize) -> &mut Self {
        self.operation(other, offset, |lhs, rhs| *lhs *= rhs)
    }

    ///
    /// Divides element-wise by `other`, see [`Vector::add()`].
    ///
    /// # Panics
    ///
    /// For integer vectors, this panics if a divisor is zero.
    ///
    pub fn divide(&mut self, other: &Vector<T>, offset: usize) -> &mut Self {
        self.operation(other, offset, |lhs, rhs| *lhs /= rhs)
    }

    ///
    /// Multiplies every entry by `factor`.
    ///
    pub fn scale(&mut self, factor: T) -> &mut Self {
        for x in &mut self.elements {
            *x *= factor;
        }
        return self;
    }

    pub fn sum(&self) -> T {
        self.elements.iter().fold(T::zero(), |sum, x| sum + *x)
    }

    ///
    /// The product of all entries, which is `1` for the empty vector.
    ///
    pub fn product(&self) -> T {
        self.elements.iter().fold(T::one(), |product, x| product * *x)
    }

    ///
    /// # Panics
    ///
    /// Panics if the vectors have different lengths.
    ///
    pub fn dot(&self, other: &Vector<T>) -> T {
        assert_eq!(self.len(), other.len(), "Vector lengths {} and {} differ", self.len(), other.len());
        self.elements.iter().zip(other.elements.iter()).fold(T::zero(), |sum, (x, y)| sum + *x * *y)
    }

    ///
    /// The euclidean norm of this vector.
    ///
    pub fn magnitude(&self) -> f64 {
        self.elements.iter().map(|x| x.to_f64() * x.to_f64()).sum::<f64>().sqrt()
    }

    ///
    /// Rounds all entries to the given number of decimal places. Integer vectors are
    /// not changed.
    ///
    pub fn round(&mut self, decimal_places: u32) -> &mut Self {
        if T::is_float() {
            for x in &mut self.elements {
                *x = T::from_f64(round(x.to_f64(), decimal_places));
            }
        }
        return self;
    }
}

impl Vector<f64> {

    ///
    /// Returns the vector `[min, ..., max]` with `steps` evenly spaced values between
    /// `min` and `max`.
    ///
    pub fn from_range<T: SignedNumber>(min: T, max: T, steps: usize) -> Self {
        let (min, max) = (min.to_f64(), max.to_f64());
        let step_size = (max - min) / (steps + 1) as f64;
        let mut elements = Vec::with_capacity(steps + 2);
        elements.push(min);
        elements.extend((1..=steps).map(|i| min + i as f64 * step_size));
        elements.push(max);
        Vector { elements }
    }
}

impl<T: SignedNumber> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T: SignedNumber> IndexMut<usize> for Vector<T> {

    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T: SignedNumber> FromIterator<T> for Vector<T> {

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[test]
fn test_constructors() {
    assert_eq!(&[1, 2, 3], Vector::new([1, 2, 3]).as_slice());
    assert_eq!(&[0.5, 0.5, 0.5], Vector::from_value(0.5, 3).as_slice());
    assert!(Vector::<i32>::from_value(7, 0).is_empty());
    assert_eq!(&[0., 2.5, 5., 7.5, 10.], Vector::<f64>::from_range(0, 10, 3).as_slice());
    assert_eq!(&[-1., 1.], Vector::<f64>::from_range(-1., 1., 0).as_slice());
}

#[test]
fn test_clone_is_independent() {
    let original = Vector::new([1, 2, 3]);
    let mut copy = original.clone();
    copy.scale(10);
    assert_eq!(&[1, 2, 3], original.as_slice());
    assert_eq!(&[10, 20, 30], copy.as_slice());
}

#[test]
fn test_elementwise_with_offset() {
    let mut v = Vector::new([1, 2, 3, 4]);
    v.add(&Vector::new([1, 1, 1, 1, 1, 1]), 2);
    assert_eq!(&[1, 2, 4, 5], v.as_slice());

    v.subtract(&Vector::new([1, 2]), 0);
    assert_eq!(&[0, 0, 4, 5], v.as_slice());

    v.multiply(&Vector::new([3]), 3);
    assert_eq!(&[0, 0, 4, 15], v.as_slice());

    v.divide(&Vector::new([2, 5]), 2);
    assert_eq!(&[0, 0, 2, 3], v.as_slice());

    v.add(&Vector::new([100]), 4);
    assert_eq!(&[0, 0, 2, 3], v.as_slice());
}

#[test]
fn test_reductions() {
    let v = Vector::new([1, -2, 3, 4]);
    assert_eq!(6, v.sum());
    assert_eq!(-24, v.product());
    assert_eq!(1, Vector::<i64>::new([]).product());
    assert_eq!(0, Vector::<i64>::new([]).sum());
    assert_eq!(1 + 4 + 9 + 16, v.dot(&v));
    assert_eq!(1 - 4 + 9 + 16, v.dot(&Vector::new([1, 2, 3, 4])));
    assert!((Vector::new([3., 4.]).magnitude() - 5.).abs() <= 1e-12);
    assert_eq!(2, v[2] - v[0]);
}

#[test]
#[should_panic]
fn test_dot_different_lengths() {
    Vector::new([1, 2]).dot(&Vector::new([1, 2, 3]));
}

#[test]
fn test_round() {
    let mut v = Vector::new([1.2345, -0.556, 2.]);
    v.round(2);
    assert_eq!(&[1.23, -0.56, 2.], v.as_slice());

    let mut w = Vector::new([1, 2]);
    w.round(0);
    assert_eq!(&[1, 2], w.as_slice());
}
