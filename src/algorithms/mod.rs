///
/// Contains [`sqr_mul::generic_abs_square_and_multiply()`] and [`sqr_mul::pow_int()`]
/// for computing powers without overflow.
/// 
pub mod sqr_mul;
///
/// Contains the Euclidean algorithm for greatest common divisors.
/// 
pub mod eea;
///
/// Contains an implementation of the bisection method for computing roots, but
/// working with integers only.
/// 
pub mod int_bisect;
