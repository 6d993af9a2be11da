use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::fraction::Fraction;
use crate::primitive_int::PrimitiveInt;

///
/// Fractions are serialized as their integer ratio string `"[-]numerator/denominator"` in
/// human-readable formats, and as a pair `(numerator, denominator)` of `i128`s otherwise,
/// where the numerator carries the sign. In both cases, the fraction is not reduced.
///
impl<T: PrimitiveInt> Serialize for Fraction<T> {

    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.as_integer_ratio_string())
        } else {
            let numerator: i128 = self.numerator().into();
            let denominator: i128 = self.denominator().into();
            (numerator, denominator).serialize(serializer)
        }
    }
}

struct FractionStringVisitor<T: PrimitiveInt> {
    integer_type: PhantomData<T>
}

impl<'de, T: PrimitiveInt> Visitor<'de> for FractionStringVisitor<T> {
    type Value = Fraction<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a fraction \"a/b\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where E: de::Error
    {
        Fraction::from_string(value).map_err(E::custom)
    }
}

impl<'de, T: PrimitiveInt> Deserialize<'de> for Fraction<T> {

    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(FractionStringVisitor { integer_type: PhantomData })
        } else {
            let (numerator, denominator) = <(i128, i128)>::deserialize(deserializer)?;
            let numerator = T::from_i128(numerator).ok_or_else(|| <D::Error as de::Error>::custom(format!("numerator {} out of range", numerator)))?;
            let denominator = T::from_i128(denominator).ok_or_else(|| <D::Error as de::Error>::custom(format!("denominator {} out of range", denominator)))?;
            Fraction::new(numerator, denominator).map_err(de::Error::custom)
        }
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    ///
    /// Checks that the given fractions survive a serialization round trip, both in
    /// human-readable and in compact form, without being reduced.
    ///
    pub fn test_serialization<T: PrimitiveInt, I: Iterator<Item = Fraction<T>>>(edge_case_elements: I) {
        let edge_case_elements = edge_case_elements.collect::<Vec<_>>();

        let serializer = serde_assert::Serializer::builder().is_human_readable(true).build();
        for x in &edge_case_elements {
            let tokens = x.serialize(&serializer).unwrap();
            let mut deserializer = serde_assert::Deserializer::builder(tokens).is_human_readable(true).build();
            let result = Fraction::<T>::deserialize(&mut deserializer).unwrap();
            assert_eq!(x.as_integer_ratio_string(), result.as_integer_ratio_string());
        }

        let serializer = serde_assert::Serializer::builder().is_human_readable(false).build();
        for x in &edge_case_elements {
            let tokens = x.serialize(&serializer).unwrap();
            let mut deserializer = serde_assert::Deserializer::builder(tokens).is_human_readable(false).build();
            let result = Fraction::<T>::deserialize(&mut deserializer).unwrap();
            assert_eq!(x.as_integer_ratio_string(), result.as_integer_ratio_string());
        }
    }
}

#[test]
fn test_serialize() {
    let value = Fraction::<i64>::new(-10, 12).unwrap();
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!("\"-10/12\"", json);

    let parsed: Fraction<i64> = serde_json::from_str("\"7/-21\"").unwrap();
    assert_eq!("-7/21", parsed.as_integer_ratio_string());

    assert!(serde_json::from_str::<Fraction<i64>>("\"1/0\"").is_err());
    assert!(serde_json::from_str::<Fraction<i64>>("\"one half\"").is_err());
    assert!(serde_json::from_str::<Fraction<i64>>("[1, 2]").is_err());
}

#[test]
fn test_serialize_compact_tokens() {
    use serde_assert::Token;

    let serializer = serde_assert::Serializer::builder().is_human_readable(false).build();
    let tokens = Fraction::<i32>::new(3, -4).unwrap().serialize(&serializer).unwrap();
    assert_eq!(tokens, [
        Token::Tuple { len: 2 },
        Token::I128(-3),
        Token::I128(4),
        Token::TupleEnd
    ]);

    let mut deserializer = serde_assert::Deserializer::builder([
        Token::Tuple { len: 2 },
        Token::I128(300),
        Token::I128(1),
        Token::TupleEnd
    ]).is_human_readable(false).build();
    assert!(Fraction::<i8>::deserialize(&mut deserializer).is_err());
}

#[test]
fn test_serialization_round_trip() {
    let edge_cases = [(0, 1), (1, 1), (-1, 1), (2, 4), (-3, 4), (7, 3), (i64::MAX, i64::MAX - 1), (-i64::MAX, 1)]
        .into_iter()
        .map(|(n, d)| Fraction::<i64>::new(n, d).unwrap());
    generic_tests::test_serialization(edge_cases);
    generic_tests::test_serialization(crate::fraction::generic_tests::random_fractions::<i16>(5, 1000, 20));
}
