//! Positional numeric arrays in provider JSON
//!
//! Several providers encode points and boxes as bare JSON arrays
//! (`[lng, lat]`, `[west, south, east, north]`, ...). These helpers read
//! exactly `N` numbers so typed structs can name each position.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserializer, Serializer};

/// Read a JSON array of exactly `N` numbers; `shape` names the positions for error messages
pub fn deserialize_fixed<'de, D, const N: usize>(
    deserializer: D,
    shape: &'static str,
) -> Result<[f64; N], D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_seq(FixedVisitor::<N> {
        shape,
        marker: PhantomData,
    })
}

/// Write `values` back out as a JSON array
pub fn serialize_fixed<S, const N: usize>(values: [f64; N], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(values.iter())
}

struct FixedVisitor<const N: usize> {
    shape: &'static str,
    marker: PhantomData<[f64; N]>,
}

impl<'de, const N: usize> Visitor<'de> for FixedVisitor<N> {
    type Value = [f64; N];

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an array of {} numbers {}", N, self.shape)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = [0.0; N];
        let mut len = 0;
        while let Some(value) = seq
            .next_element::<f64>()
            .map_err(|e| {
                <A::Error as de::Error>::custom(format!("{} at position {}: {}", self.shape, len, e))
            })?
        {
            if len < N {
                values[len] = value;
            }
            len += 1;
        }
        if len != N {
            return Err(de::Error::invalid_length(len, &self));
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Deserializer};

    #[derive(Debug, PartialEq)]
    struct Pair {
        first: f64,
        second: f64,
    }

    impl<'de> Deserialize<'de> for Pair {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let [first, second] = deserialize_fixed::<_, 2>(deserializer, "[first, second]")?;
            Ok(Self { first, second })
        }
    }

    #[test]
    fn test_reads_positionally() {
        let pair: Pair = serde_json::from_str("[1.5, -2]").unwrap();
        assert_eq!(pair, Pair { first: 1.5, second: -2.0 });
    }

    #[test]
    fn test_rejects_short_array() {
        let err = serde_json::from_str::<Pair>("[1.5]").unwrap_err();
        assert!(err.to_string().contains("an array of 2 numbers [first, second]"));
    }

    #[test]
    fn test_rejects_long_array() {
        let err = serde_json::from_str::<Pair>("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("invalid length 3"));
    }

    #[test]
    fn test_rejects_non_numeric_element() {
        let err = serde_json::from_str::<Pair>(r#"[1, "north"]"#).unwrap_err();
        assert!(err.to_string().contains("[first, second] at position 1"));
    }

    #[test]
    fn test_rejects_object() {
        let err = serde_json::from_str::<Pair>(r#"{"first": 1}"#).unwrap_err();
        assert!(err.to_string().contains("an array of 2 numbers"));
    }

    #[test]
    fn test_serialize_fixed() {
        let mut out = Vec::new();
        let mut ser = serde_json::Serializer::new(&mut out);
        serialize_fixed([1.5, 2.0, -3.25], &mut ser).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[1.5,2.0,-3.25]");
    }
}
