//! Student identifier type.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Identifier assigned by the backend when a student is created.
///
/// Serialized as a JSON number. Deserializes from a number or from a
/// numeric string, since backends disagree on which one they send.
///
/// ```
/// use roster_core::StudentId;
///
/// let id: StudentId = "17".parse().unwrap();
/// assert_eq!(id.get(), 17);
/// assert!("abc".parse::<StudentId>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(u64);

impl StudentId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parse an identifier from text, e.g. a route segment.
    ///
    /// # Errors
    ///
    /// Returns an error unless the text is a non-negative integer.
    pub fn parse(s: &str) -> Result<Self, Error> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|e| {
                InvalidInputError::StudentId {
                    value: s.to_string(),
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for StudentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Serialize for StudentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = StudentId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or numeric string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(StudentId(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(StudentId)
                    .map_err(|_| E::custom(format!("negative student id {}", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                StudentId::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}
