//! Tri-state filter values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single filter input.
///
/// Distinguishes a missing key ([`Filter::Absent`]) from an explicit JSON
/// `null` ([`Filter::MatchNull`]). Whether `MatchNull` becomes an `IS NULL`
/// clause is decided per field by the predicate builder.
///
/// Use `#[serde(default)]` on the containing struct so missing keys
/// deserialize as `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    Absent,
    MatchNull,
    Value(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::Absent
    }
}

impl<T> Filter<T> {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Filter::Absent)
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Filter<U> {
        match self {
            Filter::Absent => Filter::Absent,
            Filter::MatchNull => Filter::MatchNull,
            Filter::Value(v) => Filter::Value(f(v)),
        }
    }
}

impl<T: Serialize> Serialize for Filter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Filter::Absent | Filter::MatchNull => serializer.serialize_none(),
            Filter::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Filter<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Filter::Value(v),
            None => Filter::MatchNull,
        })
    }
}
