//! Serde support (feature-gated)
//!
//! - [`NonEmptyVec<T>`] serializes as a plain sequence. Deserializing an empty
//!   sequence fails, so a decoded `Validation::Invalid` always has errors.
//! - [`Optional<T>`] serializes exactly like `Option<T>`: `null` for
//!   `Absent`, the bare payload for `Present`.
//! - [`Validation`] and [`ValidationError`] use the derived representation.
//!
//! [`Validation`]: crate::Validation
//! [`ValidationError`]: crate::ValidationError

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{NonEmptyVec, Optional};

impl<T> Serialize for NonEmptyVec<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for NonEmptyVec<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptyVec::try_from(items).map_err(serde::de::Error::custom)
    }
}

impl<T> Serialize for Optional<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::of)
    }
}
