//! Serialization of [`Maybe`] values
//!
//! `Maybe<T>` implements serde's [`Serialize`] and [`Deserialize`] for any
//! format, following the format's own notion of an optional value. For
//! JSON, `Just(v)` is written as `v` and `Nothing` as `null`.
//!
//! A JSON `null` always decodes to `Nothing`. So a `Maybe<Option<T>>`
//! holding `Just(None)` is written as `null` and read back as `Nothing`,
//! the same collapsing that [`Maybe::from_nullable`] applies.

mod error;


use log::{debug, trace};
use serde::{
    de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer,
};

use crate::Maybe;

pub use error::{DecodeError, EncodeError};

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Maybe::Just(x) => serializer.serialize_some(x),
            Maybe::Nothing => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}

/// Encode `value` as JSON.
///
/// This only fails if the encoder of `T` fails, for instance for a map with
/// non-string keys.
pub fn encode<T: Serialize>(
    value: &Maybe<T>,
) -> Result<Vec<u8>, EncodeError> {
    trace_encode(value);
    serde_json::to_vec(value).map_err(EncodeError::new::<T>)
}

pub fn encode_to_string<T: Serialize>(
    value: &Maybe<T>,
) -> Result<String, EncodeError> {
    trace_encode(value);
    serde_json::to_string(value).map_err(EncodeError::new::<T>)
}

fn trace_encode<T>(value: &Maybe<T>) {
    trace!(
        "encoding {} Maybe<{}>",
        if value.has_value() { "present" } else { "absent" },
        std::any::type_name::<T>()
    );
}

/// Decode a `Maybe<T>` from JSON.
///
/// `null` gives `Nothing`, any other value is decoded as `T` and wrapped in
/// `Just`. A value that is not valid for `T` gives a [`DecodeError`].
pub fn decode<T: DeserializeOwned>(
    bytes: &[u8],
) -> Result<Maybe<T>, DecodeError> {
    trace!(
        "decoding Maybe<{}> from {} bytes",
        std::any::type_name::<T>(),
        bytes.len()
    );
    serde_json::from_slice(bytes).map_err(|err| {
        let err = DecodeError::new::<T>(err, bytes);
        debug!("{err}");
        err
    })
}

pub fn decode_str<T: DeserializeOwned>(
    s: &str,
) -> Result<Maybe<T>, DecodeError> {
    decode(s.as_bytes())
}

impl<T: DeserializeOwned> Maybe<T> {
    /// Decode JSON into `self`.
    ///
    /// The new value is decoded separately and only assigned once decoding
    /// has succeeded. On error `self` keeps its previous value.
    pub fn decode_into(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        let decoded = decode(bytes)?;
        *self = decoded;
        Ok(())
    }
}
