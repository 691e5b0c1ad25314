//! Lenient decoding for API payloads
//!
//! Every payload that crosses the wire decodes into [`Decoded<T>`]. A payload
//! that fits the typed shape becomes [`Decoded::Typed`]; one that doesn't
//! (a type mismatch, an enum value outside its allowed set, a nested record
//! that fails) is kept verbatim as [`Decoded::Unparsed`] so it can be
//! inspected or sent back unchanged. Lists of records fall back element by
//! element, so one unrecognized entry leaves the rest typed. A missing
//! top-level required field, or a payload that is not a JSON object, is a
//! hard error.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A record that can be decoded leniently.
pub trait Model: Serialize + DeserializeOwned {
    /// JSON keys that must be present and non-null for the payload to decode at all.
    const REQUIRED_FIELDS: &'static [&'static str] = &[];
}

/// Raw JSON retained when a payload does not fit its typed shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnparsedObject {
    pub value: Value,
}

impl UnparsedObject {
    /// Look up a top-level key of the raw payload.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }
}

/// Errors that make a payload undecodable even leniently.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("required field {0} missing")]
    MissingField(&'static str),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A payload decoded into its typed shape, or the raw JSON it came from.
#[derive(Clone, PartialEq)]
pub enum Decoded<T> {
    Typed(T),
    Unparsed(UnparsedObject),
}

impl<T: Model> Decoded<T> {
    /// Decode a JSON value, falling back to the raw value on shape mismatch.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let Value::Object(map) = &value else {
            return Err(DecodeError::NotAnObject(json_kind(&value)));
        };
        if let Some(missing) = T::REQUIRED_FIELDS
            .iter()
            .find(|field| map.get(**field).is_none_or(Value::is_null))
        {
            return Err(DecodeError::MissingField(missing));
        }

        match T::deserialize(&value) {
            Ok(typed) => Ok(Decoded::Typed(typed)),
            Err(err) => {
                tracing::debug!(
                    model = std::any::type_name::<T>(),
                    error = %err,
                    "payload kept as unparsed object"
                );
                Ok(Decoded::Unparsed(UnparsedObject { value }))
            }
        }
    }

    /// Decode raw response bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Decode a response body; an empty body reads as an empty object.
    pub(crate) fn from_body(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            Self::from_value(Value::Object(serde_json::Map::new()))
        } else {
            Self::from_slice(bytes)
        }
    }
}

impl<T> Decoded<T> {
    pub fn is_unparsed(&self) -> bool {
        matches!(self, Decoded::Unparsed(_))
    }

    pub fn typed(&self) -> Option<&T> {
        match self {
            Decoded::Typed(t) => Some(t),
            Decoded::Unparsed(_) => None,
        }
    }

    pub fn typed_mut(&mut self) -> Option<&mut T> {
        match self {
            Decoded::Typed(t) => Some(t),
            Decoded::Unparsed(_) => None,
        }
    }

    pub fn into_typed(self) -> Option<T> {
        match self {
            Decoded::Typed(t) => Some(t),
            Decoded::Unparsed(_) => None,
        }
    }

    pub fn unparsed(&self) -> Option<&UnparsedObject> {
        match self {
            Decoded::Typed(_) => None,
            Decoded::Unparsed(raw) => Some(raw),
        }
    }
}

impl<T> From<T> for Decoded<T> {
    fn from(value: T) -> Self {
        Decoded::Typed(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Decoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoded::Typed(t) => t.fmt(f),
            Decoded::Unparsed(raw) => f.debug_tuple("Unparsed").field(&raw.value).finish(),
        }
    }
}

impl<T: Serialize> Serialize for Decoded<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Decoded::Typed(t) => t.serialize(serializer),
            Decoded::Unparsed(raw) => raw.value.serialize(serializer),
        }
    }
}

impl<'de, T: Model> Deserialize<'de> for Decoded<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Decoded::from_value(value).map_err(D::Error::custom)
    }
}

/// Declares a closed string enum with its wire values.
///
/// Decoding a value outside the set is an error, which makes the record
/// holding the enum fall back to [`Decoded::Unparsed`].
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every allowed value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value as sent on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::error::Error::Validation(format!(
                        "invalid value '{}' for {}",
                        other,
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

pub(crate) use string_enum;
