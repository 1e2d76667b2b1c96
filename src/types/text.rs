use core::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    codec::{JsonCodec, SqlCodec},
    error::{Error, Kind, Result},
    nullable::Nullable,
    value::{Value, ValueRef},
};

/// A nullable string.
///
/// The empty string is the `null` sentinel. Decoding the JSON literal `""`
/// therefore yields the same value as decoding `null`, and both bind as
/// SQL `NULL`.
///
/// `Display` writes the raw string and is not part of the wire format: use
/// [`JsonCodec::to_json`] to tell a `null` apart from the text `"null"`.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Text(pub String);

/// The `null` text.
pub const NULL_TEXT: Text = Text(String::new());

impl Nullable for Text {
    const NULL: Self = NULL_TEXT;
}

impl Text {
    #[inline(always)]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the string, or `None` when it is `null`.
    #[inline]
    pub fn get(&self) -> Option<&str> {
        if self.is_null() {
            None
        } else {
            Some(&self.0)
        }
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline(always)]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Parses a nullable string from JSON text.
pub fn unmarshal_text(input: &str) -> Result<Text> {
    serde_json::from_str(input).map_err(|source| Error::Parse {
        kind: Kind::Text,
        source,
    })
}

/// Creates a nullable string from a scanned column value.
///
/// Text is accepted as is and bytes must be valid UTF-8. Numeric columns
/// are rejected.
pub fn scan_text(value: ValueRef<'_>) -> Result<Text> {
    match value {
        ValueRef::Null => Ok(NULL_TEXT),
        ValueRef::Text(text) => Ok(Text(text.to_owned())),
        ValueRef::Blob(bytes) => {
            log::trace!("coercing {} byte(s) to text", bytes.len());
            core::str::from_utf8(bytes)
                .map(|text| Text(text.to_owned()))
                .map_err(|_| Error::Conversion {
                    kind: Kind::Text,
                    found: value.type_name(),
                })
        }
        _ => Err(Error::Conversion {
            kind: Kind::Text,
            found: value.type_name(),
        }),
    }
}

impl JsonCodec for Text {
    fn to_json(&self) -> String {
        match self.get() {
            // Serializing a `str` into a `String` cannot fail.
            Some(text) => serde_json::to_string(text).unwrap_or_default(),
            None => "null".to_owned(),
        }
    }

    fn from_json(input: &str) -> Result<Self> {
        unmarshal_text(input)
    }
}

impl SqlCodec for Text {
    fn to_value(&self) -> Value {
        match self.get() {
            Some(text) => Value::Text(text.to_owned()),
            None => Value::Null,
        }
    }

    fn from_value(value: ValueRef<'_>) -> Result<Self> {
        scan_text(value)
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self.get() {
            Some(text) => serializer.serialize_str(text),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?
            .map(Text)
            .unwrap_or_default())
    }
}

/// Displays the raw string, so `null` displays as the empty string.
impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Text {
    #[inline(always)]
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Text {
    #[inline(always)]
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<Option<String>> for Text {
    #[inline(always)]
    fn from(value: Option<String>) -> Self {
        value.map(Text).unwrap_or_default()
    }
}

impl From<Text> for String {
    #[inline(always)]
    fn from(value: Text) -> Self {
        value.0
    }
}

impl From<Text> for serde_json::Value {
    fn from(value: Text) -> Self {
        if value.is_null() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(value.0)
        }
    }
}
