use core::fmt::{Display, Formatter};

use bytemuck::{Pod, Zeroable};
use serde::{
    de::{self, Unexpected, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{
    codec::{JsonCodec, SqlCodec},
    error::{Error, Kind, Result},
    nullable::Nullable,
    value::{Value, ValueRef},
};

/// A nullable 64-bit signed integer.
///
/// The value `0` is the `null` sentinel: it serializes to JSON `null` and
/// binds as SQL `NULL`, and both of those decode back to `0`. A present
/// zero cannot be represented.
#[repr(transparent)]
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Pod, Zeroable,
)]
pub struct Int(pub i64);

/// The `null` integer.
pub const NULL_INT: Int = Int(0);

impl Nullable for Int {
    const NULL: Self = NULL_INT;
}

impl Int {
    #[inline(always)]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the integer, or `None` when it is `null`.
    #[inline(always)]
    pub fn get(self) -> Option<i64> {
        if self.is_null() {
            None
        } else {
            Some(self.0)
        }
    }

    #[inline(always)]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Wraps a slice of raw integers without copying.
    #[inline]
    pub fn from_raw_slice(values: &[i64]) -> &[Int] {
        bytemuck::cast_slice(values)
    }

    /// Views a slice of nullable integers as raw integers.
    #[inline]
    pub fn as_raw_slice(values: &[Int]) -> &[i64] {
        bytemuck::cast_slice(values)
    }
}

/// Parses a nullable integer from JSON text.
///
/// Accepts the `null` literal or a base-10 integer literal. Quoted numbers,
/// fractions and values outside the `i64` range are rejected.
pub fn unmarshal_int(input: &str) -> Result<Int> {
    serde_json::from_str(input).map_err(|source| Error::Parse {
        kind: Kind::Integer,
        source,
    })
}

/// Creates a nullable integer from a scanned column value.
///
/// Every integer width is accepted as long as it fits in an `i64`, as well
/// as numeric text sent either as text or as bytes.
pub fn scan_int(value: ValueRef<'_>) -> Result<Int> {
    let mismatch = || Error::Conversion {
        kind: Kind::Integer,
        found: value.type_name(),
    };

    let raw = match value {
        ValueRef::Null => return Ok(NULL_INT),
        ValueRef::I64(raw) => raw,
        ValueRef::I8(raw) => raw.into(),
        ValueRef::I16(raw) => raw.into(),
        ValueRef::I32(raw) => raw.into(),
        ValueRef::U8(raw) => raw.into(),
        ValueRef::U16(raw) => raw.into(),
        ValueRef::U32(raw) => raw.into(),
        ValueRef::U64(raw) => i64::try_from(raw).map_err(|_| mismatch())?,
        ValueRef::Text(text) => {
            log::trace!("coercing numeric text {text:?} to integer");
            parse_numeric(text).ok_or_else(mismatch)?
        }
        ValueRef::Blob(bytes) => {
            log::trace!("coercing {} byte(s) of numeric text to integer", bytes.len());
            core::str::from_utf8(bytes)
                .ok()
                .and_then(parse_numeric)
                .ok_or_else(mismatch)?
        }
        ValueRef::Real(_) => return Err(mismatch()),
    };

    Ok(Int(raw))
}

#[inline]
fn parse_numeric(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

impl JsonCodec for Int {
    fn to_json(&self) -> String {
        serde_json::Value::from(*self).to_string()
    }

    fn from_json(input: &str) -> Result<Self> {
        unmarshal_int(input)
    }
}

impl SqlCodec for Int {
    fn to_value(&self) -> Value {
        match self.get() {
            Some(raw) => Value::Integer(raw),
            None => Value::Null,
        }
    }

    fn from_value(value: ValueRef<'_>) -> Result<Self> {
        scan_int(value)
    }
}

impl Serialize for Int {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self.get() {
            Some(raw) => serializer.serialize_i64(raw),
            None => serializer.serialize_none(),
        }
    }
}

struct IntVisitor;

impl<'de> Visitor<'de> for IntVisitor {
    type Value = Int;

    fn expecting(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("an integer or null")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> core::result::Result<Int, E> {
        Ok(Int(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> core::result::Result<Int, E> {
        i64::try_from(value)
            .map(Int)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    // serde_json reports the integer literal `-0` as a negative zero float.
    // `-0.0` cannot be told apart from it and decodes the same way.
    fn visit_f64<E: de::Error>(self, value: f64) -> core::result::Result<Int, E> {
        if value == 0.0 && value.is_sign_negative() {
            Ok(NULL_INT)
        } else {
            Err(E::invalid_type(Unexpected::Float(value), &self))
        }
    }

    fn visit_none<E: de::Error>(self) -> core::result::Result<Int, E> {
        Ok(NULL_INT)
    }

    fn visit_unit<E: de::Error>(self) -> core::result::Result<Int, E> {
        Ok(NULL_INT)
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> core::result::Result<Int, D::Error> {
        deserializer.deserialize_i64(self)
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        deserializer.deserialize_option(IntVisitor)
    }
}

impl Display for Int {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.get() {
            Some(raw) => write!(f, "{raw}"),
            None => write!(f, "null"),
        }
    }
}

impl From<i64> for Int {
    #[inline(always)]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Option<i64>> for Int {
    #[inline(always)]
    fn from(value: Option<i64>) -> Self {
        value.map_or(NULL_INT, Int)
    }
}

impl From<Int> for i64 {
    #[inline(always)]
    fn from(value: Int) -> Self {
        value.0
    }
}

impl From<Int> for serde_json::Value {
    fn from(value: Int) -> Self {
        match value.get() {
            Some(raw) => raw.into(),
            None => serde_json::Value::Null,
        }
    }
}
