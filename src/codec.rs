//! Codec capabilities shared by every nullable scalar.
//!
//! Each base type implements both traits once. Types built on top of a base
//! type implement them by converting to the base type and forwarding.

use crate::{
    error::Result,
    nullable::Nullable,
    value::{Value, ValueRef},
};

/// Conversion between a value and its JSON text.
pub trait JsonCodec: Sized {
    /// Serializes the value. `null` values produce the `null` literal.
    fn to_json(&self) -> String;

    /// Parses a value from JSON text. The `null` literal produces the
    /// `null` value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Parse`] if the input is not `null` nor a
    /// valid literal of the expected kind.
    fn from_json(input: &str) -> Result<Self>;

    /// Parses `input` into `self`.
    ///
    /// On error `self` is left as `null`.
    fn unmarshal_into(&mut self, input: &str) -> Result<()>
    where
        Self: Nullable,
    {
        match Self::from_json(input) {
            Ok(value) => {
                *self = value;
                Ok(())
            }
            Err(error) => {
                *self = Self::NULL;
                Err(error)
            }
        }
    }
}

/// Conversion between a value and its database representation.
pub trait SqlCodec: Sized {
    /// Returns the value to bind as a statement parameter. `null` values
    /// produce [`Value::Null`].
    fn to_value(&self) -> Value;

    /// Creates a value from a scanned column.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Conversion`] if the column value cannot be
    /// coerced to the expected kind.
    fn from_value(value: ValueRef<'_>) -> Result<Self>;

    /// Populates `self` from a scanned column.
    ///
    /// On error `self` is left as `null`.
    fn scan_into(&mut self, value: ValueRef<'_>) -> Result<()>
    where
        Self: Nullable,
    {
        match Self::from_value(value) {
            Ok(value) => {
                *self = value;
                Ok(())
            }
            Err(error) => {
                *self = Self::NULL;
                Err(error)
            }
        }
    }
}
