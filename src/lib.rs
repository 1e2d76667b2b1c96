//! Nullable scalar types where the zero value means `null`.
//!
//! [`Int`] and [`Text`] wrap an `i64` and a `String`. Their zero value (`0`
//! and `""`) is the `null` sentinel, which serializes to JSON `null` and
//! binds as SQL `NULL`. Decoding either form of `null` gives the zero value
//! back. There is no way to store a present zero or a present empty string.
//!
//! Both types implement [`JsonCodec`] and [`SqlCodec`], `serde` and, with
//! the `rusqlite` feature, the `rusqlite` driver traits. The
//! [`nullable_newtype!`] macro declares distinct types that forward to them.

mod codec;
mod error;
mod newtype;
mod nullable;
#[cfg(feature = "rusqlite")]
mod sqlite;
mod types;
mod value;

pub use codec::{JsonCodec, SqlCodec};
pub use error::{Error, Kind, Result};
pub use nullable::Nullable;
pub use types::{
    scan_int, scan_text, unmarshal_int, unmarshal_text, Int, Text, NULL_INT, NULL_TEXT,
};
pub use value::{Value, ValueRef};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "rusqlite")]
    pub use rusqlite;
    pub use serde;
}
