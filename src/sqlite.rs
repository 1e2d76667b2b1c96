//! SQLite driver support through `rusqlite`.

use rusqlite::{
    types::{
        FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Value as SqlValue,
        ValueRef as SqlValueRef,
    },
    ToSql,
};

use crate::{
    codec::SqlCodec,
    types::{Int, Text},
    value::{Value, ValueRef},
};

impl From<Value> for SqlValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SqlValue::Null,
            Value::Integer(value) => SqlValue::Integer(value),
            Value::Text(value) => SqlValue::Text(value),
        }
    }
}

impl<'a> From<SqlValueRef<'a>> for ValueRef<'a> {
    fn from(value: SqlValueRef<'a>) -> Self {
        match value {
            SqlValueRef::Null => ValueRef::Null,
            SqlValueRef::Integer(value) => ValueRef::I64(value),
            SqlValueRef::Real(value) => ValueRef::Real(value),
            // SQLite does not enforce UTF-8 on text columns.
            SqlValueRef::Text(bytes) => match core::str::from_utf8(bytes) {
                Ok(text) => ValueRef::Text(text),
                Err(_) => ValueRef::Blob(bytes),
            },
            SqlValueRef::Blob(bytes) => ValueRef::Blob(bytes),
        }
    }
}

// Implement the driver traits on top of `SqlCodec`.
macro_rules! rusqlite_impl {
    ( $($type:ty),* ) => {
        $(
            impl ToSql for $type {
                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    Ok(ToSqlOutput::Owned(self.to_value().into()))
                }
            }

            impl FromSql for $type {
                fn column_result(value: SqlValueRef<'_>) -> FromSqlResult<Self> {
                    <$type>::from_value(value.into())
                        .map_err(|error| FromSqlError::Other(Box::new(error)))
                }
            }
        )*
    };
}

rusqlite_impl!(Int, Text);
