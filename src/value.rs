/// Value handed to a database driver when binding a statement parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Explicit SQL `NULL`.
    Null,

    /// 64-bit signed integer.
    Integer(i64),

    /// UTF-8 text.
    Text(String),
}

impl Value {
    /// Returns a scanned view of the bound value.
    #[inline]
    pub fn as_ref(&self) -> ValueRef<'_> {
        match self {
            Value::Null => ValueRef::Null,
            Value::Integer(value) => ValueRef::I64(*value),
            Value::Text(value) => ValueRef::Text(value),
        }
    }

    /// Indicates whether the value binds as SQL `NULL`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Raw column value read back from a database driver.
///
/// Drivers disagree on how they hand back integers and text: some use the
/// exact column width, some send numeric columns as text and some send
/// text as raw bytes. Every shape is represented here so that the scan side
/// of each type decides what it accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueRef<'a> {
    Null,
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Real(f64),
    Text(&'a str),
    Blob(&'a [u8]),
}

impl ValueRef<'_> {
    /// Returns the name of the representation, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            ValueRef::Null => "null",
            ValueRef::I8(_) => "i8",
            ValueRef::I16(_) => "i16",
            ValueRef::I32(_) => "i32",
            ValueRef::I64(_) => "i64",
            ValueRef::U8(_) => "u8",
            ValueRef::U16(_) => "u16",
            ValueRef::U32(_) => "u32",
            ValueRef::U64(_) => "u64",
            ValueRef::Real(_) => "real",
            ValueRef::Text(_) => "text",
            ValueRef::Blob(_) => "blob",
        }
    }

    /// Indicates whether the column was SQL `NULL`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, ValueRef::Null)
    }
}

impl<'a> From<&'a str> for ValueRef<'a> {
    fn from(value: &'a str) -> Self {
        ValueRef::Text(value)
    }
}

impl<'a> From<&'a [u8]> for ValueRef<'a> {
    fn from(value: &'a [u8]) -> Self {
        ValueRef::Blob(value)
    }
}

// Convenience macro to convert numeric types into their scanned form.
macro_rules! value_ref_from {
    ( $(($type:ty, $variant:ident)),* ) => {
        $(
            impl From<$type> for ValueRef<'_> {
                #[inline(always)]
                fn from(value: $type) -> Self {
                    ValueRef::$variant(value)
                }
            }
        )*
    };
}

value_ref_from!(
    (i8, I8),
    (i16, I16),
    (i32, I32),
    (i64, I64),
    (u8, U8),
    (u16, U16),
    (u32, U32),
    (u64, U64),
    (f64, Real)
);
