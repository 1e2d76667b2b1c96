//! Distinct nullable types built on the base types.
//!
//! A distinct type has the representation of [`crate::Int`] or
//! [`crate::Text`] but its own identity: it is never interchangeable with
//! the base type, nor with other distinct types, without an explicit
//! conversion. Its codecs forward to the base type, so the JSON and database
//! representations are identical.
//!
//! ```
//! use zeronull::{nullable_newtype, Int, JsonCodec, Nullable};
//!
//! nullable_newtype! {
//!     /// Identifier of an account.
//!     pub struct AccountId(i64);
//! }
//!
//! assert_eq!(AccountId(10).to_json(), "10");
//! assert_eq!(AccountId::NULL.to_json(), "null");
//! assert_eq!(Int::from(AccountId(10)), Int(10));
//! ```
//!
//! A distinct type cannot be used where the base type is expected:
//!
//! ```compile_fail
//! use zeronull::{nullable_newtype, Int};
//!
//! nullable_newtype! {
//!     pub struct AccountId(i64);
//! }
//!
//! let id: Int = AccountId(10);
//! ```
//!
//! When a new name without a new identity is wanted, a plain type alias
//! (`type OtherId = zeronull::Int;`) inherits every capability of the base
//! type and needs no forwarding at all.

/// Declares a distinct nullable type over `i64` or `String`.
///
/// The generated type gets [`crate::Nullable`], [`crate::JsonCodec`],
/// [`crate::SqlCodec`], `serde` and (with the `rusqlite` feature) driver
/// implementations forwarding to [`crate::Int`] or [`crate::Text`], plus
/// `From` conversions to and from the raw and base types.
#[macro_export]
macro_rules! nullable_newtype {
    (@forward $name:ident, $raw:ty, $base:ty, $null:expr, $unmarshal:path, $scan:path) => {
        impl $crate::Nullable for $name {
            const NULL: Self = $name($null);
        }

        impl ::core::convert::From<$raw> for $name {
            #[inline(always)]
            fn from(value: $raw) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<$name> for $raw {
            #[inline(always)]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::core::convert::From<$base> for $name {
            #[inline(always)]
            fn from(value: $base) -> Self {
                Self(value.0)
            }
        }

        impl ::core::convert::From<$name> for $base {
            #[inline(always)]
            fn from(value: $name) -> Self {
                <$base>::from(value.0)
            }
        }

        impl $crate::JsonCodec for $name {
            fn to_json(&self) -> ::std::string::String {
                $crate::JsonCodec::to_json(&<$base>::from(self.clone()))
            }

            fn from_json(input: &str) -> $crate::Result<Self> {
                $unmarshal(input).map(Self::from)
            }
        }

        impl $crate::SqlCodec for $name {
            fn to_value(&self) -> $crate::Value {
                $crate::SqlCodec::to_value(&<$base>::from(self.clone()))
            }

            fn from_value(value: $crate::ValueRef<'_>) -> $crate::Result<Self> {
                $scan(value).map(Self::from)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(
                    &<$base>::from(self.clone()),
                    serializer,
                )
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$base as $crate::__private::serde::Deserialize<'de>>::deserialize(deserializer)
                    .map(Self::from)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&<$base>::from(self.clone()), f)
            }
        }

        $crate::__forward_rusqlite!($name, $base);
    };
    ( $(#[$meta:meta])* $vis:vis struct $name:ident(i64); ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        $vis struct $name(pub i64);

        $crate::nullable_newtype!(
            @forward $name,
            i64,
            $crate::Int,
            0,
            $crate::unmarshal_int,
            $crate::scan_int
        );
    };
    ( $(#[$meta:meta])* $vis:vis struct $name:ident(String); ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        $vis struct $name(pub ::std::string::String);

        $crate::nullable_newtype!(
            @forward $name,
            ::std::string::String,
            $crate::Text,
            ::std::string::String::new(),
            $crate::unmarshal_text,
            $crate::scan_text
        );
    };
}

// Forwards the driver traits when the `rusqlite` feature is enabled.
#[cfg(feature = "rusqlite")]
#[doc(hidden)]
#[macro_export]
macro_rules! __forward_rusqlite {
    ( $name:ident, $base:ty ) => {
        impl $crate::__private::rusqlite::ToSql for $name {
            fn to_sql(
                &self,
            ) -> $crate::__private::rusqlite::Result<
                $crate::__private::rusqlite::types::ToSqlOutput<'_>,
            > {
                Ok($crate::__private::rusqlite::types::ToSqlOutput::Owned(
                    $crate::SqlCodec::to_value(self).into(),
                ))
            }
        }

        impl $crate::__private::rusqlite::types::FromSql for $name {
            fn column_result(
                value: $crate::__private::rusqlite::types::ValueRef<'_>,
            ) -> $crate::__private::rusqlite::types::FromSqlResult<Self> {
                <$base as $crate::__private::rusqlite::types::FromSql>::column_result(value)
                    .map(Self::from)
            }
        }
    };
}

#[cfg(not(feature = "rusqlite"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __forward_rusqlite {
    ( $name:ident, $base:ty ) => {};
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use crate::{
        scan_int, unmarshal_int, Error, Int, JsonCodec, Nullable, Result, SqlCodec, Text, Value,
        ValueRef, NULL_INT,
    };

    /// Distinct type with hand-written forwarding.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct CustomId(i64);

    const NULL_CUSTOM_ID: CustomId = CustomId(0);

    impl Nullable for CustomId {
        const NULL: Self = NULL_CUSTOM_ID;
    }

    impl JsonCodec for CustomId {
        fn to_json(&self) -> String {
            Int(self.0).to_json()
        }

        fn from_json(input: &str) -> Result<Self> {
            unmarshal_int(input).map(|value| CustomId(value.0))
        }
    }

    impl SqlCodec for CustomId {
        fn to_value(&self) -> Value {
            Int(self.0).to_value()
        }

        fn from_value(value: ValueRef<'_>) -> Result<Self> {
            scan_int(value).map(|value| CustomId(value.0))
        }
    }

    nullable_newtype! {
        /// Distinct type with generated forwarding.
        struct OrderId(i64);
    }

    nullable_newtype! {
        struct CustomString(String);
    }

    const NULL_CUSTOM_STRING: CustomString = CustomString(String::new());

    type OtherCustom = Int;

    #[test]
    fn test_hand_written() {
        let cases = [
            (CustomId(10), "10", Value::Integer(10), CustomId(10)),
            (CustomId(0), "null", Value::Null, NULL_CUSTOM_ID),
            (NULL_CUSTOM_ID, "null", Value::Null, CustomId(0)),
        ];

        for (value, json, bound, expected) in cases {
            assert_eq!(value.to_json(), json);

            let mut decoded = CustomId(10);
            decoded.unmarshal_into(json).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(decoded, expected);

            assert_eq!(value.to_value(), bound);

            let mut scanned = CustomId(10);
            scanned.scan_into(bound.as_ref()).unwrap();
            assert_eq!(scanned, expected);
        }
    }

    #[test]
    fn test_generated() {
        for raw in [10, -3, 0] {
            let id = OrderId(raw);
            assert_eq!(id.to_json(), Int(raw).to_json());
            assert_eq!(id.to_value(), Int(raw).to_value());
            assert_eq!(id.is_null(), Int(raw).is_null());
            assert_eq!(OrderId::from_json(&id.to_json()).unwrap(), id);
            assert_eq!(OrderId::from_value(id.to_value().as_ref()).unwrap(), id);
            assert_eq!(id.to_string(), Int(raw).to_string());
        }

        assert_eq!(OrderId::NULL, OrderId::default());
        assert_eq!(Int::from(OrderId(4)), Int(4));
        assert_eq!(OrderId::from(Int(4)), OrderId(4));
        assert_eq!(i64::from(OrderId(4)), 4);

        assert!(matches!(
            OrderId::from_json("\"4\""),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            OrderId::from_value(ValueRef::Real(4.0)),
            Err(Error::Conversion { .. })
        ));
    }

    #[test]
    fn test_generated_string() {
        let cases = [
            (CustomString("foo".into()), r#""foo""#, CustomString("foo".into())),
            (CustomString(String::new()), "null", NULL_CUSTOM_STRING),
            (NULL_CUSTOM_STRING, "null", CustomString(String::new())),
        ];

        for (value, json, expected) in cases {
            assert_eq!(value.to_json(), json);
            assert_eq!(value.to_json(), Text(value.0.clone()).to_json());

            let mut decoded = CustomString("blah".into());
            decoded.unmarshal_into(json).unwrap();
            assert_eq!(decoded, expected);

            let mut scanned = CustomString("blah".into());
            scanned.scan_into(value.to_value().as_ref()).unwrap();
            assert_eq!(scanned, expected);
        }

        assert!(CustomString::NULL.is_null());
        assert_eq!(Text::from(CustomString("x".into())), Text::from("x"));
    }

    #[test]
    fn test_serde_forwarding() {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Order {
            id: OrderId,
            note: CustomString,
        }

        let order = Order {
            id: OrderId(7),
            note: CustomString::default(),
        };
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"{"id":7,"note":null}"#);
        assert_eq!(serde_json::from_str::<Order>(&json).unwrap(), order);
    }

    #[test]
    fn test_alias() {
        // An alias is the base type under another name.
        let value: Int = OtherCustom::from(10i64);
        let alias: OtherCustom = value;
        assert_eq!(alias.to_json(), "10");
        assert_eq!(OtherCustom::NULL, NULL_INT);
        assert_eq!(TypeId::of::<OtherCustom>(), TypeId::of::<Int>());

        // Distinct types keep their own identity.
        assert_ne!(TypeId::of::<CustomId>(), TypeId::of::<Int>());
        assert_ne!(TypeId::of::<OrderId>(), TypeId::of::<Int>());
        assert_ne!(TypeId::of::<OrderId>(), TypeId::of::<CustomId>());
    }
}
