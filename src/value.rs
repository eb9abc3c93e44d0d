//! Dynamic value representation for the numeric value system.
//!
//! This module provides the [`Value`] enum which represents any value the
//! conversion operation can receive. The set of kinds is closed: dispatch
//! over a `Value` is an exhaustive `match`, so the compiler guarantees every
//! kind is handled and no "unknown kind" failure can occur at run time.
//!
//! ## Core types
//!
//! - [`Value`]: a tagged union of the recognized kinds (null, boolean,
//!   number, text, array, matrix) plus the domain-specific kinds handled by
//!   the generic fallback (big integer, date)
//!
//! ## Usage patterns
//!
//! ### Creating values
//!
//! ```rust
//! use valtext::Value;
//!
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let num = Value::from(4.2);
//! let text = Value::from("hello");
//!
//! // Using the value! macro
//! use valtext::value;
//! let nested = value!([[1, 2], [3, 4]]);
//! ```
//!
//! ### Type checking and extraction
//!
//! ```rust
//! use valtext::Value;
//!
//! let value = Value::from(4.2);
//! assert!(value.is_number());
//! assert_eq!(value.as_number(), Some(4.2));
//!
//! let num: f64 = f64::try_from(Value::from(4.2)).unwrap();
//! assert_eq!(num, 4.2);
//! ```

use crate::format;
use crate::Matrix;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed value of the surrounding numeric system.
///
/// The first six variants form the closed set of kinds with dedicated
/// conversion rules. `BigInt` and `Date` sit outside that set; they are
/// covered by the generic stringification fallback of
/// [`to_text`](crate::to_text).
///
/// # Examples
///
/// ```rust
/// use valtext::Value;
///
/// let num = Value::Number(4.2);
/// let text = Value::Str("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_str());
/// assert!(Value::Null.is_null());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<Value>),
    Matrix(Matrix<Value>),
    BigInt(BigInt),
    Date(DateTime<Utc>),
}

impl Value {
    /// Returns the kind of this value as a lowercase name.
    ///
    /// Used in error messages and by callers that route on kind without
    /// matching the enum themselves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::Value;
    ///
    /// assert_eq!(Value::Null.kind(), "null");
    /// assert_eq!(Value::from(4.2).kind(), "number");
    /// assert_eq!(Value::from("hi").kind(), "text");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "text",
            Value::Array(_) => "array",
            Value::Matrix(_) => "matrix",
            Value::BigInt(_) => "bigint",
            Value::Date(_) => "date",
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is text.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is a matrix.
    #[inline]
    #[must_use]
    pub const fn is_matrix(&self) -> bool {
        matches!(self, Value::Matrix(_))
    }

    /// Returns `true` if the value is a container (array or matrix).
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Matrix(_))
    }

    /// Returns `true` if the value is a big integer.
    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, Value::BigInt(_))
    }

    /// Returns `true` if the value is a date.
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a number, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is text, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a matrix, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_matrix(&self) -> Option<&Matrix<Value>> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// If the value is a big integer, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(bi) => Some(bi),
            _ => None,
        }
    }

    /// If the value is a date, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// Applies `f` to every leaf of this value and rebuilds containers of
    /// identical shape.
    ///
    /// Arrays are rebuilt element by element, nested arrays recursively;
    /// matrices are rebuilt through [`Matrix::map`], which reuses the input's
    /// shape. Scalars (anything that is not a container) are passed to `f`
    /// directly. The input is not mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::{value, Value};
    ///
    /// let nested = value!([[1, 2], [3, 4]]);
    /// let scaled = nested.deep_map(|leaf| match leaf {
    ///     Value::Number(n) => Value::Number(n * 10.0),
    ///     other => other.clone(),
    /// });
    /// assert_eq!(scaled, value!([[10, 20], [30, 40]]));
    /// ```
    #[must_use]
    pub fn deep_map<F>(&self, f: F) -> Value
    where
        F: Fn(&Value) -> Value,
    {
        fn go<F: Fn(&Value) -> Value>(value: &Value, f: &F) -> Value {
            match value {
                Value::Array(items) => Value::Array(items.iter().map(|v| go(v, f)).collect()),
                Value::Matrix(m) => Value::Matrix(m.map(|v| go(v, f))),
                leaf => f(leaf),
            }
        }
        go(self, &f)
    }
}

impl fmt::Display for Value {
    /// Generic stringification: the platform-default textual form of a value.
    ///
    /// This is the fallback rule of [`to_text`](crate::to_text) for kinds
    /// outside the closed set. Output is non-empty and deterministic for a
    /// given input.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", format::number(*n)),
            Value::Str(s) => write!(f, "{}", s),
            Value::Array(items) => {
                write!(
                    f,
                    "[{}]",
                    items
                        .iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            Value::Matrix(m) => write!(f, "{}", m.to_nested()),
            Value::BigInt(bi) => write!(f, "{}", bi),
            Value::Date(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            // Matrices serialize as the equivalent nested arrays.
            Value::Matrix(m) => m.to_nested().serialize(serializer),
            Value::BigInt(bi) => serializer.serialize_str(&bi.to_string()),
            Value::Date(dt) => serializer.serialize_str(&dt.to_rfc3339()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("null, a boolean, a number, text or a sequence")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::Str(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::Str(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    items.push(elem);
                }
                Ok(Value::Array(items))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting primitives from Value
impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(crate::Error::type_mismatch("number", other.kind())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(crate::Error::type_mismatch("boolean", other.kind())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("text", other.kind())),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Matrix<Value>> for Value {
    fn from(value: Matrix<Value>) -> Self {
        Value::Matrix(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}
