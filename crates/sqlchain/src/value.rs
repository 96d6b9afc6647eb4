//! Values carried by SET/INSERT pairs and WHERE clauses.

use serde::Serialize;
use std::fmt;

/// A value attached to a column.
///
/// Integers render bare, structured JSON renders as a quoted JSON document,
/// and everything else renders as a quoted string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer value, rendered without quotes.
    Int(i64),
    /// Floating point value, rendered as a quoted string.
    Float(f64),
    /// Text value, rendered as a quoted string.
    Text(String),
    /// Structured value (object/array), serialized at render time.
    Json(serde_json::Value),
}

impl Value {
    /// Serialize any `serde::Serialize` value into a [`Value`].
    ///
    /// Scalars map onto the matching variant; objects and arrays stay structured.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(Self::from)
    }

    /// Whether this value is a structured (non-scalar) JSON document.
    pub fn is_structured(&self) -> bool {
        matches!(self, Value::Json(_))
    }

    /// Render as a SQL literal: integers bare, everything else single-quoted.
    ///
    /// With `escape` set, embedded single quotes are doubled.
    pub fn to_literal(&self, escape: bool) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Float(f) => quote_literal(&f.to_string(), escape),
            Value::Text(s) => quote_literal(s, escape),
            Value::Json(v) => quote_literal(&v.to_string(), escape),
        }
    }
}

/// Bare (unquoted) rendering, used for WHERE clause values.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
            Value::Json(v) => write!(f, "{v}"),
        }
    }
}

pub(crate) fn quote_literal(s: &str, escape: bool) -> String {
    if escape {
        format!("'{}'", s.replace('\'', "''"))
    } else {
        format!("'{s}'")
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers stay `Int` when they fit; otherwise their exact digits are kept as text.
macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    i64::try_from(v).map_or_else(|_| Value::Text(v.to_string()), Value::Int)
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, isize, i128, u128);

/// `true`/`false` become `1`/`0`.
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if n.is_u64() {
                    Value::Text(n.to_string())
                } else {
                    Value::Float(n.as_f64().unwrap_or_default())
                }
            }
            other => Value::Json(other),
        }
    }
}
