//! Framix value
//!
//! The atomic unit of data carried by a `Table` column. Only the CSV-native
//! kinds are modelled: whatever an RFC-4180 cell can hold once parsed.
//!
//! Methods:
//! 1. is_null
//! 1. parse_str

use std::fmt::Display;

use polars::prelude::AnyValue;
use serde::{Deserialize, Serialize};

use crate::{impl_try_from_value, impl_value_from, FramixError};

/// Value is the fundamental element in Framix.
/// Providing type conversion between Rust types and polars `AnyValue`.
#[derive(PartialEq, Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Parse a raw CSV cell into the narrowest value kind it fits:
    /// i64 first, then f64, then bool, otherwise the string itself.
    /// An empty cell is null.
    pub fn parse_str(s: &str) -> Value {
        if s.is_empty() {
            return Value::Null;
        }
        if let Ok(v) = s.parse::<i64>() {
            return Value::I64(v);
        }
        if let Ok(v) = s.parse::<f64>() {
            return Value::F64(v);
        }
        match s {
            "true" | "True" | "TRUE" => Value::Bool(true),
            "false" | "False" | "FALSE" => Value::Bool(false),
            _ => Value::String(s.to_string()),
        }
    }
}

#[derive(PartialEq, Clone, Debug, Deserialize, Serialize, Eq, Hash, Copy)]
pub enum ValueType {
    Bool,
    I64,
    F64,
    String,
    Null,
}

impl Default for ValueType {
    fn default() -> Self {
        ValueType::Null
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Null => write!(f, "null"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl From<&Value> for ValueType {
    fn from(v: &Value) -> Self {
        match v {
            Value::Bool(_) => ValueType::Bool,
            Value::I64(_) => ValueType::I64,
            Value::F64(_) => ValueType::F64,
            Value::String(_) => ValueType::String,
            Value::Null => ValueType::Null,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
            Value::Null => write!(f, "null"),
        }
    }
}

// ================================================================================================
// Value conversions: Rust types <-> Value
// ================================================================================================

impl_value_from!(bool, Bool);
impl_value_from!(i64, I64);
impl_value_from!(f64, F64);
impl_value_from!(String, String);
impl_value_from!(Option<bool>, Bool);
impl_value_from!(Option<i64>, I64);
impl_value_from!(Option<f64>, F64);
impl_value_from!(Option<String>, String);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Option<&str>> for Value {
    fn from(v: Option<&str>) -> Self {
        match v {
            Some(s) => Value::String(s.to_string()),
            None => Value::Null,
        }
    }
}

impl_try_from_value!(Bool, bool);
impl_try_from_value!(I64, i64);
impl_try_from_value!(F64, f64);
impl_try_from_value!(String, String);

// ================================================================================================
// Value conversions: polars `AnyValue` -> Value
// - the boundary where foreign values enter the bridge; any dtype outside
//   the value model is an unsupported-type error naming the dtype observed
// ================================================================================================

impl TryFrom<AnyValue<'_>> for Value {
    type Error = FramixError;

    fn try_from(av: AnyValue<'_>) -> Result<Self, Self::Error> {
        match av {
            AnyValue::Null => Ok(Value::Null),
            AnyValue::Boolean(v) => Ok(Value::Bool(v)),
            AnyValue::Int8(v) => Ok(Value::I64(v as i64)),
            AnyValue::Int16(v) => Ok(Value::I64(v as i64)),
            AnyValue::Int32(v) => Ok(Value::I64(v as i64)),
            AnyValue::Int64(v) => Ok(Value::I64(v)),
            AnyValue::UInt8(v) => Ok(Value::I64(v as i64)),
            AnyValue::UInt16(v) => Ok(Value::I64(v as i64)),
            AnyValue::UInt32(v) => Ok(Value::I64(v as i64)),
            AnyValue::UInt64(v) => i64::try_from(v)
                .map(Value::I64)
                .map_err(|_| FramixError::new_parse_error(v, "i64")),
            AnyValue::Float32(v) => Ok(Value::F64(v as f64)),
            AnyValue::Float64(v) => Ok(Value::F64(v)),
            AnyValue::String(v) => Ok(Value::String(v.to_string())),
            AnyValue::StringOwned(v) => Ok(Value::String(v.to_string())),
            av => Err(FramixError::new_unsupported_type_error(av.dtype())),
        }
    }
}

#[cfg(test)]
mod test_value {
    use super::*;

    #[test]
    fn parse_str_inference() {
        assert_eq!(Value::parse_str("42"), Value::I64(42));
        assert_eq!(Value::parse_str("-7"), Value::I64(-7));
        assert_eq!(Value::parse_str("0.5"), Value::F64(0.5));
        assert_eq!(Value::parse_str("true"), Value::Bool(true));
        assert_eq!(Value::parse_str("False"), Value::Bool(false));
        assert_eq!(Value::parse_str("foo"), Value::String("foo".to_string()));
        assert_eq!(Value::parse_str(""), Value::Null);
    }

    #[test]
    fn conversions() {
        let v: Value = 1i64.into();
        assert_eq!(v, Value::I64(1));

        let v: Value = Some("a").into();
        assert_eq!(v, Value::String("a".to_string()));

        let v: Value = Option::<f64>::None.into();
        assert!(v.is_null());

        let i = i64::try_from(Value::I64(10)).unwrap();
        assert_eq!(i, 10);

        assert!(bool::try_from(Value::String("x".to_string())).is_err());
    }

    #[test]
    fn any_value_boundary() {
        let v = Value::try_from(AnyValue::Int32(3)).unwrap();
        assert_eq!(v, Value::I64(3));

        let v = Value::try_from(AnyValue::UInt64(u64::MAX));
        assert!(matches!(v, Err(FramixError::Parse(_, _))));
    }
}
