//! # Structured Values
//!
//! Bridges `google.protobuf.Struct` and JSON objects.
//!
//! Protobuf numbers are all doubles. On the way back, integral doubles within the exactly
//! representable range (±2^53) become JSON integers so that `{"n": 1}` survives a round
//! trip unchanged. The wire cannot tell `1.0` from `1`, so a whole-valued float comes back
//! as an integer too: `{"t": 1.0}` returns as `{"t": 1}`. Fractional and out-of-range
//! numbers stay floats. JSON has no NaN or infinity, which makes the wire-to-host
//! direction fallible.
use prost_types::value::Kind;
use prost_types::{ListValue, NullValue, Struct};
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt::Display;

/// Largest integer below which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(thiserror::Error, Debug)]
pub enum StructuredValueError {
    #[error("Number at '{path}' has no JSON representation: '{value}'")]
    NonFiniteNumber { path: String, value: f64 },
    #[error("Expected a JSON object, found {kind}")]
    NotAnObject { kind: &'static str },
    #[error("Value cannot be serialized to JSON: '{0}'")]
    Serialize(#[from] serde_json::Error),
}

impl StructuredValueError {
    /// Prefixes the location of the failing value with the enclosing key or index.
    fn within(self, segment: impl Display) -> Self {
        match self {
            Self::NonFiniteNumber { path, value } if path.is_empty() => Self::NonFiniteNumber {
                path: segment.to_string(),
                value,
            },
            Self::NonFiniteNumber { path, value } => Self::NonFiniteNumber {
                path: format!("{segment}.{path}"),
                value,
            },
            other => other,
        }
    }
}

/// Serializes any value into a JSON object.
///
/// Fails when serialization fails (e.g. map keys that are not strings) or when the result
/// is not an object.
pub fn to_map<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>, StructuredValueError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StructuredValueError::NotAnObject {
            kind: json_kind(&other),
        }),
    }
}

pub fn map_to_struct(map: &Map<String, Value>) -> Struct {
    Struct {
        fields: map
            .iter()
            .map(|(key, value)| (key.clone(), json_to_value(value)))
            .collect(),
    }
}

pub fn struct_to_map(value: Struct) -> Result<Map<String, Value>, StructuredValueError> {
    value
        .fields
        .into_iter()
        .map(|(key, value)| match value_to_json(value) {
            Ok(json) => Ok((key, json)),
            Err(err) => Err(err.within(key)),
        })
        .collect()
}

pub fn json_to_value(value: &Value) -> prost_types::Value {
    let kind = match value {
        Value::Null => Kind::NullValue(NullValue::NullValue as i32),
        Value::Bool(b) => Kind::BoolValue(*b),
        Value::Number(n) => match n.as_f64() {
            Some(number) => Kind::NumberValue(number),
            None => Kind::StringValue(n.to_string()),
        },
        Value::String(s) => Kind::StringValue(s.clone()),
        Value::Array(values) => Kind::ListValue(ListValue {
            values: values.iter().map(json_to_value).collect(),
        }),
        Value::Object(map) => Kind::StructValue(map_to_struct(map)),
    };

    prost_types::Value { kind: Some(kind) }
}

/// A value without a kind is read as `null`.
pub fn value_to_json(value: prost_types::Value) -> Result<Value, StructuredValueError> {
    let json = match value.kind {
        None | Some(Kind::NullValue(_)) => Value::Null,
        Some(Kind::BoolValue(b)) => Value::Bool(b),
        Some(Kind::NumberValue(n)) => Value::Number(number_to_json(n)?),
        Some(Kind::StringValue(s)) => Value::String(s),
        Some(Kind::ListValue(list)) => Value::Array(
            list.values
                .into_iter()
                .enumerate()
                .map(|(index, value)| value_to_json(value).map_err(|err| err.within(index)))
                .collect::<Result<_, _>>()?,
        ),
        Some(Kind::StructValue(fields)) => Value::Object(struct_to_map(fields)?),
    };

    Ok(json)
}

fn number_to_json(n: f64) -> Result<Number, StructuredValueError> {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Ok(Number::from(n as i64));
    }

    Number::from_f64(n).ok_or(StructuredValueError::NonFiniteNumber {
        path: String::new(),
        value: n,
    })
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
