//! Turning raw command-line strings into sequences, objects, and values.

use serde_json::Value;

use crate::errors::{Error, Result};
use crate::objects::Object;

/// Human-readable kind of a JSON value, used in shape errors
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_json(argument: &str, raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| Error::invalid_json(argument, e))
}

pub fn parse_array(argument: &str, raw: &str) -> Result<Vec<Value>> {
    match parse_json(argument, raw)? {
        Value::Array(items) => Ok(items),
        other => Err(Error::unexpected_shape(argument, "an array", describe(&other))),
    }
}

/// A JSON array whose elements must all be numbers
pub fn parse_numbers(argument: &str, raw: &str) -> Result<Vec<f64>> {
    parse_array(argument, raw)?
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_f64().ok_or_else(|| {
                Error::unexpected_shape(format!("{argument}[{idx}]"), "a number", describe(item))
            })
        })
        .collect()
}

pub fn parse_object(argument: &str, raw: &str) -> Result<Object> {
    match parse_json(argument, raw)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::unexpected_shape(argument, "an object", describe(&other))),
    }
}

/// JSON if it parses, otherwise the raw text as a string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
