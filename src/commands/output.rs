//! Rendering command results for stdout.

use serde_json::Value;

use crate::errors::Result;
use crate::objects::Object;

/// Largest integer an `f64` represents exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Number(f64),
    Numbers(Vec<f64>),
    Values(Vec<Value>),
    Object(Object),
    Message(String),
}

/// JSON form of a number: integral values lose their fractional part,
/// non-finite values become `null` (JSON has no spelling for them, so arrays
/// follow `JSON.stringify`; only scalar results spell them out).
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

/// Scalar form of a number, spelling out the non-finite cases
pub fn render_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        number_value(n).to_string()
    }
}

fn to_json(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

pub fn render(outcome: &Outcome, pretty: bool) -> Result<String> {
    match outcome {
        Outcome::Number(n) => Ok(render_number(*n)),
        Outcome::Numbers(numbers) => to_json(
            &Value::Array(numbers.iter().copied().map(number_value).collect()),
            pretty,
        ),
        Outcome::Values(values) => to_json(&Value::Array(values.clone()), pretty),
        Outcome::Object(obj) => to_json(&Value::Object(obj.clone()), pretty),
        Outcome::Message(text) => Ok(text.clone()),
    }
}
