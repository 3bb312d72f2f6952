//! Predicates over JSON values: primitives, truthiness and logic nodes.

use serde_json::Value;
use std::borrow::Cow;

/// Returns the type name used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `null`, booleans, numbers and strings are primitives; arrays and objects are not.
pub fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Boolean interpretation of a value.
///
/// Empty strings, empty arrays, `0`, `null` and `false` are falsy. Objects are
/// always truthy, even when empty.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(_) => true,
    }
}

/// A logic node is an object with exactly one key.
pub fn is_logic(value: &Value) -> bool {
    matches!(value, Value::Object(obj) if obj.len() == 1)
}

/// Splits a logic node into its operator name and parameter list.
///
/// A non-array operand becomes a single-element parameter list, so
/// `{"var": "x"}` reads the same as `{"var": ["x"]}`. Returns `None` when
/// `value` is not a logic node.
pub fn get_logic(value: &Value) -> Option<(&str, Cow<'_, [Value]>)> {
    let obj = match value {
        Value::Object(obj) if obj.len() == 1 => obj,
        _ => return None,
    };
    let (name, operand) = obj.iter().next()?;
    let params = match operand {
        Value::Array(arr) => Cow::Borrowed(arr.as_slice()),
        other => Cow::Owned(vec![other.clone()]),
    };
    Some((name.as_str(), params))
}
