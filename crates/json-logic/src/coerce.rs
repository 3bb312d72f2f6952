//! Conversions between JSON value variants and the primitive comparator.
//!
//! These follow the loose conversion rules of JavaScript's `Number()`,
//! `String()` and relational operators, with two differences: only primitives
//! are accepted, and NaN or infinite numbers are reported as errors instead of
//! being silently propagated.

use crate::error::LogicError;
use crate::value::is_primitive;
use serde_json::{Number, Value};
use std::fmt;

/// Rejects NaN and infinities.
pub fn finite(n: f64) -> Result<f64, LogicError> {
    if n.is_nan() {
        Err(LogicError::NotANumber)
    } else if n.is_infinite() {
        Err(LogicError::Infinite)
    } else {
        Ok(n)
    }
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Wraps a finite `f64` into a JSON number.
///
/// Integral values in the exactly representable range are stored as
/// integers, so `3.0` serializes as `3`.
pub fn number(n: f64) -> Result<Value, LogicError> {
    let n = finite(n)?;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Ok(Value::from(n as i64));
    }
    Ok(Value::Number(Number::from_f64(n).ok_or(LogicError::NotANumber)?))
}

/// Converts a primitive to a finite number.
///
/// `null` is `0`, booleans are `0`/`1`, strings must be well-formed float
/// literals.
pub fn to_number(value: &Value) -> Result<f64, LogicError> {
    let n = match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().ok_or(LogicError::NotANumber)?,
        Value::String(s) => s
            .parse::<f64>()
            .map_err(|_| LogicError::InvalidNumber(s.clone()))?,
        Value::Array(_) | Value::Object(_) => return Err(LogicError::NotPrimitive),
    };
    finite(n)
}

/// Shortest decimal representation that round-trips, never in exponent form.
pub fn format_number(n: f64) -> Result<String, LogicError> {
    Ok(format!("{}", finite(n)?))
}

/// Converts a primitive to a string.
pub fn to_string(value: &Value) -> Result<String, LogicError> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => format_number(n.as_f64().ok_or(LogicError::NotANumber)?),
        Value::String(s) => Ok(s.clone()),
        Value::Array(_) => Err(LogicError::NotStringable("array")),
        Value::Object(_) => Err(LogicError::NotStringable("object")),
    }
}

/// Relational and strict-equality operators understood by [`compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
    StrictEq,
    StrictNe,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::StrictEq => "===",
            CompareOp::StrictNe => "!==",
        }
    }

    fn holds<T: PartialOrd + ?Sized>(self, left: &T, right: &T) -> bool {
        match self {
            CompareOp::Lt => left < right,
            CompareOp::Le => left <= right,
            CompareOp::Gt => left > right,
            CompareOp::Ge => left >= right,
            CompareOp::StrictEq => left == right,
            CompareOp::StrictNe => left != right,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Same variant and same value. Numbers compare by their `f64` value, so
/// `3` and `3.0` are equal. Non-primitives are never equal.
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

/// Compares two primitives.
///
/// Two strings are ordered by code point; any other pair is converted with
/// [`to_number`] first and conversion failures are returned.
pub fn compare(op: CompareOp, left: &Value, right: &Value) -> Result<bool, LogicError> {
    if !is_primitive(left) || !is_primitive(right) {
        return Err(LogicError::NotPrimitive);
    }
    match op {
        CompareOp::StrictEq => return Ok(strict_equals(left, right)),
        CompareOp::StrictNe => return Ok(!strict_equals(left, right)),
        _ => {}
    }
    if let (Value::String(a), Value::String(b)) = (left, right) {
        return Ok(op.holds(a.as_str(), b.as_str()));
    }
    let l = to_number(left)?;
    let r = to_number(right)?;
    Ok(op.holds(&l, &r))
}
