//! String operators: `cat`, `substr`.

use crate::coerce::{to_number, to_string};
use crate::error::LogicError;
use crate::types::{apply_params, param, Applier, Arity, OperatorDefinition};
use serde_json::Value;

fn cat_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let mut result = String::new();
    for operand in apply_params(apply, params, data)? {
        result.push_str(&to_string(&operand)?);
    }
    Ok(Value::String(result))
}

/// Resolves a possibly negative code point offset against `len`.
fn from_end(offset: i64, len: usize) -> usize {
    if offset < 0 {
        (len as i64 + offset).max(0) as usize
    } else {
        (offset as usize).min(len)
    }
}

/// Substring by code point.
///
/// A negative `start` counts from the end. A non-negative `length` is the
/// number of code points to take, a negative one drops that many from the
/// end, and an absent one takes the rest of the string.
///
/// Out-of-range offsets clamp to the string bounds instead of failing.
pub fn substr(s: &str, start: i64, length: Option<i64>) -> String {
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();
    let begin = from_end(start, len);
    let end = match length {
        None => len,
        Some(n) if n >= 0 => begin.saturating_add(n as usize).min(len),
        Some(n) => from_end(n, len),
    };
    if end <= begin {
        return String::new();
    }
    chars[begin..end].iter().collect()
}

fn substr_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let s = to_string(&apply(param("substr", params, 0)?, data)?)?;
    let start = to_number(&apply(param("substr", params, 1)?, data)?)? as i64;
    let length = match params.get(2) {
        Some(p) => Some(to_number(&apply(p, data)?)? as i64),
        None => None,
    };
    Ok(Value::String(substr(&s, start, length)))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "cat",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: cat_eval,
        },
        OperatorDefinition {
            name: "substr",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: substr_eval,
        },
    ]
}
