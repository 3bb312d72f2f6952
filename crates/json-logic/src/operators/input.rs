//! Data access operators: `var`, `missing`, `missing_some`.

use crate::coerce;
use crate::error::LogicError;
use crate::types::{apply_params, param, Applier, Arity, OperatorDefinition};
use serde_json::Value;

/// Turns a `var` key into a dotted path. `None` means "the whole document".
fn key_to_path(key: &Value) -> Result<Option<String>, LogicError> {
    match key {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(_) => coerce::to_string(key).map(Some),
        other => Err(LogicError::unexpected("var", "a null, boolean, number or string key", other)),
    }
}

/// Walks a dotted path through objects (by key) and arrays (by index).
///
/// Returns `None` as soon as a segment does not resolve.
pub fn lookup<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(data, |node, segment| match node {
        Value::Object(obj) => obj.get(segment),
        Value::Array(arr) => segment.parse::<usize>().ok().and_then(|i| arr.get(i)),
        _ => None,
    })
}

/// Resolves `key` against `data`; unresolved paths yield `None`.
fn resolve<'a>(data: &'a Value, key: &Value) -> Result<Option<&'a Value>, LogicError> {
    Ok(match key_to_path(key)? {
        None => Some(data),
        Some(path) => lookup(data, &path),
    })
}

fn var_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let key = match params.first() {
        Some(p) => apply(p, data)?,
        None => Value::Null,
    };
    match resolve(data, &key)? {
        Some(found) => Ok(found.clone()),
        None => match params.get(1) {
            Some(default) => apply(default, data),
            None => Ok(Value::Null),
        },
    }
}

fn is_missing(data: &Value, key: &Value) -> Result<bool, LogicError> {
    Ok(match resolve(data, key)? {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    })
}

fn missing_keys(data: &Value, keys: &[Value]) -> Result<Vec<Value>, LogicError> {
    let mut missing = Vec::new();
    for key in keys {
        if is_missing(data, key)? {
            missing.push(key.clone());
        }
    }
    Ok(missing)
}

fn missing_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let evaluated = apply_params(apply, params, data)?;
    let keys = match evaluated.first() {
        Some(Value::Array(keys)) => keys.as_slice(),
        _ => evaluated.as_slice(),
    };
    Ok(Value::Array(missing_keys(data, keys)?))
}

fn missing_some_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let need = coerce::to_number(&apply(param("missing_some", params, 0)?, data)?)?;
    let keys = match apply(param("missing_some", params, 1)?, data)? {
        Value::Array(keys) => keys,
        other => return Err(LogicError::unexpected("missing_some", "an array of keys", &other)),
    };
    let missing = missing_keys(data, &keys)?;
    let present = (keys.len() - missing.len()) as f64;
    if present >= need {
        Ok(Value::Array(vec![]))
    } else {
        Ok(Value::Array(missing))
    }
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "var",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: var_eval,
        },
        OperatorDefinition {
            name: "missing",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: missing_eval,
        },
        OperatorDefinition {
            name: "missing_some",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: missing_some_eval,
        },
    ]
}
