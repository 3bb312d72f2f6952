//! Array operators. `map`, `filter`, `reduce` and the quantifiers evaluate
//! their logic once per element with that element as the data scope.

use crate::coerce::{strict_equals, to_string};
use crate::error::LogicError;
use crate::types::{apply_params, param, Applier, Arity, OperatorDefinition};
use crate::value::{is_primitive, truthy};
use serde_json::{Map, Value};

/// Evaluates the array source of `operator`. The logic to run per element is
/// returned unevaluated.
fn scoped<'p>(
    operator: &str,
    apply: &Applier<'_>,
    params: &'p [Value],
    data: &Value,
) -> Result<(Value, &'p Value), LogicError> {
    let source = apply(param(operator, params, 0)?, data)?;
    let logic = param(operator, params, 1)?;
    Ok((source, logic))
}

fn map_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let (source, logic) = scoped("map", apply, params, data)?;
    let items = match source {
        Value::Array(items) => items,
        _ => return Ok(Value::Array(vec![])),
    };
    items
        .iter()
        .map(|item| apply(logic, item))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn filter_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let (source, logic) = scoped("filter", apply, params, data)?;
    let items = match source {
        Value::Array(items) => items,
        _ => return Ok(Value::Array(vec![])),
    };
    let mut kept = Vec::new();
    for item in items {
        if truthy(&apply(logic, &item)?) {
            kept.push(item);
        }
    }
    Ok(Value::Array(kept))
}

/// Each step sees `{"current": element, "accumulator": running}` as its data.
fn reduce_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let (source, logic) = scoped("reduce", apply, params, data)?;
    let mut acc = apply(param("reduce", params, 2)?, data)?;
    let items = match source {
        Value::Array(items) => items,
        _ => return Ok(acc),
    };
    for item in items {
        let mut scope = Map::new();
        scope.insert("current".to_string(), item);
        scope.insert("accumulator".to_string(), acc);
        acc = apply(logic, &Value::Object(scope))?;
    }
    Ok(acc)
}

/// Shared body of `all`, `none` and `some`.
///
/// `settle_on` is the per-element truthiness that decides the result early,
/// `settled` the result returned then, `empty` the result for `[]`.
fn quantify(
    operator: &str,
    settle_on: bool,
    settled: bool,
    empty: bool,
    apply: &Applier<'_>,
    params: &[Value],
    data: &Value,
) -> Result<Value, LogicError> {
    let (source, logic) = scoped(operator, apply, params, data)?;
    let items = match source {
        Value::Array(items) => items,
        other => return Err(LogicError::unexpected(operator, "an array", &other)),
    };
    if items.is_empty() {
        return Ok(Value::Bool(empty));
    }
    for item in &items {
        if truthy(&apply(logic, item)?) == settle_on {
            return Ok(Value::Bool(settled));
        }
    }
    Ok(Value::Bool(!settled))
}

fn all_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    quantify("all", false, false, false, apply, params, data)
}

fn none_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    quantify("none", true, false, true, apply, params, data)
}

fn some_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    quantify("some", true, true, false, apply, params, data)
}

/// Flattens array operands one level; other operands are appended as-is.
fn merge_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let mut merged = Vec::new();
    for operand in apply_params(apply, params, data)? {
        match operand {
            Value::Array(items) => merged.extend(items),
            other => merged.push(other),
        }
    }
    Ok(Value::Array(merged))
}

/// Strict membership in an array of primitives, or substring search.
fn in_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let needle = apply(param("in", params, 0)?, data)?;
    let haystack = apply(param("in", params, 1)?, data)?;
    if !is_primitive(&needle) {
        return Err(LogicError::NotPrimitive);
    }
    match haystack {
        Value::Array(items) => {
            for item in &items {
                if !is_primitive(item) {
                    return Err(LogicError::NotPrimitive);
                }
                if strict_equals(&needle, item) {
                    return Ok(Value::Bool(true));
                }
            }
            Ok(Value::Bool(false))
        }
        Value::String(s) => Ok(Value::Bool(s.contains(to_string(&needle)?.as_str()))),
        other => Err(LogicError::unexpected("in", "an array or string", &other)),
    }
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "map",
            aliases: &[],
            arity: Arity::Range(2, None),
            eval_fn: map_eval,
        },
        OperatorDefinition {
            name: "filter",
            aliases: &[],
            arity: Arity::Range(2, None),
            eval_fn: filter_eval,
        },
        OperatorDefinition {
            name: "reduce",
            aliases: &[],
            arity: Arity::Range(3, None),
            eval_fn: reduce_eval,
        },
        OperatorDefinition {
            name: "all",
            aliases: &[],
            arity: Arity::Range(2, None),
            eval_fn: all_eval,
        },
        OperatorDefinition {
            name: "none",
            aliases: &[],
            arity: Arity::Range(2, None),
            eval_fn: none_eval,
        },
        OperatorDefinition {
            name: "some",
            aliases: &[],
            arity: Arity::Range(2, None),
            eval_fn: some_eval,
        },
        OperatorDefinition {
            name: "merge",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: merge_eval,
        },
        OperatorDefinition {
            name: "in",
            aliases: &[],
            arity: Arity::Range(2, None),
            eval_fn: in_eval,
        },
    ]
}
