//! Logical operators: `!`, `!!`, `and`, `or`.

use crate::error::LogicError;
use crate::types::{param, Applier, Arity, OperatorDefinition};
use crate::value::truthy;
use serde_json::Value;

fn not_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let val = apply(param("!", params, 0)?, data)?;
    Ok(Value::Bool(!truthy(&val)))
}

fn double_not_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let val = apply(param("!!", params, 0)?, data)?;
    Ok(Value::Bool(truthy(&val)))
}

/// Returns the first falsy operand, or the last operand when all are truthy.
fn and_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let mut acc = apply(param("and", params, 0)?, data)?;
    for e in &params[1..] {
        if !truthy(&acc) {
            return Ok(acc);
        }
        acc = apply(e, data)?;
    }
    Ok(acc)
}

/// Returns the first truthy operand, or the last operand when all are falsy.
fn or_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let mut acc = apply(param("or", params, 0)?, data)?;
    for e in &params[1..] {
        if truthy(&acc) {
            return Ok(acc);
        }
        acc = apply(e, data)?;
    }
    Ok(acc)
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "!",
            aliases: &[],
            arity: Arity::Range(1, None),
            eval_fn: not_eval,
        },
        OperatorDefinition {
            name: "!!",
            aliases: &[],
            arity: Arity::Range(1, None),
            eval_fn: double_not_eval,
        },
        OperatorDefinition {
            name: "and",
            aliases: &[],
            arity: Arity::Range(1, None),
            eval_fn: and_eval,
        },
        OperatorDefinition {
            name: "or",
            aliases: &[],
            arity: Arity::Range(1, None),
            eval_fn: or_eval,
        },
    ]
}
