//! Arithmetic operators. Operands go through `to_number`; any NaN or
//! infinite result is an error.

use crate::coerce::{number, to_number};
use crate::error::LogicError;
use crate::types::{param, Applier, Arity, OperatorDefinition};
use serde_json::Value;

fn numbers(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Vec<f64>, LogicError> {
    params.iter().map(|e| to_number(&apply(e, data)?)).collect()
}

fn num_param(operator: &str, apply: &Applier<'_>, params: &[Value], index: usize, data: &Value) -> Result<f64, LogicError> {
    to_number(&apply(param(operator, params, index)?, data)?)
}

fn add_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    number(numbers(apply, params, data)?.into_iter().fold(0.0, |acc, n| acc + n))
}

fn multiply_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    number(numbers(apply, params, data)?.into_iter().fold(1.0, |acc, n| acc * n))
}

/// Unary negation, or binary subtraction.
fn subtract_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let first = num_param("-", apply, params, 0, data)?;
    if params.len() == 1 {
        return number(-first);
    }
    let second = num_param("-", apply, params, 1, data)?;
    number(first - second)
}

fn divide_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let dividend = num_param("/", apply, params, 0, data)?;
    let divisor = num_param("/", apply, params, 1, data)?;
    number(dividend / divisor)
}

fn mod_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let dividend = num_param("%", apply, params, 0, data)?;
    let divisor = num_param("%", apply, params, 1, data)?;
    number(dividend % divisor)
}

fn min_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    match numbers(apply, params, data)?.into_iter().reduce(f64::min) {
        Some(m) => number(m),
        None => Ok(Value::Null),
    }
}

fn max_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    match numbers(apply, params, data)?.into_iter().reduce(f64::max) {
        Some(m) => number(m),
        None => Ok(Value::Null),
    }
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "+",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: add_eval,
        },
        OperatorDefinition {
            name: "-",
            aliases: &[],
            arity: Arity::Range(1, None),
            eval_fn: subtract_eval,
        },
        OperatorDefinition {
            name: "*",
            aliases: &[],
            arity: Arity::Range(1, None),
            eval_fn: multiply_eval,
        },
        OperatorDefinition {
            name: "/",
            aliases: &[],
            arity: Arity::Range(2, None),
            eval_fn: divide_eval,
        },
        OperatorDefinition {
            name: "%",
            aliases: &[],
            arity: Arity::Range(2, None),
            eval_fn: mod_eval,
        },
        OperatorDefinition {
            name: "min",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: min_eval,
        },
        OperatorDefinition {
            name: "max",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: max_eval,
        },
    ]
}
