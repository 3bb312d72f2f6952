//! Comparison operators: strict equality and the ordering chains.

use crate::coerce::{compare, CompareOp};
use crate::error::LogicError;
use crate::types::{apply_params, Applier, Arity, OperatorDefinition};
use serde_json::Value;

/// Two operands compare directly; a third operand makes a "between" test
/// where both `a op b` and `b op c` must hold.
fn chain(op: CompareOp, apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let operands = apply_params(apply, params, data)?;
    let mut holds = true;
    for pair in operands.windows(2) {
        holds &= compare(op, &pair[0], &pair[1])?;
    }
    Ok(Value::Bool(holds))
}

fn strict(op: CompareOp, apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    match apply_params(apply, params, data)?.as_slice() {
        [left, right] => Ok(Value::Bool(compare(op, left, right)?)),
        _ => Err(LogicError::ArityError(format!("\"{}\" operator expects 2 operands.", op))),
    }
}

fn strict_eq_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    strict(CompareOp::StrictEq, apply, params, data)
}

fn strict_ne_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    strict(CompareOp::StrictNe, apply, params, data)
}

fn lt_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    chain(CompareOp::Lt, apply, params, data)
}

fn le_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    chain(CompareOp::Le, apply, params, data)
}

fn gt_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    chain(CompareOp::Gt, apply, params, data)
}

fn ge_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    chain(CompareOp::Ge, apply, params, data)
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            name: "===",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: strict_eq_eval,
        },
        OperatorDefinition {
            name: "!==",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: strict_ne_eval,
        },
        OperatorDefinition {
            name: "<",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: lt_eval,
        },
        OperatorDefinition {
            name: "<=",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: le_eval,
        },
        OperatorDefinition {
            name: ">",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: gt_eval,
        },
        OperatorDefinition {
            name: ">=",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: ge_eval,
        },
    ]
}
