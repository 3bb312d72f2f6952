//! Branching operators: `if` / `?:`.

use crate::error::LogicError;
use crate::types::{Applier, Arity, OperatorDefinition};
use crate::value::truthy;
use serde_json::Value;

/// `[cond1, then1, cond2, then2, ..., else]`: the branch of the first truthy
/// condition wins, a trailing odd parameter is the else branch, and no match
/// without an else branch yields `null`.
fn if_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let mut pairs = params.chunks_exact(2);
    for pair in pairs.by_ref() {
        if truthy(&apply(&pair[0], data)?) {
            return apply(&pair[1], data);
        }
    }
    match pairs.remainder() {
        [otherwise] => apply(otherwise, data),
        _ => Ok(Value::Null),
    }
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![OperatorDefinition {
        name: "if",
        aliases: &["?:"],
        arity: Arity::Any,
        eval_fn: if_eval,
    }]
}
