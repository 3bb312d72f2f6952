//! Optional operators that are not part of the standard set.

use crate::coerce::to_number;
use crate::error::LogicError;
use crate::registry::Registry;
use crate::types::{apply_params, Applier, Arity, OperatorDefinition};
use serde_json::Value;

/// Registers `range` on `registry`.
pub fn add_range(registry: &mut Registry) {
    registry.register_definitions(operators());
}

/// Integer sequence generator.
///
/// - `range(end)` counts from `0` towards `end`;
/// - `range(begin, end)` counts up or down by one;
/// - `range(begin, end, step)`; a zero step means "one, towards `end`".
///
/// Operands are truncated to integers. `end` itself is never included.
fn range_eval(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Value, LogicError> {
    let operands = apply_params(apply, params, data)?;
    let int = |v: &Value, what: &str| {
        to_number(v)
            .map(|n| n as i64)
            .map_err(|e| LogicError::InvalidRange(format!("range: invalid {}: {}", what, e)))
    };
    let (begin, end, step) = match operands.as_slice() {
        [end] => (0, int(end, "end")?, 0),
        [begin, end] => (int(begin, "begin")?, int(end, "end")?, 0),
        [begin, end, step, ..] => (int(begin, "begin")?, int(end, "end")?, int(step, "step")?),
        [] => return Err(LogicError::ArityError("\"range\" operator expects at least 1 operands.".to_string())),
    };

    let mut out = Vec::new();
    if end > begin {
        if step < 0 {
            return Err(LogicError::InvalidRange("range: end > begin but got negative step".to_string()));
        }
        let step = step.max(1);
        let mut next = Some(begin);
        while let Some(i) = next.filter(|&i| i < end) {
            out.push(Value::from(i));
            next = i.checked_add(step);
        }
    } else if end < begin {
        if step > 0 {
            return Err(LogicError::InvalidRange("range: end < begin but got positive step".to_string()));
        }
        let step = if step == 0 { -1 } else { step };
        let mut next = Some(begin);
        while let Some(i) = next.filter(|&i| i > end) {
            out.push(Value::from(i));
            next = i.checked_add(step);
        }
    }
    Ok(Value::Array(out))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![OperatorDefinition {
        name: "range",
        aliases: &[],
        arity: Arity::Range(1, None),
        eval_fn: range_eval,
    }]
}
