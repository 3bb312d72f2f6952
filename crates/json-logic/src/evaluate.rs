//! The recursive `apply` algorithm.

use crate::error::LogicError;
use crate::registry::Registry;
use crate::value::get_logic;
use log::{debug, trace};
use serde_json::{Map, Value};

/// Evaluates `logic` against `data`, resolving operators through `registry`.
///
/// - An array is a list of rules: each element is evaluated against the same
///   data and the results are collected. The first error aborts.
/// - Anything that is not a single-key object is returned as a literal.
/// - A single-key object names an operator; its value is the parameter list.
///
/// A `null` data document is replaced by an empty object before the operator
/// runs, so lookups against absent data behave like lookups against `{}`.
pub fn apply(registry: &Registry, logic: &Value, data: &Value) -> Result<Value, LogicError> {
    if let Value::Array(rules) = logic {
        return rules
            .iter()
            .map(|rule| apply(registry, rule, data))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array);
    }

    let (name, params) = match get_logic(logic) {
        Some(node) => node,
        None => return Ok(logic.clone()),
    };

    let empty;
    let data = if data.is_null() {
        empty = Value::Object(Map::new());
        &empty
    } else {
        data
    };

    let operator = registry.lookup(name).ok_or_else(|| {
        debug!("unknown operator {:?}", name);
        LogicError::UnknownOperator(name.to_string())
    })?;

    trace!("apply {:?} with {} params", name, params.len());
    let recurse = |logic: &Value, data: &Value| apply(registry, logic, data);
    operator.call(name, &recurse, &params, data)
}
