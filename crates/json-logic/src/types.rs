use crate::error::LogicError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// The recursive evaluation callback handed to every operator.
///
/// Operators call it to evaluate their own parameters, against the current
/// data or against any other data value (e.g. an array element).
pub type Applier<'a> = dyn Fn(&Value, &Value) -> Result<Value, LogicError> + 'a;

/// Signature of a built-in operator: `(apply, params, data) -> result`.
///
/// `params` are the raw, unevaluated parameters of the logic node.
pub type EvalFn = fn(&Applier<'_>, &[Value], &Value) -> Result<Value, LogicError>;

type OperatorFn = dyn Fn(&Applier<'_>, &[Value], &Value) -> Result<Value, LogicError> + Send + Sync;

/// Operator arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Skip arity check.
    Any,
    /// Exactly `n` parameters.
    Fixed(usize),
    /// Between `min` and `max` parameters. `None` for max = unlimited.
    Range(usize, Option<usize>),
}

/// Asserts that an operator received an acceptable number of parameters.
pub fn assert_arity(operator: &str, arity: &Arity, len: usize) -> Result<(), LogicError> {
    match *arity {
        Arity::Any => Ok(()),
        Arity::Fixed(n) => {
            if len != n {
                Err(LogicError::ArityError(format!(
                    "\"{}\" operator expects {} operands.",
                    operator, n
                )))
            } else {
                Ok(())
            }
        }
        Arity::Range(min, max) => {
            if len < min {
                return Err(LogicError::ArityError(format!(
                    "\"{}\" operator expects at least {} operands.",
                    operator, min
                )));
            }
            match max {
                Some(max) if len > max => Err(LogicError::ArityError(format!(
                    "\"{}\" operator expects at most {} operands.",
                    operator, max
                ))),
                _ => Ok(()),
            }
        }
    }
}

/// A registered operator: an arity contract plus its implementation.
///
/// Cheap to clone; the implementation is shared.
#[derive(Clone)]
pub struct Operator {
    arity: Arity,
    eval: Arc<OperatorFn>,
}

impl Operator {
    /// Wraps a closure as an operator that accepts any number of parameters.
    pub fn new<F>(eval: F) -> Self
    where
        F: Fn(&Applier<'_>, &[Value], &Value) -> Result<Value, LogicError> + Send + Sync + 'static,
    {
        Operator {
            arity: Arity::Any,
            eval: Arc::new(eval),
        }
    }

    pub fn with_arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Checks the arity and runs the operator.
    pub fn call(
        &self,
        name: &str,
        apply: &Applier<'_>,
        params: &[Value],
        data: &Value,
    ) -> Result<Value, LogicError> {
        assert_arity(name, &self.arity, params.len())?;
        (self.eval)(apply, params, data)
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator").field("arity", &self.arity).finish_non_exhaustive()
    }
}

/// A built-in operator definition, registered under its name and aliases.
pub struct OperatorDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub arity: Arity,
    pub eval_fn: EvalFn,
}

impl OperatorDefinition {
    pub fn operator(&self) -> Operator {
        Operator::new(self.eval_fn).with_arity(self.arity)
    }
}

/// Returns parameter `index`, or an arity error naming the operator.
pub fn param<'a>(operator: &str, params: &'a [Value], index: usize) -> Result<&'a Value, LogicError> {
    params.get(index).ok_or_else(|| {
        LogicError::ArityError(format!(
            "\"{}\" operator expects at least {} operands.",
            operator,
            index + 1
        ))
    })
}

/// Evaluates every parameter against `data`.
pub fn apply_params(apply: &Applier<'_>, params: &[Value], data: &Value) -> Result<Vec<Value>, LogicError> {
    params.iter().map(|p| apply(p, data)).collect()
}
