//! JsonLogic rule evaluator.
//!
//! # Overview
//!
//! A logic document is a JSON value in which single-key objects name an
//! operator, e.g. `{"+": [1, {"var": "x"}]}`. It is evaluated against a JSON
//! data document to produce a JSON result. Operators live in a [`Registry`],
//! which can be extended, cloned, or layered over a parent registry.
//!
//! # Example
//!
//! ```
//! use json_logic::{evaluate, Operator, Registry};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let logic = json!({"if": [{"<": [{"var": "temp"}, 110]}, "cool", "hot"]});
//! assert_eq!(evaluate(&logic, &json!({"temp": 100})).unwrap(), json!("cool"));
//!
//! let mut custom = Registry::derive(Arc::new(Registry::standard()));
//! custom.register("answer", Operator::new(|_, _, _| Ok(json!(42))));
//! assert_eq!(custom.apply(&json!({"+": [{"answer": []}, 1]}), &json!(null)).unwrap(), json!(43));
//! ```

pub mod cli;
pub mod coerce;
pub mod error;
pub mod evaluate;
pub mod ext;
pub mod operators;
pub mod registry;
pub mod types;
pub mod value;

use serde_json::Value;
use std::sync::OnceLock;

// Re-export the core public API
pub use coerce::{compare, to_number, to_string, CompareOp};
pub use error::LogicError;
pub use registry::Registry;
pub use types::{Applier, Arity, Operator, OperatorDefinition};
pub use value::{is_primitive, truthy};

/// The standard registry, built on first use and never modified afterwards.
pub fn standard_registry() -> &'static Registry {
    static STANDARD: OnceLock<Registry> = OnceLock::new();
    STANDARD.get_or_init(Registry::standard)
}

/// Evaluates `logic` against `data` with the standard operator set.
pub fn evaluate(logic: &Value, data: &Value) -> Result<Value, LogicError> {
    standard_registry().apply(logic, data)
}
