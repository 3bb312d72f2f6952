//! Core logic of the `jl` binary.
//!
//! Reads a logic document and an optional data document from one JSON
//! stream, evaluates, and renders the result.

use crate::error::LogicError;
use crate::ext;
use crate::registry::Registry;
use serde_json::{Deserializer, Value};
use std::io::Read;
use std::sync::Arc;

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    MissingLogic,
    Eval(LogicError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "{e}"),
            CliError::MissingLogic => write!(f, "Expected a JSON logic document on input."),
            CliError::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<LogicError> for CliError {
    fn from(e: LogicError) -> Self {
        CliError::Eval(e)
    }
}

/// The standard operators plus the `range` extension.
pub fn registry() -> Registry {
    let mut registry = Registry::derive(Arc::new(Registry::standard()));
    ext::add_range(&mut registry);
    registry
}

/// Decodes the logic document and the optional data document (`null` when
/// the stream ends after the logic).
pub fn read_documents<R: Read>(reader: R) -> Result<(Value, Value), CliError> {
    let mut stream = Deserializer::from_reader(reader).into_iter::<Value>();
    let logic = stream.next().ok_or(CliError::MissingLogic)??;
    let data = stream.next().transpose()?.unwrap_or(Value::Null);
    Ok((logic, data))
}

/// Evaluates the documents read from `reader` and returns the compact JSON
/// result.
pub fn run<R: Read>(registry: &Registry, reader: R) -> Result<String, CliError> {
    let (logic, data) = read_documents(reader)?;
    let result = registry.apply(&logic, &data)?;
    Ok(serde_json::to_string(&result)?)
}
