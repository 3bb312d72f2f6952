//! Operator registry with parent/child layering.

use crate::error::LogicError;
use crate::operators;
use crate::types::{Operator, OperatorDefinition};
use log::debug;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps operator names to implementations.
///
/// Lookups check the local operators first and fall back to the parent, so a
/// local registration shadows an inherited operator of the same name.
/// Registration only ever touches the local map.
///
/// `Clone` copies the local map and shares the parent, so a clone can be
/// customised without affecting the original. A registry holds no
/// per-evaluation state and can be shared between threads once set up.
#[derive(Clone, Default, Debug)]
pub struct Registry {
    operators: HashMap<String, Operator>,
    parent: Option<Arc<Registry>>,
}

impl Registry {
    /// An empty registry with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the standard operator set.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register_definitions(operators::all_operators());
        registry
    }

    /// An empty registry that inherits every operator of `parent`.
    pub fn derive(parent: Arc<Registry>) -> Self {
        Registry {
            operators: HashMap::new(),
            parent: Some(parent),
        }
    }

    pub fn parent(&self) -> Option<&Arc<Registry>> {
        self.parent.as_ref()
    }

    /// Adds or replaces an operator in the local map.
    pub fn register(&mut self, name: impl Into<String>, operator: Operator) {
        let name = name.into();
        if self.operators.contains_key(&name) {
            debug!("replacing operator {:?}", name);
        } else if self.parent.as_ref().is_some_and(|p| p.contains(&name)) {
            debug!("operator {:?} shadows an inherited operator", name);
        }
        self.operators.insert(name, operator);
    }

    /// Registers each definition under its name and all of its aliases.
    pub fn register_definitions(&mut self, definitions: impl IntoIterator<Item = OperatorDefinition>) {
        for def in definitions {
            let operator = def.operator();
            for alias in def.aliases {
                self.register(*alias, operator.clone());
            }
            self.register(def.name, operator);
        }
    }

    /// Resolves `name` locally, then through the parent chain.
    pub fn lookup(&self, name: &str) -> Option<&Operator> {
        self.operators
            .get(name)
            .or_else(|| self.parent.as_ref().and_then(|p| p.lookup(name)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Evaluates `logic` against `data` using this registry.
    pub fn apply(&self, logic: &Value, data: &Value) -> Result<Value, LogicError> {
        crate::evaluate::apply(self, logic, data)
    }
}
