//! The standard operator set.

pub mod arithmetic;
pub mod array;
pub mod branching;
pub mod comparison;
pub mod input;
pub mod logical;
pub mod string;

use crate::types::OperatorDefinition;

/// All standard operators combined.
pub fn all_operators() -> Vec<OperatorDefinition> {
    let mut ops = Vec::new();
    ops.extend(input::operators());
    ops.extend(branching::operators());
    ops.extend(comparison::operators());
    ops.extend(logical::operators());
    ops.extend(arithmetic::operators());
    ops.extend(array::operators());
    ops.extend(string::operators());
    ops
}
