use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogicError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("{0}")]
    ArityError(String),

    #[error("\"{operator}\" operator expects {expected} but got {found}.")]
    UnexpectedType {
        operator: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("NOT_PRIMITIVE")]
    NotPrimitive,

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("NOT_A_NUMBER")]
    NotANumber,

    #[error("INFINITY")]
    Infinite,

    #[error("Cannot convert {0} to string.")]
    NotStringable(&'static str),

    #[error("{0}")]
    InvalidRange(String),

    #[error("{0}")]
    Other(String),
}

impl LogicError {
    pub(crate) fn unexpected(operator: &str, expected: &'static str, found: &serde_json::Value) -> Self {
        LogicError::UnexpectedType {
            operator: operator.to_string(),
            expected,
            found: crate::value::type_name(found),
        }
    }
}
