// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown column '{column}' for {entity}")]
    UnknownColumn { entity: String, column: String },

    #[error("Invalid value '{value}' for column {column}: expected {expected}")]
    InvalidValue {
        column: String,
        value: String,
        expected: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
