//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur while turning an oracle payload into domain records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has duplicate value: {value}")]
    Duplicate { field: String, value: String },

    #[error("Payload does not match the expected shape: {0}")]
    Schema(String),
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl ToString) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Prefixes the field name with its position in a list, e.g. `keywords[3].rank`.
    pub fn at_index(self, list: &str, index: usize) -> Self {
        let prefix = |field: String| format!("{}[{}].{}", list, index, field);
        match self {
            ValidationError::EmptyField { field } => ValidationError::EmptyField {
                field: prefix(field),
            },
            ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => ValidationError::OutOfRange {
                field: prefix(field),
                min,
                max,
                actual,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::Schema(err.to_string())
    }
}
