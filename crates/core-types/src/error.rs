use crate::enums::ParameterField;
use thiserror::Error;

/// An input field fell outside its valid domain.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid value for '{field}': {constraint} (got {value})")]
pub struct ValidationError {
    pub field: ParameterField,
    pub constraint: String,
    pub value: String,
}

impl ValidationError {
    pub fn new(field: ParameterField, constraint: impl Into<String>, value: impl ToString) -> Self {
        Self {
            field,
            constraint: constraint.into(),
            value: value.to_string(),
        }
    }
}
