//! Error types for variable validation.

use thiserror::Error;

/// Errors produced while validating prompt variables.
///
/// Every factory and transform in [`crate::variables`] returns one of these
/// instead of panicking. Callers branch on the variant (or on [`kind`]) and
/// render their own message.
///
/// [`kind`]: VariableError::kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableError {
    /// Name is not part of the category's allow-list.
    #[error("invalid variable name '{name}': expected one of {valid_names:?}")]
    InvalidName { name: String, valid_names: Vec<String> },

    /// Value is empty or whitespace-only.
    #[error("empty value for variable '{variable_name}': {reason}")]
    EmptyValue { variable_name: String, reason: String },

    /// Value failed a structural or predicate check.
    #[error("validation failed for value '{value}': {constraint}")]
    ValidationFailed { value: String, constraint: String },

    /// Value is absent (null in the raw input).
    #[error("value for variable '{variable_name}' is null or undefined")]
    NullOrUndefined { variable_name: String },

    /// Key is empty after trimming.
    #[error("empty variable key: {reason}")]
    EmptyKey { reason: String },

    #[error("variable not found: {name}")]
    NotFound { name: String },

    #[error("duplicate variable key: {key}")]
    DuplicateKey { key: String },

    #[error("too many variables: {count} exceeds the limit of {max}")]
    TooManyVariables { count: usize, max: usize },
}

impl VariableError {
    /// Discriminator name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            VariableError::InvalidName { .. } => "InvalidName",
            VariableError::EmptyValue { .. } => "EmptyValue",
            VariableError::ValidationFailed { .. } => "ValidationFailed",
            VariableError::NullOrUndefined { .. } => "NullOrUndefined",
            VariableError::EmptyKey { .. } => "EmptyKey",
            VariableError::NotFound { .. } => "NotFound",
            VariableError::DuplicateKey { .. } => "DuplicateKey",
            VariableError::TooManyVariables { .. } => "TooManyVariables",
        }
    }

    pub(crate) fn invalid_name(name: &str, allowed: &[&str]) -> Self {
        VariableError::InvalidName {
            name: name.to_string(),
            valid_names: allowed.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub(crate) fn empty_value(variable_name: &str, reason: &str) -> Self {
        VariableError::EmptyValue {
            variable_name: variable_name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn empty_key() -> Self {
        VariableError::EmptyKey { reason: "variable key cannot be empty".to_string() }
    }
}
