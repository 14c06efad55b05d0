//! Configuration error types.
//!
//! Validation *failures* are not errors: they travel as the dirty validator
//! list and reach the user through the configured error handler. Everything
//! in here is a configuration mistake that aborts the current pass.

/// Error type for misconfigured validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidatorError {
    /// A named handler, hook or predicate is not in the registry.
    #[error("Unable to find a function named: {name}")]
    MissingFunction { name: String },

    /// A field references a regex pattern that was never registered.
    #[error("Failed to retrieve pattern: {name}")]
    PatternNotFound { name: String },

    /// A field references a date spec that was never registered.
    #[error("Failed to retrieve date pattern: {name}")]
    DateSpecNotFound { name: String },

    /// A validation attribute matches neither a rule nor a config key.
    #[error("Unknown validation attribute: {name}")]
    UnknownRule { name: String },

    /// `invalidindex` must be numeric.
    #[error("invalidindex accepts only numbers")]
    InvalidIndexParameter,

    /// A bound attribute holds a value of the wrong shape.
    #[error("Attribute '{attribute}' has an invalid value: {value}")]
    InvalidAttribute { attribute: String, value: String },

    /// `equalto` names a field id that does not exist.
    #[error("equalto was unable to find field with id = {id}")]
    MissingEqualToField { id: String },

    /// The field kind cannot be validated (fieldset, reset, unnamed
    /// radio/checkbox).
    #[error("This field can't be validated")]
    FieldCannotBeValidated,
}

impl ValidatorError {
    /// Creates a missing function error.
    pub fn missing_function(name: impl Into<String>) -> Self {
        Self::MissingFunction { name: name.into() }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attribute(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}
