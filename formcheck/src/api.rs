//! Programmatic validation entry points.
//!
//! All functions return `Ok(true)` when everything validated, `Ok(false)`
//! when at least one field is dirty, and an error only for configuration
//! mistakes.

use std::collections::HashSet;
use std::sync::Arc;

use formdom::{FieldNode, Form};

use crate::attributes;
use crate::config::FormOptions;
use crate::error::ValidatorError;
use crate::form::FormValidator;
use crate::registry::HandlerRegistry;
use crate::validators::{field_validator_for, FieldValidator, Validator};

/// Validate a whole form.
pub fn validate_form(
    form: &Form,
    registry: &Arc<HandlerRegistry>,
    options: FormOptions,
) -> Result<bool, ValidatorError> {
    let mut validator = FormValidator::new(form.clone(), Arc::clone(registry), options)?;
    validator.validate(None)?;
    Ok(validator.is_valid())
}

/// Validate a single field. The error handler runs only when the field is
/// dirty.
pub fn validate_field(
    field: &FieldNode,
    form: Option<&Form>,
    registry: &Arc<HandlerRegistry>,
    error: Option<&str>,
) -> Result<bool, ValidatorError> {
    let validator = field_validator_for(field, form, registry)?
        .ok_or(ValidatorError::FieldCannotBeValidated)?;
    let dirty = validator.validate()?;
    if dirty {
        let name = error.unwrap_or(attributes::DEFAULT_ERROR_HANDLER);
        let handler = registry.error_handler(name)?;
        handler(form, &[validator]);
    }
    Ok(!dirty)
}

/// Validate a collection of fields, deduplicating grouped fields by name.
pub fn validate_fields(
    fields: &[FieldNode],
    form: Option<&Form>,
    registry: &Arc<HandlerRegistry>,
    error: Option<&str>,
) -> Result<bool, ValidatorError> {
    let mut dirty: Vec<FieldValidator> = Vec::new();
    let mut executed: HashSet<String> = HashSet::new();
    for field in fields {
        if !field.is_input_field() {
            continue;
        }
        let Some(validator) = field_validator_for(field, form, registry)? else {
            continue;
        };
        let name = validator.name();
        if executed.contains(&name) {
            continue;
        }
        if validator.validate()? {
            dirty.push(validator);
        }
        executed.insert(name);
    }
    if !dirty.is_empty() {
        let name = error.unwrap_or(attributes::DEFAULT_ERROR_HANDLER);
        let handler = registry.error_handler(name)?;
        handler(form, &dirty);
    }
    Ok(dirty.is_empty())
}

/// Validate every field contained inside the given form.
pub fn validate_child_fields(
    form: &Form,
    registry: &Arc<HandlerRegistry>,
    error: Option<&str>,
) -> Result<bool, ValidatorError> {
    validate_fields(&form.child_fields(), Some(form), registry, error)
}
