//! Registry mapping configured names to functions, patterns and date specs.
//!
//! Attributes reference handlers, hooks and conditional-required predicates
//! by name; the registry is the explicit dictionary those names resolve
//! against. A lookup miss is a typed configuration error, never a silent
//! skip.

use std::collections::HashMap;
use std::sync::Arc;

use formdom::{FieldNode, Form, SubmitEvent};
use regex::Regex;

use crate::attributes;
use crate::dates::{self, DateSpec};
use crate::error::ValidatorError;
use crate::handlers;
use crate::patterns;
use crate::validators::FieldValidator;

/// Renders the aggregated dirty validators. The form is absent for
/// field-level validation outside any form.
pub type ErrorHandlerFn = dyn Fn(Option<&Form>, &[FieldValidator]) + Send + Sync;

/// Invoked around a validation pass (`before`/`after`).
pub type HookFn = dyn Fn(&Form, Option<&SubmitEvent>) + Send + Sync;

/// Decides whether a field is required right now.
pub type RequiredPredicateFn = dyn Fn(&FieldNode) -> bool + Send + Sync;

/// Named functions, regex patterns and date specs available to validators.
///
/// `HandlerRegistry::default()` seeds every built-in pattern and date spec
/// plus the default alert-style error handler.
pub struct HandlerRegistry {
    error_handlers: HashMap<String, Arc<ErrorHandlerFn>>,
    hooks: HashMap<String, Arc<HookFn>>,
    predicates: HashMap<String, Arc<RequiredPredicateFn>>,
    patterns: HashMap<String, Regex>,
    date_specs: HashMap<String, DateSpec>,
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        let mut registry = Self {
            error_handlers: HashMap::new(),
            hooks: HashMap::new(),
            predicates: HashMap::new(),
            patterns: patterns::builtin_patterns()
                .into_iter()
                .map(|(name, regex)| (name.to_string(), regex))
                .collect(),
            date_specs: dates::builtin_specs()
                .into_iter()
                .map(|(name, spec)| (name.to_string(), spec))
                .collect(),
        };
        registry.register_error_handler(attributes::DEFAULT_ERROR_HANDLER, handlers::error_alert);
        registry
    }
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    pub fn register_error_handler<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(Option<&Form>, &[FieldValidator]) + Send + Sync + 'static,
    {
        self.error_handlers.insert(name.into(), Arc::new(handler));
    }

    pub fn register_hook<F>(&mut self, name: impl Into<String>, hook: F)
    where
        F: Fn(&Form, Option<&SubmitEvent>) + Send + Sync + 'static,
    {
        self.hooks.insert(name.into(), Arc::new(hook));
    }

    pub fn register_predicate<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&FieldNode) -> bool + Send + Sync + 'static,
    {
        self.predicates.insert(name.into(), Arc::new(predicate));
    }

    pub fn register_pattern(&mut self, name: impl Into<String>, pattern: Regex) {
        self.patterns.insert(name.into(), pattern);
    }

    pub fn register_date_spec(&mut self, name: impl Into<String>, spec: DateSpec) {
        self.date_specs.insert(name.into(), spec);
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    pub fn error_handler(&self, name: &str) -> Result<Arc<ErrorHandlerFn>, ValidatorError> {
        self.error_handlers
            .get(name)
            .cloned()
            .ok_or_else(|| ValidatorError::missing_function(name))
    }

    pub fn hook(&self, name: &str) -> Result<Arc<HookFn>, ValidatorError> {
        self.hooks
            .get(name)
            .cloned()
            .ok_or_else(|| ValidatorError::missing_function(name))
    }

    pub fn predicate(&self, name: &str) -> Result<Arc<RequiredPredicateFn>, ValidatorError> {
        self.predicates
            .get(name)
            .cloned()
            .ok_or_else(|| ValidatorError::missing_function(name))
    }

    pub fn pattern(&self, name: &str) -> Result<&Regex, ValidatorError> {
        self.patterns
            .get(name)
            .ok_or_else(|| ValidatorError::PatternNotFound {
                name: name.to_string(),
            })
    }

    pub fn date_spec(&self, name: &str) -> Result<&DateSpec, ValidatorError> {
        self.date_specs
            .get(name)
            .ok_or_else(|| ValidatorError::DateSpecNotFound {
                name: name.to_string(),
            })
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("error_handlers", &self.error_handlers.len())
            .field("hooks", &self.hooks.len())
            .field("predicates", &self.predicates.len())
            .field("patterns", &self.patterns.len())
            .field("date_specs", &self.date_specs.len())
            .finish()
    }
}
