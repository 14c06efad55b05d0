//! Form-level validation orchestration.

use std::collections::HashSet;
use std::sync::Arc;

use formdom::{Form, SubmitEvent};

use crate::attributes;
use crate::config::{FormConfig, FormOptions};
use crate::error::ValidatorError;
use crate::registry::HandlerRegistry;
use crate::validators::{field_validator_for, FieldValidator, Validator};

/// Runs every field validator of a form and aggregates the failing ones.
///
/// The per-field validator list is rebuilt from scratch on every pass, so
/// fields added or removed between passes are always picked up.
pub struct FormValidator {
    config: FormConfig,
    form: Form,
    registry: Arc<HandlerRegistry>,
    validators: Vec<FieldValidator>,
    dirty: Vec<FieldValidator>,
}

impl FormValidator {
    pub fn new(
        form: Form,
        registry: Arc<HandlerRegistry>,
        options: FormOptions,
    ) -> Result<Self, ValidatorError> {
        let config = FormConfig::from_form(&form)?.apply(options);
        Ok(Self {
            config,
            form,
            registry,
            validators: Vec::new(),
            dirty: Vec::new(),
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Rebuild the validator list from the form's current fields.
    fn init(&mut self) -> Result<(), ValidatorError> {
        self.validators.clear();
        self.dirty.clear();
        for field in self.form.fields() {
            if !field.is_input_field() {
                continue;
            }
            if let Some(validator) =
                field_validator_for(&field, Some(&self.form), &self.registry)?
            {
                self.validators.push(validator);
            }
        }
        Ok(())
    }

    /// Execute all field validators and return the ones in invalid state.
    ///
    /// The returned slice is empty if there are no errors. On failure the
    /// error handler runs and, when an event is given, its default action
    /// is suppressed. On success the `after` hook runs and submit controls
    /// are disabled unless `blocksubmit` is off.
    pub fn validate(
        &mut self,
        mut event: Option<&mut SubmitEvent>,
    ) -> Result<&[FieldValidator], ValidatorError> {
        self.init()?;
        self.run_before(event.as_deref())?;

        // Track validated names so a radio or checkbox group is handled
        // once per pass, not once per member
        let mut executed: HashSet<String> = HashSet::new();
        for validator in &self.validators {
            let name = validator.name();
            if executed.contains(&name) {
                log::debug!("[validate] '{name}' already validated this pass, skipping");
                continue;
            }
            if validator.validate()? {
                self.dirty.push(validator.clone());
            }
            executed.insert(name);
        }
        log::debug!(
            "[validate] {} validators, {} dirty",
            self.validators.len(),
            self.dirty.len()
        );

        if self.is_valid() {
            if self.config.blocksubmit {
                self.disable_submit();
            }
            self.run_after(event.as_deref())?;
        } else {
            self.run_error()?;
            if let Some(event) = event.as_deref_mut() {
                event.prevent_default();
            }
        }
        Ok(&self.dirty)
    }

    /// True iff the last pass produced zero dirty validators.
    pub fn is_valid(&self) -> bool {
        self.dirty.is_empty()
    }

    /// The validators that failed the last pass.
    pub fn dirty_validators(&self) -> &[FieldValidator] {
        &self.dirty
    }

    /// Disable submit controls to avoid multiple submits, swapping in the
    /// disabled label where one is configured.
    fn disable_submit(&self) {
        for control in self.form.submit_controls() {
            control.set_disabled(true);
            if let Some(label) = control.get_attr(attributes::DISABLED_LABEL) {
                control.set_value(label);
            }
        }
    }

    fn run_before(&self, event: Option<&SubmitEvent>) -> Result<(), ValidatorError> {
        if let Some(name) = &self.config.before {
            let hook = self.registry.hook(name)?;
            hook(&self.form, event);
        }
        Ok(())
    }

    fn run_error(&self) -> Result<(), ValidatorError> {
        let handler = self.registry.error_handler(&self.config.error)?;
        handler(Some(&self.form), &self.dirty);
        Ok(())
    }

    fn run_after(&self, event: Option<&SubmitEvent>) -> Result<(), ValidatorError> {
        if let Some(name) = &self.config.after {
            let hook = self.registry.hook(name)?;
            hook(&self.form, event);
        }
        Ok(())
    }
}
