//! Validator for text-like fields.

use std::sync::Arc;

use formdom::{FieldNode, Form};

use super::base::FieldFlag;
use super::Validator;
use crate::config::{Required, TextConfig};
use crate::error::ValidatorError;
use crate::registry::HandlerRegistry;
use crate::rules::{self, RuleContext};

/// Runs the rule table against a single text-like field.
#[derive(Debug, Clone)]
pub struct TextValidator {
    node: FieldNode,
    form: Option<Form>,
    config: TextConfig,
    flag: FieldFlag,
    registry: Arc<HandlerRegistry>,
}

impl TextValidator {
    pub fn new(
        node: FieldNode,
        form: Option<Form>,
        registry: Arc<HandlerRegistry>,
        overrides: TextConfig,
    ) -> Result<Self, ValidatorError> {
        let config = TextConfig::from_field(&node)?.merge(overrides);
        let flag = FieldFlag::new(node.clone(), config.message.clone(), config.errorclass.clone());
        Ok(Self {
            node,
            form,
            config,
            flag,
            registry,
        })
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    fn is_empty(&self) -> bool {
        self.node.current_value().is_empty()
    }

    /// Whether the field is required right now. A conditional requirement
    /// resolves its predicate through the registry.
    pub fn is_required(&self) -> Result<bool, ValidatorError> {
        match &self.config.required {
            None | Some(Required::Never) => Ok(false),
            Some(Required::Always) => Ok(true),
            Some(Required::Predicate(name)) => {
                let predicate = self.registry.predicate(name)?;
                Ok(predicate(&self.node))
            }
        }
    }
}

impl Validator for TextValidator {
    fn name(&self) -> String {
        self.flag.name()
    }

    fn message(&self) -> String {
        self.flag.message()
    }

    fn is_disabled(&self) -> bool {
        self.node.is_disabled()
    }

    fn is_valid(&self) -> Result<bool, ValidatorError> {
        if self.is_empty() {
            return Ok(!self.is_required()?);
        }
        let ctx = RuleContext {
            config: &self.config,
            registry: &self.registry,
            form: self.form.as_ref(),
        };
        for &(name, rule) in rules::RULES {
            if !rules::rule_applies(name, &self.config) {
                continue;
            }
            if !rule(&self.node, &ctx)? {
                log::debug!("[validate] field '{}' failed rule '{}'", self.name(), name);
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn flag_valid(&self) {
        self.flag.flag_valid();
    }

    fn flag_invalid(&self) {
        self.flag.flag_invalid();
    }
}
