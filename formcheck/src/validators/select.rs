//! Validator for single and multiple selects.

use formdom::FieldNode;

use super::base::FieldFlag;
use super::Validator;
use crate::config::SelectConfig;
use crate::error::ValidatorError;

/// Forbids one index and/or one value from being selected. No other rules
/// apply to selects.
#[derive(Debug, Clone)]
pub struct SelectValidator {
    node: FieldNode,
    config: SelectConfig,
    flag: FieldFlag,
    /// Selected index captured at construction. Validators are rebuilt on
    /// every pass, so the capture is per-pass fresh.
    current_index: i32,
}

impl SelectValidator {
    pub fn new(node: FieldNode, overrides: SelectConfig) -> Result<Self, ValidatorError> {
        let config = SelectConfig::from_field(&node)?.merge(overrides);
        let flag = FieldFlag::new(node.clone(), config.message.clone(), config.errorclass.clone());
        // A sized select with no selection reports -1; treat it as the
        // first entry
        let mut current_index = node.current_index();
        if current_index == -1 {
            current_index = 0;
        }
        Ok(Self {
            node,
            config,
            flag,
            current_index,
        })
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }
}

impl Validator for SelectValidator {
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
        if self.config.invalidindex == Some(self.current_index) {
            return Ok(false);
        }
        if let Some(invalid) = &self.config.invalidvalue {
            if self.node.current_value() == *invalid {
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
