//! Validator for radio button groups.

use formdom::FieldNode;

use super::base::GroupFlag;
use super::Validator;
use crate::config::GroupConfig;
use crate::error::ValidatorError;

/// Validates every radio button sharing a name as one unit: a required
/// group needs at least one checked member.
#[derive(Debug, Clone)]
pub struct RadioGroupValidator {
    members: Vec<FieldNode>,
    required: bool,
    flag: GroupFlag,
}

impl RadioGroupValidator {
    pub fn new(members: Vec<FieldNode>) -> Result<Self, ValidatorError> {
        let config = GroupConfig::from_members(&members)?;
        let flag = GroupFlag::new(members.clone(), config.message, config.errorclass);
        Ok(Self {
            members,
            required: config.required,
            flag,
        })
    }
}

impl Validator for RadioGroupValidator {
    fn name(&self) -> String {
        self.flag.name()
    }

    fn message(&self) -> String {
        self.flag.message()
    }

    fn is_valid(&self) -> Result<bool, ValidatorError> {
        if !self.required {
            return Ok(true);
        }
        Ok(self.members.iter().any(FieldNode::is_checked))
    }

    fn flag_valid(&self) {
        self.flag.flag_valid();
    }

    fn flag_invalid(&self) {
        self.flag.flag_invalid();
    }
}
