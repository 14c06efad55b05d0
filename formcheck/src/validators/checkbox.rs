//! Validator for checkbox groups.

use formdom::FieldNode;

use super::base::GroupFlag;
use super::Validator;
use crate::config::GroupConfig;
use crate::error::ValidatorError;

/// Validates every checkbox sharing a name as one unit: the number of
/// checked, enabled members must fall within `[minchecked, maxchecked]`.
#[derive(Debug, Clone)]
pub struct CheckboxGroupValidator {
    members: Vec<FieldNode>,
    minchecked: usize,
    maxchecked: usize,
    flag: GroupFlag,
}

impl CheckboxGroupValidator {
    pub fn new(members: Vec<FieldNode>) -> Result<Self, ValidatorError> {
        let config = GroupConfig::from_members(&members)?;
        let flag = GroupFlag::new(members.clone(), config.message, config.errorclass);
        let maxchecked = config.maxchecked.unwrap_or(members.len());
        Ok(Self {
            minchecked: config.minchecked.unwrap_or(0),
            maxchecked,
            members,
            flag,
        })
    }

    fn checked_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| !m.is_disabled() && m.is_checked())
            .count()
    }
}

impl Validator for CheckboxGroupValidator {
    fn name(&self) -> String {
        self.flag.name()
    }

    fn message(&self) -> String {
        self.flag.message()
    }

    fn is_valid(&self) -> Result<bool, ValidatorError> {
        let count = self.checked_count();
        Ok(count >= self.minchecked && count <= self.maxchecked)
    }

    fn flag_valid(&self) {
        self.flag.flag_valid();
    }

    fn flag_invalid(&self) {
        self.flag.flag_invalid();
    }
}
