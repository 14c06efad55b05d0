//! Field validators and the factory that picks the right variant.

mod base;
mod checkbox;
mod radio;
mod select;
mod text;

use std::sync::Arc;

use formdom::{FieldNode, Form};

pub use checkbox::CheckboxGroupValidator;
pub use radio::RadioGroupValidator;
pub use select::SelectValidator;
pub use text::TextValidator;

use crate::config::{SelectConfig, TextConfig};
use crate::error::ValidatorError;
use crate::registry::HandlerRegistry;

/// The capability set every field validator provides.
pub trait Validator {
    /// The field or group name used for per-pass deduplication.
    fn name(&self) -> String;

    /// The configured error message.
    fn message(&self) -> String;

    /// Disabled fields are always valid and skip flagging. Groups are
    /// never disabled as a whole.
    fn is_disabled(&self) -> bool {
        false
    }

    /// True if the field satisfies the rules associated with it.
    fn is_valid(&self) -> Result<bool, ValidatorError>;

    fn flag_valid(&self);

    fn flag_invalid(&self);

    /// Run the validator and flag the field accordingly.
    ///
    /// Careful, the returned boolean is inverted relative to "valid":
    /// true means the field is dirty. The form validator builds its dirty
    /// list from exactly this polarity.
    fn validate(&self) -> Result<bool, ValidatorError> {
        if self.is_disabled() {
            self.flag_valid();
            return Ok(false);
        }
        if self.is_valid()? {
            self.flag_valid();
            Ok(false)
        } else {
            self.flag_invalid();
            Ok(true)
        }
    }
}

/// A field validator of any variant, as produced by the factory.
#[derive(Debug, Clone)]
pub enum FieldValidator {
    Text(TextValidator),
    Select(SelectValidator),
    Radio(RadioGroupValidator),
    Checkbox(CheckboxGroupValidator),
}

impl Validator for FieldValidator {
    fn name(&self) -> String {
        match self {
            Self::Text(v) => v.name(),
            Self::Select(v) => v.name(),
            Self::Radio(v) => v.name(),
            Self::Checkbox(v) => v.name(),
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Text(v) => v.message(),
            Self::Select(v) => v.message(),
            Self::Radio(v) => v.message(),
            Self::Checkbox(v) => v.message(),
        }
    }

    fn is_disabled(&self) -> bool {
        match self {
            Self::Text(v) => v.is_disabled(),
            Self::Select(v) => v.is_disabled(),
            Self::Radio(v) => v.is_disabled(),
            Self::Checkbox(v) => v.is_disabled(),
        }
    }

    fn is_valid(&self) -> Result<bool, ValidatorError> {
        match self {
            Self::Text(v) => v.is_valid(),
            Self::Select(v) => v.is_valid(),
            Self::Radio(v) => v.is_valid(),
            Self::Checkbox(v) => v.is_valid(),
        }
    }

    fn flag_valid(&self) {
        match self {
            Self::Text(v) => v.flag_valid(),
            Self::Select(v) => v.flag_valid(),
            Self::Radio(v) => v.flag_valid(),
            Self::Checkbox(v) => v.flag_valid(),
        }
    }

    fn flag_invalid(&self) {
        match self {
            Self::Text(v) => v.flag_invalid(),
            Self::Select(v) => v.flag_invalid(),
            Self::Radio(v) => v.flag_invalid(),
            Self::Checkbox(v) => v.flag_invalid(),
        }
    }

    fn validate(&self) -> Result<bool, ValidatorError> {
        match self {
            Self::Text(v) => v.validate(),
            Self::Select(v) => v.validate(),
            Self::Radio(v) => v.validate(),
            Self::Checkbox(v) => v.validate(),
        }
    }
}

/// Caller-supplied config overrides handed through the factory. Group
/// validators take their configuration from member attributes only.
#[derive(Debug, Clone, Default)]
pub struct ValidatorOverrides {
    pub text: TextConfig,
    pub select: SelectConfig,
}

/// Pick and build the validator variant for a field.
///
/// Returns `Ok(None)` for fields that cannot be validated: fake input
/// kinds, and radio buttons or checkboxes without a name (an unnamed box
/// cannot be grouped).
pub fn field_validator_for(
    field: &FieldNode,
    form: Option<&Form>,
    registry: &Arc<HandlerRegistry>,
) -> Result<Option<FieldValidator>, ValidatorError> {
    field_validator_with(field, form, registry, &ValidatorOverrides::default())
}

/// Like [`field_validator_for`], with caller-supplied config overrides.
pub fn field_validator_with(
    field: &FieldNode,
    form: Option<&Form>,
    registry: &Arc<HandlerRegistry>,
    overrides: &ValidatorOverrides,
) -> Result<Option<FieldValidator>, ValidatorError> {
    if !field.is_input_field() {
        return Ok(None);
    }
    match field.type_name() {
        "select-one" | "select-multiple" => Ok(Some(FieldValidator::Select(
            SelectValidator::new(field.clone(), overrides.select.clone())?,
        ))),
        "radio" => match field.field_name() {
            Some(name) => Ok(Some(FieldValidator::Radio(RadioGroupValidator::new(
                resolve_group(field, form, &name),
            )?))),
            None => Ok(None),
        },
        "checkbox" => match field.field_name() {
            Some(name) => Ok(Some(FieldValidator::Checkbox(CheckboxGroupValidator::new(
                resolve_group(field, form, &name),
            )?))),
            None => Ok(None),
        },
        _ => Ok(Some(FieldValidator::Text(TextValidator::new(
            field.clone(),
            form.cloned(),
            Arc::clone(registry),
            overrides.text.clone(),
        )?))),
    }
}

/// All sibling fields sharing the group name, or the field itself when no
/// form is in scope.
fn resolve_group(field: &FieldNode, form: Option<&Form>, name: &str) -> Vec<FieldNode> {
    match form {
        Some(form) => {
            let group = form.field_group(name);
            if group.is_empty() {
                vec![field.clone()]
            } else {
                group
            }
        }
        None => vec![field.clone()],
    }
}
