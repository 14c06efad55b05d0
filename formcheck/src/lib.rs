pub mod api;
pub mod attributes;
pub mod config;
pub mod dates;
pub mod error;
pub mod form;
pub mod handlers;
pub mod patterns;
pub mod registry;
pub mod rules;
pub mod validators;

pub use error::ValidatorError;
pub use form::FormValidator;
pub use registry::HandlerRegistry;
pub use validators::{FieldValidator, Validator};

pub mod prelude {
    pub use crate::api::{validate_child_fields, validate_field, validate_fields, validate_form};
    pub use crate::config::{FormOptions, Required, SelectConfig, TextConfig};
    pub use crate::dates::DateSpec;
    pub use crate::error::ValidatorError;
    pub use crate::form::FormValidator;
    pub use crate::handlers;
    pub use crate::registry::HandlerRegistry;
    pub use crate::validators::{
        field_validator_for, field_validator_with, CheckboxGroupValidator, FieldValidator,
        RadioGroupValidator, SelectValidator, TextValidator, Validator, ValidatorOverrides,
    };

    pub use formdom::{Control, FieldNode, Form, SubmitEvent};
}
