//! Typed per-field and per-form configuration.
//!
//! Configuration is assembled in two steps with documented precedence:
//! attribute-derived defaults first, caller-supplied overrides second
//! (overrides win). The attribute readers are the only place that touches
//! the declarative attribute namespace.

use formdom::{FieldNode, Form};

use crate::attributes;
use crate::error::ValidatorError;

/// The `required` flag of a text field: a boolean literal or the name of a
/// registered predicate for conditional requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Required {
    Always,
    Never,
    Predicate(String),
}

impl Required {
    /// Parse the raw attribute value. Anything that is not a boolean
    /// literal names a predicate.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => Self::Always,
            "false" => Self::Never,
            name => Self::Predicate(name.to_string()),
        }
    }
}

/// Reject attributes that match neither a rule nor a config key.
pub(crate) fn check_known_attrs(field: &FieldNode) -> Result<(), ValidatorError> {
    for key in field.attrs().keys() {
        if !attributes::KNOWN_ATTRIBUTES.contains(&key.as_str()) {
            return Err(ValidatorError::UnknownRule { name: key.clone() });
        }
    }
    Ok(())
}

fn parse_usize(field: &FieldNode, attr: &str) -> Result<Option<usize>, ValidatorError> {
    match field.get_attr(attr) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ValidatorError::invalid_attribute(attr, raw)),
    }
}

fn parse_f64(field: &FieldNode, attr: &str) -> Result<Option<f64>, ValidatorError> {
    match field.get_attr(attr) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ValidatorError::invalid_attribute(attr, raw)),
    }
}

/// Configuration of a text-like field. Every `Option` doubles as the rule
/// trigger: a rule runs iff its entry is populated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextConfig {
    pub required: Option<Required>,
    /// The email rule has no parameter; presence of the attribute is enough.
    pub email: bool,
    pub pattern: Option<String>,
    pub minlength: Option<usize>,
    pub maxlength: Option<usize>,
    pub minnumber: Option<f64>,
    pub maxnumber: Option<f64>,
    pub datepattern: Option<String>,
    pub mindate: Option<String>,
    pub maxdate: Option<String>,
    pub equalto: Option<String>,
    pub message: Option<String>,
    pub errorclass: Option<String>,
}

impl TextConfig {
    /// Read the attribute-derived defaults off a field.
    pub fn from_field(field: &FieldNode) -> Result<Self, ValidatorError> {
        check_known_attrs(field)?;
        Ok(Self {
            required: field
                .get_attr(attributes::REQUIRED)
                .map(|raw| Required::parse(&raw)),
            email: field.get_attr(attributes::EMAIL).is_some(),
            pattern: field.get_attr(attributes::PATTERN),
            minlength: parse_usize(field, attributes::MIN_LENGTH)?,
            maxlength: parse_usize(field, attributes::MAX_LENGTH)?,
            minnumber: parse_f64(field, attributes::MIN_NUMBER)?,
            maxnumber: parse_f64(field, attributes::MAX_NUMBER)?,
            datepattern: field.get_attr(attributes::DATE_PATTERN),
            mindate: field.get_attr(attributes::MIN_DATE),
            maxdate: field.get_attr(attributes::MAX_DATE),
            equalto: field.get_attr(attributes::EQUAL_TO),
            message: field.get_attr(attributes::MESSAGE),
            errorclass: field.get_attr(attributes::ERROR_CLASS),
        })
    }

    /// Apply caller-supplied overrides. Populated override entries win.
    pub fn merge(mut self, overrides: Self) -> Self {
        self.required = overrides.required.or(self.required);
        self.email = self.email || overrides.email;
        self.pattern = overrides.pattern.or(self.pattern);
        self.minlength = overrides.minlength.or(self.minlength);
        self.maxlength = overrides.maxlength.or(self.maxlength);
        self.minnumber = overrides.minnumber.or(self.minnumber);
        self.maxnumber = overrides.maxnumber.or(self.maxnumber);
        self.datepattern = overrides.datepattern.or(self.datepattern);
        self.mindate = overrides.mindate.or(self.mindate);
        self.maxdate = overrides.maxdate.or(self.maxdate);
        self.equalto = overrides.equalto.or(self.equalto);
        self.message = overrides.message.or(self.message);
        self.errorclass = overrides.errorclass.or(self.errorclass);
        self
    }

    /// The date spec used by the date rules: the configured one, or the
    /// default format when date bounds are set without an explicit pattern.
    pub fn date_spec_name(&self) -> &str {
        self.datepattern
            .as_deref()
            .unwrap_or(attributes::DEFAULT_DATE_PATTERN)
    }
}

/// Configuration of a select field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectConfig {
    /// Zero-based index that must not be selected.
    pub invalidindex: Option<i32>,
    /// Value that must not be selected.
    pub invalidvalue: Option<String>,
    pub message: Option<String>,
    pub errorclass: Option<String>,
}

impl SelectConfig {
    /// Read the attribute-derived defaults off a field. A non-numeric
    /// `invalidindex` is a construction-time configuration error.
    pub fn from_field(field: &FieldNode) -> Result<Self, ValidatorError> {
        check_known_attrs(field)?;
        let invalidindex = match field.get_attr(attributes::INVALID_INDEX) {
            None => None,
            Some(raw) => Some(
                raw.parse()
                    .map_err(|_| ValidatorError::InvalidIndexParameter)?,
            ),
        };
        Ok(Self {
            invalidindex,
            invalidvalue: field.get_attr(attributes::INVALID_VALUE),
            message: field.get_attr(attributes::MESSAGE),
            errorclass: field.get_attr(attributes::ERROR_CLASS),
        })
    }

    /// Apply caller-supplied overrides. Populated override entries win.
    pub fn merge(mut self, overrides: Self) -> Self {
        self.invalidindex = overrides.invalidindex.or(self.invalidindex);
        self.invalidvalue = overrides.invalidvalue.or(self.invalidvalue);
        self.message = overrides.message.or(self.message);
        self.errorclass = overrides.errorclass.or(self.errorclass);
        self
    }
}

/// Configuration resolved across the members of a radio/checkbox group.
///
/// Fields of the same group can carry conflicting attributes; the last
/// member in document order wins. The `required`/`minchecked`/`maxchecked`
/// scans skip disabled members, the message/class scans do not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupConfig {
    pub required: bool,
    pub minchecked: Option<usize>,
    pub maxchecked: Option<usize>,
    pub message: String,
    pub errorclass: String,
}

impl GroupConfig {
    pub fn from_members(members: &[FieldNode]) -> Result<Self, ValidatorError> {
        let mut config = Self::default();
        let mut required_raw: Option<String> = None;
        for member in members {
            check_known_attrs(member)?;
            if let Some(message) = member.get_attr(attributes::MESSAGE) {
                config.message = message;
            }
            if let Some(class) = member.get_attr(attributes::ERROR_CLASS) {
                config.errorclass = class;
            }
            if member.is_disabled() {
                continue;
            }
            if let Some(raw) = member.get_attr(attributes::REQUIRED) {
                required_raw = Some(raw);
            }
            if member.get_attr(attributes::MIN_CHECKED).is_some() {
                config.minchecked = parse_usize(member, attributes::MIN_CHECKED)?;
            }
            if member.get_attr(attributes::MAX_CHECKED).is_some() {
                config.maxchecked = parse_usize(member, attributes::MAX_CHECKED)?;
            }
        }
        // Only the literal "true" marks a group as required
        config.required = required_raw.as_deref() == Some("true");
        Ok(config)
    }
}

/// Resolved form-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Disable submit controls after a successful pass to block a double
    /// submit. Defaults to true.
    pub blocksubmit: bool,
    /// Registry name of the error handler.
    pub error: String,
    /// Registry name of the hook invoked before the pass, if configured.
    pub before: Option<String>,
    /// Registry name of the hook invoked after a successful pass, if
    /// configured.
    pub after: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            blocksubmit: true,
            error: attributes::DEFAULT_ERROR_HANDLER.to_string(),
            before: None,
            after: None,
        }
    }
}

impl FormConfig {
    /// Read the attribute-derived defaults off a form.
    pub fn from_form(form: &Form) -> Result<Self, ValidatorError> {
        let blocksubmit = match form.get_attr(attributes::BLOCK_SUBMIT) {
            None => true,
            Some(raw) => raw
                .parse()
                .map_err(|_| ValidatorError::invalid_attribute(attributes::BLOCK_SUBMIT, raw))?,
        };
        Ok(Self {
            blocksubmit,
            error: form
                .get_attr(attributes::ERROR)
                .unwrap_or_else(|| attributes::DEFAULT_ERROR_HANDLER.to_string()),
            before: form.get_attr(attributes::BEFORE),
            after: form.get_attr(attributes::AFTER),
        })
    }

    /// Apply caller-supplied overrides. Populated override entries win.
    pub fn apply(mut self, options: FormOptions) -> Self {
        if let Some(blocksubmit) = options.blocksubmit {
            self.blocksubmit = blocksubmit;
        }
        if let Some(error) = options.error {
            self.error = error;
        }
        self.before = options.before.or(self.before);
        self.after = options.after.or(self.after);
        self
    }
}

/// Caller-supplied overrides for [`FormConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOptions {
    pub blocksubmit: Option<bool>,
    pub error: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
}
