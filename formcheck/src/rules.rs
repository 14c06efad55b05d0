//! The rule table: named pure predicates over a field's raw value.
//!
//! Rules are evaluated in the table's definition order and the first rule
//! that returns false short-circuits the field to invalid. A rule runs only
//! when its entry in the field's configuration is populated.

use formdom::{FieldNode, Form};

use crate::config::TextConfig;
use crate::error::ValidatorError;
use crate::registry::HandlerRegistry;

/// Everything a rule may consult besides the field itself.
pub struct RuleContext<'a> {
    pub config: &'a TextConfig,
    pub registry: &'a HandlerRegistry,
    /// The surrounding form, needed by cross-field rules like `equalto`.
    pub form: Option<&'a Form>,
}

/// A rule returns true when the value satisfies it.
pub type RuleFn = fn(&FieldNode, &RuleContext<'_>) -> Result<bool, ValidatorError>;

/// The rule table. Order is the evaluation order.
pub static RULES: &[(&str, RuleFn)] = &[
    ("email", email),
    ("equalto", equal_to),
    ("datepattern", date_pattern),
    ("maxdate", max_date),
    ("mindate", min_date),
    ("maxlength", max_length),
    ("minlength", min_length),
    ("maxnumber", max_number),
    ("minnumber", min_number),
    ("pattern", pattern),
];

/// Whether the named rule is configured for the field.
pub fn rule_applies(name: &str, config: &TextConfig) -> bool {
    match name {
        "email" => config.email,
        "equalto" => config.equalto.is_some(),
        "datepattern" => config.datepattern.is_some(),
        "maxdate" => config.maxdate.is_some(),
        "mindate" => config.mindate.is_some(),
        "maxlength" => config.maxlength.is_some(),
        "minlength" => config.minlength.is_some(),
        "maxnumber" => config.maxnumber.is_some(),
        "minnumber" => config.minnumber.is_some(),
        "pattern" => config.pattern.is_some(),
        _ => false,
    }
}

/// Valid iff the value contains both "@" and ".".
fn email(field: &FieldNode, _ctx: &RuleContext<'_>) -> Result<bool, ValidatorError> {
    let value = field.current_value();
    Ok(value.contains('@') && value.contains('.'))
}

/// Valid iff the value equals the value of the field referenced by id.
fn equal_to(field: &FieldNode, ctx: &RuleContext<'_>) -> Result<bool, ValidatorError> {
    let id = ctx.config.equalto.clone().unwrap_or_default();
    let other = ctx
        .form
        .and_then(|form| form.field_by_id(&id))
        .ok_or_else(|| ValidatorError::MissingEqualToField { id: id.clone() })?;
    Ok(field.current_value() == other.current_value())
}

/// Valid iff the value parses against the configured date spec.
fn date_pattern(field: &FieldNode, ctx: &RuleContext<'_>) -> Result<bool, ValidatorError> {
    let spec = ctx.registry.date_spec(ctx.config.date_spec_name())?;
    Ok(spec.parse(&field.current_value()).is_some())
}

/// Valid iff value and bound both parse and value <= bound.
fn max_date(field: &FieldNode, ctx: &RuleContext<'_>) -> Result<bool, ValidatorError> {
    let spec = ctx.registry.date_spec(ctx.config.date_spec_name())?;
    let value = spec.parse(&field.current_value());
    let bound = ctx.config.maxdate.as_deref().and_then(|raw| spec.parse(raw));
    Ok(matches!((value, bound), (Some(value), Some(bound)) if value <= bound))
}

/// Valid iff value and bound both parse and value >= bound.
fn min_date(field: &FieldNode, ctx: &RuleContext<'_>) -> Result<bool, ValidatorError> {
    let spec = ctx.registry.date_spec(ctx.config.date_spec_name())?;
    let value = spec.parse(&field.current_value());
    let bound = ctx.config.mindate.as_deref().and_then(|raw| spec.parse(raw));
    Ok(matches!((value, bound), (Some(value), Some(bound)) if value >= bound))
}

fn max_length(field: &FieldNode, ctx: &RuleContext<'_>) -> Result<bool, ValidatorError> {
    let bound = ctx.config.maxlength.unwrap_or(usize::MAX);
    Ok(field.current_value().chars().count() <= bound)
}

fn min_length(field: &FieldNode, ctx: &RuleContext<'_>) -> Result<bool, ValidatorError> {
    let bound = ctx.config.minlength.unwrap_or(0);
    Ok(field.current_value().chars().count() >= bound)
}

/// A non-numeric value fails the numeric bounds outright.
fn max_number(field: &FieldNode, ctx: &RuleContext<'_>) -> Result<bool, ValidatorError> {
    let Ok(value) = field.current_value().parse::<f64>() else {
        return Ok(false);
    };
    Ok(ctx.config.maxnumber.is_none_or(|bound| value <= bound))
}

fn min_number(field: &FieldNode, ctx: &RuleContext<'_>) -> Result<bool, ValidatorError> {
    let Ok(value) = field.current_value().parse::<f64>() else {
        return Ok(false);
    };
    Ok(ctx.config.minnumber.is_none_or(|bound| value >= bound))
}

/// Valid iff the value matches the named registered regex.
fn pattern(field: &FieldNode, ctx: &RuleContext<'_>) -> Result<bool, ValidatorError> {
    let name = ctx.config.pattern.as_deref().unwrap_or_default();
    let regex = ctx.registry.pattern(name)?;
    Ok(regex.is_match(&field.current_value()))
}
