//! Serialization of a form's successful fields.
//!
//! Only successful fields contribute name/value pairs: real input controls
//! (no fieldsets, resets or buttons) that have a name, are enabled and,
//! for radio buttons and checkboxes, are checked.

use serde_json::{Map, Value};

use crate::field::{Control, FieldNode};
use crate::form::Form;

/// True if the field would contribute at least conceptually to a
/// submission: named, enabled, a data-carrying control, checked where that
/// applies.
pub fn is_successful_field(field: &FieldNode) -> bool {
    let control = field.control();
    if control.is_fake() || control.is_button() {
        return false;
    }
    if field.field_name().is_none() {
        return false;
    }
    if field.is_disabled() {
        return false;
    }
    if control.is_groupable() && !field.is_checked() {
        return false;
    }
    true
}

/// Ordered name/value pairs of every successful field. A multiple select
/// contributes one pair per selected option.
pub fn to_pairs(form: &Form) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for field in form.child_fields() {
        if !is_successful_field(&field) {
            log::trace!("[serialize] skipping {}: not successful", field.field_id());
            continue;
        }
        let name = match field.field_name() {
            Some(name) => name,
            None => continue,
        };
        match field.control() {
            Control::Select { multiple: true, .. } => {
                for value in field.selected_values() {
                    pairs.push((name.clone(), value));
                }
            }
            _ => pairs.push((name, field.current_value())),
        }
    }
    pairs
}

/// URL-encoded query string of every successful field.
pub fn to_query_string(form: &Form) -> String {
    to_pairs(form)
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// JSON object keyed by field name. Repeated names collect into an array,
/// preserving document order.
pub fn to_json(form: &Form) -> Value {
    let mut map = Map::new();
    for (name, value) in to_pairs(form) {
        match map.get_mut(&name) {
            None => {
                map.insert(name, Value::String(value));
            }
            Some(Value::Array(values)) => {
                values.push(Value::String(value));
            }
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
        }
    }
    Value::Object(map)
}
