use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::field::{Control, FieldNode};

/// Internal state of a form.
#[derive(Debug, Default)]
struct FormInner {
    /// Form-level declarative attributes (e.g. `blocksubmit`, `error`).
    attrs: HashMap<String, String>,
    /// Member fields, in document order.
    fields: Vec<FieldNode>,
}

/// A shared handle over a form: an ordered list of fields plus form-level
/// attributes.
///
/// Fields can be added and removed at any time; every query re-reads the
/// current list, so consumers that rebuild per pass always see the live
/// member set.
#[derive(Debug, Clone, Default)]
pub struct Form {
    inner: Arc<RwLock<FormInner>>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    /// Set a form-level declarative attribute.
    pub fn attr(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.attrs.insert(key.into(), value.into());
        }
        self
    }

    /// Append a field.
    pub fn field(self, field: FieldNode) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.fields.push(field);
        }
        self
    }

    /// Append several fields.
    pub fn fields_from(self, fields: impl IntoIterator<Item = FieldNode>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.fields.extend(fields);
        }
        self
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    pub fn add_field(&self, field: FieldNode) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fields.push(field);
        }
    }

    /// Remove the field with the given id. Returns true if one was removed.
    pub fn remove_field(&self, id: &str) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            let before = guard.fields.len();
            guard.fields.retain(|f| f.field_id() != id);
            return guard.fields.len() < before;
        }
        false
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// All member fields, in document order.
    pub fn fields(&self) -> Vec<FieldNode> {
        self.inner
            .read()
            .map(|guard| guard.fields.clone())
            .unwrap_or_default()
    }

    /// Member fields that carry user data (fieldsets and resets excluded).
    pub fn child_fields(&self) -> Vec<FieldNode> {
        self.fields()
            .into_iter()
            .filter(FieldNode::is_input_field)
            .collect()
    }

    /// All fields sharing the given name, in document order.
    pub fn field_group(&self, name: &str) -> Vec<FieldNode> {
        self.fields()
            .into_iter()
            .filter(|f| f.field_name().as_deref() == Some(name))
            .collect()
    }

    /// Find a field by id.
    pub fn field_by_id(&self, id: &str) -> Option<FieldNode> {
        self.fields().into_iter().find(|f| f.field_id() == id)
    }

    /// Submit controls of the form.
    pub fn submit_controls(&self) -> Vec<FieldNode> {
        self.fields()
            .into_iter()
            .filter(|f| matches!(f.control(), Control::Submit))
            .collect()
    }

    /// Get a form-level declarative attribute.
    pub fn get_attr(&self, key: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.attrs.get(key).cloned())
    }
}
