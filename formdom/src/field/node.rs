use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::{Control, SelectOption};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Internal state of a field node.
#[derive(Debug)]
struct FieldInner {
    id: String,
    name: Option<String>,
    value: String,
    control: Control,
    /// Checked flag, only meaningful for radio and checkbox controls.
    checked: bool,
    disabled: bool,
    classes: Vec<String>,
    /// Tooltip text. Validators use it to surface the error message.
    title: Option<String>,
    /// Declarative validation attributes (the `data-*` namespace of the
    /// control). Keys are plain attribute names like `required` or `pattern`.
    attrs: HashMap<String, String>,
}

/// A shared handle over one form control.
///
/// Cloning a `FieldNode` yields another handle over the same underlying
/// state, so a validator can hold a non-owning reference to the field it
/// flags. Builder methods consume the handle for declarative construction;
/// accessors take `&self` and go through the inner lock.
#[derive(Debug, Clone)]
pub struct FieldNode {
    inner: Arc<RwLock<FieldInner>>,
}

impl FieldNode {
    fn with_control(prefix: &str, control: Control) -> Self {
        Self {
            inner: Arc::new(RwLock::new(FieldInner {
                id: generate_id(prefix),
                name: None,
                value: String::new(),
                control,
                checked: false,
                disabled: false,
                classes: Vec::new(),
                title: None,
                attrs: HashMap::new(),
            })),
        }
    }

    /// Create a single-line text field.
    pub fn text() -> Self {
        Self::with_control("text", Control::Text)
    }

    /// Create a password field.
    pub fn password() -> Self {
        Self::with_control("password", Control::Password)
    }

    /// Create a multi-line text field.
    pub fn textarea() -> Self {
        Self::with_control("textarea", Control::Textarea)
    }

    /// Create a hidden field.
    pub fn hidden() -> Self {
        Self::with_control("hidden", Control::Hidden)
    }

    /// Create a submit control. Its value doubles as its label.
    pub fn submit(label: impl Into<String>) -> Self {
        Self::with_control("submit", Control::Submit).value(label)
    }

    /// Create a push button.
    pub fn button(label: impl Into<String>) -> Self {
        Self::with_control("button", Control::Button).value(label)
    }

    /// Create a reset control.
    pub fn reset() -> Self {
        Self::with_control("reset", Control::Reset)
    }

    /// Create a fieldset marker.
    pub fn fieldset() -> Self {
        Self::with_control("fieldset", Control::Fieldset)
    }

    /// Create a radio button.
    pub fn radio() -> Self {
        Self::with_control("radio", Control::Radio)
    }

    /// Create a checkbox.
    pub fn checkbox() -> Self {
        Self::with_control("checkbox", Control::Checkbox)
    }

    /// Create a single select over the given `(value, label)` options.
    /// The first option starts selected, like a dropdown with no size.
    pub fn select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<SelectOption> = options
            .into_iter()
            .map(|v| {
                let v = v.into();
                SelectOption::new(v.clone(), v)
            })
            .collect();
        Self::with_control(
            "select",
            Control::Select {
                options,
                selected_index: 0,
                multiple: false,
            },
        )
    }

    /// Create a multiple select over the given options. Nothing starts
    /// selected.
    pub fn multi_select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<SelectOption> = options
            .into_iter()
            .map(|v| {
                let v = v.into();
                SelectOption::new(v.clone(), v)
            })
            .collect();
        Self::with_control(
            "select",
            Control::Select {
                options,
                selected_index: -1,
                multiple: true,
            },
        )
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    pub fn id(self, id: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.id = id.into();
        }
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.name = Some(name.into());
        }
        self
    }

    pub fn value(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
        self
    }

    pub fn checked(self, checked: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked = checked;
        }
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
        }
        self
    }

    /// Set a declarative validation attribute.
    pub fn attr(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.attrs.insert(key.into(), value.into());
        }
        self
    }

    /// Set the selected index of a select control.
    pub fn selected_index(self, index: i32) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            if let Control::Select { selected_index, .. } = &mut guard.control {
                *selected_index = index;
            }
        }
        self
    }

    /// Mark one option of a multiple select as selected.
    pub fn option_selected(self, index: usize, selected: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            if let Control::Select { options, .. } = &mut guard.control {
                if let Some(option) = options.get_mut(index) {
                    option.selected = selected;
                }
            }
        }
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the field id.
    pub fn field_id(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.id.clone())
            .unwrap_or_default()
    }

    /// Get the field name, if any.
    pub fn field_name(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.name.clone())
    }

    /// Get the current value. For a select this is the value of the
    /// selected option (the first selected one for a multiple select), or
    /// an empty string when nothing is selected.
    pub fn current_value(&self) -> String {
        self.inner
            .read()
            .map(|guard| match &guard.control {
                Control::Select {
                    options,
                    selected_index,
                    multiple: false,
                } => usize::try_from(*selected_index)
                    .ok()
                    .and_then(|i| options.get(i))
                    .map(|o| o.value.clone())
                    .unwrap_or_default(),
                Control::Select {
                    options,
                    multiple: true,
                    ..
                } => options
                    .iter()
                    .find(|o| o.selected)
                    .map(|o| o.value.clone())
                    .unwrap_or_default(),
                _ => guard.value.clone(),
            })
            .unwrap_or_default()
    }

    /// Values of every selected option of a multiple select. For any other
    /// control this is the single current value.
    pub fn selected_values(&self) -> Vec<String> {
        if let Ok(guard) = self.inner.read() {
            if let Control::Select {
                options,
                multiple: true,
                ..
            } = &guard.control
            {
                return options
                    .iter()
                    .filter(|o| o.selected)
                    .map(|o| o.value.clone())
                    .collect();
            }
        }
        vec![self.current_value()]
    }

    /// Get the selected index of a select control (0 for anything else).
    pub fn current_index(&self) -> i32 {
        self.inner
            .read()
            .map(|guard| match &guard.control {
                Control::Select { selected_index, .. } => *selected_index,
                _ => 0,
            })
            .unwrap_or(0)
    }

    pub fn is_checked(&self) -> bool {
        self.inner.read().map(|guard| guard.checked).unwrap_or(false)
    }

    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    /// Get a snapshot of the control kind.
    pub fn control(&self) -> Control {
        self.inner
            .read()
            .map(|guard| guard.control.clone())
            .unwrap_or(Control::Text)
    }

    /// The type string of the control, e.g. `"select-one"`.
    pub fn type_name(&self) -> &'static str {
        self.inner
            .read()
            .map(|guard| guard.control.type_name())
            .unwrap_or("text")
    }

    /// True for form members that carry user data and can be validated.
    pub fn is_input_field(&self) -> bool {
        self.inner
            .read()
            .map(|guard| !guard.control.is_fake())
            .unwrap_or(false)
    }

    /// Get a declarative validation attribute.
    pub fn get_attr(&self, key: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.attrs.get(key).cloned())
    }

    /// Snapshot of all declarative validation attributes.
    pub fn attrs(&self) -> HashMap<String, String> {
        self.inner
            .read()
            .map(|guard| guard.attrs.clone())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn title(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.title.clone())
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
    }

    pub fn set_checked(&self, checked: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked = checked;
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
        }
    }

    pub fn set_selected_index(&self, index: i32) {
        if let Ok(mut guard) = self.inner.write() {
            if let Control::Select { selected_index, .. } = &mut guard.control {
                *selected_index = index;
            }
        }
    }

    pub fn set_attr(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.attrs.insert(key.into(), value.into());
        }
    }

    pub fn remove_attr(&self, key: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.attrs.remove(key);
        }
    }

    pub fn add_class(&self, class: impl Into<String>) {
        let class = class.into();
        if class.is_empty() {
            return;
        }
        if let Ok(mut guard) = self.inner.write() {
            if !guard.classes.iter().any(|c| *c == class) {
                guard.classes.push(class);
            }
        }
    }

    pub fn remove_class(&self, class: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.classes.retain(|c| c != class);
        }
    }

    pub fn set_title(&self, title: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = Some(title.into());
        }
    }

    pub fn clear_title(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = None;
        }
    }

    /// True when both handles point at the same underlying field.
    pub fn same_node(&self, other: &FieldNode) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
