/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectOption {
    /// Value submitted when the option is selected.
    pub value: String,
    /// Human-readable label.
    pub label: String,
    /// Selection flag, only meaningful for multiple selects.
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }
}

/// The kind of form control a [`FieldNode`](super::FieldNode) represents.
///
/// Kinds map one-to-one onto the type strings a form runtime reports, see
/// [`Control::type_name`]. `Fieldset` and `Reset` are form members that are
/// never validated nor serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Text,
    Password,
    Textarea,
    Hidden,
    Submit,
    Button,
    Reset,
    Fieldset,
    Radio,
    Checkbox,
    Select {
        options: Vec<SelectOption>,
        /// Index of the selected option. A sized select with no selection
        /// reports -1; consumers are expected to normalize that themselves.
        selected_index: i32,
        multiple: bool,
    },
}

impl Control {
    /// The type string a form runtime would report for this control.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Textarea => "textarea",
            Self::Hidden => "hidden",
            Self::Submit => "submit",
            Self::Button => "button",
            Self::Reset => "reset",
            Self::Fieldset => "fieldset",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Select { multiple: false, .. } => "select-one",
            Self::Select { multiple: true, .. } => "select-multiple",
        }
    }

    /// Form members that look like inputs but carry no user data.
    pub fn is_fake(&self) -> bool {
        matches!(self, Self::Fieldset | Self::Reset)
    }

    /// Controls that are validated as a named group rather than one by one.
    pub fn is_groupable(&self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }

    /// Controls that never contribute a name/value pair on submission.
    pub fn is_button(&self) -> bool {
        matches!(self, Self::Submit | Self::Button | Self::Reset)
    }
}
