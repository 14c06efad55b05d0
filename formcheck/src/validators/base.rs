//! Shared flagging behavior of per-field and per-group validators.

use formdom::FieldNode;

/// Flagging state of a single-field validator: the node it decorates plus
/// the resolved error message and class.
#[derive(Debug, Clone)]
pub(crate) struct FieldFlag {
    node: FieldNode,
    message: String,
    errorclass: String,
}

impl FieldFlag {
    pub fn new(node: FieldNode, message: Option<String>, errorclass: Option<String>) -> Self {
        Self {
            node,
            message: message.unwrap_or_default(),
            errorclass: errorclass.unwrap_or_default(),
        }
    }

    /// The field's name, falling back to its id.
    pub fn name(&self) -> String {
        self.node
            .field_name()
            .unwrap_or_else(|| self.node.field_id())
    }

    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Apply the error class and surface the message as the tooltip.
    pub fn flag_invalid(&self) {
        self.node.add_class(&self.errorclass);
        self.node.set_title(&self.message);
    }

    pub fn flag_valid(&self) {
        self.node.remove_class(&self.errorclass);
        self.node.clear_title();
    }
}

/// Flagging state of a group validator. Flags decorate every member of the
/// group, and only when an error class is configured.
#[derive(Debug, Clone)]
pub(crate) struct GroupFlag {
    members: Vec<FieldNode>,
    message: String,
    errorclass: String,
}

impl GroupFlag {
    pub fn new(members: Vec<FieldNode>, message: String, errorclass: String) -> Self {
        Self {
            members,
            message,
            errorclass,
        }
    }

    /// The shared group name (empty for a degenerate unnamed group).
    pub fn name(&self) -> String {
        self.members
            .first()
            .and_then(FieldNode::field_name)
            .unwrap_or_default()
    }

    pub fn message(&self) -> String {
        self.message.clone()
    }

    pub fn flag_invalid(&self) {
        if self.errorclass.is_empty() {
            return;
        }
        for member in &self.members {
            member.add_class(&self.errorclass);
            member.set_title(&self.message);
        }
    }

    pub fn flag_valid(&self) {
        if self.errorclass.is_empty() {
            return;
        }
        for member in &self.members {
            member.remove_class(&self.errorclass);
            member.clear_title();
        }
    }
}
