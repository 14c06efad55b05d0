//! Built-in error handlers.
//!
//! Handlers are the only place validation failures become user-visible.
//! Custom handlers are registered on the [`HandlerRegistry`] under the name
//! the form's `error` attribute references.
//!
//! [`HandlerRegistry`]: crate::registry::HandlerRegistry

use formdom::{FieldNode, Form};

use crate::validators::{FieldValidator, Validator};

/// Emit every failure message through the log, one alert-style block per
/// pass. Registered by default under `"errorAlert"`.
pub fn error_alert(_form: Option<&Form>, dirty: &[FieldValidator]) {
    if dirty.is_empty() {
        return;
    }
    let messages: Vec<String> = dirty.iter().map(|v| v.message()).collect();
    log::error!("[validate] {}", messages.join("\n"));
}

/// Build a handler that renders one `name: message` line per failing
/// validator into the given field, and clears it when the pass is clean.
pub fn error_box(target: FieldNode) -> impl Fn(Option<&Form>, &[FieldValidator]) + Send + Sync {
    move |_form, dirty| {
        if dirty.is_empty() {
            target.set_value("");
            return;
        }
        let lines: Vec<String> = dirty
            .iter()
            .map(|v| format!("{}: {}", v.name(), v.message()))
            .collect();
        target.set_value(lines.join("\n"));
    }
}
