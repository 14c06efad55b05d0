/// The event carried through a validation pass triggered by submission.
///
/// A failing pass calls [`SubmitEvent::prevent_default`] so the caller can
/// skip whatever submission action would otherwise follow.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the default action associated with this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
