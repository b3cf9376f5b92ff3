//! Creation-form state: visibility, in-flight publish flag, field values.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

/// Label on the submit control when idle.
pub const PUBLISH_LABEL: &str = "Publish";
/// Label on the submit control while a publish call is outstanding.
pub const PUBLISHING_LABEL: &str = "Publishing...";
/// Blocking alert shown when the store rejects a new post.
pub const PUBLISH_FAILED_TEXT: &str = "Failed to create post. Please try again.";

/// Transient state of the create-post form.
///
/// The form starts hidden. `publishing` doubles as the re-entrancy guard:
/// the submit control is disabled while it is set, so at most one create
/// call is ever outstanding.
#[derive(Clone, Debug, Default)]
pub struct ComposerState {
    pub form_visible: bool,
    pub publishing: bool,
    pub title: String,
    pub author: String,
}

impl ComposerState {
    /// Reveal the form (and thereby hide the new-post trigger). Idempotent.
    pub fn show(&mut self) {
        self.form_visible = true;
    }

    /// Hide the form and reset its fields. Idempotent; the editor document
    /// is cleared separately through the editor handle.
    pub fn hide(&mut self) {
        self.form_visible = false;
        self.title.clear();
        self.author.clear();
    }

    pub fn begin_publish(&mut self) {
        self.publishing = true;
    }

    pub fn finish_publish(&mut self) {
        self.publishing = false;
    }

    /// Current label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.publishing { PUBLISHING_LABEL } else { PUBLISH_LABEL }
    }
}
