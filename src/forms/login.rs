use super::{Destination, Navigator, SignInSubmission, SubmissionSink};
use crate::utils::line_edit::LineEdit;

/// State behind the sign-in screen: an identifier and a secret.
///
/// Both values are stored exactly as typed. Submission is unconditional;
/// there is no validation here, empty fields submit like any others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Account identifier (an email address in practice)
    pub identifier: LineEdit,
    /// Account secret
    pub secret: LineEdit,
}

impl LoginForm {
    /// Create a form with both fields blank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the identifier verbatim.
    pub fn set_identifier(&mut self, value: impl Into<String>) {
        self.identifier.set_text(value);
    }

    /// Replace the secret verbatim.
    pub fn set_secret(&mut self, value: impl Into<String>) {
        self.secret.set_text(value);
    }

    /// Current identifier, exactly as entered.
    pub fn identifier(&self) -> &str {
        self.identifier.text()
    }

    /// Current secret, exactly as entered.
    pub fn secret(&self) -> &str {
        self.secret.text()
    }

    /// Submit the form: hand the current values to the sink.
    ///
    /// Always emits exactly one submission and leaves the fields untouched,
    /// so the user can correct a typo and submit again.
    pub fn submit(&self, sink: &mut dyn SubmissionSink) {
        sink.sign_in(SignInSubmission {
            identifier: self.identifier.text().to_string(),
            secret: self.secret.text().to_string(),
        });
    }

    /// Ask to switch to the sign-up flow.
    ///
    /// Fire-and-forget: entered values are not carried along and the form
    /// does not learn whether the move happened.
    pub fn go_to_sign_up(&self, navigator: &mut dyn Navigator) {
        navigator.go_to(Destination::SignUp);
    }
}
