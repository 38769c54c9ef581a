use super::{Destination, Navigator, SignUpSubmission, SubmissionSink};
use crate::utils::line_edit::LineEdit;
use tracing::debug;

/// State behind the sign-up screen.
///
/// Four text fields, two consent checkboxes and one derived flag,
/// `show_agreement_error`, which is only ever raised by a blocked submit
/// and only ever cleared by checking the agreement box.
///
/// The secret and its confirmation are NOT compared anywhere; a mismatched
/// pair submits normally. `test_submits_even_when_confirmation_differs`
/// pins that down so an equality check is added on purpose rather than by
/// accident.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    /// Name shown to other users
    pub display_name: LineEdit,
    /// Account identifier (an email address in practice)
    pub identifier: LineEdit,
    /// Account secret
    pub secret: LineEdit,
    /// Second entry of the secret, collected but never compared
    pub secret_confirmation: LineEdit,
    marketing_opt_in: bool,
    agreed_to_terms: bool,
    show_agreement_error: bool,
}

impl SignUpForm {
    /// Create a form with blank fields and both checkboxes cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the display name verbatim.
    pub fn set_display_name(&mut self, value: impl Into<String>) {
        self.display_name.set_text(value);
    }

    /// Replace the identifier verbatim.
    pub fn set_identifier(&mut self, value: impl Into<String>) {
        self.identifier.set_text(value);
    }

    /// Replace the secret verbatim.
    pub fn set_secret(&mut self, value: impl Into<String>) {
        self.secret.set_text(value);
    }

    /// Replace the secret confirmation verbatim.
    pub fn set_secret_confirmation(&mut self, value: impl Into<String>) {
        self.secret_confirmation.set_text(value);
    }

    /// Current display name, exactly as entered.
    pub fn display_name(&self) -> &str {
        self.display_name.text()
    }

    /// Current identifier, exactly as entered.
    pub fn identifier(&self) -> &str {
        self.identifier.text()
    }

    /// Current secret, exactly as entered.
    pub fn secret(&self) -> &str {
        self.secret.text()
    }

    /// Current secret confirmation, exactly as entered.
    pub fn secret_confirmation(&self) -> &str {
        self.secret_confirmation.text()
    }

    /// Whether the user opted into marketing mail.
    pub fn marketing_opt_in(&self) -> bool {
        self.marketing_opt_in
    }

    /// Set the marketing checkbox. Independent of the agreement gate.
    pub fn set_marketing_opt_in(&mut self, value: bool) {
        self.marketing_opt_in = value;
    }

    /// Flip the marketing checkbox.
    pub fn toggle_marketing_opt_in(&mut self) {
        self.marketing_opt_in = !self.marketing_opt_in;
    }

    /// Whether the user accepted the terms.
    pub fn agreed_to_terms(&self) -> bool {
        self.agreed_to_terms
    }

    /// Set the agreement checkbox.
    ///
    /// Checking it clears any pending agreement error. Unchecking leaves
    /// the error flag as it was: it only rises again on the next blocked
    /// submit.
    pub fn set_agreed_to_terms(&mut self, value: bool) {
        self.agreed_to_terms = value;
        if value {
            self.show_agreement_error = false;
        }
    }

    /// Flip the agreement checkbox, with the same error-clearing rule as
    /// [`Self::set_agreed_to_terms`].
    pub fn toggle_agreed_to_terms(&mut self) {
        let value = !self.agreed_to_terms;
        self.set_agreed_to_terms(value);
    }

    /// Whether the blocking agreement message should be shown.
    pub fn show_agreement_error(&self) -> bool {
        self.show_agreement_error
    }

    /// Submit the form.
    ///
    /// The one gate is the agreement checkbox: unchecked, nothing is
    /// emitted and the error flag is raised; checked, exactly one
    /// submission reaches the sink. Field values are untouched either way,
    /// including a blocked attempt, so nothing is lost while the user
    /// fixes the checkbox.
    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) {
        if !self.agreed_to_terms {
            self.show_agreement_error = true;
            debug!("sign-up submit blocked: terms not agreed");
            return;
        }
        self.show_agreement_error = false;
        sink.sign_up(SignUpSubmission {
            display_name: self.display_name.text().to_string(),
            identifier: self.identifier.text().to_string(),
            secret: self.secret.text().to_string(),
            marketing_opt_in: self.marketing_opt_in,
            agreed_to_terms: self.agreed_to_terms,
        });
    }

    /// Ask to switch to the sign-in flow.
    ///
    /// Fire-and-forget; entered values and error state stay behind.
    pub fn go_to_sign_in(&self, navigator: &mut dyn Navigator) {
        navigator.go_to(Destination::SignIn);
    }
}
