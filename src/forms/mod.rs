//! Form state for the sign-in and sign-up flows
//!
//! The forms own their field values and submit-time rules and know nothing
//! about rendering or the event loop. Screens feed them keystrokes through
//! [`crate::utils::line_edit::LineEdit`] and hand them collaborators at
//! the moment of use: a [`SubmissionSink`] to receive submitted values and
//! a [`Navigator`] to move between flows.

mod login;
mod signup;

pub use login::LoginForm;
pub use signup::SignUpForm;

use tracing::info;

/// Where a navigation request points.
///
/// Destinations are opaque to the forms; they name a flow, not a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The sign-in flow
    SignIn,
    /// The sign-up flow
    SignUp,
}

impl Destination {
    /// Stable identifier for logs and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::SignIn => "sign-in",
            Destination::SignUp => "sign-up",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability to move the user to another flow.
///
/// Forms call this fire-and-forget: they neither wait for the move nor
/// learn whether it happened.
pub trait Navigator {
    /// Request a move to `destination`.
    fn go_to(&mut self, destination: Destination);
}

/// Values captured by a sign-in submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInSubmission {
    pub identifier: String,
    pub secret: String,
}

/// Values captured by a sign-up submission.
///
/// The confirmation field is deliberately absent: it exists to be compared
/// against `secret` someday and is not part of the submitted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpSubmission {
    pub display_name: String,
    pub identifier: String,
    pub secret: String,
    pub marketing_opt_in: bool,
    pub agreed_to_terms: bool,
}

/// Receiver for submitted form values.
///
/// Implementations decide what submission means: the default
/// [`DiagnosticSink`] only logs, a real transport would send the values
/// somewhere. Sinks are synchronous and infallible; a fallible transport
/// should wrap these payloads rather than widen this trait.
pub trait SubmissionSink {
    /// Receive a sign-in submission.
    fn sign_in(&mut self, submission: SignInSubmission);

    /// Receive a sign-up submission.
    fn sign_up(&mut self, submission: SignUpSubmission);
}

/// Default sink: emits a tracing event per submission and drops the values.
///
/// Secrets never reach the log line; only their lengths do.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticSink;

impl SubmissionSink for DiagnosticSink {
    fn sign_in(&mut self, submission: SignInSubmission) {
        info!(
            identifier = %submission.identifier,
            secret_len = submission.secret.chars().count(),
            "sign-in submitted"
        );
    }

    fn sign_up(&mut self, submission: SignUpSubmission) {
        info!(
            display_name = %submission.display_name,
            identifier = %submission.identifier,
            secret_len = submission.secret.chars().count(),
            marketing_opt_in = submission.marketing_opt_in,
            agreed_to_terms = submission.agreed_to_terms,
            "sign-up submitted"
        );
    }
}
