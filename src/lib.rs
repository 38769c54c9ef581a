//! Tidepool - ocean-themed sign-in and sign-up screens for the terminal
//!
//! This library provides the form state, screens and widgets behind the
//! `tidepool` binary. The forms are plain state machines with injected
//! collaborators, so they can be driven without a terminal.

pub mod app;
pub mod cli;
pub mod config;
pub mod forms;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Flat re-exports for the types most callers touch
pub use config::Config;
pub use forms::{
    Destination, LoginForm, Navigator, SignInSubmission, SignUpForm, SignUpSubmission,
    SubmissionSink,
};
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
