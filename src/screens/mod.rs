//! Screen controllers for the application.
//!
//! This module provides screen controllers that implement the `Screen` trait.
//! Each screen controller owns its state and handles both rendering and events.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                      App                           │
//! │  ┌──────────────────────────────────────────────┐  │
//! │  │               Screen Router                  │  │
//! │  │  match current_screen {                      │  │
//! │  │    SignIn => sign_in.handle_event(...)       │  │
//! │  │    SignUp => sign_up.handle_event(...)       │  │
//! │  │  }                                           │  │
//! │  └──────────────────────────────────────────────┘  │
//! │                                                    │
//! │  ┌──────────────────────────────────────────────┐  │
//! │  │               Screen Trait                   │  │
//! │  │  - render(frame, area, context)              │  │
//! │  │  - handle_event(event, context) -> Action    │  │
//! │  │  - is_input_focused() -> bool                │  │
//! │  └──────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────┘
//! ```

pub mod screen_trait;
pub mod sign_in;
pub mod sign_up;

pub use screen_trait::{PendingNavigation, RenderContext, Screen, ScreenAction, ScreenContext};
pub use sign_in::SignInScreen;
pub use sign_up::SignUpScreen;

use crate::forms::Destination;

/// Identifies a screen in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// The sign-in screen
    SignIn,
    /// The sign-up screen
    SignUp,
}

impl ScreenId {
    /// Human-readable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ScreenId::SignIn => "sign-in",
            ScreenId::SignUp => "sign-up",
        }
    }
}

impl From<Destination> for ScreenId {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::SignIn => ScreenId::SignIn,
            Destination::SignUp => ScreenId::SignUp,
        }
    }
}
