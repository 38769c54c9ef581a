//! What every full-terminal view implements.
//!
//! Screens own their state, draw themselves, and answer events with a
//! [`ScreenAction`] instead of mutating anything global. The app loop is
//! the only place that acts on those answers.

use crate::config::Config;
use crate::forms::{Destination, Navigator};
use crate::screens::ScreenId;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// What a screen gets to look at while drawing itself.
pub struct RenderContext<'a> {
    /// Live configuration, for the keymap footer and animation switch.
    pub config: &'a Config,
    /// Animation frame counter; frozen while animations are disabled.
    pub tick: u64,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, tick: u64) -> Self {
        Self { config, tick }
    }
}

/// What a screen gets to look at while handling an event.
pub struct ScreenContext<'a> {
    /// Live configuration, for keymap resolution.
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// A screen's answer to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Stay put.
    #[default]
    None,
    /// Switch to another screen.
    Navigate(ScreenId),
    /// Shut the application down.
    Quit,
}

/// Navigator that parks a requested destination until the screen can
/// answer the app loop with it.
///
/// The forms only know the [`Navigator`] capability; screens hand them
/// one of these, then convert whatever was requested into a
/// [`ScreenAction`]. A second request before conversion wins over the
/// first, which cannot happen in practice since the loop processes one
/// key at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingNavigation {
    destination: Option<Destination>,
}

impl PendingNavigation {
    /// The screen action for the parked request, if any.
    pub fn into_action(self) -> ScreenAction {
        match self.destination {
            Some(destination) => ScreenAction::Navigate(ScreenId::from(destination)),
            None => ScreenAction::None,
        }
    }
}

impl Navigator for PendingNavigation {
    fn go_to(&mut self, destination: Destination) {
        self.destination = Some(destination);
    }
}

/// One full-terminal view with its own state and event handling.
pub trait Screen {
    /// Draw the whole screen into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// React to an input event and say what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Whether a text field is being edited right now.
    ///
    /// While true, keymap chords on printable keys are suppressed so
    /// the keys type instead.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Runs on arrival after navigation.
    ///
    /// Screen state does not survive leaving, so this starts the screen
    /// over: blank fields, focus on the first field.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
