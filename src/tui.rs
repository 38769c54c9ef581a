//! Terminal lifecycle management.
//!
//! Terminal state is restored on normal exit through [`Tui::exit`] and on
//! panic through [`install_panic_hook`].

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

/// Wraps the terminal with raw-mode and alternate-screen lifecycle.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Create a terminal handle without touching terminal modes yet.
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self { terminal })
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        self.terminal.clear().context("Failed to clear terminal")?;
        Ok(())
    }

    /// Leave the alternate screen and restore cooked mode.
    ///
    /// Leaves the alternate screen while still in raw mode, then disables
    /// raw mode.
    pub fn exit(&mut self) -> Result<()> {
        execute!(io::stdout(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        disable_raw_mode().context("Failed to disable raw mode")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }

    /// Wait up to `timeout` for the next input event.
    ///
    /// Returns `None` on timeout, which the app loop uses as its animation
    /// tick.
    pub fn poll_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            let event = event::read().context("Failed to read event")?;
            return Ok(Some(event));
        }
        Ok(None)
    }

    /// Mutable access to the underlying terminal for drawing.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

/// Installs a panic hook that restores the terminal before printing the
/// panic message.
///
/// Call this before [`Tui::enter`] so a panic mid-frame does not leave the
/// terminal in raw mode.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    // Terminal lifecycle needs a real TTY, so these guarantees are checked
    // manually instead:
    // - Terminal is restored on normal exit
    // - Terminal is restored on panic
}
