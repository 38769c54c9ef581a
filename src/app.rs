//! Application loop: owns the terminal, the two screens and the
//! navigation between them.

use crate::config::Config;
use crate::screens::{
    RenderContext, Screen, ScreenAction, ScreenContext, ScreenId, SignInScreen, SignUpScreen,
};
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tracing::{error, info};

/// Poll timeout, which doubles as the animation frame interval.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// The running application: both screens plus everything they draw on.
pub struct App {
    config: Config,
    tui: Tui,
    screen: ScreenId,
    sign_in: SignInScreen,
    sign_up: SignUpScreen,
    tick: u64,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let tui = Tui::new()?;
        Ok(Self {
            config,
            tui,
            screen: ScreenId::SignIn,
            sign_in: SignInScreen::new(),
            sign_up: SignUpScreen::new(),
            tick: 0,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!(screen = self.screen.name(), "started");

        let result = self.event_loop();

        self.tui.exit()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            if self.should_quit {
                info!("quitting");
                return Ok(());
            }

            match self.tui.poll_event(TICK_INTERVAL)? {
                Some(event) => self.handle_event(event)?,
                None => {
                    if self.config.animations {
                        self.tick = self.tick.wrapping_add(1);
                    }
                }
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let config = &self.config;
        let tick = self.tick;
        let screen = self.screen;
        let sign_in = &mut self.sign_in;
        let sign_up = &mut self.sign_up;

        self.tui.terminal_mut().draw(|frame| {
            let ctx = RenderContext::new(config, tick);
            let area = frame.area();
            let result = match screen {
                ScreenId::SignIn => sign_in.render(frame, area, &ctx),
                ScreenId::SignUp => sign_up.render(frame, area, &ctx),
            };
            if let Err(err) = result {
                error!(error = %err, "render failed");
            }
        })?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        // Ctrl+C always quits, even while a text field owns the keyboard
        // and the keymap's printable quit key is suppressed.
        if let Event::Key(key) = &event {
            if key.kind == KeyEventKind::Press
                && key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL)
            {
                self.should_quit = true;
                return Ok(());
            }
        }

        let ctx = ScreenContext::new(&self.config);
        let action = match self.screen {
            ScreenId::SignIn => self.sign_in.handle_event(event, &ctx),
            ScreenId::SignUp => self.sign_up.handle_event(event, &ctx),
        }?;

        match action {
            ScreenAction::Navigate(target) => self.navigate_to(target)?,
            ScreenAction::Quit => self.should_quit = true,
            ScreenAction::None => {}
        }
        Ok(())
    }

    /// Switch screens. The arriving screen starts over, so nothing typed
    /// on it in a previous visit survives the round trip.
    fn navigate_to(&mut self, target: ScreenId) -> Result<()> {
        info!(from = self.screen.name(), to = target.name(), "navigating");
        let ctx = ScreenContext::new(&self.config);
        match target {
            ScreenId::SignIn => self.sign_in.on_enter(&ctx)?,
            ScreenId::SignUp => self.sign_up.on_enter(&ctx)?,
        }
        self.screen = target;
        Ok(())
    }
}
