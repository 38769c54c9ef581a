//! Sign-in screen controller.
//!
//! Owns the [`LoginForm`] plus the focus ring over its widgets and draws
//! the card over the bubble backdrop. Submissions go to the sink the
//! screen was built with; the sign-up link answers the app loop with a
//! navigation action.

use crate::forms::{DiagnosticSink, LoginForm, SubmissionSink};
use crate::screens::screen_trait::{
    PendingNavigation, RenderContext, Screen, ScreenAction, ScreenContext,
};
use crate::styles::theme;
use crate::utils::line_edit::LineEdit;
use crate::utils::{center_card, create_standard_layout};
use crate::widgets::{
    Backdrop, BackdropVariant, ButtonWidget, Footer, LinkWidget, TextFieldWidget,
    TextFieldWidgetExt, TidepoolLogo,
};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear};

/// Fixed seed so every launch drifts the bubbles the same way.
const BACKDROP_SEED: u64 = 7;

/// Card dimensions, borders included.
const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 12;

/// Widgets on the sign-in card, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignInField {
    Identifier,
    Secret,
    Submit,
    SignUpLink,
}

impl SignInField {
    fn next(self) -> Self {
        match self {
            SignInField::Identifier => SignInField::Secret,
            SignInField::Secret => SignInField::Submit,
            SignInField::Submit => SignInField::SignUpLink,
            SignInField::SignUpLink => SignInField::Identifier,
        }
    }

    fn prev(self) -> Self {
        match self {
            SignInField::Identifier => SignInField::SignUpLink,
            SignInField::Secret => SignInField::Identifier,
            SignInField::Submit => SignInField::Secret,
            SignInField::SignUpLink => SignInField::Submit,
        }
    }
}

/// Sign-in screen controller.
///
/// This screen owns its state and handles both rendering and events.
pub struct SignInScreen {
    form: LoginForm,
    focus: SignInField,
    backdrop: Backdrop,
    sink: Box<dyn SubmissionSink>,
}

impl SignInScreen {
    /// Create a new sign-in screen with the diagnostic sink.
    pub fn new() -> Self {
        Self::with_sink(Box::new(DiagnosticSink))
    }

    /// Create a new sign-in screen that submits into `sink`.
    pub fn with_sink(sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            form: LoginForm::new(),
            focus: SignInField::Identifier,
            backdrop: Backdrop::new(BackdropVariant::Bubbles, BACKDROP_SEED),
            sink,
        }
    }

    /// The form backing this screen.
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    fn focused_input_mut(&mut self) -> Option<&mut LineEdit> {
        match self.focus {
            SignInField::Identifier => Some(&mut self.form.identifier),
            SignInField::Secret => Some(&mut self.form.secret),
            SignInField::Submit | SignInField::SignUpLink => None,
        }
    }

    /// Confirm acts on the focused widget: the link navigates, everything
    /// else submits the form as-is.
    fn confirm(&mut self) -> ScreenAction {
        match self.focus {
            SignInField::SignUpLink => {
                let mut pending = PendingNavigation::default();
                self.form.go_to_sign_up(&mut pending);
                pending.into_action()
            }
            _ => {
                self.form.submit(self.sink.as_mut());
                ScreenAction::None
            }
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let card = Block::default()
            .style(theme().background_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme().border_style())
            .title(" Welcome Back! ")
            .title_alignment(Alignment::Center)
            .title_style(theme().title_style());
        let inner = card.inner(area);
        frame.render_widget(card, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Sign In button
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Sign-up link
            ])
            .split(inner);

        frame.render_text_field_widget(
            TextFieldWidget::new(&self.form.identifier)
                .title("Email")
                .placeholder("you@example.com")
                .focused(self.focus == SignInField::Identifier),
            rows[0],
        );
        frame.render_text_field_widget(
            TextFieldWidget::new(&self.form.secret)
                .title("Password")
                .masked(true)
                .focused(self.focus == SignInField::Secret),
            rows[1],
        );
        frame.render_widget(
            ButtonWidget::new("Sign In").focused(self.focus == SignInField::Submit),
            rows[3],
        );
        frame.render_widget(
            LinkWidget::new("Don't have an account? Sign Up")
                .focused(self.focus == SignInField::SignUpLink),
            rows[5],
        );
    }
}

impl Default for SignInScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SignInScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let logo = TidepoolLogo::regular();
        let (header_area, content_area, footer_area) =
            create_standard_layout(area, logo.height() + 1);

        frame.render_widget(logo, center_card(header_area, logo.width(), logo.height()));
        frame.render_widget(self.backdrop.widget(ctx.tick), content_area);
        self.render_card(frame, center_card(content_area, CARD_WIDTH, CARD_HEIGHT));
        Footer::render(frame, footer_area, &ctx.config.keymap.footer_form());
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        use crate::keymap::Action;

        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        // Printable keys go into the focused field before the keymap may
        // claim them, so presets that bind letters still allow typing.
        if let KeyCode::Char(c) = key.code {
            if self.is_input_focused()
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
            {
                if let Some(input) = self.focused_input_mut() {
                    input.insert_char(c);
                }
                return Ok(ScreenAction::None);
            }
        }

        let mut action = ctx.config.keymap.get_action(key.code, key.modifiers);
        if self.is_input_focused() {
            action = action.filter(LineEdit::allows_action_while_editing);
        }

        if let Some(act) = action {
            match act {
                Action::NextField | Action::MoveDown => {
                    self.focus = self.focus.next();
                    return Ok(ScreenAction::None);
                }
                Action::PrevField | Action::MoveUp => {
                    self.focus = self.focus.prev();
                    return Ok(ScreenAction::None);
                }
                Action::Confirm => return Ok(self.confirm()),
                Action::Cancel | Action::Quit => return Ok(ScreenAction::Quit),
                Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar => {
                    if let Some(input) = self.focused_input_mut() {
                        input.handle_action(act);
                    }
                    return Ok(ScreenAction::None);
                }
                _ => {}
            }
        }

        // Unbound editing keys still reach the field.
        if let Some(input) = self.focused_input_mut() {
            input.handle_key(key.code);
        }

        Ok(ScreenAction::None)
    }

    fn is_input_focused(&self) -> bool {
        matches!(self.focus, SignInField::Identifier | SignInField::Secret)
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.form = LoginForm::new();
        self.focus = SignInField::Identifier;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::forms::test_support::SharedRecordingSink;
    use crate::keymap::KeymapPreset;
    use crate::screens::ScreenId;
    use crossterm::event::KeyEvent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(screen: &mut SignInScreen, ctx: &ScreenContext, text: &str) {
        for c in text.chars() {
            screen.handle_event(key(KeyCode::Char(c)), ctx).unwrap();
        }
    }

    fn recording_screen() -> (SignInScreen, SharedRecordingSink) {
        let sink = SharedRecordingSink::new();
        let screen = SignInScreen::with_sink(Box::new(sink.clone()));
        (screen, sink)
    }

    #[test]
    fn test_starts_focused_on_identifier() {
        let screen = SignInScreen::new();
        assert_eq!(screen.focus, SignInField::Identifier);
        assert!(screen.is_input_focused());
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut screen = SignInScreen::new();

        type_text(&mut screen, &ctx, "pearl@reef.example");
        assert_eq!(screen.form.identifier(), "pearl@reef.example");
        assert_eq!(screen.form.secret(), "");
    }

    #[test]
    fn test_tab_cycles_through_fields() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut screen = SignInScreen::new();

        screen.handle_event(key(KeyCode::Tab), &ctx).unwrap();
        assert_eq!(screen.focus, SignInField::Secret);
        screen.handle_event(key(KeyCode::Tab), &ctx).unwrap();
        assert_eq!(screen.focus, SignInField::Submit);
        assert!(!screen.is_input_focused());
        screen.handle_event(key(KeyCode::Tab), &ctx).unwrap();
        assert_eq!(screen.focus, SignInField::SignUpLink);
        screen.handle_event(key(KeyCode::Tab), &ctx).unwrap();
        assert_eq!(screen.focus, SignInField::Identifier);
    }

    #[test]
    fn test_back_tab_cycles_backwards() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut screen = SignInScreen::new();

        screen.handle_event(key(KeyCode::BackTab), &ctx).unwrap();
        assert_eq!(screen.focus, SignInField::SignUpLink);
    }

    #[test]
    fn test_enter_submits_with_field_values() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let (mut screen, sink) = recording_screen();

        type_text(&mut screen, &ctx, "pearl@reef.example");
        screen.handle_event(key(KeyCode::Tab), &ctx).unwrap();
        type_text(&mut screen, &ctx, "hunter2");
        let action = screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();

        assert_eq!(action, ScreenAction::None);
        let sign_ins = sink.sign_ins();
        assert_eq!(sign_ins.len(), 1);
        assert_eq!(sign_ins[0].identifier, "pearl@reef.example");
        assert_eq!(sign_ins[0].secret, "hunter2");
    }

    #[test]
    fn test_enter_on_blank_form_submits_blanks() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let (mut screen, sink) = recording_screen();

        screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();

        let sign_ins = sink.sign_ins();
        assert_eq!(sign_ins.len(), 1);
        assert_eq!(sign_ins[0].identifier, "");
        assert_eq!(sign_ins[0].secret, "");
    }

    #[test]
    fn test_repeat_submissions_preserve_fields() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let (mut screen, sink) = recording_screen();

        type_text(&mut screen, &ctx, "pearl@reef.example");
        screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();
        screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();

        assert_eq!(sink.sign_ins().len(), 2);
        assert_eq!(screen.form.identifier(), "pearl@reef.example");
    }

    #[test]
    fn test_enter_on_link_navigates_to_sign_up() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let (mut screen, sink) = recording_screen();

        for _ in 0..3 {
            screen.handle_event(key(KeyCode::Tab), &ctx).unwrap();
        }
        assert_eq!(screen.focus, SignInField::SignUpLink);
        let action = screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();

        assert_eq!(action, ScreenAction::Navigate(ScreenId::SignUp));
        assert!(sink.sign_ins().is_empty());
    }

    #[test]
    fn test_escape_quits() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut screen = SignInScreen::new();

        let action = screen.handle_event(key(KeyCode::Esc), &ctx).unwrap();
        assert_eq!(action, ScreenAction::Quit);
    }

    #[test]
    fn test_quit_key_ignored_while_typing() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut screen = SignInScreen::new();

        let action = screen.handle_event(key(KeyCode::Char('q')), &ctx).unwrap();
        assert_eq!(action, ScreenAction::None);
        assert_eq!(screen.form.identifier(), "q");
    }

    #[test]
    fn test_quit_key_works_outside_inputs() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut screen = SignInScreen::new();

        screen.handle_event(key(KeyCode::Tab), &ctx).unwrap();
        screen.handle_event(key(KeyCode::Tab), &ctx).unwrap();
        let action = screen.handle_event(key(KeyCode::Char('q')), &ctx).unwrap();
        assert_eq!(action, ScreenAction::Quit);
    }

    #[test]
    fn test_vim_letters_type_into_fields() {
        let mut config = Config::default();
        config.keymap.preset = KeymapPreset::Vim;
        let ctx = ScreenContext::new(&config);
        let mut screen = SignInScreen::new();

        type_text(&mut screen, &ctx, "jkhlqx");
        assert_eq!(screen.form.identifier(), "jkhlqx");
        assert_eq!(screen.focus, SignInField::Identifier);
    }

    #[test]
    fn test_on_enter_resets_form_and_focus() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut screen = SignInScreen::new();

        type_text(&mut screen, &ctx, "pearl");
        screen.handle_event(key(KeyCode::Tab), &ctx).unwrap();
        screen.on_enter(&ctx).unwrap();

        assert_eq!(screen.form.identifier(), "");
        assert_eq!(screen.focus, SignInField::Identifier);
    }

    #[test]
    fn test_render_shows_card_copy() {
        let config = Config::default();
        let mut screen = SignInScreen::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(&config, 0);
                screen.render(frame, frame.area(), &ctx).unwrap();
            })
            .unwrap();

        let mut text = String::new();
        let buf = terminal.backend().buffer();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        assert!(text.contains("Welcome Back!"));
        assert!(text.contains("[ Sign In ]"));
        assert!(text.contains("Don't have an account? Sign Up"));
    }
}
