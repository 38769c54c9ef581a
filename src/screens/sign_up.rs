//! Sign-up screen controller.
//!
//! Owns the [`SignUpForm`] plus the focus ring over its widgets and draws
//! the card over the fish backdrop. The agreement gate lives in the form;
//! this screen only routes keys and shows the error row when the form
//! says so.

use crate::forms::{DiagnosticSink, SignUpForm, SubmissionSink};
use crate::screens::screen_trait::{
    PendingNavigation, RenderContext, Screen, ScreenAction, ScreenContext,
};
use crate::styles::theme;
use crate::utils::line_edit::LineEdit;
use crate::utils::{center_card, create_standard_layout};
use crate::widgets::{
    Backdrop, BackdropVariant, ButtonWidget, CheckboxWidget, Footer, LinkWidget, TextFieldWidget,
    TextFieldWidgetExt, TidepoolLogo,
};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear};

/// Fixed seed so every launch drifts the fish the same way.
const BACKDROP_SEED: u64 = 13;

/// Card dimensions, borders included. The card is taller than the
/// sign-in one, so the header drops to the small logo to keep the whole
/// screen inside 24 rows.
const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 19;

const MARKETING_LABEL: &str = "Receive emails about updates and special offers";
const AGREEMENT_LABEL: &str = "I agree to the Terms & Conditions & Privacy Policy";
const AGREEMENT_ERROR: &str = "Please agree to the Terms & Conditions to continue";

/// Widgets on the sign-up card, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignUpField {
    DisplayName,
    Identifier,
    Secret,
    SecretConfirmation,
    MarketingOptIn,
    AgreedToTerms,
    Submit,
    SignInLink,
}

impl SignUpField {
    fn next(self) -> Self {
        match self {
            SignUpField::DisplayName => SignUpField::Identifier,
            SignUpField::Identifier => SignUpField::Secret,
            SignUpField::Secret => SignUpField::SecretConfirmation,
            SignUpField::SecretConfirmation => SignUpField::MarketingOptIn,
            SignUpField::MarketingOptIn => SignUpField::AgreedToTerms,
            SignUpField::AgreedToTerms => SignUpField::Submit,
            SignUpField::Submit => SignUpField::SignInLink,
            SignUpField::SignInLink => SignUpField::DisplayName,
        }
    }

    fn prev(self) -> Self {
        match self {
            SignUpField::DisplayName => SignUpField::SignInLink,
            SignUpField::Identifier => SignUpField::DisplayName,
            SignUpField::Secret => SignUpField::Identifier,
            SignUpField::SecretConfirmation => SignUpField::Secret,
            SignUpField::MarketingOptIn => SignUpField::SecretConfirmation,
            SignUpField::AgreedToTerms => SignUpField::MarketingOptIn,
            SignUpField::Submit => SignUpField::AgreedToTerms,
            SignUpField::SignInLink => SignUpField::Submit,
        }
    }
}

/// Sign-up screen controller.
///
/// This screen owns its state and handles both rendering and events.
pub struct SignUpScreen {
    form: SignUpForm,
    focus: SignUpField,
    backdrop: Backdrop,
    sink: Box<dyn SubmissionSink>,
}

impl SignUpScreen {
    /// Create a new sign-up screen with the diagnostic sink.
    pub fn new() -> Self {
        Self::with_sink(Box::new(DiagnosticSink))
    }

    /// Create a new sign-up screen that submits into `sink`.
    pub fn with_sink(sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            form: SignUpForm::new(),
            focus: SignUpField::DisplayName,
            backdrop: Backdrop::new(BackdropVariant::Fish, BACKDROP_SEED),
            sink,
        }
    }

    /// The form backing this screen.
    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    fn focused_input_mut(&mut self) -> Option<&mut LineEdit> {
        match self.focus {
            SignUpField::DisplayName => Some(&mut self.form.display_name),
            SignUpField::Identifier => Some(&mut self.form.identifier),
            SignUpField::Secret => Some(&mut self.form.secret),
            SignUpField::SecretConfirmation => Some(&mut self.form.secret_confirmation),
            _ => None,
        }
    }

    fn toggle_focused_checkbox(&mut self) -> bool {
        match self.focus {
            SignUpField::MarketingOptIn => {
                self.form.toggle_marketing_opt_in();
                true
            }
            SignUpField::AgreedToTerms => {
                self.form.toggle_agreed_to_terms();
                true
            }
            _ => false,
        }
    }

    /// Confirm acts on the focused widget: the link navigates, everything
    /// else hands the form to the sink (the form may refuse).
    fn confirm(&mut self) -> ScreenAction {
        match self.focus {
            SignUpField::SignInLink => {
                let mut pending = PendingNavigation::default();
                self.form.go_to_sign_in(&mut pending);
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
            .title(" Explore with us! ")
            .title_alignment(Alignment::Center)
            .title_style(theme().title_style());
        let inner = card.inner(area);
        frame.render_widget(card, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Username
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Length(3), // Confirm Password
                Constraint::Length(1), // Marketing opt-in
                Constraint::Length(1), // Terms agreement
                Constraint::Length(1), // Agreement error
                Constraint::Length(1), // Sign Up button
                Constraint::Length(1), // Sign-in link
            ])
            .split(inner);

        frame.render_text_field_widget(
            TextFieldWidget::new(&self.form.display_name)
                .title("Username")
                .focused(self.focus == SignUpField::DisplayName),
            rows[0],
        );
        frame.render_text_field_widget(
            TextFieldWidget::new(&self.form.identifier)
                .title("Email")
                .placeholder("you@example.com")
                .focused(self.focus == SignUpField::Identifier),
            rows[1],
        );
        frame.render_text_field_widget(
            TextFieldWidget::new(&self.form.secret)
                .title("Password")
                .masked(true)
                .focused(self.focus == SignUpField::Secret),
            rows[2],
        );
        frame.render_text_field_widget(
            TextFieldWidget::new(&self.form.secret_confirmation)
                .title("Confirm Password")
                .masked(true)
                .focused(self.focus == SignUpField::SecretConfirmation),
            rows[3],
        );
        frame.render_widget(
            CheckboxWidget::new(MARKETING_LABEL)
                .checked(self.form.marketing_opt_in())
                .focused(self.focus == SignUpField::MarketingOptIn),
            rows[4],
        );
        frame.render_widget(
            CheckboxWidget::new(AGREEMENT_LABEL)
                .checked(self.form.agreed_to_terms())
                .focused(self.focus == SignUpField::AgreedToTerms),
            rows[5],
        );
        if self.form.show_agreement_error() {
            frame.render_widget(
                Line::styled(AGREEMENT_ERROR, theme().error_style())
                    .alignment(Alignment::Center),
                rows[6],
            );
        }
        frame.render_widget(
            ButtonWidget::new("Sign Up").focused(self.focus == SignUpField::Submit),
            rows[7],
        );
        frame.render_widget(
            LinkWidget::new("Already have an account? Sign In")
                .focused(self.focus == SignUpField::SignInLink),
            rows[8],
        );
    }
}

impl Default for SignUpScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SignUpScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let logo = TidepoolLogo::small();
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
                Action::ToggleSelect => {
                    self.toggle_focused_checkbox();
                    return Ok(ScreenAction::None);
                }
                Action::MoveLeft | Action::MoveRight => {
                    if !self.toggle_focused_checkbox() {
                        if let Some(input) = self.focused_input_mut() {
                            input.handle_action(act);
                        }
                    }
                    return Ok(ScreenAction::None);
                }
                Action::Home | Action::End | Action::Backspace | Action::DeleteChar => {
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
        matches!(
            self.focus,
            SignUpField::DisplayName
                | SignUpField::Identifier
                | SignUpField::Secret
                | SignUpField::SecretConfirmation
        )
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.form = SignUpForm::new();
        self.focus = SignUpField::DisplayName;
        Ok(())
    }
}
