//! Integration tests for the sign-in / sign-up workflows.
//!
//! Drives the real screens with key events through the public API and
//! checks what reaches the submission sink and what the app loop would
//! be told to do next.

mod common;

use common::{key, key_with, RecordingSink};
use crossterm::event::{KeyCode, KeyModifiers};
use tidepool::config::Config;
use tidepool::forms::{SignInSubmission, SignUpSubmission};
use tidepool::keymap::{Action, KeyBinding, KeymapPreset};
use tidepool::screens::{
    Screen, ScreenAction, ScreenContext, ScreenId, SignInScreen, SignUpScreen,
};

fn type_str(screen: &mut dyn Screen, ctx: &ScreenContext, text: &str) {
    for c in text.chars() {
        screen.handle_event(key(KeyCode::Char(c)), ctx).unwrap();
    }
}

fn tab(screen: &mut dyn Screen, ctx: &ScreenContext) {
    screen.handle_event(key(KeyCode::Tab), ctx).unwrap();
}

fn enter(screen: &mut dyn Screen, ctx: &ScreenContext) -> ScreenAction {
    screen.handle_event(key(KeyCode::Enter), ctx).unwrap()
}

// ============================================================================
// SIGN-IN WORKFLOW
// ============================================================================

#[test]
fn sign_in_submits_exactly_what_was_typed() {
    let config = Config::default();
    let ctx = ScreenContext::new(&config);
    let sink = RecordingSink::new();
    let mut screen = SignInScreen::with_sink(Box::new(sink.clone()));

    type_str(&mut screen, &ctx, "  Pearl@Reef.example  ");
    tab(&mut screen, &ctx);
    type_str(&mut screen, &ctx, "hunter2");
    let action = enter(&mut screen, &ctx);

    assert_eq!(action, ScreenAction::None);
    assert_eq!(
        sink.sign_ins(),
        vec![SignInSubmission {
            identifier: "  Pearl@Reef.example  ".to_string(),
            secret: "hunter2".to_string(),
        }]
    );
}

#[test]
fn sign_in_link_requests_sign_up_navigation() {
    let config = Config::default();
    let ctx = ScreenContext::new(&config);
    let sink = RecordingSink::new();
    let mut screen = SignInScreen::with_sink(Box::new(sink.clone()));

    tab(&mut screen, &ctx);
    tab(&mut screen, &ctx);
    tab(&mut screen, &ctx);
    let action = enter(&mut screen, &ctx);

    assert_eq!(action, ScreenAction::Navigate(ScreenId::SignUp));
    assert!(sink.sign_ins().is_empty());
}

// ============================================================================
// SIGN-UP WORKFLOW
// ============================================================================

#[test]
fn sign_up_gate_blocks_then_allows() {
    let config = Config::default();
    let ctx = ScreenContext::new(&config);
    let sink = RecordingSink::new();
    let mut screen = SignUpScreen::with_sink(Box::new(sink.clone()));

    type_str(&mut screen, &ctx, "Pearl");
    tab(&mut screen, &ctx);
    type_str(&mut screen, &ctx, "pearl@reef.example");
    tab(&mut screen, &ctx);
    type_str(&mut screen, &ctx, "hunter2");
    tab(&mut screen, &ctx);
    type_str(&mut screen, &ctx, "hunter3");
    // Submit before agreeing: blocked, nothing reaches the sink.
    let action = enter(&mut screen, &ctx);
    assert_eq!(action, ScreenAction::None);
    assert!(sink.sign_ups().is_empty());
    assert!(screen.form().show_agreement_error());

    // Agree and resubmit.
    tab(&mut screen, &ctx);
    tab(&mut screen, &ctx);
    screen.handle_event(key(KeyCode::Char(' ')), &ctx).unwrap();
    assert!(!screen.form().show_agreement_error());
    enter(&mut screen, &ctx);

    // The payload carries the secret as typed; the mismatched
    // confirmation value has nowhere to go in the submission type.
    assert_eq!(
        sink.sign_ups(),
        vec![SignUpSubmission {
            display_name: "Pearl".to_string(),
            identifier: "pearl@reef.example".to_string(),
            secret: "hunter2".to_string(),
            marketing_opt_in: false,
            agreed_to_terms: true,
        }]
    );
}

// ============================================================================
// NAVIGATION ROUND TRIP
// ============================================================================

#[test]
fn round_trip_resets_both_screens() {
    let config = Config::default();
    let ctx = ScreenContext::new(&config);
    let mut sign_in = SignInScreen::new();
    let mut sign_up = SignUpScreen::new();

    // Type on sign-in, then follow the link (the app loop would switch
    // screens and call on_enter on the destination).
    type_str(&mut sign_in, &ctx, "pearl@reef.example");
    tab(&mut sign_in, &ctx);
    tab(&mut sign_in, &ctx);
    tab(&mut sign_in, &ctx);
    assert_eq!(
        enter(&mut sign_in, &ctx),
        ScreenAction::Navigate(ScreenId::SignUp)
    );
    sign_up.on_enter(&ctx).unwrap();

    // Type on sign-up, then go back.
    type_str(&mut sign_up, &ctx, "Pearl");
    for _ in 0..7 {
        tab(&mut sign_up, &ctx);
    }
    assert_eq!(
        enter(&mut sign_up, &ctx),
        ScreenAction::Navigate(ScreenId::SignIn)
    );
    sign_in.on_enter(&ctx).unwrap();

    // Nothing typed earlier survives re-entry on either screen.
    assert_eq!(sign_in.form().identifier(), "");
    sign_up.on_enter(&ctx).unwrap();
    assert_eq!(sign_up.form().display_name(), "");
}

// ============================================================================
// KEYMAP VARIATIONS
// ============================================================================

#[test]
fn custom_override_submits_while_editing() {
    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+s", Action::Confirm));
    let ctx = ScreenContext::new(&config);
    let sink = RecordingSink::new();
    let mut screen = SignInScreen::with_sink(Box::new(sink.clone()));

    type_str(&mut screen, &ctx, "pearl@reef.example");
    screen
        .handle_event(key_with(KeyCode::Char('s'), KeyModifiers::CONTROL), &ctx)
        .unwrap();

    let sign_ins = sink.sign_ins();
    assert_eq!(sign_ins.len(), 1);
    assert_eq!(sign_ins[0].identifier, "pearl@reef.example");
}

#[test]
fn vim_letters_type_in_fields_but_move_focus_outside_them() {
    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    let ctx = ScreenContext::new(&config);
    let mut screen = SignInScreen::new();

    // Inside a field the letters are text.
    type_str(&mut screen, &ctx, "hover");
    assert_eq!(screen.form().identifier(), "hover");

    // On the button row, `j` is MoveDown and walks to the link.
    tab(&mut screen, &ctx);
    tab(&mut screen, &ctx);
    screen.handle_event(key(KeyCode::Char('j')), &ctx).unwrap();
    let action = enter(&mut screen, &ctx);
    assert_eq!(action, ScreenAction::Navigate(ScreenId::SignUp));
}

#[test]
fn emacs_bindings_edit_inside_fields() {
    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Emacs;
    let ctx = ScreenContext::new(&config);
    let mut screen = SignInScreen::new();

    type_str(&mut screen, &ctx, "reef");
    // Ctrl+A jumps to the start of the line, like in a shell.
    screen
        .handle_event(key_with(KeyCode::Char('a'), KeyModifiers::CONTROL), &ctx)
        .unwrap();
    type_str(&mut screen, &ctx, "p");

    assert_eq!(screen.form().identifier(), "preef");
}
