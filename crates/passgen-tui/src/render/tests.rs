//! Full-screen rendering tests

use super::*;
use crate::test_utils::TestTerminal;
use passgen_app::handler::update;
use passgen_app::message::Message;
use passgen_app::StatusKind;
use passgen_core::CredentialRecord;

fn render(state: &AppState) -> TestTerminal {
    let theme = Theme::default();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state, &theme));
    term
}

#[test]
fn test_welcome_screen() {
    let state = AppState::new();
    let term = render(&state);

    assert!(term.line_contains(0, "passgen"));
    assert!(term.buffer_contains("Generate password"));
    assert!(term.buffer_contains("enter select"));
}

#[test]
fn test_main_screen_shows_password_and_status() {
    let mut state = AppState::new();
    update(&mut state, Message::GeneratePassword);
    let term = render(&state);

    assert!(term.buffer_contains(&state.password));
    assert!(term.buffer_contains("Generated"));
    assert!(term.buffer_contains("r refresh"));
}

#[test]
fn test_status_on_second_to_last_line() {
    let mut state = AppState::new();
    state.set_status("Settings saved", StatusKind::Success);
    let term = render(&state);

    assert!(term.line_contains(22, "Settings saved"));
}

#[test]
fn test_save_screen() {
    let mut state = AppState::new();
    update(&mut state, Message::GeneratePassword);
    update(&mut state, Message::StartSave);
    let term = render(&state);

    assert!(term.buffer_contains("Save password"));
    assert!(term.buffer_contains("Site"));
    assert!(term.buffer_contains("tab switch field"));
}

#[test]
fn test_list_screen_masks_secrets() {
    let mut state = AppState::new();
    update(&mut state, Message::ShowList);
    update(
        &mut state,
        Message::RecordsLoaded {
            records: vec![CredentialRecord::new("a.com", "u1", "hunter22")],
        },
    );
    let term = render(&state);

    assert!(term.buffer_contains("a.com"));
    assert!(!term.buffer_contains("hunter22"));
}

#[test]
fn test_settings_screen() {
    let mut state = AppState::new();
    update(&mut state, Message::ShowSettings);
    let term = render(&state);

    assert!(term.buffer_contains("Character classes"));
    assert!(term.buffer_contains("16"));
    assert!(term.buffer_contains("space toggle"));
}

#[test]
fn test_confirm_quit_overlays_menu() {
    let mut state = AppState::new();
    update(&mut state, Message::RequestQuit);
    let term = render(&state);

    assert!(term.buffer_contains("Are you sure you want to quit?"));
    assert!(term.buffer_contains("n stay"));
}
