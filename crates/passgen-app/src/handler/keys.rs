//! Key event handlers for each view

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, View};

/// Convert key events to messages based on the current view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from any view
    if key.is_interrupt() {
        return Some(Message::Quit);
    }

    match state.view {
        View::Welcome => handle_key_welcome(key),
        View::Main => handle_key_main(state, key),
        View::Save => handle_key_save(key),
        View::List => handle_key_list(key),
        View::Settings => handle_key_settings(key),
        View::ConfirmQuit => handle_key_confirm_quit(key),
    }
}

fn handle_key_welcome(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::MenuUp),
        InputKey::Down => Some(Message::MenuDown),
        InputKey::Enter => Some(Message::MenuSelect),

        // Numbered and lettered shortcuts for the four entries
        InputKey::Char('1' | 'g') => Some(Message::GeneratePassword),
        InputKey::Char('2' | 'l') => Some(Message::ShowList),
        InputKey::Char('3' | 's') => Some(Message::ShowSettings),
        InputKey::Char('4' | 'q') => Some(Message::RequestQuit),
        _ => None,
    }
}

fn handle_key_main(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') => Some(Message::RefreshPassword),
        InputKey::Char('s' | '3') if state.has_password() => Some(Message::StartSave),
        InputKey::Char('c') if state.has_password() => Some(Message::CopyPassword),
        InputKey::Char('l' | '2') => Some(Message::ShowList),
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Esc => Some(Message::ShowWelcome),
        _ => None,
    }
}

fn handle_key_save(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SaveSubmit),
        InputKey::Esc => Some(Message::SaveCancel),
        InputKey::Tab | InputKey::Down => Some(Message::SaveFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::SaveFocusPrev),
        other => Some(Message::TextInput(other)),
    }
}

fn handle_key_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::ListUp),
        InputKey::Down => Some(Message::ListDown),
        InputKey::Enter => Some(Message::ListCopySelected),
        InputKey::Esc => Some(Message::ListClose),
        other => Some(Message::TextInput(other)),
    }
}

fn handle_key_settings(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::SettingsUp),
        InputKey::Down => Some(Message::SettingsDown),
        InputKey::Char(' ') => Some(Message::SettingsToggle),
        InputKey::Enter => Some(Message::SettingsSubmit),
        InputKey::Esc => Some(Message::SettingsCancel),
        other => Some(Message::TextInput(other)),
    }
}

fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        _ => None,
    }
}
