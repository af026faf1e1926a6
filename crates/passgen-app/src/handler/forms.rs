//! Save, list and settings form handlers

use passgen_core::{CredentialRecord, GenerationSettings, InputValidationError, DEFAULT_LENGTH};
use tracing::{debug, warn};

use crate::input_key::InputKey;
use crate::message::CopyPurpose;
use crate::state::{AppState, SettingsFormState, StatusKind, View};

use super::update::notify;
use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────────────
// Save
// ─────────────────────────────────────────────────────────────────

/// Two fields, so next and previous are the same move
pub fn handle_save_focus(state: &mut AppState) -> UpdateResult {
    state.save_form.focus = state.save_form.focus.next();
    UpdateResult::none()
}

pub fn handle_save_submit(state: &mut AppState) -> UpdateResult {
    let site = state.save_form.site.value().trim();
    if site.is_empty() {
        let err = InputValidationError::EmptyField { field: "site name" };
        return notify(state, err.to_string(), StatusKind::Warning);
    }

    let record = CredentialRecord::new(
        site,
        state.save_form.username.value().trim(),
        state.password.clone(),
    );
    UpdateResult::action(UpdateAction::AppendRecord(record))
}

pub fn handle_save_cancel(state: &mut AppState) -> UpdateResult {
    state.save_form.reset();
    state.view = View::Main;
    notify(state, "Cancelled", StatusKind::Info)
}

// ─────────────────────────────────────────────────────────────────
// List
// ─────────────────────────────────────────────────────────────────

pub fn handle_list_up(state: &mut AppState) -> UpdateResult {
    state.list.cursor = state.list.cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_list_down(state: &mut AppState) -> UpdateResult {
    let count = state.list.filtered_count();
    if count > 0 {
        state.list.cursor = (state.list.cursor + 1).min(count - 1);
    }
    UpdateResult::none()
}

pub fn handle_list_copy(state: &mut AppState) -> UpdateResult {
    match state.list.selected() {
        Some(record) => UpdateResult::action(UpdateAction::CopyToClipboard {
            text: record.secret.clone(),
            purpose: CopyPurpose::Secret,
        }),
        None => UpdateResult::none(),
    }
}

pub fn handle_list_close(state: &mut AppState) -> UpdateResult {
    state.list.reset();
    state.view = View::Welcome;
    notify(state, "Back", StatusKind::Info)
}

// ─────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────

pub fn handle_settings_up(state: &mut AppState) -> UpdateResult {
    state.settings_form.cursor = state.settings_form.cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_settings_down(state: &mut AppState) -> UpdateResult {
    state.settings_form.cursor =
        (state.settings_form.cursor + 1).min(SettingsFormState::ROWS - 1);
    UpdateResult::none()
}

pub fn handle_settings_toggle(state: &mut AppState) -> UpdateResult {
    if let Some(class) = state.settings_form.selected_class() {
        state.settings_form.draft.toggle(class);
    }
    UpdateResult::none()
}

/// Commit the draft; an invalid length falls back to the default
pub fn handle_settings_submit(state: &mut AppState) -> UpdateResult {
    let mut draft = state.settings_form.draft;
    let parsed = parse_length(state.settings_form.length.value());

    state.view = View::Welcome;
    match parsed {
        Ok(length) => {
            draft.length = length;
            state.generation = draft;
            debug!("Settings committed: length {}", length);
            notify(state, "Settings saved", StatusKind::Success)
        }
        Err(err) => {
            warn!("Rejected length input: {}", err);
            draft.length = DEFAULT_LENGTH;
            state.generation = draft;
            notify(
                state,
                format!("{err}. Using default: {DEFAULT_LENGTH}"),
                StatusKind::Warning,
            )
        }
    }
}

pub fn handle_settings_cancel(state: &mut AppState) -> UpdateResult {
    state.view = View::Welcome;
    notify(state, "Cancelled", StatusKind::Info)
}

/// Parse the settings-form length text
pub fn parse_length(input: &str) -> Result<usize, InputValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputValidationError::EmptyField { field: "length" });
    }

    let length: i64 = trimmed
        .parse()
        .map_err(|_| InputValidationError::UnparsableLength {
            input: trimmed.to_string(),
        })?;

    match usize::try_from(length) {
        Ok(len) if GenerationSettings::length_in_range(len) => Ok(len),
        _ => Err(InputValidationError::OutOfRangeLength { length }),
    }
}

// ─────────────────────────────────────────────────────────────────
// Text input
// ─────────────────────────────────────────────────────────────────

/// Route an editing key to the input owned by the active view
pub fn handle_text_input(state: &mut AppState, key: InputKey) -> UpdateResult {
    match state.view {
        View::Save => {
            state.save_form.focused_mut().handle_key(&key);
        }
        View::List => {
            if state.list.filter.handle_key(&key) {
                state.list.cursor = 0;
            }
        }
        View::Settings => {
            state.settings_form.length.handle_key(&key);
        }
        View::Welcome | View::Main | View::ConfirmQuit => {}
    }
    UpdateResult::none()
}

