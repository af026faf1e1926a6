//! Main update function - handles state transitions (TEA pattern)
//!
//! Form handlers live in `forms`; this module dispatches every message and
//! owns the welcome/main transitions plus action-result handling.

use passgen_core::generate;
use tracing::{debug, warn};

use crate::message::{CopyPurpose, Message};
use crate::state::{AppState, MenuItem, StatusKind, View};

use super::{forms, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Quit
        // ─────────────────────────────────────────────────────────
        Message::Quit | Message::ConfirmQuit => {
            state.quit();
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.view = View::ConfirmQuit;
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.view = View::Welcome;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Welcome / Main
        // ─────────────────────────────────────────────────────────
        Message::MenuUp => {
            state.menu_cursor = state.menu_cursor.saturating_sub(1);
            UpdateResult::none()
        }

        Message::MenuDown => {
            state.menu_cursor = (state.menu_cursor + 1).min(MenuItem::ALL.len() - 1);
            UpdateResult::none()
        }

        Message::MenuSelect => match MenuItem::from_index(state.menu_cursor) {
            Some(MenuItem::Generate) => UpdateResult::message(Message::GeneratePassword),
            Some(MenuItem::ViewSaved) => UpdateResult::message(Message::ShowList),
            Some(MenuItem::Settings) => UpdateResult::message(Message::ShowSettings),
            Some(MenuItem::Quit) => UpdateResult::message(Message::RequestQuit),
            None => UpdateResult::none(),
        },

        Message::GeneratePassword => regenerate(state, "Generated", Some(View::Main)),

        Message::RefreshPassword => regenerate(state, "Refreshed", None),

        Message::StartSave => {
            if !state.has_password() {
                return UpdateResult::none();
            }
            state.save_form.reset();
            state.view = View::Save;
            UpdateResult::none()
        }

        Message::CopyPassword => {
            if !state.has_password() {
                return UpdateResult::none();
            }
            UpdateResult::action(UpdateAction::CopyToClipboard {
                text: state.password.clone(),
                purpose: CopyPurpose::Password,
            })
        }

        Message::ShowList => {
            state.list.reset();
            state.view = View::List;
            UpdateResult::action(UpdateAction::LoadRecords)
        }

        Message::ShowSettings => {
            let current = state.generation;
            state.settings_form.seed(&current);
            state.view = View::Settings;
            UpdateResult::none()
        }

        Message::ShowWelcome => {
            state.view = View::Welcome;
            notify(state, "Back", StatusKind::Info)
        }

        // ─────────────────────────────────────────────────────────
        // Forms
        // ─────────────────────────────────────────────────────────
        Message::SaveFocusNext | Message::SaveFocusPrev => forms::handle_save_focus(state),
        Message::SaveSubmit => forms::handle_save_submit(state),
        Message::SaveCancel => forms::handle_save_cancel(state),

        Message::ListUp => forms::handle_list_up(state),
        Message::ListDown => forms::handle_list_down(state),
        Message::ListCopySelected => forms::handle_list_copy(state),
        Message::ListClose => forms::handle_list_close(state),

        Message::SettingsUp => forms::handle_settings_up(state),
        Message::SettingsDown => forms::handle_settings_down(state),
        Message::SettingsToggle => forms::handle_settings_toggle(state),
        Message::SettingsSubmit => forms::handle_settings_submit(state),
        Message::SettingsCancel => forms::handle_settings_cancel(state),

        Message::TextInput(key) => forms::handle_text_input(state, key),

        // ─────────────────────────────────────────────────────────
        // Action results
        // ─────────────────────────────────────────────────────────
        Message::RecordSaved { record } => {
            debug!("Saved credential for site {}", record.site);
            state.save_form.reset();
            state.view = View::Main;
            UpdateResult::action(UpdateAction::CopyToClipboard {
                text: record.secret,
                purpose: CopyPurpose::AfterSave,
            })
        }

        Message::RecordSaveFailed { error } => {
            warn!("Save failed: {}", error);
            notify(state, format!("Save failed: {error}"), StatusKind::Error)
        }

        Message::RecordsLoaded { records } => {
            debug!("Loaded {} credential records", records.len());
            state.list.records = records;
            state.list.cursor = 0;
            UpdateResult::none()
        }

        Message::RecordsLoadFailed { error } => {
            warn!("Failed to load credentials: {}", error);
            state.list.records.clear();
            state.list.cursor = 0;
            notify(
                state,
                format!("Error loading passwords: {error}"),
                StatusKind::Warning,
            )
        }

        Message::ClipboardWritten { purpose } => match purpose {
            CopyPurpose::AfterSave => notify(state, "Saved & copied", StatusKind::Success),
            CopyPurpose::Password | CopyPurpose::Secret => {
                notify(state, "Copied", StatusKind::Success)
            }
        },

        Message::ClipboardFailed { purpose, error } => {
            warn!("Clipboard write failed: {}", error);
            match purpose {
                CopyPurpose::AfterSave => {
                    notify(state, "Saved (no clipboard)", StatusKind::Warning)
                }
                CopyPurpose::Password | CopyPurpose::Secret => {
                    notify(state, "Copy failed", StatusKind::Error)
                }
            }
        }

        Message::StatusTimerFired { fired_at } => {
            state.clear_expired_status(fired_at);
            UpdateResult::none()
        }
    }
}

/// Set the status message and schedule its one-shot clear
pub(super) fn notify(
    state: &mut AppState,
    text: impl Into<String>,
    kind: StatusKind,
) -> UpdateResult {
    state.set_status(text, kind);
    UpdateResult::action(UpdateAction::ScheduleStatusClear {
        delay: state.status_ttl,
    })
}

/// Generate with the committed settings
///
/// On success the password is replaced and the view optionally changes. On
/// failure the password is cleared and the view is left alone.
fn regenerate(state: &mut AppState, success: &str, next_view: Option<View>) -> UpdateResult {
    match generate(&state.generation) {
        Ok(password) => {
            state.password = password;
            if let Some(view) = next_view {
                state.view = view;
            }
            notify(state, success, StatusKind::Success)
        }
        Err(e) => {
            warn!("Password generation failed: {}", e);
            state.password.clear();
            notify(state, format!("Error: {e}"), StatusKind::Error)
        }
    }
}
