//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use passgen_core::{filter_records, CharClass, CredentialRecord, GenerationSettings};

use crate::config::Settings;
use crate::text_input::TextInput;

/// Current view/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Start menu
    #[default]
    Welcome,

    /// Shows the generated password with refresh/copy/save shortcuts
    Main,

    /// Site and username form for persisting the current password
    Save,

    /// Filterable list of stored credentials
    List,

    /// Length and character-class form
    Settings,

    /// Quit confirmation
    ConfirmQuit,
}

impl View {
    /// Views whose unbound keys are delegated to a text input
    pub fn has_text_input(&self) -> bool {
        matches!(self, View::Save | View::List | View::Settings)
    }
}

/// Entries of the welcome menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Generate,
    ViewSaved,
    Settings,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Generate,
        MenuItem::ViewSaved,
        MenuItem::Settings,
        MenuItem::Quit,
    ];

    pub fn from_index(index: usize) -> Option<MenuItem> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Generate => "Generate password",
            MenuItem::ViewSaved => "View saved passwords",
            MenuItem::Settings => "Settings",
            MenuItem::Quit => "Quit",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            MenuItem::Generate => 'g',
            MenuItem::ViewSaved => 'l',
            MenuItem::Settings => 's',
            MenuItem::Quit => 'q',
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Status Message
// ─────────────────────────────────────────────────────────────────────────────

/// Display flavor of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-visible message with its own expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-view form state
// ─────────────────────────────────────────────────────────────────────────────

/// Which save-form field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveField {
    #[default]
    Site,
    Username,
}

impl SaveField {
    pub fn next(self) -> Self {
        match self {
            SaveField::Site => SaveField::Username,
            SaveField::Username => SaveField::Site,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SaveFormState {
    pub site: TextInput,
    pub username: TextInput,
    pub focus: SaveField,
}

impl SaveFormState {
    /// Clear both inputs and focus the site field
    pub fn reset(&mut self) {
        self.site.clear();
        self.username.clear();
        self.focus = SaveField::Site;
    }

    pub fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            SaveField::Site => &mut self.site,
            SaveField::Username => &mut self.username,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordListState {
    pub filter: TextInput,
    /// Index into the filtered records
    pub cursor: usize,
    /// Cache of the store, reloaded whenever the list view is entered
    pub records: Vec<CredentialRecord>,
}

impl RecordListState {
    pub fn filter_text(&self) -> &str {
        self.filter.value()
    }

    pub fn filtered(&self) -> Vec<&CredentialRecord> {
        filter_records(&self.records, self.filter.value())
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn selected(&self) -> Option<&CredentialRecord> {
        self.filtered().get(self.cursor).copied()
    }

    /// Clear the filter and move the cursor back to the top
    pub fn reset(&mut self) {
        self.filter.clear();
        self.cursor = 0;
    }
}

/// Settings form; edits a draft that is only committed on submit
#[derive(Debug, Clone, Default)]
pub struct SettingsFormState {
    pub length: TextInput,
    /// Selected class row (0..=3)
    pub cursor: usize,
    pub draft: GenerationSettings,
}

impl SettingsFormState {
    pub const ROWS: usize = CharClass::ALL.len();

    pub fn seed(&mut self, settings: &GenerationSettings) {
        self.length.set_value(settings.length.to_string());
        self.cursor = 0;
        self.draft = *settings;
    }

    pub fn selected_class(&self) -> Option<CharClass> {
        CharClass::from_index(self.cursor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete session state, owned by the event loop
#[derive(Debug, Clone)]
pub struct AppState {
    pub view: View,

    /// Last generated password; empty until the first generation
    pub password: String,

    /// Committed generation settings
    pub generation: GenerationSettings,

    /// Selected welcome menu row
    pub menu_cursor: usize,

    pub save_form: SaveFormState,
    pub list: RecordListState,
    pub settings_form: SettingsFormState,

    pub status: Option<StatusMessage>,
    pub status_ttl: Duration,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            view: View::Welcome,
            password: String::new(),
            generation: settings.generator.to_generation_settings(),
            menu_cursor: 0,
            save_form: SaveFormState::default(),
            list: RecordListState::default(),
            settings_form: SettingsFormState::default(),
            status: None,
            status_ttl: settings.ui.status_ttl(),
            quitting: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn quit(&mut self) {
        self.quitting = true;
    }

    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }

    /// Replace the status message, expiring `status_ttl` from now
    ///
    /// An unrepresentable expiry saturates to `now`; the message then lives
    /// until its timer fires or it is replaced.
    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        let now = Instant::now();
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            expires_at: now.checked_add(self.status_ttl).unwrap_or(now),
        });
    }

    /// Clear the status if `now` is at or past its own expiry
    ///
    /// Returns `true` if a message was cleared. A timer scheduled for an
    /// older message fires before the newer expiry and is a no-op.
    pub fn clear_expired_status(&mut self, now: Instant) -> bool {
        match &self.status {
            Some(status) if now >= status.expires_at => {
                self.status = None;
                true
            }
            _ => false,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }
}
