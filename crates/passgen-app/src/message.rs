//! Message types for the application (TEA pattern)

use std::time::Instant;

use passgen_core::CredentialRecord;

use crate::input_key::InputKey;

/// What a clipboard write was requested for; selects the resulting status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPurpose {
    /// `c` on the main view
    Password,
    /// Copy that follows a successful save
    AfterSave,
    /// Enter on a row of the saved-password list
    Secret,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────
    /// Quit immediately (Ctrl+C)
    Quit,
    /// Open the quit confirmation
    RequestQuit,
    ConfirmQuit,
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Welcome / Main
    // ─────────────────────────────────────────────────────────
    MenuUp,
    MenuDown,
    MenuSelect,
    /// Generate from the welcome view and enter the main view
    GeneratePassword,
    /// Regenerate while on the main view
    RefreshPassword,
    StartSave,
    CopyPassword,
    ShowList,
    ShowSettings,
    ShowWelcome,

    // ─────────────────────────────────────────────────────────
    // Save form
    // ─────────────────────────────────────────────────────────
    SaveFocusNext,
    SaveFocusPrev,
    SaveSubmit,
    SaveCancel,

    // ─────────────────────────────────────────────────────────
    // Record list
    // ─────────────────────────────────────────────────────────
    ListUp,
    ListDown,
    ListCopySelected,
    ListClose,

    // ─────────────────────────────────────────────────────────
    // Settings form
    // ─────────────────────────────────────────────────────────
    SettingsUp,
    SettingsDown,
    SettingsToggle,
    SettingsSubmit,
    SettingsCancel,

    /// Editing key for the active text input
    TextInput(InputKey),

    // ─────────────────────────────────────────────────────────
    // Action results
    // ─────────────────────────────────────────────────────────
    RecordSaved {
        record: CredentialRecord,
    },
    RecordSaveFailed {
        error: String,
    },
    RecordsLoaded {
        records: Vec<CredentialRecord>,
    },
    RecordsLoadFailed {
        error: String,
    },
    ClipboardWritten {
        purpose: CopyPurpose,
    },
    ClipboardFailed {
        purpose: CopyPurpose,
        error: String,
    },

    /// One-shot status clear timer
    StatusTimerFired {
        fired_at: Instant,
    },
}
