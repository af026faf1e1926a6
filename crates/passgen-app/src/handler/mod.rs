//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each view
//! - `forms`: Save, list and settings form handlers

pub(crate) mod forms;
pub(crate) mod keys;
pub(crate) mod update;


use std::time::Duration;

use passgen_core::CredentialRecord;

use crate::message::{CopyPurpose, Message};

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Append one record to the credential store
    AppendRecord(CredentialRecord),

    /// Reload every record from the credential store
    LoadRecords,

    /// Write text to the system clipboard
    CopyToClipboard { text: String, purpose: CopyPurpose },

    /// Post `StatusTimerFired` after `delay`
    ScheduleStatusClear { delay: Duration },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
