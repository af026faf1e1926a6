//! Action handlers: UpdateAction dispatch
//!
//! Store and clipboard effects run inline and report back as a follow-up
//! message. Status-clear timers are spawned and post to the message channel.

use std::time::Instant;

use passgen_core::CredentialStore;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::message::Message;
use crate::UpdateAction;

/// External collaborators reached by actions
pub struct Services {
    pub store: CredentialStore,
    pub clipboard: Box<dyn Clipboard>,
}

impl Services {
    pub fn new(store: CredentialStore, clipboard: Box<dyn Clipboard>) -> Self {
        Self { store, clipboard }
    }

    /// Services backed by the given store file and the system clipboard
    pub fn system(store: CredentialStore) -> Self {
        Self::new(store, Box::new(SystemClipboard::new()))
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

/// Execute an action, returning the message that reports its outcome
pub fn handle_action(
    action: UpdateAction,
    services: &mut Services,
    msg_tx: &mpsc::Sender<Message>,
) -> Option<Message> {
    match action {
        UpdateAction::AppendRecord(record) => match services.store.append(&record) {
            Ok(()) => Some(Message::RecordSaved { record }),
            Err(e) => Some(Message::RecordSaveFailed {
                error: e.to_string(),
            }),
        },

        UpdateAction::LoadRecords => match services.store.load_all() {
            Ok(records) => Some(Message::RecordsLoaded { records }),
            Err(e) => Some(Message::RecordsLoadFailed {
                error: e.to_string(),
            }),
        },

        UpdateAction::CopyToClipboard { text, purpose } => {
            match services.clipboard.write_all(&text) {
                Ok(()) => {
                    debug!("Copied {} chars to clipboard", text.chars().count());
                    Some(Message::ClipboardWritten { purpose })
                }
                Err(e) => Some(Message::ClipboardFailed {
                    purpose,
                    error: e.to_string(),
                }),
            }
        }

        UpdateAction::ScheduleStatusClear { delay } => {
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let fired_at = Instant::now();
                if tx.send(Message::StatusTimerFired { fired_at }).await.is_err() {
                    trace!("Status timer fired after event loop shut down");
                }
            });
            None
        }
    }
}
