//! End-to-end session tests driving the state machine with real storage
//!
//! Keys go through `process_message` exactly as the TUI loop delivers them;
//! only the clipboard is replaced.

use std::cell::RefCell;
use std::rc::Rc;

use passgen_app::{process_message, AppState, Clipboard, InputKey, Message, Services, View};
use passgen_core::{ClipboardError, CredentialRecord, CredentialStore};
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Clipboard that records every write
#[derive(Clone, Default)]
struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn write_all(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".into()));
        }
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

struct Session {
    state: AppState,
    services: Services,
    tx: mpsc::Sender<Message>,
    _rx: mpsc::Receiver<Message>,
}

impl Session {
    fn new(store: CredentialStore, clipboard: RecordingClipboard) -> Self {
        let (tx, rx) = mpsc::channel(64);
        Self {
            state: AppState::new(),
            services: Services::new(store, Box::new(clipboard)),
            tx,
            _rx: rx,
        }
    }

    fn keys(&mut self, keys: impl IntoIterator<Item = InputKey>) {
        for key in keys {
            process_message(&mut self.state, Message::Key(key), &mut self.services, &self.tx);
        }
    }

    fn type_text(&mut self, text: &str) {
        self.keys(text.chars().map(InputKey::Char));
    }
}

#[tokio::test]
async fn test_generated_password_is_saved_and_listed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("passwords.csv");
    let clipboard = RecordingClipboard::default();
    let writes = clipboard.writes.clone();
    let mut session = Session::new(CredentialStore::new(&path), clipboard);

    // Settings: length 20, then generate from the menu
    session.keys([InputKey::Char('s'), InputKey::End, InputKey::CharCtrl('u')]);
    session.type_text("20");
    session.keys([InputKey::Enter, InputKey::Char('g')]);
    assert_eq!(session.state.view, View::Main);
    let password = session.state.password.clone();
    assert_eq!(password.chars().count(), 20);

    // Save as example.com / alice
    session.keys([InputKey::Char('s')]);
    session.type_text("example.com");
    session.keys([InputKey::Tab]);
    session.type_text("alice");
    session.keys([InputKey::Enter]);

    assert_eq!(session.state.view, View::Main);
    assert_eq!(session.state.status_text(), Some("Saved & copied"));
    assert_eq!(writes.borrow().as_slice(), [password.clone()]);

    // A fresh store handle sees the record
    let stored = CredentialStore::new(&path).load_all().unwrap();
    assert_eq!(
        stored,
        vec![CredentialRecord::new("example.com", "alice", password.clone())]
    );

    // List it and copy the secret back out
    session.keys([InputKey::Esc, InputKey::Char('l')]);
    assert_eq!(session.state.view, View::List);
    session.type_text("EXAMPLE");
    assert_eq!(session.state.list.filtered_count(), 1);
    session.keys([InputKey::Enter]);
    assert_eq!(session.state.status_text(), Some("Copied"));
    assert_eq!(writes.borrow().len(), 2);
    assert_eq!(writes.borrow()[1], password);
}

#[tokio::test]
async fn test_headless_clipboard_never_blocks_saving() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::new(dir.path().join("passwords.csv"));
    let clipboard = RecordingClipboard {
        fail: true,
        ..Default::default()
    };
    let mut session = Session::new(store, clipboard);

    session.keys([InputKey::Enter, InputKey::Char('s')]);
    session.type_text("site.org");
    session.keys([InputKey::Enter]);

    assert_eq!(session.state.view, View::Main);
    assert_eq!(session.state.status_text(), Some("Saved (no clipboard)"));
    assert_eq!(session.services.store.load_all().unwrap().len(), 1);
}

#[tokio::test]
async fn test_existing_file_without_trailing_newline_accepts_appends() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("passwords.csv");
    std::fs::write(&path, "old.com,bob,pw").unwrap();
    let mut session = Session::new(CredentialStore::new(&path), RecordingClipboard::default());

    session.keys([InputKey::Char('1'), InputKey::Char('3')]);
    session.type_text("new.com");
    session.keys([InputKey::Enter]);

    let stored = CredentialStore::new(&path).load_all().unwrap();
    let sites: Vec<&str> = stored.iter().map(|r| r.site.as_str()).collect();
    assert_eq!(sites, vec!["old.com", "new.com"]);
}

#[tokio::test]
async fn test_quit_confirmation() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::new(dir.path().join("passwords.csv"));
    let mut session = Session::new(store, RecordingClipboard::default());

    session.keys([InputKey::Char('q'), InputKey::Char('n')]);
    assert_eq!(session.state.view, View::Welcome);
    assert!(!session.state.should_quit());

    session.keys([InputKey::Char('q'), InputKey::Char('y')]);
    assert!(session.state.should_quit());
}
