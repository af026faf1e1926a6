//! passgen-app - Session state and orchestration for passgen
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! interactive session: view state, key mapping, the update function, action
//! execution against the credential store and clipboard, and configuration
//! loading. It has no terminal dependency; the TUI crate feeds it
//! [`InputKey`]s and renders [`AppState`].

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;
pub mod text_input;

// Re-export primary types
pub use actions::Services;
pub use clipboard::{Clipboard, SystemClipboard};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{CopyPurpose, Message};
pub use process::process_message;
pub use state::{AppState, MenuItem, SaveField, StatusKind, StatusMessage, View};
pub use text_input::TextInput;
