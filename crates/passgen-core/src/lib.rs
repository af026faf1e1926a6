//! # passgen-core - Core Domain Types
//!
//! Foundation crate for passgen. Provides the error taxonomy, logging setup,
//! the password generator, and the CSV-backed credential store.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing, rand, csv, dirs).
//!
//! ## Public API
//!
//! ### Password Generation (`generator`)
//! - [`GenerationSettings`] - Length plus the four character-class flags
//! - [`CharClass`] - Lowercase, Uppercase, Digits, Symbols
//! - [`generate()`] - Draw a uniformly random password from the OS CSPRNG
//!
//! ### Records (`record`)
//! - [`CredentialRecord`] - A stored `(site, username, secret)` triple
//! - [`filter_records()`] - Case-insensitive substring filter on site/username
//!
//! ### Storage (`store`)
//! - [`CredentialStore`] - Append-only CSV file with full-scan load
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Session-ending errors (terminal setup and I/O), plus [`ResultExt::context`]
//! - [`GenerationError`], [`StoreError`], [`ClipboardError`], [`InputValidationError`]
//!
//! ## Prelude
//!
//! ```rust
//! use passgen_core::prelude::*;
//! ```

pub mod error;
pub mod generator;
pub mod logging;
pub mod record;
pub mod store;

/// Prelude for common imports used throughout all passgen crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{
    ClipboardError, Error, GenerationError, InputValidationError, Result, ResultExt, StoreError,
};
pub use generator::{
    generate, generate_with, CharClass, GenerationSettings, DEFAULT_LENGTH, DIGITS, LOWERCASE,
    MAX_LENGTH, MIN_LENGTH, SYMBOLS, UPPERCASE,
};
pub use record::{filter_records, CredentialRecord};
pub use store::{CredentialStore, DEFAULT_STORE_FILENAME};
