//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

use crate::generator::{MAX_LENGTH, MIN_LENGTH};

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// ─────────────────────────────────────────────────────────────────
// Domain Errors
// ─────────────────────────────────────────────────────────────────

/// Failure to produce a password from the requested settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("No character classes selected")]
    EmptyAlphabet,

    #[error("Password length {length} is outside {}..={}", MIN_LENGTH, MAX_LENGTH)]
    LengthOutOfRange { length: usize },
}

/// Failure reading or writing the credential file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open {}: {source}", .path.display())]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}{}: {message}", .path.display(), line_suffix(.line))]
    ParseError {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    #[error("Failed to write {}: {message}", .path.display())]
    WriteFailure { path: PathBuf, message: String },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

/// Clipboard could not be reached or refused the write
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// User-supplied form input that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputValidationError {
    #[error("Empty {field}")]
    EmptyField { field: &'static str },

    #[error("Length {length} out of range ({}-{})", MIN_LENGTH, MAX_LENGTH)]
    OutOfRangeLength { length: i64 },

    #[error("Invalid length '{input}'")]
    UnparsableLength { input: String },
}

// ─────────────────────────────────────────────────────────────────
// Application Error
// ─────────────────────────────────────────────────────────────────

/// Errors that end the interactive session
///
/// Domain errors never reach this type; the state machine turns them into
/// status messages.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Log the error with `context` before propagating it
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}
