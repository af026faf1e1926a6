//! Append-only CSV credential store
//!
//! File format: one `site,username,secret` row per line, no header, standard
//! CSV quoting. Rows written by older versions may have fewer than three
//! fields; they are padded on load.
//!
//! Quoting is checked strictly on load; a stray or unterminated quote is a
//! parse error rather than a merged record.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::record::CredentialRecord;

/// Conventional backing file name, relative to the working directory
pub const DEFAULT_STORE_FILENAME: &str = "passwords.csv";

/// Flat-file credential store
///
/// Single-writer: concurrent appends from other processes are not
/// synchronized against.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILENAME)
    }
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a single row, flushing before returning
    pub fn append(&self, record: &CredentialRecord) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| StoreError::OpenFailure {
                path: self.path.clone(),
                source,
            })?;

        // A hand-edited file may lack a final newline; keep rows separate
        if !ends_with_newline(&mut file).map_err(|e| self.write_failure(e))? {
            file.write_all(b"\n").map_err(|e| self.write_failure(e))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);
        writer
            .write_record([&record.site, &record.username, &record.secret])
            .map_err(|e| self.write_failure(e))?;
        writer.flush().map_err(|e| self.write_failure(e))?;

        debug!(
            "Appended record for site '{}' to {}",
            record.site,
            self.path.display()
        );
        Ok(())
    }

    /// Read every record in file order
    ///
    /// A missing file is an empty store, not an error.
    pub fn load_all(&self) -> Result<Vec<CredentialRecord>, StoreError> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No store at {}, treating as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::OpenFailure {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        // The csv reader accepts stray quotes; reject them before it merges rows
        check_quoting(&data).map_err(|e| StoreError::ParseError {
            path: self.path.clone(),
            line: Some(e.line),
            message: e.message.to_string(),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| self.parse_error(e))?;
            if row.len() > 3 {
                warn!(
                    "Row {} has {} fields, ignoring extras",
                    row.position().map(|p| p.line()).unwrap_or_default(),
                    row.len()
                );
            }
            records.push(CredentialRecord::from_fields(row.iter()));
        }

        debug!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn write_failure(&self, err: impl std::fmt::Display) -> StoreError {
        StoreError::WriteFailure {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }

    fn parse_error(&self, err: csv::Error) -> StoreError {
        let line = err.position().map(|p| p.line());
        StoreError::ParseError {
            path: self.path.clone(),
            line,
            message: err.to_string(),
        }
    }
}

/// A quoting violation found by [`check_quoting`]
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuoteError {
    line: u64,
    message: &'static str,
}

#[derive(Clone, Copy)]
enum Scan {
    FieldStart,
    Unquoted,
    Quoted,
    /// A `"` inside a quoted field: either an escape or the closing quote
    QuoteInQuoted,
}

/// Validate RFC 4180 quote structure
///
/// A quote may only open a field, an embedded quote must be doubled, and a
/// closing quote must be followed by a delimiter, a line end or EOF.
fn check_quoting(data: &[u8]) -> Result<(), QuoteError> {
    let mut state = Scan::FieldStart;
    let mut line = 1u64;
    let mut quote_line = 1u64;

    for &byte in data {
        state = match (state, byte) {
            (Scan::Quoted, b'"') => Scan::QuoteInQuoted,
            (Scan::Quoted, _) => Scan::Quoted,
            (Scan::QuoteInQuoted, b'"') => Scan::Quoted,
            (Scan::FieldStart, b'"') => {
                quote_line = line;
                Scan::Quoted
            }
            (Scan::Unquoted, b'"') => {
                return Err(QuoteError {
                    line,
                    message: "bare quote in unquoted field",
                })
            }
            (_, b',' | b'\n' | b'\r') => Scan::FieldStart,
            (Scan::QuoteInQuoted, _) => {
                return Err(QuoteError {
                    line,
                    message: "unexpected text after closing quote",
                })
            }
            (Scan::FieldStart | Scan::Unquoted, _) => Scan::Unquoted,
        };
        if byte == b'\n' {
            line += 1;
        }
    }

    if matches!(state, Scan::Quoted) {
        return Err(QuoteError {
            line: quote_line,
            message: "unterminated quoted field",
        });
    }
    Ok(())
}

/// True for an empty file or one whose last byte is `\n`
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
