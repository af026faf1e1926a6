//! Clipboard seam
//!
//! Writes are synchronous and best-effort; failures are reported to the
//! state machine as status messages and never abort the triggering action.

use passgen_core::ClipboardError;
use tracing::debug;

/// Write-only clipboard collaborator
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    fn write_all(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`
///
/// The handle is opened lazily on first write and kept alive afterwards: on
/// X11 the copied text is only served while the owning handle exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            debug!("Opened system clipboard");
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not initialized".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write_all(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self
            .handle()?
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()));
        if result.is_err() {
            // Drop a broken handle so the next write reconnects
            self.inner = None;
        }
        result
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}
