//! Keys the session reacts to.
//!
//! The state machine only ever sees `InputKey`, so whole sessions can be
//! driven in tests without a terminal. The TUI converts crossterm events at
//! its boundary and drops keys with no variant here.
//!
//! Menu shortcuts, `y`/`n` answers and typed text all arrive as [`InputKey::Char`].
//! [`InputKey::CharCtrl`] carries the editing chords (`Ctrl+A/E/U/K/W`) and the
//! global `Ctrl+C` quit.

/// A single key press as seen by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including space
    Char(char),
    /// Character chord with Ctrl held
    CharCtrl(char),

    /// Menu, list and settings cursor; also moves save-form focus
    Up,
    Down,
    /// Text cursor movement
    Left,
    Right,
    Home,
    End,

    /// Select, submit or confirm depending on the view
    Enter,
    /// Back out of the current view
    Esc,
    /// Next save-form field
    Tab,
    /// Previous save-form field (Shift+Tab)
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// True for `Ctrl+C`, which quits from every view
    pub fn is_interrupt(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}
