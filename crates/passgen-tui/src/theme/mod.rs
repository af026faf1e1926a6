//! Centralized theme for the passgen TUI.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - [`Theme`] - The resolved style set, built once at startup and passed to
//!   every widget by reference

pub mod palette;
pub mod styles;

use passgen_app::StatusKind;
use ratatui::style::Style;

/// Read-only style set shared by all widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub text: Style,
    pub muted: Style,
    pub accent: Style,
    pub border: Style,
    pub border_active: Style,
    pub selected: Style,
    pub password: Style,
    pub input: Style,
    pub input_cursor: Style,
    pub key_hint: Style,
    pub status_info: Style,
    pub status_success: Style,
    pub status_warning: Style,
    pub status_error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: styles::title(),
            text: styles::text_primary(),
            muted: styles::text_muted(),
            accent: styles::accent(),
            border: styles::border_inactive(),
            border_active: styles::border_active(),
            selected: styles::selected(),
            password: styles::password(),
            input: styles::text_primary(),
            input_cursor: styles::input_cursor(),
            key_hint: styles::keybinding(),
            status_info: styles::status_blue(),
            status_success: styles::status_green(),
            status_warning: styles::status_yellow(),
            status_error: styles::status_red(),
        }
    }
}

impl Theme {
    pub fn status(&self, kind: StatusKind) -> Style {
        match kind {
            StatusKind::Info => self.status_info,
            StatusKind::Success => self.status_success,
            StatusKind::Warning => self.status_warning,
            StatusKind::Error => self.status_error,
        }
    }

    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.border_active
        } else {
            self.border
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_styles_are_distinct() {
        let theme = Theme::default();
        assert_ne!(
            theme.status(StatusKind::Error),
            theme.status(StatusKind::Success)
        );
        assert_ne!(
            theme.status(StatusKind::Warning),
            theme.status(StatusKind::Info)
        );
    }

    #[test]
    fn test_border_for_focus() {
        let theme = Theme::default();
        assert_eq!(theme.border_for(true), theme.border_active);
        assert_eq!(theme.border_for(false), theme.border);
    }
}
