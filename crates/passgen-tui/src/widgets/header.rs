//! Title line and key-hint footer

use passgen_app::View;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// Application title plus the name of the current view
pub struct Header<'a> {
    view: View,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(view: View, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

pub(crate) fn view_title(view: View) -> &'static str {
    match view {
        View::Welcome => "Welcome",
        View::Main => "Password",
        View::Save => "Save password",
        View::List => "Saved passwords",
        View::Settings => "Settings",
        View::ConfirmQuit => "Quit",
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(" passgen ", self.theme.title),
            Span::styled("· ", self.theme.muted),
            Span::styled(view_title(self.view), self.theme.accent),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

/// Keybinding reference for the current view
pub struct KeyHints<'a> {
    view: View,
    has_password: bool,
    theme: &'a Theme,
}

impl<'a> KeyHints<'a> {
    pub fn new(view: View, theme: &'a Theme) -> Self {
        Self {
            view,
            has_password: false,
            theme,
        }
    }

    pub fn has_password(mut self, has_password: bool) -> Self {
        self.has_password = has_password;
        self
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.view {
            View::Welcome => vec![("↑/↓", "move"), ("enter", "select"), ("q", "quit")],
            View::Main if self.has_password => vec![
                ("r", "refresh"),
                ("c", "copy"),
                ("s", "save"),
                ("l", "list"),
                ("esc", "back"),
                ("q", "quit"),
            ],
            View::Main => vec![("r", "generate"), ("l", "list"), ("esc", "back")],
            View::Save => vec![("tab", "switch field"), ("enter", "save"), ("esc", "cancel")],
            View::List => vec![("↑/↓", "move"), ("enter", "copy"), ("esc", "back")],
            View::Settings => vec![
                ("↑/↓", "move"),
                ("space", "toggle"),
                ("enter", "save"),
                ("esc", "cancel"),
            ],
            View::ConfirmQuit => vec![("y", "quit"), ("n", "stay")],
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", self.theme.muted));
            }
            spans.push(Span::styled(key, self.theme.key_hint));
            spans.push(Span::styled(format!(" {action}"), self.theme.muted));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
