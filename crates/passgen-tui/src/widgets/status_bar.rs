//! Single-line status message

use passgen_app::StatusMessage;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

pub struct StatusBar<'a> {
    status: Option<&'a StatusMessage>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self { status, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(status) = self.status else {
            return;
        };
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(status.text.as_str(), self.theme.status(status.kind)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use passgen_app::StatusKind;
    use std::time::Instant;

    #[test]
    fn test_renders_status_text() {
        let theme = Theme::default();
        let status = StatusMessage {
            text: "Saved & copied".into(),
            kind: StatusKind::Success,
            expires_at: Instant::now(),
        };
        let mut term = TestTerminal::with_size(40, 1);

        term.render_widget(StatusBar::new(Some(&status), &theme), term.area());

        assert!(term.buffer_contains("Saved & copied"));
    }

    #[test]
    fn test_empty_without_status() {
        let theme = Theme::default();
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(StatusBar::new(None, &theme), term.area());
        assert_eq!(term.content().trim(), "");
    }
}
