//! Start menu

use passgen_app::MenuItem;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::Theme;

pub struct WelcomeMenu<'a> {
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> WelcomeMenu<'a> {
    pub fn new(cursor: usize, theme: &'a Theme) -> Self {
        Self { cursor, theme }
    }
}

impl Widget for WelcomeMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(" Menu ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled("Password Generator", self.theme.title)),
            Line::default(),
        ];
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let selected = i == self.cursor;
            let marker = if selected { "› " } else { "  " };
            let style = if selected {
                self.theme.selected
            } else {
                self.theme.text
            };
            lines.push(Line::from(vec![
                Span::styled(marker, self.theme.accent),
                Span::styled(format!("{}. {}", i + 1, item.label()), style),
                Span::styled(format!("  ({})", item.shortcut()), self.theme.muted),
            ]));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .render(inner, buf);
    }
}
