//! Quit confirmation modal

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::modal::centered_rect;
use crate::theme::Theme;

pub struct ConfirmQuitDialog<'a> {
    theme: &'a Theme,
}

impl<'a> ConfirmQuitDialog<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for ConfirmQuitDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = centered_rect(36, 5, area);
        Clear.render(modal, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_active)
            .title(" Quit ");

        let lines = vec![
            Line::from(Span::styled("Are you sure you want to quit?", self.theme.text)),
            Line::from(vec![
                Span::styled("y", self.theme.key_hint),
                Span::styled(" yes  ", self.theme.muted),
                Span::styled("n", self.theme.key_hint),
                Span::styled(" no", self.theme.muted),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(modal, buf);
    }
}
