//! Filterable table of saved credentials
//!
//! Secrets are never drawn; each row shows a fixed-width mask instead.

use passgen_app::state::RecordListState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use super::TextField;
use crate::theme::Theme;

const MASK: &str = "••••••••";

pub struct RecordList<'a> {
    list: &'a RecordListState,
    theme: &'a Theme,
}

impl<'a> RecordList<'a> {
    pub fn new(list: &'a RecordListState, theme: &'a Theme) -> Self {
        Self { list, theme }
    }
}

/// First row to draw so `cursor` is inside a window of `visible` rows
fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return cursor;
    }
    cursor.saturating_sub(visible - 1)
}

impl Widget for RecordList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [filter_area, table_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

        TextField::new("Filter", &self.list.filter, self.theme)
            .focused(true)
            .render(filter_area, buf);

        let filtered = self.list.filtered();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(format!(
                " {} of {} saved ",
                filtered.len(),
                self.list.records.len()
            ));

        if filtered.is_empty() {
            let message = if self.list.records.is_empty() {
                "No saved passwords"
            } else {
                "No matches"
            };
            Paragraph::new(Line::from(Span::styled(message, self.theme.muted)))
                .block(block)
                .render(table_area, buf);
            return;
        }

        // Borders (2) plus header row (1)
        let visible = table_area.height.saturating_sub(3) as usize;
        let offset = scroll_offset(self.list.cursor, visible);

        let rows: Vec<Row> = filtered
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, record)| {
                let style = if i == self.list.cursor {
                    self.theme.selected
                } else {
                    self.theme.text
                };
                Row::new(vec![
                    Cell::from(record.site.as_str()),
                    Cell::from(record.username.as_str()),
                    Cell::from(MASK),
                ])
                .style(style)
            })
            .collect();

        let header = Row::new(vec!["Site", "Username", "Password"]).style(self.theme.accent);
        Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(35),
                Constraint::Percentage(25),
            ],
        )
        .header(header)
        .column_spacing(1)
        .block(block)
        .render(table_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use passgen_core::CredentialRecord;

    fn list() -> RecordListState {
        RecordListState {
            records: vec![
                CredentialRecord::new("a.com", "u1", "secret-one"),
                CredentialRecord::new("b.com", "u2", "secret-two"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_render_without_secrets() {
        let theme = Theme::default();
        let state = list();
        let mut term = TestTerminal::new();

        term.render_widget(RecordList::new(&state, &theme), term.area());

        assert!(term.buffer_contains("a.com"));
        assert!(term.buffer_contains("u2"));
        assert!(term.buffer_contains("2 of 2 saved"));
        assert!(!term.buffer_contains("secret-one"));
    }

    #[test]
    fn test_filter_hides_rows() {
        let theme = Theme::default();
        let mut state = list();
        state.filter.set_value("b.");
        let mut term = TestTerminal::new();

        term.render_widget(RecordList::new(&state, &theme), term.area());

        assert!(term.buffer_contains("b.com"));
        assert!(!term.buffer_contains("a.com"));
        assert!(term.buffer_contains("1 of 2 saved"));
    }

    #[test]
    fn test_empty_store_message() {
        let theme = Theme::default();
        let state = RecordListState::default();
        let mut term = TestTerminal::new();

        term.render_widget(RecordList::new(&state, &theme), term.area());

        assert!(term.buffer_contains("No saved passwords"));
    }

    #[test]
    fn test_no_matches_message() {
        let theme = Theme::default();
        let mut state = list();
        state.filter.set_value("zzz");
        let mut term = TestTerminal::new();

        term.render_widget(RecordList::new(&state, &theme), term.area());

        assert!(term.buffer_contains("No matches"));
    }

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(7, 5), 3);
    }
}
