//! Length input and character-class toggles

use passgen_app::state::SettingsFormState;
use passgen_core::{CharClass, MAX_LENGTH, MIN_LENGTH};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::TextField;
use crate::theme::Theme;

pub struct SettingsForm<'a> {
    form: &'a SettingsFormState,
    theme: &'a Theme,
}

impl<'a> SettingsForm<'a> {
    pub fn new(form: &'a SettingsFormState, theme: &'a Theme) -> Self {
        Self { form, theme }
    }
}

impl Widget for SettingsForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [length_area, classes_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(6)]).areas(area);

        let label = format!("Length ({MIN_LENGTH}-{MAX_LENGTH})");
        TextField::new(&label, &self.form.length, self.theme)
            .focused(true)
            .render(length_area, buf);

        let lines: Vec<Line> = CharClass::ALL
            .iter()
            .enumerate()
            .map(|(i, class)| {
                let selected = i == self.form.cursor;
                let check = if self.form.draft.is_enabled(*class) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let style = if selected {
                    self.theme.selected
                } else {
                    self.theme.text
                };
                Line::from(vec![
                    Span::styled(if selected { "› " } else { "  " }, self.theme.accent),
                    Span::styled(format!("{check} {}", class.label()), style),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(" Character classes ");
        Paragraph::new(lines)
            .block(block)
            .render(classes_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use passgen_core::GenerationSettings;

    #[test]
    fn test_renders_length_and_flags() {
        let theme = Theme::default();
        let mut form = SettingsFormState::default();
        form.seed(&GenerationSettings {
            length: 20,
            include_symbols: false,
            ..Default::default()
        });
        let mut term = TestTerminal::new();

        term.render_widget(SettingsForm::new(&form, &theme), term.area());

        assert!(term.buffer_contains("Length (4-128)"));
        assert!(term.buffer_contains("20"));
        assert!(term.buffer_contains("› [x] Lowercase (a-z)"));
        assert!(term.buffer_contains("[ ] Symbols"));
    }

    #[test]
    fn test_cursor_marker_follows_selection() {
        let theme = Theme::default();
        let mut form = SettingsFormState::default();
        form.seed(&GenerationSettings::default());
        form.cursor = 2;
        let mut term = TestTerminal::new();

        term.render_widget(SettingsForm::new(&form, &theme), term.area());

        assert!(term.buffer_contains("› [x] Numbers (0-9)"));
        assert!(!term.buffer_contains("› [x] Lowercase"));
    }
}
