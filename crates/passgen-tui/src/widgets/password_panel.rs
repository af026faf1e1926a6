//! Generated password display

use passgen_core::{CharClass, GenerationSettings};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::theme::Theme;

pub struct PasswordPanel<'a> {
    password: &'a str,
    settings: &'a GenerationSettings,
    theme: &'a Theme,
}

impl<'a> PasswordPanel<'a> {
    pub fn new(password: &'a str, settings: &'a GenerationSettings, theme: &'a Theme) -> Self {
        Self {
            password,
            settings,
            theme,
        }
    }
}

/// e.g. "16 chars · a-z A-Z 0-9 symbols"
pub(crate) fn settings_summary(settings: &GenerationSettings) -> String {
    let classes: Vec<&str> = settings
        .enabled_classes()
        .map(|class| match class {
            CharClass::Lowercase => "a-z",
            CharClass::Uppercase => "A-Z",
            CharClass::Digits => "0-9",
            CharClass::Symbols => "symbols",
        })
        .collect();
    let classes = if classes.is_empty() {
        "no classes".to_string()
    } else {
        classes.join(" ")
    };
    format!("{} chars · {}", settings.length, classes)
}

impl Widget for PasswordPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_active)
            .title(" Generated password ");
        let inner = block.inner(area);
        block.render(area, buf);

        let password_line = if self.password.is_empty() {
            Line::from(Span::styled("No password generated", self.theme.muted))
        } else {
            Line::from(Span::styled(self.password, self.theme.password))
        };

        let lines = vec![
            Line::default(),
            password_line,
            Line::default(),
            Line::from(Span::styled(settings_summary(self.settings), self.theme.muted)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_shows_password_and_summary() {
        let theme = Theme::default();
        let settings = GenerationSettings::default();
        let mut term = TestTerminal::new();

        term.render_widget(
            PasswordPanel::new("Xy7!abcdEFGH1234", &settings, &theme),
            term.area(),
        );

        assert!(term.buffer_contains("Xy7!abcdEFGH1234"));
        assert!(term.buffer_contains("16 chars · a-z A-Z 0-9 symbols"));
    }

    #[test]
    fn test_empty_password_placeholder() {
        let theme = Theme::default();
        let settings = GenerationSettings::default();
        let mut term = TestTerminal::new();

        term.render_widget(PasswordPanel::new("", &settings, &theme), term.area());

        assert!(term.buffer_contains("No password generated"));
    }

    #[test]
    fn test_settings_summary_without_classes() {
        let settings = GenerationSettings {
            length: 8,
            include_lower: false,
            include_upper: false,
            include_numbers: false,
            include_symbols: false,
        };
        assert_eq!(settings_summary(&settings), "8 chars · no classes");
    }
}
