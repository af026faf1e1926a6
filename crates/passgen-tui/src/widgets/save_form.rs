//! Site/username form for saving the current password

use passgen_app::state::SaveFormState;
use passgen_app::SaveField;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::TextField;
use crate::theme::Theme;

pub struct SaveForm<'a> {
    form: &'a SaveFormState,
    password: &'a str,
    theme: &'a Theme,
}

impl<'a> SaveForm<'a> {
    pub fn new(form: &'a SaveFormState, password: &'a str, theme: &'a Theme) -> Self {
        Self {
            form,
            password,
            theme,
        }
    }
}

impl Widget for SaveForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [summary, site, username, _] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled(" Saving ", self.theme.muted),
            Span::styled(self.password, self.theme.password),
        ]))
        .render(summary, buf);

        TextField::new("Site", &self.form.site, self.theme)
            .focused(self.form.focus == SaveField::Site)
            .placeholder("example.com")
            .render(site, buf);

        TextField::new("Username", &self.form.username, self.theme)
            .focused(self.form.focus == SaveField::Username)
            .placeholder("optional")
            .render(username, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_both_fields() {
        let theme = Theme::default();
        let mut form = SaveFormState::default();
        form.site.set_value("example.com");
        form.username.set_value("alice");
        let mut term = TestTerminal::new();

        term.render_widget(SaveForm::new(&form, "pw123456", &theme), term.area());

        assert!(term.buffer_contains("pw123456"));
        assert!(term.buffer_contains("example.com"));
        assert!(term.buffer_contains("alice"));
        assert!(term.buffer_contains("Username"));
    }

    #[test]
    fn test_unfocused_empty_field_shows_placeholder() {
        let theme = Theme::default();
        let form = SaveFormState::default();
        let mut term = TestTerminal::new();

        term.render_widget(SaveForm::new(&form, "pw", &theme), term.area());

        assert!(term.buffer_contains("optional"));
    }
}
