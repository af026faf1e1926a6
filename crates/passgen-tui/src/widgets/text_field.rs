//! Bordered single-line input with a block cursor

use passgen_app::TextInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::Theme;

pub struct TextField<'a> {
    label: &'a str,
    input: &'a TextInput,
    focused: bool,
    placeholder: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, input: &'a TextInput, theme: &'a Theme) -> Self {
        Self {
            label,
            input,
            focused: false,
            placeholder: None,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn content_line(&self, width: usize) -> Line<'static> {
        if self.input.is_empty() && !self.focused {
            return match self.placeholder {
                Some(text) => Line::from(Span::styled(text.to_string(), self.theme.muted)),
                None => Line::default(),
            };
        }

        let chars: Vec<char> = self.input.value().chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let start = visible_start(&chars, cursor, width);

        let before: String = chars[start..cursor].iter().collect();
        let mut spans = vec![Span::styled(before, self.theme.input)];

        if self.focused {
            let at = chars.get(cursor).copied().unwrap_or(' ');
            spans.push(Span::styled(at.to_string(), self.theme.input_cursor));
            let after: String = chars.iter().skip(cursor + 1).collect();
            spans.push(Span::styled(after, self.theme.input));
        } else {
            let after: String = chars[cursor..].iter().collect();
            spans.push(Span::styled(after, self.theme.input));
        }

        Line::from(spans)
    }
}

/// First char index to draw so the cursor cell stays within `width` columns
fn visible_start(chars: &[char], cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    // One column is reserved for the cursor cell itself
    let mut used = 1;
    let mut start = cursor;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }
    start
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_for(self.focused))
            .title(format!(" {} ", self.label));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = self.content_line(inner.width as usize);
        Paragraph::new(line).render(inner, buf);
    }
}
