//! Single-line text input buffer with a character cursor
//!
//! Keys that the active view does not bind to a command are delegated here.
//! The cursor is a char index (not a byte offset) in `0..=len`.

use crate::input_key::InputKey;

/// Default maximum number of characters accepted by an input
pub const DEFAULT_CHAR_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    char_limit: usize,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit: DEFAULT_CHAR_LIMIT,
        }
    }

    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = limit;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the contents, truncating to the char limit, cursor at end
    pub fn set_value(&mut self, value: impl AsRef<str>) {
        self.value = value.as_ref().chars().take(self.char_limit).collect();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Apply an editing key. Returns `true` if the value changed.
    pub fn handle_key(&mut self, key: &InputKey) -> bool {
        match key {
            InputKey::Char(c) => self.insert(*c),
            InputKey::Backspace => self.delete_before_cursor(),
            InputKey::Delete => self.delete_at_cursor(),
            InputKey::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            InputKey::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                false
            }
            InputKey::Home | InputKey::CharCtrl('a') => {
                self.cursor = 0;
                false
            }
            InputKey::End | InputKey::CharCtrl('e') => {
                self.cursor = self.len();
                false
            }
            InputKey::CharCtrl('u') => self.delete_to_start(),
            InputKey::CharCtrl('k') => self.delete_to_end(),
            InputKey::CharCtrl('w') => self.delete_word_backward(),
            _ => false,
        }
    }

    fn insert(&mut self, c: char) -> bool {
        if c.is_control() || self.len() >= self.char_limit {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    fn delete_at_cursor(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    fn delete_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.replace_range(..at, "");
        self.cursor = 0;
        true
    }

    fn delete_to_end(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.truncate(at);
        true
    }

    fn delete_word_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let chars: Vec<char> = self.value.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        let from = self.byte_offset(start);
        let to = self.byte_offset(self.cursor);
        self.value.replace_range(from..to, "");
        self.cursor = start;
        true
    }
}
