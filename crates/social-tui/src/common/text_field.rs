//! Single-line editable text field used by the login and upload forms.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Character shown in place of each masked character.
const MASK: char = '•';

/// One line of text with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the contents, placing the cursor at the end.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Inserts text at the cursor. Line breaks are dropped.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(ch);
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        let idx = byte_index(&self.value, self.cursor);
        self.value.insert(idx, ch);
        self.cursor += 1;
    }

    fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = byte_index(&self.value, self.cursor);
        self.value.remove(idx);
    }

    fn delete_next_char(&mut self) {
        if self.cursor < self.value.chars().count() {
            let idx = byte_index(&self.value, self.cursor);
            self.value.remove(idx);
        }
    }

    /// Applies an editing key. Returns `true` when the key was consumed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(ch);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => self.clear(),
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.chars().count(),
            _ => return false,
        }
        true
    }

    /// Text to draw, optionally masked.
    pub fn display(&self, masked: bool) -> String {
        if masked {
            std::iter::repeat_n(MASK, self.value.chars().count()).collect()
        } else {
            self.value.clone()
        }
    }
}

fn byte_index(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map_or(s.len(), |(i, _)| i)
}
