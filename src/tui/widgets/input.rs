//! Text input widget
//!
//! A single-line input field with cursor support, used by the amount
//! dialogs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input state
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position (byte offset; input is ASCII-only)
    cursor: usize,
}

impl TextInput {
    /// Create a new empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (before, after) = self.content.split_at(self.cursor);
        let (at_cursor, rest) = match after.char_indices().nth(1) {
            Some((i, _)) => after.split_at(i),
            None if after.is_empty() => (" ", ""),
            None => (after, ""),
        };

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(at_cursor, Style::default().bg(Color::White).fg(Color::Black)),
            Span::raw(rest),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
