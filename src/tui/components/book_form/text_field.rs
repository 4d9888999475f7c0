//! Single-line text input used by the entry form.
//!
//! Owns its buffer and a byte-offset cursor. When the text is wider than the
//! field, the view slides so the cursor stays on screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::event::TuiEvent;

/// Border (2) + padding (2) consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from area edge to the first content column (border + padding)
const CONTENT_OFFSET_X: u16 = 2;

/// What a field will accept as typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Typed characters other than ASCII digits are dropped. Paste is verbatim.
    Digits,
}

#[derive(Debug, Clone)]
pub struct TextField {
    pub label: &'static str,
    kind: FieldKind,
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pos: usize,
}

impl TextField {
    pub fn new(label: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            kind,
            buffer: String::new(),
            pos: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.pos
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.pos = 0;
    }

    /// Apply an editing event. Returns `true` if the buffer or cursor changed.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) => {
                if self.kind == FieldKind::Digits && !c.is_ascii_digit() {
                    return false;
                }
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                true
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines become spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.pos, &text);
                self.pos += text.len();
                !text.is_empty()
            }
            TuiEvent::Backspace => {
                if self.pos == 0 {
                    return false;
                }
                let prev = prev_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                true
            }
            TuiEvent::Delete => {
                if self.pos >= self.buffer.len() {
                    return false;
                }
                let next = next_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(self.pos..next);
                true
            }
            TuiEvent::CursorLeft if self.pos > 0 => {
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                true
            }
            TuiEvent::CursorRight if self.pos < self.buffer.len() => {
                self.pos = next_char_boundary(&self.buffer, self.pos);
                true
            }
            TuiEvent::CursorHome if self.pos > 0 => {
                self.pos = 0;
                true
            }
            TuiEvent::CursorEnd if self.pos < self.buffer.len() => {
                self.pos = self.buffer.len();
                true
            }
            _ => false,
        }
    }

    /// The slice of text that fits in `width` columns with the cursor visible,
    /// plus the cursor's column within that slice.
    fn visible(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let cursor_col = self.buffer[..self.pos].width();
        // Reserve one column for the cursor when it sits at the end
        let offset = (cursor_col + 1).saturating_sub(width);

        let mut col = 0;
        let mut shown = String::new();
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0);
            if col >= offset && col + w <= offset + width {
                shown.push(c);
            }
            col += w;
        }
        (shown, cursor_col - offset)
    }

    /// Render the field. Focused fields get a highlighted border and the cursor.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label)
            .padding(ratatui::widgets::Padding::horizontal(1));

        let width = usize::from(area.width.saturating_sub(HORIZONTAL_OVERHEAD));
        let (shown, cursor_col) = self.visible(width);

        let paragraph = if self.buffer.is_empty() && !focused {
            // Placeholder until the user types
            Paragraph::new(self.label).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(shown).style(Style::default().fg(Color::White))
        };
        frame.render_widget(paragraph.block(block), area);

        if focused && width > 0 {
            let x = area.x + CONTENT_OFFSET_X + cursor_col as u16;
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
