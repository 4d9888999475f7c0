//! # TitleBar Component
//!
//! Top status bar: application name, how many books are logged, and the
//! latest status message.
//!
//! Purely presentational. The parent copies its props out of `App` every
//! frame:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.log.count(), app.status_message.clone());
//! title_bar.render(frame, title_area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Number of books in the log
    pub book_count: usize,
    /// Status message (e.g., "Added 'Dune' by Frank Herbert")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(book_count: usize, status_message: String) -> Self {
        Self {
            book_count,
            status_message,
        }
    }

    fn count_text(&self) -> String {
        match self.book_count {
            1 => "1 book".to_string(),
            n => format!("{n} books"),
        }
    }
}

impl Component for TitleBar {
    /// Single line. The status message is dropped when empty.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Book Log", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::raw(self.count_text()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
