//! # AlertDialog Component
//!
//! Modal message box drawn over everything else. While it is visible the
//! dispatcher ignores all input except Enter / Esc, which dismiss it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

/// Widest the dialog gets, including borders
const MAX_WIDTH: u16 = 50;

pub struct AlertDialog<'a> {
    pub message: &'a str,
}

impl<'a> AlertDialog<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for AlertDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = MAX_WIDTH.min(area.width);
        // borders + padding
        let inner_width = width.saturating_sub(4).max(1);
        let text_lines = textwrap::wrap(self.message, usize::from(inner_width)).len() as u16;
        let height = (text_lines + 4).min(area.height);

        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [dialog] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        frame.render_widget(Clear, dialog);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Alert ")
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .title_bottom(Line::from(" Enter OK ").centered())
            .padding(Padding::new(1, 1, 1, 0));
        let paragraph = Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, dialog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    #[test]
    fn test_alert_shows_message_and_hint() {
        let text = render_to_string(60, 12, |f| {
            AlertDialog::new("Please fill in all details.").render(f, f.area())
        });
        assert!(text.contains("Alert"));
        assert!(text.contains("Please fill in all details."));
        assert!(text.contains("Enter OK"));
    }

    #[test]
    fn test_alert_fits_tiny_terminal() {
        let text = render_to_string(10, 3, |f| AlertDialog::new("Long message here").render(f, f.area()));
        assert_eq!(text.chars().count(), 30);
    }
}
