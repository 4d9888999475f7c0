//! # Genre List
//!
//! The "Genres" tab: every genre a book can be filed under, centered.
//! Static; it does not depend on what has been logged.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::book::Genre;
use crate::tui::component::Component;

pub struct GenreList;

impl Component for GenreList {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = Genre::ALL
            .iter()
            .map(|genre| Line::from(genre.label()))
            .collect();

        let [list_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(paragraph, list_area);
    }
}
