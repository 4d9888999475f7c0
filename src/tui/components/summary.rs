//! # Summary View
//!
//! The "Home" tab: how many books have been read, the last one logged, and
//! the page statistics. Stateless; rebuilt from `App` every frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::book::BookEntry;
use crate::core::state::App;
use crate::tui::component::Component;

pub struct SummaryView<'a> {
    pub app: &'a App,
}

impl<'a> SummaryView<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

fn text_style() -> Style {
    Style::default().fg(Color::White)
}

/// The four detail lines shared by the summary and history views.
pub fn entry_lines(entry: &BookEntry) -> Vec<Line<'_>> {
    let label = Style::default().fg(Color::Gray);
    vec![
        Line::from(vec![
            Span::styled("Title: ", label),
            Span::styled(entry.title(), text_style()),
        ]),
        Line::from(vec![
            Span::styled("Author: ", label),
            Span::styled(entry.author(), text_style()),
        ]),
        Line::from(vec![
            Span::styled("Genre: ", label),
            Span::styled(entry.genre().label(), text_style()),
        ]),
        Line::from(vec![
            Span::styled("Number of Pages: ", label),
            Span::styled(entry.num_pages().to_string(), text_style()),
        ]),
    ]
}

impl Component for SummaryView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;

        let summary = self.app.log.summary();
        let last = self.app.log.last_added();
        let last_height = if last.is_some() { 6 } else { 0 };

        let [heading_area, count_area, last_area, total_area, average_area] =
            Layout::vertical([
                Length(2),
                Length(2),
                Length(last_height),
                Length(1),
                Length(1),
            ])
            .flex(Flex::Center)
            .spacing(1)
            .areas(area.inner(Margin::new(2, 0)));

        let heading = Paragraph::new("Home").style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
        frame.render_widget(heading, heading_area);

        frame.render_widget(
            Paragraph::new(format!("Books Read: {}", summary.count)).style(text_style()),
            count_area,
        );

        if let Some(entry) = last {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    "Last Book Read:",
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .padding(Padding::horizontal(1));
            frame.render_widget(Paragraph::new(entry_lines(entry)).block(block), last_area);
        }

        frame.render_widget(
            Paragraph::new(format!("Total Number of Pages Read: {}", summary.total_pages))
                .style(text_style()),
            total_area,
        );
        frame.render_widget(
            Paragraph::new(format!("Average Number of Pages: {}", self.app.format_average()))
                .style(text_style()),
            average_area,
        );
    }
}
