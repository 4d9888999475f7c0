//! # TabBar Component
//!
//! One row of tab titles. Purely presentational; tab switching is handled by
//! the dispatcher in `tui::dispatch`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::tui::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    pub active: Tab,
}

impl TabBar {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| format!("{} {}", i + 1, tab.title()));
        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|");
        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    #[test]
    fn test_all_tab_titles_rendered() {
        let text = render_to_string(80, 1, |f| TabBar::new(Tab::History).render(f, f.area()));
        assert!(text.contains("1 Home"));
        assert!(text.contains("2 Add Book"));
        assert!(text.contains("3 History"));
        assert!(text.contains("4 Genres"));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|f| TabBar::new(Tab::Genres).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row: String = buffer.content().iter().map(|c| c.symbol()).collect();
        let col = row.find("4 Genres").unwrap() as u16;
        assert!(buffer[(col, 0)].modifier.contains(Modifier::BOLD));
        let home = row.find("1 Home").unwrap() as u16;
        assert!(!buffer[(home, 0)].modifier.contains(Modifier::BOLD));
    }
}
