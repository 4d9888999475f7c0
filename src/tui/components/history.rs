//! # History Component
//!
//! Scrollable list of every logged book, newest first.
//!
//! ## Architecture
//!
//! `History` is a transient component (created each frame) that wraps
//! `&'a mut HistoryState` (persistent scroll state) and `&'a BookLog` (props).
//! Card heights are predicted with `textwrap` before rendering, so only the
//! cards overlapping the viewport are laid out in a `ScrollView` window.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::{
    Block, BorderType, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::book::BookEntry;
use crate::core::book_log::BookLog;
use crate::tui::component::Component;
use crate::tui::components::summary::entry_lines;
use crate::tui::event::TuiEvent;

/// Border (2) + padding (2) consumed horizontally by a card
const CARD_HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders
const CARD_VERTICAL_OVERHEAD: u16 = 2;

/// Scroll state for the history list. Must be persisted in the parent TuiState.
///
/// The offset is kept in `u32` rows because a long log is taller than a `u16`
/// buffer can address. Only the cards overlapping the viewport are laid out.
#[derive(Default)]
pub struct HistoryState {
    offset: u32,
    /// Total height of all cards from the last render
    pub content_height: u32,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible row of the card list.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    fn max_offset(&self) -> u32 {
        self.content_height
            .saturating_sub(u32::from(self.viewport_height))
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    /// Apply a scrolling event. Returns `true` if the event was a scroll key.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        let page = u32::from(self.viewport_height.max(1));
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.offset = self.offset.saturating_sub(1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.offset = self.offset.saturating_add(1)
            }
            TuiEvent::PageUp => self.offset = self.offset.saturating_sub(page),
            TuiEvent::PageDown => self.offset = self.offset.saturating_add(page),
            TuiEvent::CursorHome => self.offset = 0,
            TuiEvent::CursorEnd => self.offset = self.max_offset(),
            _ => return false,
        }
        self.clamp_scroll();
        true
    }
}

/// Predict a card's rendered height at the given outer width.
///
/// The wrapping options mirror `Paragraph`'s word wrapping so the predicted
/// height matches what ratatui draws.
pub fn card_height(entry: &BookEntry, width: u16) -> u16 {
    let content_width = width.saturating_sub(CARD_HORIZONTAL_OVERHEAD);
    if content_width == 0 {
        return CARD_VERTICAL_OVERHEAD + 4;
    }
    let options = textwrap::Options::new(usize::from(content_width))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);

    let lines: u16 = entry_lines(entry)
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            u16::try_from(textwrap::wrap(&text, &options).len().max(1)).unwrap_or(u16::MAX)
        })
        .fold(0, u16::saturating_add);
    lines.saturating_add(CARD_VERTICAL_OVERHEAD)
}

pub struct History<'a> {
    pub state: &'a mut HistoryState,
    pub log: &'a BookLog,
}

impl<'a> History<'a> {
    pub fn new(state: &'a mut HistoryState, log: &'a BookLog) -> Self {
        Self { state, log }
    }
}

impl Component for History<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport_height = area.height;

        if self.log.is_empty() {
            self.state.content_height = 0;
            self.state.offset = 0;
            let empty = Paragraph::new("No books logged yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            let [middle] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(area);
            frame.render_widget(empty, middle);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let heights: Vec<u16> = self
            .log
            .entries()
            .map(|entry| card_height(entry, content_width))
            .collect();
        self.state.content_height = heights
            .iter()
            .fold(0u32, |sum, h| sum.saturating_add(u32::from(*h)));
        self.state.clamp_scroll();
        if area.height == 0 {
            return;
        }

        // Cards overlapping [offset, offset + viewport), with their absolute top row
        let view_top = self.state.offset;
        let view_bottom = view_top.saturating_add(u32::from(area.height));
        let total = self.log.count();
        let mut top: u32 = 0;
        let mut visible = Vec::new();
        for (index, (entry, height)) in self.log.entries().zip(heights).enumerate() {
            let bottom = top.saturating_add(u32::from(height));
            if top >= view_bottom {
                break;
            }
            if bottom > view_top {
                visible.push((total - index, entry, top, height));
            }
            top = bottom;
        }

        let window_top = visible.first().map(|(_, _, top, _)| *top).unwrap_or(view_top);
        let window_height = visible
            .iter()
            .fold(0u16, |sum, (_, _, _, h)| sum.saturating_add(*h));

        let mut scroll_view = ScrollView::new(Size::new(content_width, window_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (number, entry, card_top, height) in visible {
            let y = u16::try_from(card_top - window_top).unwrap_or(u16::MAX);
            let card = Paragraph::new(entry_lines(entry))
                .wrap(Wrap { trim: true })
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(format!(" #{number} "))
                        .padding(Padding::horizontal(1)),
                );
            scroll_view.render_widget(card, Rect::new(0, y, content_width, height));
        }

        let mut window_state = ScrollViewState::default();
        window_state.set_offset(Position {
            x: 0,
            y: u16::try_from(view_top - window_top).unwrap_or(u16::MAX),
        });
        let cards_area = Rect {
            width: content_width,
            ..area
        };
        frame.render_stateful_widget(scroll_view, cards_area, &mut window_state);

        let mut scrollbar_state = ScrollbarState::new(self.state.max_offset() as usize)
            .position(self.state.offset as usize)
            .viewport_content_length(usize::from(area.height));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    fn log_with(titles: &[&str]) -> BookLog {
        let mut log = BookLog::new();
        for title in titles {
            log.add_book(title, "Anon", Some("Mystery"), "200").unwrap();
        }
        log
    }

    #[test]
    fn test_card_height_short_entry() {
        let log = log_with(&["Dune"]);
        let entry = log.last_added().unwrap();
        // 4 detail lines + 2 borders
        assert_eq!(card_height(entry, 60), 6);
    }

    #[test]
    fn test_card_height_wraps_long_title() {
        let log = log_with(&["A very long title that will certainly wrap around"]);
        let entry = log.last_added().unwrap();
        assert!(card_height(entry, 24) > 6);
    }

    #[test]
    fn test_empty_history_message() {
        let log = BookLog::new();
        let mut state = HistoryState::new();
        let text = render_to_string(40, 10, |f| History::new(&mut state, &log).render(f, f.area()));
        assert!(text.contains("No books logged yet."));
        assert_eq!(state.content_height, 0);
    }

    #[test]
    fn test_newest_entry_rendered_first() {
        let log = log_with(&["First", "Second"]);
        let mut state = HistoryState::new();
        let text = render_to_string(50, 20, |f| History::new(&mut state, &log).render(f, f.area()));
        let second = text.find("Title: Second").unwrap();
        let first = text.find("Title: First").unwrap();
        assert!(second < first);
        assert!(text.contains("#2"));
        assert_eq!(state.content_height, 12);
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let log = log_with(&["A", "B", "C", "D"]);
        let mut state = HistoryState::new();
        render_to_string(40, 10, |f| History::new(&mut state, &log).render(f, f.area()));
        assert_eq!(state.content_height, 24);

        assert!(state.handle_event(&TuiEvent::CursorEnd));
        assert_eq!(state.offset(), 14);
        for _ in 0..30 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.offset(), 14);

        assert!(state.handle_event(&TuiEvent::CursorHome));
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_non_scroll_events_ignored() {
        let mut state = HistoryState::new();
        assert!(!state.handle_event(&TuiEvent::InputChar('x')));
    }

    #[test]
    fn test_long_log_scrolls_past_u16_rows() {
        let mut log = BookLog::new();
        for _ in 0..11_000 {
            log.add_book("T", "A", Some("Fiction"), "1").unwrap();
        }
        let mut state = HistoryState::new();
        let text = render_to_string(40, 10, |f| History::new(&mut state, &log).render(f, f.area()));
        assert_eq!(state.content_height, 66_000);
        assert!(text.contains("#11000"));

        assert!(state.handle_event(&TuiEvent::CursorEnd));
        assert_eq!(state.offset(), 65_990);
        let text = render_to_string(40, 10, |f| History::new(&mut state, &log).render(f, f.area()));
        assert!(text.contains(" #1 "));
        assert!(!text.contains("#11000"));
    }
}
