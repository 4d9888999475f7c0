//! # Genre Picker Component
//!
//! Overlay list for choosing a book's genre. Opened from the entry form's
//! genre selector, dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GenrePickerState` lives in `TuiState` while the overlay is open
//! - `GenrePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::book::Genre;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

/// Persistent state for the genre picker overlay.
pub struct GenrePickerState {
    /// Genre already chosen on the form, marked in the list
    pub current: Option<Genre>,
    pub selected: usize,
    pub list_state: ListState,
}

impl GenrePickerState {
    /// Open with the cursor on `current`, or the first genre.
    pub fn new(current: Option<Genre>) -> Self {
        let selected = current.map(Genre::index).unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            current,
            selected,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index.min(Genre::ALL.len() - 1);
        self.list_state.select(Some(self.selected));
    }
}

/// Events emitted by the genre picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenrePickerEvent {
    Select(Genre),
    Dismiss,
}

impl EventHandler for GenrePickerState {
    type Event = GenrePickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GenrePickerEvent> {
        match event {
            TuiEvent::Escape => Some(GenrePickerEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::FocusPrev => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::FocusNext => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::CursorHome | TuiEvent::PageUp => {
                self.select(0);
                None
            }
            TuiEvent::CursorEnd | TuiEvent::PageDown => {
                self.select(Genre::ALL.len() - 1);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => Genre::ALL
                .get(self.selected)
                .map(|genre| GenrePickerEvent::Select(*genre)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the genre picker overlay.
pub struct GenrePicker<'a> {
    state: &'a mut GenrePickerState,
}

impl<'a> GenrePicker<'a> {
    pub fn new(state: &'a mut GenrePickerState) -> Self {
        Self { state }
    }
}

impl Component for GenrePicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 80, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Select Genre ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = Genre::ALL
            .iter()
            .enumerate()
            .map(|(i, genre)| {
                let is_current = self.state.current == Some(*genre);
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_current {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_current { " *" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(genre.label(), style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    #[test]
    fn test_opens_on_current_genre() {
        let state = GenrePickerState::new(Some(Genre::Horror));
        assert_eq!(state.selected, Genre::Horror.index());
        assert_eq!(state.list_state.selected(), Some(Genre::Horror.index()));

        let state = GenrePickerState::new(None);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = GenrePickerState::new(None);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);

        state.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(state.selected, 10);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 10);
    }

    #[test]
    fn test_enter_selects_highlighted_genre() {
        let mut state = GenrePickerState::new(None);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(GenrePickerEvent::Select(Genre::Fantasy))
        );
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = GenrePickerState::new(None);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(GenrePickerEvent::Dismiss)
        );
    }

    #[test]
    fn test_render_lists_every_genre() {
        let mut state = GenrePickerState::new(Some(Genre::Isekai));
        let text = render_to_string(80, 30, |f| GenrePicker::new(&mut state).render(f, f.area()));
        for genre in Genre::ALL {
            assert!(text.contains(genre.label()), "missing {genre}");
        }
        assert!(text.contains("Isekai *"));
    }
}
